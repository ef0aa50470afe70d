//! Processing statistics and the derived status.

use std::fmt;

/// Activity level derived from the processed count.
///
/// Never stored: recomputed from the counter on every snapshot. A
/// processor moves from `Idle` to `Active` on its first success and from
/// `Active` to `Busy` at the tenth; it never returns to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Status {
    /// Nothing processed yet
    Idle = 0,
    /// Between one and nine items processed
    Active = 1,
    /// Ten or more items processed
    Busy = 2,
}

impl Status {
    /// Derive the status from a processed count.
    pub fn from_count(count: u64) -> Self {
        if count == 0 {
            Status::Idle
        } else if count < 10 {
            Status::Active
        } else {
            Status::Busy
        }
    }

    /// Numeric code for the status (0 = idle, 1 = active, 2 = busy).
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Status::Idle => "idle",
            Status::Active => "active",
            Status::Busy => "busy",
        };
        f.write_str(label)
    }
}

/// Point-in-time snapshot of a processor's counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    /// Number of successful process calls since construction
    pub processed: u64,
    /// Status derived from `processed`
    pub status: Status,
}

impl Stats {
    /// Build a snapshot for the given processed count.
    pub fn from_count(processed: u64) -> Self {
        Self {
            processed,
            status: Status::from_count(processed),
        }
    }

    /// Numeric status code, see [`Status::code`].
    pub fn status_code(&self) -> u8 {
        self.status.code()
    }
}

//! Named log emitter owned by processors.
//!
//! Every processor owns exactly one `Logger`. The logger prefixes each
//! message with its owner's name and writes the line to a [`LogSink`],
//! which is the seam for the external output destination. The default sink
//! writes to stdout; [`MemorySink`] captures lines for inspection.

use std::fmt::Debug;
use std::sync::{Arc, Mutex};

/// Destination for formatted log lines.
///
/// Implementations receive one fully formatted line per enabled
/// [`Logger::log`] call and decide where it goes.
pub trait LogSink: Send + Sync + Debug {
    /// Write a single formatted line to the sink.
    fn write_line(&self, line: &str);
}

/// Sink that writes each line to stdout.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl LogSink for ConsoleSink {
    fn write_line(&self, line: &str) {
        println!("{line}");
    }
}

/// Sink that buffers lines in memory.
///
/// Useful in tests and embedding scenarios where emitted lines need to be
/// inspected instead of printed.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    /// Create an empty memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all captured lines, in emission order.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().expect("sink mutex poisoned").clone()
    }

    /// Number of captured lines.
    pub fn len(&self) -> usize {
        self.lines.lock().expect("sink mutex poisoned").len()
    }

    /// Check whether nothing has been captured yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl LogSink for MemorySink {
    fn write_line(&self, line: &str) {
        self.lines
            .lock()
            .expect("sink mutex poisoned")
            .push(line.to_string());
    }
}

/// Named message emitter with an on/off switch.
///
/// When enabled, [`log`](Logger::log) emits `[{name}] {message}` to the
/// sink. When disabled it is a no-op; there is no way to re-enable.
///
/// # Example
///
/// ```rust
/// use procflow::Logger;
///
/// let logger = Logger::new("Main");
/// logger.log("Starting application"); // prints "[Main] Starting application"
/// ```
#[derive(Debug)]
pub struct Logger {
    name: String,
    enabled: bool,
    sink: Arc<dyn LogSink>,
}

impl Logger {
    /// Create a logger that writes to stdout.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_sink(name, Arc::new(ConsoleSink))
    }

    /// Create a logger that writes to the given sink.
    pub fn with_sink(name: impl Into<String>, sink: Arc<dyn LogSink>) -> Self {
        Self {
            name: name.into(),
            enabled: true,
            sink,
        }
    }

    /// Returns the owner name this logger prefixes messages with.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns whether emission is currently enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Emit `[{name}] {message}` to the sink; no-op when disabled.
    pub fn log(&self, message: &str) {
        if self.enabled {
            self.sink.write_line(&format!("[{}] {}", self.name, message));
        }
    }

    /// Turn emission off. No inverse is exposed.
    pub fn disable(&mut self) {
        self.enabled = false;
    }
}

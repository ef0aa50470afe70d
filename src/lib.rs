//! # Procflow
//!
//! **Procflow** is a small text-processing pipeline built around a
//! processor capability: each processor variant validates its input,
//! transforms it, and reports derived statistics, logging through a named
//! [`Logger`] it owns exclusively.
//!
//! ## Overview
//!
//! - **Capability trait**: [`Processor`] defines `process` over optional
//!   input; variants conform by implementing it.
//! - **Shipped variant**: [`DataProcessor`] rejects empty and absent input,
//!   uppercases everything else, and counts successes.
//! - **Derived status**: [`Stats`] snapshots the success counter and maps
//!   it to [`Status`] (`idle` / `active` / `busy`).
//! - **Registry**: a name-keyed [`Registry`] holds boxed variants and hands
//!   out mutable access for driving them.
//!
//! ## Quick Start
//!
//! ```rust
//! use procflow::prelude::*;
//!
//! let mut processor = DataProcessor::new("MainProcessor");
//!
//! let result = processor.process(Some("hello"))?;
//! assert_eq!(result, "HELLO");
//!
//! let stats = processor.stats();
//! assert_eq!(stats.processed, 1);
//! assert_eq!(stats.status, Status::Active);
//! # Ok::<(), ProcessError>(())
//! ```
//!
//! ## Error model
//!
//! Rejected input fails with [`ProcessError::InvalidArgument`], propagated
//! to the caller unchanged; the processor logs a diagnostic for validation
//! failures but never recovers on its own.

mod config;
mod data;
mod error;
mod helper;
mod logger;
mod processor;
mod registry;
mod stats;

pub mod prelude;

// Re-export core types
pub use config::ProcessorConfig;
pub use data::DataProcessor;
pub use error::{
    ProcessError, ProcessResult, ProcflowError, ProcflowResult, RegistryError, RegistryResult,
};
pub use helper::{format_output, validate_input};
pub use logger::{ConsoleSink, LogSink, Logger, MemorySink};
pub use processor::{Processor, ProcessorExt};
pub use registry::{Registry, RegistryBuilder};
pub use stats::{Stats, Status};

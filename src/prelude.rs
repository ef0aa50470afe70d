//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and traits from
//! Procflow for convenient glob imports.
//!
//! # Example
//!
//! ```rust
//! use procflow::prelude::*;
//! ```

// Configuration
pub use crate::config::ProcessorConfig;

// Core traits and variants
pub use crate::data::DataProcessor;
pub use crate::processor::{Processor, ProcessorExt};

// Logging
pub use crate::logger::{ConsoleSink, LogSink, Logger, MemorySink};

// Registry
pub use crate::registry::{Registry, RegistryBuilder};

// Statistics
pub use crate::stats::{Stats, Status};

// Helpers
pub use crate::helper::{format_output, validate_input};

// Errors
pub use crate::error::{
    ProcessError, ProcessResult, ProcflowError, ProcflowResult, RegistryError, RegistryResult,
};

//! `DataProcessor`: the shipped processing variant.

use std::any::Any;
use std::sync::Arc;

use tracing::trace;

use crate::config::ProcessorConfig;
use crate::error::{ProcessError, ProcessResult};
use crate::helper;
use crate::logger::{LogSink, Logger};
use crate::processor::Processor;
use crate::stats::Stats;

/// Processor that validates input, uppercases it, and counts successes.
///
/// The processed counter increments exactly once per successful
/// [`process`](Processor::process) call and never decreases. Rejected
/// input (empty or absent) leaves it untouched.
///
/// # Example
///
/// ```rust
/// use procflow::{DataProcessor, Processor};
///
/// let mut processor = DataProcessor::new("P");
/// assert_eq!(processor.process(Some("hello")).unwrap(), "HELLO");
/// assert_eq!(processor.stats().processed, 1);
/// ```
#[derive(Debug)]
pub struct DataProcessor {
    name: String,
    logger: Logger,
    processed: u64,
}

impl DataProcessor {
    /// Create a processor logging to stdout under the given name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let logger = Logger::new(name.clone());
        Self {
            name,
            logger,
            processed: 0,
        }
    }

    /// Create a processor from constructor arguments bundled in a config.
    pub fn from_config(config: &ProcessorConfig) -> Self {
        let mut processor = Self::new(config.name.clone());
        if !config.logging {
            processor.logger.disable();
        }
        processor
    }

    /// Create a processor that logs to the given sink.
    pub fn with_sink(name: impl Into<String>, sink: Arc<dyn LogSink>) -> Self {
        let name = name.into();
        let logger = Logger::with_sink(name.clone(), sink);
        Self {
            name,
            logger,
            processed: 0,
        }
    }

    /// Snapshot of the processed counter and its derived status.
    ///
    /// Pure read: calling this repeatedly without intervening `process`
    /// calls returns identical snapshots.
    pub fn stats(&self) -> Stats {
        Stats::from_count(self.processed)
    }
}

impl Processor for DataProcessor {
    fn name(&self) -> &str {
        &self.name
    }

    fn logger(&self) -> &Logger {
        &self.logger
    }

    fn logger_mut(&mut self) -> &mut Logger {
        &mut self.logger
    }

    fn process(&mut self, data: Option<&str>) -> ProcessResult<String> {
        match data {
            Some(value) => self.logger.log(&format!("Processing data: {value}")),
            None => self.logger.log("Processing data: <null>"),
        }

        // Empty input is rejected before validation runs.
        if data == Some("") {
            return Err(ProcessError::InvalidArgument(
                "Data cannot be empty".to_string(),
            ));
        }

        let value = match helper::validate_input(data) {
            Ok(value) => value,
            Err(err) => {
                self.logger.log(&format!("Validation failed: {err}"));
                return Err(err);
            }
        };

        // Counter moves only after formatting completes.
        let result = helper::format_output(value);
        self.processed += 1;
        trace!(processor = %self.name, count = self.processed, "processed item");
        Ok(result)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::MemorySink;
    use crate::stats::Status;

    #[test]
    fn process_uppercases_and_counts() {
        let mut processor = DataProcessor::new("test");
        assert_eq!(processor.process(Some("hello")).unwrap(), "HELLO");
        assert_eq!(processor.process(Some("world")).unwrap(), "WORLD");
        assert_eq!(processor.stats().processed, 2);
    }

    #[test]
    fn empty_input_is_rejected_before_validation() {
        let sink = Arc::new(MemorySink::new());
        let mut processor = DataProcessor::with_sink("test", sink.clone());

        let err = processor.process(Some("")).unwrap_err();
        assert_eq!(err.to_string(), "Data cannot be empty");
        assert_eq!(processor.stats().processed, 0);

        // Only the input line was logged; the validation diagnostic was not.
        assert_eq!(sink.lines(), vec!["[test] Processing data: "]);
    }

    #[test]
    fn absent_input_logs_the_validation_failure() {
        let sink = Arc::new(MemorySink::new());
        let mut processor = DataProcessor::with_sink("test", sink.clone());

        let err = processor.process(None).unwrap_err();
        assert_eq!(err.to_string(), "Data cannot be null");
        assert_eq!(processor.stats().processed, 0);
        assert_eq!(
            sink.lines(),
            vec![
                "[test] Processing data: <null>",
                "[test] Validation failed: Data cannot be null",
            ]
        );
    }

    #[test]
    fn stats_snapshot_is_idempotent() {
        let mut processor = DataProcessor::new("test");
        processor.process(Some("x")).unwrap();

        let first = processor.stats();
        let second = processor.stats();
        assert_eq!(first, second);
        assert_eq!(first.status, Status::Active);
    }

    #[test]
    fn disabled_logger_does_not_change_results() {
        let sink = Arc::new(MemorySink::new());
        let mut processor = DataProcessor::with_sink("test", sink.clone());

        processor.logger_mut().disable();
        assert_eq!(processor.process(Some("quiet")).unwrap(), "QUIET");
        assert_eq!(processor.stats().processed, 1);
        assert!(sink.is_empty());
    }

    #[test]
    fn from_config_applies_constructor_arguments() {
        let config = ProcessorConfig::new("configured").quiet();
        let processor = DataProcessor::from_config(&config);

        assert_eq!(processor.name(), "configured");
        assert!(!processor.logger().is_enabled());
    }
}

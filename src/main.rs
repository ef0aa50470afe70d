//! Demonstration driver for Procflow.
//!
//! Feeds sample inputs through a `DataProcessor` and walks the
//! success, failure, and polling paths. Always exits 0; processing
//! errors are handled here and never escape.

use procflow::{DataProcessor, Logger, ProcessError, Processor};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let logger = Logger::new("Main");
    logger.log("Starting application");

    let mut processor = DataProcessor::new("MainProcessor");

    // Size triage of the sample input.
    let mut test_data = String::from("test data");
    if test_data.len() > 20 {
        logger.log("Large data detected");
        test_data.truncate(20);
    } else if test_data.len() < 5 {
        logger.log("Small data detected");
        test_data = String::from("default");
    } else {
        logger.log("Normal data size");
    }

    let _result = match processor.process(Some(&test_data)) {
        Ok(output) => {
            logger.log(&format!("Result: {output}"));
            output
        }
        Err(err @ ProcessError::InvalidArgument(_)) => {
            logger.log(&format!("Validation error: {err}"));
            String::new()
        }
        Err(err) => {
            logger.log(&format!("Processing error: {err}"));
            String::new()
        }
    };
    logger.log("Processing attempt completed");

    for item in ["item1", "item2", "item3"] {
        if !item.is_empty() {
            if let Err(err) = processor.process(Some(item)) {
                logger.log(&format!("Processing error: {err}"));
            }
        }
    }

    // Bounded poll of the stats snapshot; demonstration only.
    let mut retry_count = 0;
    let max_retries = 3;
    while retry_count < max_retries {
        if processor.stats().processed > 0 {
            break;
        }
        retry_count += 1;
    }

    let status_code = 200;
    match status_code {
        200 => logger.log("Success"),
        404 => logger.log("Not found"),
        _ => logger.log("Other status"),
    }

    let stats = processor.stats();
    logger.log(&format!(
        "Stats: processed={} status={}",
        stats.processed, stats.status
    ));
}

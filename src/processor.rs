//! Processor trait: the contract every processing variant implements.
//!
//! A `Processor` turns an input string into an output string, logging as it
//! goes. Variants own their `Logger` exclusively; it is created with the
//! processor and dropped with it.

use std::any::Any;
use std::fmt::Debug;

use crate::error::ProcessResult;
use crate::logger::Logger;

/// Contract for processing variants.
///
/// `process` consumes an optional input string and produces an output
/// string; `None` models an absent payload. Calls are synchronous and take
/// `&mut self`: a processor has a single owner, and concurrent reuse must
/// be serialized by the caller.
///
/// # Example
///
/// ```rust
/// use procflow::{Logger, ProcessResult, Processor};
/// use std::any::Any;
///
/// #[derive(Debug)]
/// struct EchoProcessor {
///     name: String,
///     logger: Logger,
/// }
///
/// impl Processor for EchoProcessor {
///     fn name(&self) -> &str {
///         &self.name
///     }
///
///     fn logger(&self) -> &Logger {
///         &self.logger
///     }
///
///     fn logger_mut(&mut self) -> &mut Logger {
///         &mut self.logger
///     }
///
///     fn process(&mut self, data: Option<&str>) -> ProcessResult<String> {
///         Ok(data.unwrap_or_default().to_string())
///     }
///
///     fn as_any(&self) -> &dyn Any {
///         self
///     }
/// }
/// ```
pub trait Processor: Send + Sync + Debug {
    /// Returns the unique name of this processor.
    ///
    /// This name is used for registration and lookup in the registry, and
    /// doubles as the logger prefix.
    fn name(&self) -> &str;

    /// Returns the logger owned by this processor.
    fn logger(&self) -> &Logger;

    /// Returns the owned logger mutably, e.g. to disable emission.
    fn logger_mut(&mut self) -> &mut Logger;

    /// Process the input and return the transformed output.
    ///
    /// `None` models an absent payload and is rejected by variants that
    /// require one.
    fn process(&mut self, data: Option<&str>) -> ProcessResult<String>;

    /// Downcast to concrete type for advanced usage.
    fn as_any(&self) -> &dyn Any;
}

/// Extension trait for processor type checking.
pub trait ProcessorExt: Processor {
    /// Check if this processor is of type T.
    fn is<T: Processor + 'static>(&self) -> bool {
        self.as_any().is::<T>()
    }

    /// Downcast to type T.
    fn downcast_ref<T: Processor + 'static>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}

impl<P: Processor + ?Sized> ProcessorExt for P {}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct ReverseProcessor {
        name: String,
        logger: Logger,
    }

    impl ReverseProcessor {
        fn new(name: &str) -> Self {
            Self {
                name: name.to_string(),
                logger: Logger::new(name),
            }
        }
    }

    impl Processor for ReverseProcessor {
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
            let value = crate::helper::validate_input(data)?;
            Ok(value.chars().rev().collect())
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[test]
    fn variant_implements_the_contract() {
        let mut processor = ReverseProcessor::new("rev");
        assert_eq!(processor.name(), "rev");
        assert_eq!(processor.process(Some("abc")).unwrap(), "cba");
        assert!(processor.process(None).is_err());
    }

    #[test]
    fn variant_owns_its_logger() {
        let mut processor = ReverseProcessor::new("rev");
        assert_eq!(processor.logger().name(), "rev");
        assert!(processor.logger().is_enabled());

        processor.logger_mut().disable();
        assert!(!processor.logger().is_enabled());
    }

    #[test]
    fn processor_downcast() {
        let processor = ReverseProcessor::new("rev");
        assert!(processor.is::<ReverseProcessor>());
        assert!(processor.downcast_ref::<ReverseProcessor>().is_some());
    }

    #[test]
    fn trait_object_downcast() {
        let boxed: Box<dyn Processor> = Box::new(ReverseProcessor::new("rev"));
        assert!(boxed.is::<ReverseProcessor>());
        assert_eq!(
            boxed.downcast_ref::<ReverseProcessor>().unwrap().name,
            "rev"
        );
    }
}

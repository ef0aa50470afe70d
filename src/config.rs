//! Constructor arguments for processors.
//!
//! Processors take no configuration beyond what they are constructed with;
//! `ProcessorConfig` bundles those arguments so call sites can build them
//! fluently.

/// Constructor arguments for a processor.
///
/// # Example
///
/// ```rust
/// use procflow::ProcessorConfig;
///
/// let config = ProcessorConfig::new("ingest").quiet();
/// assert_eq!(config.name, "ingest");
/// assert!(!config.logging);
/// ```
#[derive(Debug, Clone)]
pub struct ProcessorConfig {
    /// Processor name, also used as the logger prefix
    pub name: String,
    /// Whether the owned logger starts enabled
    pub logging: bool,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            name: "processor".to_string(),
            logging: true,
        }
    }
}

impl ProcessorConfig {
    /// Create a configuration with the given name and logging enabled.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the processor name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Start with the owned logger disabled.
    pub fn quiet(mut self) -> Self {
        self.logging = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ProcessorConfig::default();
        assert_eq!(config.name, "processor");
        assert!(config.logging);
    }

    #[test]
    fn builder_methods_chain() {
        let config = ProcessorConfig::default().with_name("worker").quiet();
        assert_eq!(config.name, "worker");
        assert!(!config.logging);
    }
}

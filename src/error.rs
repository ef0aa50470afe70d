//! Error types for Procflow.

use thiserror::Error;

/// Root error type for Procflow operations.
#[derive(Error, Debug)]
pub enum ProcflowError {
    /// Processing-related errors
    #[error("Process error: {0}")]
    Process(#[from] ProcessError),

    /// Registry-related errors
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

/// Errors that can occur while processing input.
///
/// `Display` renders the bare message so log lines read naturally
/// ("Validation failed: Data cannot be null"). The enum is non-exhaustive:
/// callers keep a fallback arm alongside the `InvalidArgument` arm, and
/// future processor variants can add kinds without breaking them.
#[derive(Error, Debug, Clone)]
#[non_exhaustive]
pub enum ProcessError {
    /// Input was absent, empty, or otherwise rejected before processing
    #[error("{0}")]
    InvalidArgument(String),
}

/// Errors that can occur in registry operations.
#[derive(Error, Debug, Clone)]
pub enum RegistryError {
    /// Processor already registered with this name
    #[error("Processor already registered: {0}")]
    AlreadyRegistered(String),

    /// Invalid processor name
    #[error("Invalid processor name: {0:?}")]
    InvalidName(String),
}

/// Result type alias for processing operations.
pub type ProcessResult<T> = Result<T, ProcessError>;

/// Result type alias for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Result type alias for general Procflow operations.
pub type ProcflowResult<T> = Result<T, ProcflowError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn process_error_displays_bare_message() {
        let err = ProcessError::InvalidArgument("Data cannot be empty".to_string());
        assert_eq!(err.to_string(), "Data cannot be empty");
    }

    #[test]
    fn registry_error_names_the_processor() {
        let err = RegistryError::AlreadyRegistered("main".to_string());
        assert_eq!(err.to_string(), "Processor already registered: main");
    }

    #[test]
    fn root_error_wraps_domain_errors() {
        let err: ProcflowError = ProcessError::InvalidArgument("Data cannot be null".into()).into();
        assert_eq!(err.to_string(), "Process error: Data cannot be null");

        let err: ProcflowError = RegistryError::InvalidName(String::new()).into();
        assert!(err.to_string().starts_with("Registry error:"));
    }
}

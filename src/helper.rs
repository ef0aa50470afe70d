//! Input validation and output formatting helpers.
//!
//! Stateless functions shared by processor variants. Validation is a
//! presence check only; formatting is total and never fails.

use crate::error::{ProcessError, ProcessResult};

/// Check that input data is present.
///
/// `None` fails with [`ProcessError::InvalidArgument`]; `Some(value)`
/// returns `value` unchanged. Content is not inspected, so empty strings
/// pass. Rejecting empty input is the processor's job, not the
/// validator's.
///
/// # Example
///
/// ```rust
/// use procflow::validate_input;
///
/// assert_eq!(validate_input(Some("data")).unwrap(), "data");
/// assert!(validate_input(None).is_err());
/// ```
pub fn validate_input(data: Option<&str>) -> ProcessResult<&str> {
    match data {
        Some(value) => Ok(value),
        None => Err(ProcessError::InvalidArgument(
            "Data cannot be null".to_string(),
        )),
    }
}

/// Map every character of `value` to its uppercase form.
pub fn format_output(value: &str) -> String {
    value.to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_passes_present_input_through() {
        assert_eq!(validate_input(Some("hello")).unwrap(), "hello");
    }

    #[test]
    fn validate_does_not_inspect_content() {
        assert_eq!(validate_input(Some("")).unwrap(), "");
    }

    #[test]
    fn validate_rejects_absent_input() {
        let err = validate_input(None).unwrap_err();
        assert_eq!(err.to_string(), "Data cannot be null");
    }

    #[test]
    fn format_uppercases_every_character() {
        assert_eq!(format_output("hello"), "HELLO");
        assert_eq!(format_output("MiXeD 123!"), "MIXED 123!");
        assert_eq!(format_output(""), "");
    }
}

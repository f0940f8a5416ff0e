//! Error types for the provider helpers.

use thiserror::Error;

/// Errors returned by the helper functions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HelperError {
    /// A composite ID did not split into the required number of parts.
    #[error("error: composite ID requires {parts} parts separated by a [{separator}] (x{separator}y)")]
    MalformedCompositeId {
        /// The number of parts the caller asked for.
        parts: usize,
        /// The separator that was applied.
        separator: String,
    },

    /// One or more diagnostics, combined into a single message.
    #[error("{0}")]
    Diagnostics(String),

    /// The attribute is not declared in the schema.
    #[error("Unknown attribute: {0}")]
    UnknownAttribute(String),

    /// The value does not match the attribute's declared type.
    #[error("Invalid value for '{key}': expected {expected}")]
    InvalidValue {
        /// The attribute key being written.
        key: String,
        /// The expected value shape.
        expected: String,
    },
}

impl HelperError {
    /// Get the error message as a string.
    ///
    /// Single-payload variants return their payload. Structured variants
    /// return a fixed description; use `Display` for the full text.
    pub fn message(&self) -> &str {
        match self {
            Self::MalformedCompositeId { .. } => "malformed composite ID (see Display output)",
            Self::Diagnostics(msg) => msg,
            Self::UnknownAttribute(key) => key,
            Self::InvalidValue { .. } => "value does not match attribute type (see Display output)",
        }
    }

    pub(crate) fn invalid_value(key: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::InvalidValue {
            key: key.into(),
            expected: expected.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_composite_id_display() {
        let err = HelperError::MalformedCompositeId {
            parts: 2,
            separator: "|".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "error: composite ID requires 2 parts separated by a [|] (x|y)"
        );
    }

    #[test]
    fn test_diagnostics_display_is_verbatim() {
        let err = HelperError::Diagnostics("Severity: 0 | Summary: a, | Detail: b\n".to_string());
        assert_eq!(format!("{}", err), "Severity: 0 | Summary: a, | Detail: b\n");
    }

    #[test]
    fn test_schema_error_display() {
        let err = HelperError::UnknownAttribute("region".to_string());
        assert_eq!(format!("{}", err), "Unknown attribute: region");

        let err = HelperError::invalid_value("count", "int64");
        assert_eq!(format!("{}", err), "Invalid value for 'count': expected int64");
    }

    #[test]
    fn test_message_method() {
        let err = HelperError::Diagnostics("combined".to_string());
        assert_eq!(err.message(), "combined");

        let err = HelperError::UnknownAttribute("region".to_string());
        assert_eq!(err.message(), "region");
    }

    #[test]
    fn test_message_for_structured_variants() {
        let err = HelperError::MalformedCompositeId {
            parts: 3,
            separator: ";".to_string(),
        };
        assert_eq!(err.message(), "malformed composite ID (see Display output)");

        let err = HelperError::invalid_value("names", "list");
        assert_eq!(
            err.message(),
            "value does not match attribute type (see Display output)"
        );
    }
}

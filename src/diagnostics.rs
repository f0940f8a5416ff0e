//! Diagnostics and their conversion to a single error.
//!
//! CRUD and validation calls report problems as an ordered list of
//! diagnostics. Code that wants a plain `Result` can fold that list into one
//! [`HelperError`] with [`errs_from_diags`].
//!
//! # Example
//!
//! ```
//! use tf_provider_helpers::diagnostics::{errs_from_diags, Diagnostic};
//!
//! assert!(errs_from_diags::<Diagnostic>(&[]).is_ok());
//!
//! let diags = vec![Diagnostic::error("Bucket not found").with_detail("no such bucket: logs")];
//! let err = errs_from_diags(&diags).unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "Severity: 0 | Summary: Bucket not found, | Detail: no such bucket: logs\n"
//! );
//! ```

use crate::error::HelperError;
use serde::{Deserialize, Serialize};

/// Diagnostic severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSeverity {
    /// An error that prevents the operation from completing.
    Error,
    /// A warning that doesn't prevent the operation but should be addressed.
    Warning,
}

impl DiagnosticSeverity {
    /// The numeric code used by the plugin protocol (`0` error, `1` warning).
    pub fn code(self) -> u8 {
        match self {
            Self::Error => 0,
            Self::Warning => 1,
        }
    }
}

impl std::fmt::Display for DiagnosticSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Read-only view of a diagnostic produced elsewhere.
pub trait DiagnosticEntry {
    /// The severity of the diagnostic.
    fn severity(&self) -> DiagnosticSeverity;
    /// A short summary of the issue.
    fn summary(&self) -> &str;
    /// A detailed description, empty if none was given.
    fn detail(&self) -> &str;
}

/// A diagnostic message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The severity of the diagnostic.
    pub severity: DiagnosticSeverity,
    /// A short summary of the issue.
    pub summary: String,
    /// A detailed description of the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Diagnostic {
    /// Create an error diagnostic.
    pub fn error(summary: impl Into<String>) -> Self {
        Self {
            severity: DiagnosticSeverity::Error,
            summary: summary.into(),
            detail: None,
        }
    }

    /// Create a warning diagnostic.
    pub fn warning(summary: impl Into<String>) -> Self {
        Self {
            severity: DiagnosticSeverity::Warning,
            summary: summary.into(),
            detail: None,
        }
    }

    /// Add detail to this diagnostic.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

impl DiagnosticEntry for Diagnostic {
    fn severity(&self) -> DiagnosticSeverity {
        self.severity
    }

    fn summary(&self) -> &str {
        &self.summary
    }

    fn detail(&self) -> &str {
        self.detail.as_deref().unwrap_or_default()
    }
}

/// Fold a list of diagnostics into one error.
///
/// Returns `Ok(())` for an empty list. Otherwise every entry, whatever its
/// severity, contributes one line of the form
/// `Severity: <code> | Summary: <summary>, | Detail: <detail>` and the
/// combined text is returned as [`HelperError::Diagnostics`].
pub fn errs_from_diags<D: DiagnosticEntry>(diags: &[D]) -> Result<(), HelperError> {
    if diags.is_empty() {
        return Ok(());
    }

    let message = diags
        .iter()
        .map(|d| {
            format!(
                "Severity: {} | Summary: {}, | Detail: {}\n",
                d.severity(),
                d.summary(),
                d.detail()
            )
        })
        .collect::<String>();

    tracing::debug!(count = diags.len(), "Converted diagnostics to error");
    Err(HelperError::Diagnostics(message))
}

/// Returns true if any diagnostic has error severity.
pub fn has_errors<D: DiagnosticEntry>(diags: &[D]) -> bool {
    diags
        .iter()
        .any(|d| d.severity() == DiagnosticSeverity::Error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{assert_error_contains, assert_has_errors, assert_no_errors};

    #[test]
    fn test_errs_from_diags() {
        let diags = vec![
            Diagnostic::error("The summer of error one").with_detail("The Details of error one"),
            Diagnostic::error("The summer of error two").with_detail("The Details of error two"),
        ];

        let err = errs_from_diags(&diags).unwrap_err();
        assert_eq!(
            err,
            HelperError::Diagnostics(
                "Severity: 0 | Summary: The summer of error one, | Detail: The Details of error one\n\
                 Severity: 0 | Summary: The summer of error two, | Detail: The Details of error two\n"
                    .to_string()
            )
        );
    }

    #[test]
    fn test_errs_from_diags_no_errors() {
        let diags: Vec<Diagnostic> = Vec::new();
        assert_eq!(errs_from_diags(&diags), Ok(()));
    }

    #[test]
    fn test_errs_from_diags_keeps_warnings() {
        let diags = vec![Diagnostic::warning("Deprecated attribute")];
        assert!(!has_errors(&diags));

        let err = errs_from_diags(&diags).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Severity: 1 | Summary: Deprecated attribute, | Detail: \n"
        );
    }

    #[test]
    fn test_custom_entry_type() {
        struct SdkDiag {
            level: u8,
            text: &'static str,
        }

        impl DiagnosticEntry for SdkDiag {
            fn severity(&self) -> DiagnosticSeverity {
                if self.level == 0 {
                    DiagnosticSeverity::Error
                } else {
                    DiagnosticSeverity::Warning
                }
            }
            fn summary(&self) -> &str {
                self.text
            }
            fn detail(&self) -> &str {
                ""
            }
        }

        let diags = [SdkDiag { level: 0, text: "boom" }];
        assert!(has_errors(&diags));
        assert!(errs_from_diags(&diags)
            .unwrap_err()
            .to_string()
            .starts_with("Severity: 0 | Summary: boom,"));
    }

    #[test]
    fn test_severity_serialization() {
        let diag = Diagnostic::warning("careful");
        let value = serde_json::to_value(&diag).unwrap();
        assert_eq!(value["severity"], "warning");
        assert!(value.get("detail").is_none());
    }

    #[test]
    fn test_assertion_helpers() {
        let diags = vec![
            Diagnostic::warning("Just a warning"),
            Diagnostic::error("Invalid configuration value"),
        ];
        assert_has_errors(&diags);
        assert_error_contains(&diags, "configuration");
        assert_no_errors(&diags[..1]);
    }
}

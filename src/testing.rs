//! Assertion helpers for provider tests.
//!
//! # Example
//!
//! ```
//! use tf_provider_helpers::accessors::get_set_value_as_string_slice;
//! use tf_provider_helpers::testing::assert_same_elements;
//! use serde_json::json;
//!
//! let state = json!({"zones": ["b", "a"]});
//! let zones = get_set_value_as_string_slice(&state, "zones");
//! assert_same_elements(&zones, &["a", "b"]);
//! ```

use crate::diagnostics::{DiagnosticEntry, DiagnosticSeverity};
use std::fmt::Debug;

/// Assert that two slices hold the same elements, ignoring order.
///
/// Duplicates are counted, so `[1, 1, 2]` does not match `[1, 2, 2]`. Use this
/// for anything read back from a set, whose order is not defined.
///
/// # Panics
///
/// Panics if the slices differ as multisets.
pub fn assert_same_elements<T, U>(actual: &[T], expected: &[U])
where
    T: PartialEq<U> + Debug,
    U: Debug,
{
    let mut unmatched: Vec<&T> = actual.iter().collect();
    for want in expected {
        match unmatched.iter().position(|got| *got == want) {
            Some(i) => {
                unmatched.swap_remove(i);
            },
            None => panic!(
                "Expected element {:?} not found. Actual: {:?}, expected: {:?}",
                want, actual, expected
            ),
        }
    }
    assert!(
        unmatched.is_empty(),
        "Unexpected extra element(s) {:?}. Actual: {:?}, expected: {:?}",
        unmatched,
        actual,
        expected
    );
}

/// Assert that diagnostics contain no errors.
///
/// # Panics
///
/// Panics if there are any error diagnostics.
pub fn assert_no_errors<D: DiagnosticEntry>(diagnostics: &[D]) {
    let errors: Vec<&str> = errors(diagnostics).collect();

    assert!(
        errors.is_empty(),
        "Expected no errors, but got {} error(s): {:?}",
        errors.len(),
        errors
    );
}

/// Assert that diagnostics contain at least one error.
///
/// # Panics
///
/// Panics if there are no error diagnostics.
pub fn assert_has_errors<D: DiagnosticEntry>(diagnostics: &[D]) {
    assert!(
        errors(diagnostics).next().is_some(),
        "Expected at least one error, but got none"
    );
}

/// Assert that diagnostics contain an error with the given summary substring.
///
/// # Panics
///
/// Panics if no error diagnostic contains the given substring.
pub fn assert_error_contains<D: DiagnosticEntry>(diagnostics: &[D], substring: &str) {
    assert!(
        errors(diagnostics).any(|summary| summary.contains(substring)),
        "Expected an error containing '{}', but no matching error found. Errors: {:?}",
        substring,
        errors(diagnostics).collect::<Vec<_>>()
    );
}

fn errors<D: DiagnosticEntry>(diagnostics: &[D]) -> impl Iterator<Item = &str> {
    diagnostics
        .iter()
        .filter(|d| d.severity() == DiagnosticSeverity::Error)
        .map(|d| d.summary())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Diagnostic;

    #[test]
    fn test_assert_same_elements() {
        assert_same_elements(&["mike", "bob", "jess"], &["bob", "jess", "mike"]);
        assert_same_elements(&[2_i64, 3, 1], &[1_i64, 2, 3]);
        assert_same_elements::<String, &str>(&[], &[]);
    }

    #[test]
    #[should_panic(expected = "Expected element")]
    fn test_assert_same_elements_missing() {
        assert_same_elements(&["bob"], &["bob", "jess"]);
    }

    #[test]
    #[should_panic(expected = "Unexpected extra element")]
    fn test_assert_same_elements_extra() {
        assert_same_elements(&[1, 1, 2], &[1, 2]);
    }

    #[test]
    fn test_assert_no_errors() {
        let diagnostics = vec![Diagnostic::warning("Just a warning")];
        assert_no_errors(&diagnostics);
    }

    #[test]
    #[should_panic(expected = "Expected no errors")]
    fn test_assert_no_errors_fails() {
        let diagnostics = vec![Diagnostic::error("An error")];
        assert_no_errors(&diagnostics);
    }

    #[test]
    #[should_panic(expected = "Expected at least one error")]
    fn test_assert_has_errors_fails() {
        let diagnostics = vec![Diagnostic::warning("Only a warning")];
        assert_has_errors(&diagnostics);
    }

    #[test]
    fn test_assert_error_contains() {
        let diagnostics = vec![Diagnostic::error("Invalid configuration value")];
        assert_error_contains(&diagnostics, "Invalid");
        assert_error_contains(&diagnostics, "configuration");
    }
}

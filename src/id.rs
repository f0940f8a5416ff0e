//! Composite resource IDs.
//!
//! Resources identified by several fields (a region and a name, a parent and
//! a child) store them in one ID string joined by a separator, `:` unless the
//! caller says otherwise.
//!
//! # Example
//!
//! ```
//! use tf_provider_helpers::id::{build_composite_id, parse_composite_id};
//!
//! let id = build_composite_id(&["us-east-1", "my-bucket"], &[]);
//! assert_eq!(id, "us-east-1:my-bucket");
//!
//! let parts = parse_composite_id(&id, 2, &[]).unwrap();
//! assert_eq!(parts, vec!["us-east-1", "my-bucket"]);
//!
//! let err = parse_composite_id("a|b", 3, &["|"]).unwrap_err();
//! assert_eq!(err.to_string(), "error: composite ID requires 3 parts separated by a [|] (x|y)");
//! ```

use crate::error::HelperError;

/// The separator used when none is supplied.
pub const DEFAULT_SEPARATOR: &str = ":";

/// Splits and joins composite IDs with a fixed separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeIdCodec {
    separator: String,
}

impl CompositeIdCodec {
    /// Create a codec using [`DEFAULT_SEPARATOR`].
    pub fn new() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }

    /// Use a different separator.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// The separator this codec applies.
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Split `id` into exactly `parts` segments.
    ///
    /// Splitting runs from the left, so the last segment keeps any further
    /// separators. An empty separator splits between characters.
    ///
    /// # Errors
    ///
    /// Returns [`HelperError::MalformedCompositeId`] if the split does not
    /// produce exactly `parts` segments, or if `parts` is zero.
    pub fn parse(&self, id: &str, parts: usize) -> Result<Vec<String>, HelperError> {
        let segments: Vec<String> = if self.separator.is_empty() {
            split_chars(id, parts)
        } else {
            id.splitn(parts, self.separator.as_str())
                .map(str::to_string)
                .collect()
        };

        if parts == 0 || segments.len() != parts {
            tracing::debug!(
                id,
                parts,
                separator = %self.separator,
                found = segments.len(),
                "Malformed composite ID"
            );
            return Err(HelperError::MalformedCompositeId {
                parts,
                separator: self.separator.clone(),
            });
        }

        Ok(segments)
    }

    /// Join `parts` into a composite ID.
    pub fn build<S: AsRef<str>>(&self, parts: &[S]) -> String {
        parts
            .iter()
            .map(|p| p.as_ref())
            .collect::<Vec<&str>>()
            .join(&self.separator)
    }
}

impl Default for CompositeIdCodec {
    fn default() -> Self {
        Self::new()
    }
}

/// Split `id` into exactly `num_of_splits` segments.
///
/// Only the first entry of `separators` is used; further entries are
/// accepted and ignored. An empty slice selects [`DEFAULT_SEPARATOR`].
///
/// # Errors
///
/// Returns [`HelperError::MalformedCompositeId`] when the segment count does
/// not match.
pub fn parse_composite_id(
    id: &str,
    num_of_splits: usize,
    separators: &[&str],
) -> Result<Vec<String>, HelperError> {
    codec_for(separators).parse(id, num_of_splits)
}

/// Join `parts` with the first entry of `separators`, or [`DEFAULT_SEPARATOR`].
///
/// Inverse of [`parse_composite_id`] for parts that do not themselves
/// contain the separator.
pub fn build_composite_id<S: AsRef<str>>(parts: &[S], separators: &[&str]) -> String {
    codec_for(separators).build(parts)
}

fn codec_for(separators: &[&str]) -> CompositeIdCodec {
    match separators.first() {
        Some(sep) => CompositeIdCodec::new().with_separator(*sep),
        None => CompositeIdCodec::new(),
    }
}

/// At most `n` segments: one per character, the last holding the remainder.
fn split_chars(id: &str, n: usize) -> Vec<String> {
    if n == 0 {
        return Vec::new();
    }
    let mut segments = Vec::new();
    let mut chars = id.char_indices();
    while segments.len() + 1 < n {
        match chars.next() {
            Some((_, c)) => segments.push(c.to_string()),
            None => return segments,
        }
    }
    if let Some((i, _)) = chars.next() {
        segments.push(id[i..].to_string());
    }
    segments
}

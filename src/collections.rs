//! Membership checks over string slices.

/// Returns true if `value` equals some element of `set`.
pub fn contains_string<S: AsRef<str>>(set: &[S], value: &str) -> bool {
    set.iter().any(|s| s.as_ref() == value)
}

/// Returns true if `value` equals no element of `set`.
pub fn does_not_contain_string<S: AsRef<str>>(set: &[S], value: &str) -> bool {
    !contains_string(set, value)
}

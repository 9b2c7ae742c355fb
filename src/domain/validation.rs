//! Shared validation helpers for value objects.
//!
//! Each helper checks one invariant and returns the first violation as a
//! `DomainError::Validation`. Value objects chain them in a fixed order
//! (emptiness, then length bounds, then pattern/content) so a given bad
//! input always reports the same error.

use regex::Regex;
use serde_json::json;

use crate::errors::{DomainError, DomainResult};

/// Reject values that are empty or blank after trimming.
///
/// Trimming is only used to detect blankness; the caller stores the
/// original value untouched.
pub(crate) fn require_non_blank(field: &str, value: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::empty_check(field));
    }
    Ok(())
}

/// Reject values shorter than `min` characters.
pub(crate) fn require_min_length(field: &str, value: &str, min: usize) -> DomainResult<()> {
    let actual = value.chars().count();
    if actual < min {
        return Err(DomainError::min_length(field, min, actual));
    }
    Ok(())
}

/// Reject values longer than `max` characters.
pub(crate) fn require_max_length(field: &str, value: &str, max: usize) -> DomainResult<()> {
    let actual = value.chars().count();
    if actual > max {
        return Err(DomainError::max_length(field, max, actual));
    }
    Ok(())
}

/// Reject values that do not match `pattern` in full.
pub(crate) fn require_pattern(
    field: &str,
    value: &str,
    pattern: &Regex,
    message: &str,
) -> DomainResult<()> {
    if !pattern.is_match(value) {
        return Err(DomainError::pattern_mismatch(
            field,
            message,
            [("pattern", json!(pattern.as_str()))],
        ));
    }
    Ok(())
}

/// Reject values missing a required character class.
///
/// `class` names the class in the `missingCharacters` details entry.
pub(crate) fn require_character_class(
    field: &str,
    value: &str,
    class: &'static str,
    predicate: impl Fn(char) -> bool,
) -> DomainResult<()> {
    if !value.chars().any(predicate) {
        return Err(DomainError::pattern_mismatch(
            field,
            format!("The field '{field}' must contain at least one {class}"),
            [("missingCharacters", json!(class))],
        ));
    }
    Ok(())
}

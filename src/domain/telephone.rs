//! Telephone value object.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::TELEPHONE_PATTERN;
use crate::domain::validation::{require_non_blank, require_pattern};
use crate::errors::DomainResult;

static TELEPHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(TELEPHONE_PATTERN).expect("telephone pattern is valid"));

/// Telephone value object.
///
/// Accepts only `(DD) DDDD-DDDD` or `(DD) DDDDD-DDDD`: a 2-digit area
/// code, a 4-or-5-digit prefix, and a 4-digit suffix. The matching string
/// is stored as-is; no normalization is performed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Telephone(String);

impl Telephone {
    /// Validate and wrap a telephone number.
    pub fn of(value: &str) -> DomainResult<Self> {
        require_non_blank("telephone", value)?;
        require_pattern(
            "telephone",
            value,
            &TELEPHONE_REGEX,
            "The field 'telephone' must match the format '(DD) DDDDD-DDDD'",
        )?;
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Telephone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

//! Email value object.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::EMAIL_PATTERN;
use crate::domain::validation::{require_non_blank, require_pattern};
use crate::errors::DomainResult;

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern is valid"));

/// Email address value object.
///
/// The input is stored verbatim once validation passes: no case folding
/// and no whitespace stripping. Trimming happens only to detect blank
/// input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Validate and wrap an email address.
    pub fn of(value: &str) -> DomainResult<Self> {
        require_non_blank("email", value)?;
        require_pattern(
            "email",
            value,
            &EMAIL_REGEX,
            "The field 'email' must be a valid email address",
        )?;
        Ok(Self(value.to_string()))
    }

    /// The validated address, exactly as supplied.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

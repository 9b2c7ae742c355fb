//! Name value object.

use serde::{Deserialize, Serialize};

use crate::config::{MAX_NAME_LENGTH, MIN_NAME_LENGTH};
use crate::domain::validation::{require_max_length, require_min_length, require_non_blank};
use crate::errors::DomainResult;

/// Display name value object, length-bounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    /// Validate and wrap a display name.
    pub fn of(value: &str) -> DomainResult<Self> {
        require_non_blank("name", value)?;
        require_min_length("name", value, MIN_NAME_LENGTH)?;
        require_max_length("name", value, MAX_NAME_LENGTH)?;
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

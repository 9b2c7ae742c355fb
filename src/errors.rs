//! Centralized error handling.
//!
//! The domain error taxonomy is a closed sum over the five failure kinds
//! that can cross the core boundary. Every constructor stamps a
//! `timestamp` into the details map so adapters can render consistent
//! problem reports without re-deriving context.

use std::collections::HashMap;

use chrono::Utc;
use serde_json::{json, Value};
use thiserror::Error;
use uuid::Uuid;

/// Structured context attached to every domain error
pub type ErrorDetails = HashMap<String, Value>;

/// Validation type reported under the `validationType` details key
pub const VALIDATION_TYPE_EMPTY_CHECK: &str = "empty_check";
pub const VALIDATION_TYPE_MIN_LENGTH: &str = "min_length";
pub const VALIDATION_TYPE_MAX_LENGTH: &str = "max_length";
pub const VALIDATION_TYPE_PATTERN_MISMATCH: &str = "pattern_mismatch";
pub const VALIDATION_TYPE_GENERIC: &str = "generic";

/// Domain error types
///
/// A closed sum: adapters translate these five kinds into their own
/// transport representation and never see anything else from the core.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// A single field's value violates a static invariant at construction time
    #[error("{message}")]
    Validation {
        message: String,
        field: Option<String>,
        details: ErrorDetails,
    },

    /// A requested transition is illegal given the aggregate's current status
    #[error("{message}")]
    InvalidState {
        message: String,
        entity: String,
        state: String,
        action: String,
        details: ErrorDetails,
    },

    /// Referenced aggregate id/email has no backing record
    #[error("{message}")]
    NotFound { message: String, details: ErrorDetails },

    /// Email uniqueness constraint violated
    #[error("{message}")]
    DuplicateEmail { message: String, details: ErrorDetails },

    /// A provided secret does not match the stored hash
    #[error("{message}")]
    Matching { message: String, details: ErrorDetails },
}

fn base_details(validation_type: &str) -> ErrorDetails {
    let mut details = ErrorDetails::new();
    details.insert("validationType".to_string(), json!(validation_type));
    details.insert("timestamp".to_string(), json!(Utc::now().to_rfc3339()));
    details
}

fn stamped_details() -> ErrorDetails {
    let mut details = ErrorDetails::new();
    details.insert("timestamp".to_string(), json!(Utc::now().to_rfc3339()));
    details
}

impl DomainError {
    /// Validation failure: value is null, empty, or blank after trimming
    pub fn empty_check(field: &str) -> Self {
        DomainError::Validation {
            message: format!("The field '{field}' cannot be empty"),
            field: Some(field.to_string()),
            details: base_details(VALIDATION_TYPE_EMPTY_CHECK),
        }
    }

    /// Validation failure: value is shorter than the allowed minimum
    pub fn min_length(field: &str, min: usize, actual: usize) -> Self {
        let mut details = base_details(VALIDATION_TYPE_MIN_LENGTH);
        details.insert("minLength".to_string(), json!(min));
        details.insert("actualLength".to_string(), json!(actual));
        DomainError::Validation {
            message: format!("The field '{field}' must be at least {min} characters long"),
            field: Some(field.to_string()),
            details,
        }
    }

    /// Validation failure: value is longer than the allowed maximum
    pub fn max_length(field: &str, max: usize, actual: usize) -> Self {
        let mut details = base_details(VALIDATION_TYPE_MAX_LENGTH);
        details.insert("maxLength".to_string(), json!(max));
        details.insert("actualLength".to_string(), json!(actual));
        DomainError::Validation {
            message: format!("The field '{field}' must be at most {max} characters long"),
            field: Some(field.to_string()),
            details,
        }
    }

    /// Validation failure: value does not match the required format
    ///
    /// `extra` carries type-specific keys such as `pattern` or
    /// `missingCharacters`.
    pub fn pattern_mismatch(
        field: &str,
        message: impl Into<String>,
        extra: impl IntoIterator<Item = (&'static str, Value)>,
    ) -> Self {
        let mut details = base_details(VALIDATION_TYPE_PATTERN_MISMATCH);
        for (key, value) in extra {
            details.insert(key.to_string(), value);
        }
        DomainError::Validation {
            message: message.into(),
            field: Some(field.to_string()),
            details,
        }
    }

    /// Validation failure that fits none of the structured types
    pub fn generic(field: &str, message: impl Into<String>) -> Self {
        DomainError::Validation {
            message: message.into(),
            field: Some(field.to_string()),
            details: base_details(VALIDATION_TYPE_GENERIC),
        }
    }

    /// Illegal state transition on an aggregate
    pub fn invalid_state(entity: &str, state: &str, action: &str, entity_id: Option<Uuid>) -> Self {
        let mut details = stamped_details();
        if let Some(id) = entity_id {
            details.insert("entityId".to_string(), json!(id));
        }
        DomainError::InvalidState {
            message: format!(
                "It is not possible to execute '{action}' on {entity} in the '{state}' state"
            ),
            entity: entity.to_string(),
            state: state.to_string(),
            action: action.to_string(),
            details,
        }
    }

    /// Aggregate lookup by id came back empty
    pub fn not_found(entity: &str, id: Uuid) -> Self {
        let mut details = stamped_details();
        details.insert("entityId".to_string(), json!(id));
        DomainError::NotFound {
            message: format!("{entity} with id '{id}' not found"),
            details,
        }
    }

    /// Aggregate lookup by email came back empty
    pub fn not_found_by_email(entity: &str, email: &str) -> Self {
        let mut details = stamped_details();
        details.insert("email".to_string(), json!(email));
        DomainError::NotFound {
            message: format!("{entity} with email '{email}' not found"),
            details,
        }
    }

    /// Email already belongs to another aggregate
    pub fn duplicate_email(email: &str) -> Self {
        let mut details = stamped_details();
        details.insert("email".to_string(), json!(email));
        DomainError::DuplicateEmail {
            message: format!("The email '{email}' is already in use"),
            details,
        }
    }

    /// Provided secret failed verification against the stored hash
    pub fn matching(entity_id: Uuid) -> Self {
        let mut details = stamped_details();
        details.insert("entityId".to_string(), json!(entity_id));
        DomainError::Matching {
            message: "The provided password does not match the current password".to_string(),
            details,
        }
    }

    /// Details map carried by every error kind
    pub fn details(&self) -> &ErrorDetails {
        match self {
            DomainError::Validation { details, .. }
            | DomainError::InvalidState { details, .. }
            | DomainError::NotFound { details, .. }
            | DomainError::DuplicateEmail { details, .. }
            | DomainError::Matching { details, .. } => details,
        }
    }

    /// `validationType` details entry, when present
    pub fn validation_type(&self) -> Option<&str> {
        self.details().get("validationType").and_then(Value::as_str)
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

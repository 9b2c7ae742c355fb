//! Password value object.
//!
//! Two construction paths with different invariant sets: `of_raw` for
//! user-supplied plaintext (length and character-class rules) and
//! `of_hash` for already-hashed values loaded from storage (non-blank
//! only, since hash formats vary by algorithm). Hashing itself lives
//! behind the `PasswordEncryptor` port; this type never calls it.

use serde::{Deserialize, Serialize};

use crate::config::{MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH, SPECIAL_CHARACTERS};
use crate::domain::validation::{
    require_character_class, require_max_length, require_min_length, require_non_blank,
};
use crate::errors::DomainResult;

/// Password value object.
///
/// Holds either a validated raw password (pre-hash, in flight) or a
/// stored hash; the instance does not remember which path created it.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Password(String);

// Don't expose the value in debug output (security)
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Password").field(&"[REDACTED]").finish()
    }
}

impl Password {
    /// Validate user-supplied plaintext.
    ///
    /// Checks, in order: blankness, minimum then maximum length, then the
    /// required character classes digit, uppercase, lowercase, and one of
    /// the fixed special characters. The first violation wins.
    pub fn of_raw(value: &str) -> DomainResult<Self> {
        require_non_blank("password", value)?;
        require_min_length("password", value, MIN_PASSWORD_LENGTH)?;
        require_max_length("password", value, MAX_PASSWORD_LENGTH)?;
        require_character_class("password", value, "digit", |c| c.is_ascii_digit())?;
        require_character_class("password", value, "uppercase letter", |c| {
            c.is_ascii_uppercase()
        })?;
        require_character_class("password", value, "lowercase letter", |c| {
            c.is_ascii_lowercase()
        })?;
        require_character_class("password", value, "special character", |c| {
            SPECIAL_CHARACTERS.contains(c)
        })?;
        Ok(Self(value.to_string()))
    }

    /// Wrap an already-hashed value loaded from a trusted source.
    pub fn of_hash(value: &str) -> DomainResult<Self> {
        require_non_blank("password", value)?;
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_raw_password_kept_unchanged() {
        let password = Password::of_raw("Aa1!bcde").unwrap();
        assert_eq!(password.as_str(), "Aa1!bcde");
    }

    #[test]
    fn test_length_bounds() {
        // 7 chars, otherwise valid
        let err = Password::of_raw("Aa1!bcd").unwrap_err();
        assert_eq!(err.validation_type(), Some("min_length"));

        let long = format!("Aa1!{}", "b".repeat(MAX_PASSWORD_LENGTH));
        let err = Password::of_raw(&long).unwrap_err();
        assert_eq!(err.validation_type(), Some("max_length"));

        // Exactly at the bounds
        assert!(Password::of_raw("Aa1!bcde").is_ok());
        let max = format!("Aa1!{}", "b".repeat(MAX_PASSWORD_LENGTH - 4));
        assert!(Password::of_raw(&max).is_ok());
    }

    #[test]
    fn test_each_missing_character_class() {
        for (candidate, missing) in [
            ("Aa!bcdefg", "digit"),
            ("aa1!bcdefg", "uppercase letter"),
            ("AA1!BCDEFG", "lowercase letter"),
            ("Aa1bcdefg", "special character"),
        ] {
            let err = Password::of_raw(candidate).unwrap_err();
            assert_eq!(err.validation_type(), Some("pattern_mismatch"), "{candidate}");
            assert_eq!(
                err.details().get("missingCharacters"),
                Some(&serde_json::json!(missing)),
                "{candidate}"
            );
        }
    }

    #[test]
    fn test_class_checks_run_digit_first() {
        // Missing every class: the digit check reports first
        let err = Password::of_raw("!!!!!!!!").unwrap_err();
        assert_eq!(
            err.details().get("missingCharacters"),
            Some(&serde_json::json!("digit"))
        );
    }

    #[test]
    fn test_hash_path_only_requires_non_blank() {
        assert!(Password::of_hash("$argon2id$v=19$whatever").is_ok());
        assert!(Password::of_hash("x").is_ok());
        let err = Password::of_hash("   ").unwrap_err();
        assert_eq!(err.validation_type(), Some("empty_check"));
    }

    #[test]
    fn test_debug_redacts_value() {
        let password = Password::of_raw("Aa1!bcde").unwrap();
        let rendered = format!("{password:?}");
        assert!(!rendered.contains("Aa1!bcde"));
        assert!(rendered.contains("REDACTED"));
    }
}

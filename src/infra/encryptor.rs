//! Password hashing port and its Argon2 adapter.

use argon2::{
    password_hash::{
        rand_core::OsRng, PasswordHash, PasswordHasher as _, PasswordVerifier as _, SaltString,
    },
    Argon2,
};

use crate::domain::Password;
use crate::errors::{DomainError, DomainResult};

/// Password hashing capability consumed by the use-case layer.
///
/// `encrypt` is salted: the same raw input may produce a different hash
/// on every call. `matches` must verify any of them; a malformed stored
/// hash simply verifies false.
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
pub trait PasswordEncryptor: Send + Sync {
    /// Hash a validated raw password into its storage form.
    ///
    /// Fails only if the encryptor itself is misconfigured; this is not a
    /// validation concern.
    fn encrypt(&self, raw: &Password) -> DomainResult<Password>;

    /// Verify a raw candidate against a stored hash.
    fn matches(&self, raw: &str, hash: &str) -> bool;
}

/// Argon2 implementation of the hashing port.
#[derive(Default)]
pub struct Argon2Encryptor;

impl Argon2Encryptor {
    pub fn new() -> Self {
        Self
    }

    #[inline]
    fn argon2() -> Argon2<'static> {
        Argon2::default()
    }
}

impl PasswordEncryptor for Argon2Encryptor {
    fn encrypt(&self, raw: &Password) -> DomainResult<Password> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Self::argon2()
            .hash_password(raw.as_str().as_bytes(), &salt)
            .map_err(|e| DomainError::generic("password", format!("Password hash failed: {e}")))?;
        Password::of_hash(&hash.to_string())
    }

    fn matches(&self, raw: &str, hash: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(hash) else {
            return false;
        };
        Self::argon2()
            .verify_password(raw.as_bytes(), &parsed)
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encrypt_and_matches_round_trip() {
        let encryptor = Argon2Encryptor::new();
        let raw = Password::of_raw("Aa1!bcde").unwrap();

        let hash = encryptor.encrypt(&raw).unwrap();
        assert!(encryptor.matches("Aa1!bcde", hash.as_str()));
        assert!(!encryptor.matches("Aa1!bcdX", hash.as_str()));
    }

    #[test]
    fn test_same_password_different_salts() {
        let encryptor = Argon2Encryptor::new();
        let raw = Password::of_raw("Aa1!bcde").unwrap();

        let first = encryptor.encrypt(&raw).unwrap();
        let second = encryptor.encrypt(&raw).unwrap();

        // Different salts produce different hashes
        assert_ne!(first.as_str(), second.as_str());
        // But both verify correctly
        assert!(encryptor.matches("Aa1!bcde", first.as_str()));
        assert!(encryptor.matches("Aa1!bcde", second.as_str()));
    }

    #[test]
    fn test_malformed_hash_verifies_false() {
        let encryptor = Argon2Encryptor::new();
        assert!(!encryptor.matches("Aa1!bcde", "not-a-phc-string"));
    }
}

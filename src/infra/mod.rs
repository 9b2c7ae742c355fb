//! Infrastructure layer - Port adapters
//!
//! Holds the narrow ports the domain core consumes (persistence,
//! password hashing) and the reference adapters shipped with the crate:
//! an in-memory store and an Argon2 encryptor. SQL, HTTP, and cache
//! adapters live in downstream crates.

pub mod encryptor;
pub mod repositories;

pub use encryptor::{Argon2Encryptor, PasswordEncryptor};
pub use repositories::{InMemoryUserStore, UserRepository};

#[cfg(any(test, feature = "test-utils"))]
pub use encryptor::MockPasswordEncryptor;
#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockUserRepository;

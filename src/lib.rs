//! User Account Service - domain core for user account management
//!
//! Create, update, password change, and lifecycle transitions
//! (activate / deactivate / block) for a single `User` aggregate,
//! expressed as a library crate. HTTP, SQL, and wiring live in
//! downstream adapter crates; this crate owns the invariants.
//!
//! # Architecture Layers
//!
//! - **config**: Application constants (validation bounds, pagination)
//! - **domain**: The `User` aggregate and its value objects
//! - **services**: Use-case orchestration over the ports
//! - **infra**: Port traits plus reference adapters (in-memory store,
//!   Argon2 encryptor)
//! - **types**: Shared types (pagination)
//! - **errors**: The closed domain error taxonomy

pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use domain::{Email, Name, Password, Telephone, User, UserResponse, UserStatus};
pub use errors::{DomainError, DomainResult};
pub use infra::{Argon2Encryptor, InMemoryUserStore, PasswordEncryptor, UserRepository};
pub use services::{UserManager, UserService};

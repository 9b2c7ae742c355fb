//! Domain layer - Core business entities and logic
//!
//! Contains the `User` aggregate, its self-validating value objects, and
//! the shared validation helpers they chain. No infrastructure concerns
//! live here; hashing and persistence are ports consumed by the service
//! layer.

pub mod email;
pub mod name;
pub mod password;
pub mod telephone;
pub mod user;
mod validation;

pub use email::Email;
pub use name::Name;
pub use password::Password;
pub use telephone::Telephone;
pub use user::{ChangePassword, CreateUser, UpdateUser, User, UserResponse, UserStatus};

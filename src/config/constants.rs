//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Pagination
// =============================================================================

/// Default number of items per page
pub const DEFAULT_PAGE_SIZE: u64 = 20;

/// Maximum allowed items per page to prevent excessive queries
pub const MAX_PAGE_SIZE: u64 = 100;

/// Default starting page number (1-indexed)
pub const DEFAULT_PAGE_NUMBER: u64 = 1;

// =============================================================================
// Validation
// =============================================================================

/// Minimum name length requirement
pub const MIN_NAME_LENGTH: usize = 5;

/// Maximum name length requirement
pub const MAX_NAME_LENGTH: usize = 100;

/// Minimum raw password length requirement
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum raw password length requirement
pub const MAX_PASSWORD_LENGTH: usize = 50;

/// Special characters a raw password must draw at least one character from
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*()-_+=[]{};:,.<>?";

/// Email format: local part, `@`, domain labels, and a 2+ letter TLD
pub const EMAIL_PATTERN: &str = r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$";

/// Telephone format: `(DD) DDDD-DDDD` or `(DD) DDDDD-DDDD`
pub const TELEPHONE_PATTERN: &str = r"^\(\d{2}\) \d{4,5}-\d{4}$";

// =============================================================================
// Entities
// =============================================================================

/// Entity name used in state-transition and not-found error messages
pub const ENTITY_USER: &str = "User";

//! Application configuration module
//!
//! Application-wide constants used by the domain and service layers.

mod constants;

pub use constants::*;

//! Input validation limits
//!
//! Centralized text length constants used by the form schema.
//! SQLite TEXT has no built-in length enforcement, so limits live here.

/// Person names (first/last)
pub const MAX_NAME_LEN: usize = 100;

/// Street address
pub const MAX_ADDRESS_LEN: usize = 200;

/// Postal / zip codes
pub const MAX_ZIP_LEN: usize = 20;

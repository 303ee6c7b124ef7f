//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the persistence namespace.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Cartela";

/// The binary name of the application (used in command examples, lowercase).
pub const APP_BINARY_NAME: &str = "cartela";

/// Storage key under which the full card list is persisted.
///
/// Kept identical to the historical key so existing saved data keeps
/// loading across versions.
pub const STORAGE_KEY: &str = "@abisinya_bingo_data";

/// Lowest cartela number a user can add.
pub const MIN_CARTELA_NUMBER: u32 = 1;

/// Highest cartela number a user can add.
pub const MAX_CARTELA_NUMBER: u32 = 2000;

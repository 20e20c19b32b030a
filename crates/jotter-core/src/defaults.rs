//! Centralized default constants for jotter.
//!
//! **This module is the single source of truth** for all shared default
//! values. The store and web crates reference these constants instead of
//! defining their own magic literals.

// =============================================================================
// NOTE FIELDS
// =============================================================================

/// Title assigned when a note is created without one (or with an empty one).
pub const DEFAULT_TITLE: &str = "Untitled";

/// Color label assigned when a note is created without one.
pub const DEFAULT_COLOR: &str = "default";

/// Delimiter for the single-string tag input form.
pub const TAG_DELIMITER: char = ',';

// =============================================================================
// SERVER
// =============================================================================

/// Default HTTP server port.
pub const SERVER_PORT: u16 = 3000;

/// Default CORS max-age in seconds (1 hour).
pub const CORS_MAX_AGE_SECS: u64 = 3600;

/// Maximum request body size in bytes (1 MB; notes are short text).
pub const MAX_BODY_SIZE_BYTES: usize = 1024 * 1024;

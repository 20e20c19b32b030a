//! Structured logging schema and field name constants for jotter.
//!
//! All crates use these constants for consistent structured logging fields,
//! so log aggregation tools can query by standardized names across the
//! store and web layers.
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | ERROR | Degraded service, requires operator attention |
//! | WARN  | Recoverable issue, automatic fallback applied |
//! | INFO  | Lifecycle events (startup, shutdown), store mutations |
//! | DEBUG | Decision points, request bodies, config choices |
//! | TRACE | Per-item iteration, high-volume data |

// ─── Identity fields ───────────────────────────────────────────────────────

/// Correlation ID propagated per request. Format: UUIDv7 (time-ordered).
pub const REQUEST_ID: &str = "request_id";

/// Logical operation name.
/// Values: "insert", "update", "delete", "bulk_delete"
pub const OPERATION: &str = "op";

// ─── Entity fields ─────────────────────────────────────────────────────────

/// Note UUID being operated on.
pub const NOTE_ID: &str = "note_id";

/// Note title at the time of the mutation.
pub const TITLE: &str = "title";

/// Pinned state at the time of the mutation.
pub const PINNED: &str = "pinned";

// ─── Measurement fields ────────────────────────────────────────────────────

/// Number of notes removed by a delete or bulk delete.
pub const DELETED_COUNT: &str = "deleted_count";

/// Collection size after a mutation.
pub const TOTAL_COUNT: &str = "total_count";

// ─── Outcome fields ────────────────────────────────────────────────────────

/// Error message when an operation fails.
pub const ERROR_MSG: &str = "error";

//! Display-time age formatting for note timestamps.
//!
//! Dashboard cards show how long ago a note was edited rather than the raw
//! timestamp. The label is computed from the difference between "now" and
//! the note's `updated_at`, truncated to whole hours (then whole days):
//!
//! | Age | Label |
//! |-----|-------|
//! | under 1 hour | `Just now` |
//! | 1–23 hours | `Edited Nh ago` |
//! | exactly 1 day | `Edited yesterday` |
//! | 2–6 days | `Edited N days ago` |
//! | 7 days and up | `M/D/YYYY` |
//!
//! Timestamps in the future land in the `Just now` bucket. "Now" is a
//! parameter so the buckets can be pinned in tests.

use chrono::{DateTime, Utc};

/// Format a timestamp as a relative-age label for display.
pub fn relative_age(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let hours = (now - timestamp).num_hours();
    if hours < 1 {
        return "Just now".to_string();
    }
    if hours < 24 {
        return format!("Edited {}h ago", hours);
    }
    let days = hours / 24;
    if days == 1 {
        return "Edited yesterday".to_string();
    }
    if days < 7 {
        return format!("Edited {} days ago", days);
    }
    timestamp.format("%-m/%-d/%Y").to_string()
}

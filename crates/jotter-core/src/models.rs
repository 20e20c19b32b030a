//! Core data models for jotter.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::defaults;

// =============================================================================
// NOTE
// =============================================================================

/// A single user-authored note.
///
/// This is the wire shape as well as the stored record: fields serialize
/// with camelCase names (`createdAt`/`updatedAt`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Unique identifier, generated at creation, immutable.
    pub id: Uuid,
    /// Display title. Defaults to "Untitled" at creation.
    pub title: String,
    /// Body text. Defaults to empty at creation.
    pub content: String,
    /// Ordered labels attached to the note.
    pub tags: Vec<String>,
    /// UI theme label (free-form). Defaults to "default".
    pub color: String,
    /// Pinned notes surface in a separate, always-first dashboard view.
    pub pinned: bool,
    /// Set at creation (caller-supplied value honored), never changed after.
    pub created_at: DateTime<Utc>,
    /// Advanced to "now" on every successful update.
    pub updated_at: DateTime<Utc>,
}

/// The two derived dashboard views, computed at read time.
///
/// `pinned_notes` keeps storage order; `recent_notes` holds the unpinned
/// remainder sorted by `updated_at` descending (stable, so ties keep their
/// relative storage order). The views are disjoint and cover all notes.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub pinned_notes: Vec<Note>,
    pub recent_notes: Vec<Note>,
}

// =============================================================================
// FLEXIBLE INPUT FIELDS
// =============================================================================

/// Tags as accepted on the wire: a JSON array of labels, or one
/// comma-delimited string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TagsInput {
    List(Vec<String>),
    Delimited(String),
}

impl TagsInput {
    /// Normalize to the stored form.
    ///
    /// A list is taken verbatim. A delimited string is split on commas with
    /// each label trimmed and empty labels dropped; the same rule applies on
    /// create and update.
    pub fn normalize(self) -> Vec<String> {
        match self {
            TagsInput::List(tags) => tags,
            TagsInput::Delimited(raw) => raw
                .split(defaults::TAG_DELIMITER)
                .map(|tag| tag.trim().to_string())
                .filter(|tag| !tag.is_empty())
                .collect(),
        }
    }

    /// True for the empty delimited string, which update treats as "not
    /// provided" (prior tags preserved). An empty list is not empty input:
    /// it explicitly clears the tags.
    pub fn is_blank(&self) -> bool {
        matches!(self, TagsInput::Delimited(raw) if raw.is_empty())
    }
}

/// Pinned flag as accepted on the wire: a JSON boolean, or the literal
/// strings "true"/"false". Any other string is treated as false.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PinnedInput {
    Flag(bool),
    Literal(String),
}

impl PinnedInput {
    pub fn as_bool(&self) -> bool {
        match self {
            PinnedInput::Flag(value) => *value,
            PinnedInput::Literal(text) => text == "true",
        }
    }
}

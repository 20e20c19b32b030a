//! Core traits for jotter abstractions.
//!
//! These traits define the interfaces that concrete implementations
//! must satisfy, enabling pluggable backends and testability.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::defaults;
use crate::error::Result;
use crate::models::*;

// =============================================================================
// NOTE REPOSITORY
// =============================================================================

/// Request for creating a note.
///
/// Every field is optional; absent or empty fields fall back to the
/// documented defaults when the note is built. The wire shape and the
/// domain request coincide, so this deserializes directly from a JSON body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNoteRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<TagsInput>,
    pub color: Option<String>,
    pub pinned: Option<PinnedInput>,
    /// Honored verbatim when supplied; otherwise "now".
    pub created_at: Option<DateTime<Utc>>,
    /// Honored verbatim when supplied; otherwise "now".
    pub updated_at: Option<DateTime<Utc>>,
}

impl CreateNoteRequest {
    /// Build the stored record, running every per-field normalization once.
    ///
    /// Never fails: absent or empty optional fields are defaulted, the
    /// flexible tag/pinned forms are coerced, and caller-supplied timestamps
    /// are trusted verbatim.
    pub fn into_note(self, now: DateTime<Utc>) -> Note {
        Note {
            id: Uuid::new_v4(),
            title: self
                .title
                .filter(|title| !title.is_empty())
                .unwrap_or_else(|| defaults::DEFAULT_TITLE.to_string()),
            content: self.content.unwrap_or_default(),
            tags: self.tags.map(TagsInput::normalize).unwrap_or_default(),
            color: self
                .color
                .filter(|color| !color.is_empty())
                .unwrap_or_else(|| defaults::DEFAULT_COLOR.to_string()),
            pinned: self.pinned.map(|pinned| pinned.as_bool()).unwrap_or(false),
            created_at: self.created_at.unwrap_or(now),
            updated_at: self.updated_at.unwrap_or(now),
        }
    }
}

/// Request for a partial note update.
///
/// An empty string is indistinguishable from an omitted field and leaves
/// the prior value in place, so this request cannot clear `title`,
/// `content`, or `color` to empty. Timestamps are not accepted here:
/// `created_at` is immutable and `updated_at` is server-driven.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNoteRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<TagsInput>,
    pub color: Option<String>,
    pub pinned: Option<PinnedInput>,
}

impl UpdateNoteRequest {
    /// Apply each provided field to the note and advance `updated_at`.
    ///
    /// The timestamp advances unconditionally, even when no field actually
    /// changes. An explicit `pinned` value (including false) overrides; an
    /// explicit empty tag list clears tags, while an empty delimited string
    /// counts as "not provided".
    pub fn apply(self, note: &mut Note, now: DateTime<Utc>) {
        if let Some(title) = self.title.filter(|title| !title.is_empty()) {
            note.title = title;
        }
        if let Some(content) = self.content.filter(|content| !content.is_empty()) {
            note.content = content;
        }
        if let Some(tags) = self.tags.filter(|tags| !tags.is_blank()) {
            note.tags = tags.normalize();
        }
        if let Some(color) = self.color.filter(|color| !color.is_empty()) {
            note.color = color;
        }
        if let Some(pinned) = &self.pinned {
            note.pinned = pinned.as_bool();
        }
        note.updated_at = now;
    }
}

/// Request for removing many notes in one operation.
///
/// When `all` is set the whole collection is cleared and `ids` is ignored.
/// Otherwise `ids` is required; ids with no matching note are skipped
/// without error.
#[derive(Debug, Clone, Default)]
pub struct BulkDeleteRequest {
    pub all: bool,
    pub ids: Option<Vec<Uuid>>,
}

/// Repository for note CRUD operations and the dashboard split.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// Insert a new note built from the request, returning the stored record.
    async fn insert(&self, req: CreateNoteRequest) -> Result<Note>;

    /// Fetch a note by ID.
    async fn fetch(&self, id: Uuid) -> Result<Note>;

    /// List every note, unfiltered, in storage order.
    async fn list(&self) -> Result<Vec<Note>>;

    /// Compute the dashboard split: pinned notes in storage order, unpinned
    /// notes sorted by most recent update.
    async fn dashboard(&self) -> Result<DashboardView>;

    /// Apply a partial update to a note.
    async fn update(&self, id: Uuid, req: UpdateNoteRequest) -> Result<Note>;

    /// Remove a note, returning the removed count (0 or 1). A missing id is
    /// not an error at this level.
    async fn delete(&self, id: Uuid) -> Result<usize>;

    /// Remove many notes (or all of them), returning the count removed.
    async fn bulk_delete(&self, req: BulkDeleteRequest) -> Result<usize>;

    /// Current number of notes.
    async fn count(&self) -> Result<usize>;
}

//! In-memory note repository implementation.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use jotter_core::{
    BulkDeleteRequest, CreateNoteRequest, DashboardView, Error, Note, NoteRepository, Result,
    UpdateNoteRequest,
};

/// In-memory implementation of NoteRepository.
///
/// Notes live in a single `Vec` behind a read/write lock: storage order is
/// insertion order, updates mutate records in place, and deletions compact
/// the vector without reordering survivors. Every operation is a linear
/// scan bounded by collection size; the lock is never held across an await.
pub struct MemoryNoteRepository {
    notes: RwLock<Vec<Note>>,
}

impl MemoryNoteRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self {
            notes: RwLock::new(Vec::new()),
        }
    }

    /// Create a repository preloaded with the given notes, in order.
    pub fn with_notes(notes: Vec<Note>) -> Self {
        Self {
            notes: RwLock::new(notes),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Note>>> {
        self.notes
            .read()
            .map_err(|_| Error::Internal("note store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Note>>> {
        self.notes
            .write()
            .map_err(|_| Error::Internal("note store lock poisoned".to_string()))
    }
}

impl Default for MemoryNoteRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NoteRepository for MemoryNoteRepository {
    async fn insert(&self, req: CreateNoteRequest) -> Result<Note> {
        let note = req.into_note(Utc::now());
        let mut notes = self.write()?;
        notes.push(note.clone());
        info!(
            op = "insert",
            note_id = %note.id,
            title = %note.title,
            pinned = note.pinned,
            total_count = notes.len(),
            "Created note"
        );
        Ok(note)
    }

    async fn fetch(&self, id: Uuid) -> Result<Note> {
        let notes = self.read()?;
        notes
            .iter()
            .find(|note| note.id == id)
            .cloned()
            .ok_or(Error::NoteNotFound(id))
    }

    async fn list(&self) -> Result<Vec<Note>> {
        Ok(self.read()?.clone())
    }

    async fn dashboard(&self) -> Result<DashboardView> {
        let notes = self.read()?;
        let pinned_notes: Vec<Note> = notes.iter().filter(|note| note.pinned).cloned().collect();
        let mut recent_notes: Vec<Note> =
            notes.iter().filter(|note| !note.pinned).cloned().collect();
        // sort_by is stable, so equal timestamps keep their storage order
        recent_notes.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(DashboardView {
            pinned_notes,
            recent_notes,
        })
    }

    async fn update(&self, id: Uuid, req: UpdateNoteRequest) -> Result<Note> {
        let mut notes = self.write()?;
        let note = notes
            .iter_mut()
            .find(|note| note.id == id)
            .ok_or(Error::NoteNotFound(id))?;
        req.apply(note, Utc::now());
        info!(
            op = "update",
            note_id = %note.id,
            title = %note.title,
            pinned = note.pinned,
            "Updated note"
        );
        Ok(note.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<usize> {
        let mut notes = self.write()?;
        let before = notes.len();
        notes.retain(|note| note.id != id);
        let deleted = before - notes.len();
        if deleted > 0 {
            info!(op = "delete", note_id = %id, deleted_count = deleted, "Deleted note");
        }
        Ok(deleted)
    }

    async fn bulk_delete(&self, req: BulkDeleteRequest) -> Result<usize> {
        let mut notes = self.write()?;
        if req.all {
            let deleted = notes.len();
            notes.clear();
            info!(op = "bulk_delete", deleted_count = deleted, "Deleted all notes");
            return Ok(deleted);
        }
        let ids = req
            .ids
            .ok_or_else(|| Error::InvalidInput("ids array required".to_string()))?;
        let mut deleted = 0;
        for id in ids {
            if let Some(index) = notes.iter().position(|note| note.id == id) {
                notes.remove(index);
                deleted += 1;
            }
        }
        info!(op = "bulk_delete", deleted_count = deleted, "Bulk deleted notes");
        Ok(deleted)
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.read()?.len())
    }
}

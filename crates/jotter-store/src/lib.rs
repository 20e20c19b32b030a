//! # jotter-store
//!
//! In-memory storage layer for jotter.
//!
//! This crate provides:
//! - The note repository implementation backed by a locked `Vec`
//! - The starter notes loaded into a fresh store
//! - The combined `Store` context handed to the HTTP layer
//!
//! ## Example
//!
//! ```rust,ignore
//! use jotter_store::{CreateNoteRequest, NoteRepository, Store};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = Store::with_starter_notes();
//!
//!     let note = store.notes.insert(CreateNoteRequest {
//!         title: Some("Hello, world!".to_string()),
//!         ..Default::default()
//!     }).await?;
//!
//!     println!("Created note: {}", note.id);
//!     Ok(())
//! }
//! ```
pub mod notes;
pub mod seed;

// Re-export core types
pub use jotter_core::*;

pub use notes::MemoryNoteRepository;
pub use seed::starter_notes;

/// Combined store context handed to the HTTP layer.
pub struct Store {
    /// Note repository for CRUD and dashboard queries.
    pub notes: MemoryNoteRepository,
}

impl Store {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            notes: MemoryNoteRepository::new(),
        }
    }

    /// Create a store preloaded with the starter notes.
    pub fn with_starter_notes() -> Self {
        Self {
            notes: MemoryNoteRepository::with_notes(seed::starter_notes()),
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

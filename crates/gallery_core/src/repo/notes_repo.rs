//! Notes repository contract and in-memory store.
//!
//! # Responsibility
//! - Hold an ordered list of notes for the lifetime of one owner.
//! - Serialize all access through a single lock.
//!
//! # Invariants
//! - `list` returns notes in insertion order.
//! - A fresh store holds exactly one demo note.
//! - Note ids are unique within a store.

use crate::model::note::{Note, NoteId};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{Mutex, MutexGuard};

pub type NotesRepoResult<T> = Result<T, NotesRepoError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotesRepoError {
    /// A note with this id is already stored.
    Duplicate(NoteId),
}

impl Display for NotesRepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Duplicate(id) => write!(f, "note already exists: {id}"),
        }
    }
}

impl Error for NotesRepoError {}

/// Repository interface for notes.
pub trait NotesRepository {
    fn list(&self) -> Vec<Note>;
    fn get(&self, id: NoteId) -> Option<Note>;
    fn add(&self, note: Note) -> NotesRepoResult<()>;
}

/// Transient notes store. Contents vanish with the value.
#[derive(Debug)]
pub struct InMemoryNotesRepository {
    items: Mutex<Vec<Note>>,
}

impl InMemoryNotesRepository {
    /// Store seeded with the demo note.
    pub fn new() -> Self {
        Self::with_notes(vec![Note::demo()])
    }

    /// Store seeded with caller-provided notes.
    pub fn with_notes(notes: Vec<Note>) -> Self {
        Self {
            items: Mutex::new(notes),
        }
    }

    fn items(&self) -> MutexGuard<'_, Vec<Note>> {
        // A panic mid-push cannot leave a half-written note behind, so a
        // poisoned lock still guards a consistent list.
        self.items
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for InMemoryNotesRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl NotesRepository for InMemoryNotesRepository {
    fn list(&self) -> Vec<Note> {
        self.items().clone()
    }

    fn get(&self, id: NoteId) -> Option<Note> {
        self.items().iter().find(|note| note.id == id).cloned()
    }

    fn add(&self, note: Note) -> NotesRepoResult<()> {
        let mut items = self.items();
        if items.iter().any(|existing| existing.id == note.id) {
            return Err(NotesRepoError::Duplicate(note.id));
        }
        items.push(note);
        Ok(())
    }
}

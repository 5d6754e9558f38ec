//! Note record held by the in-memory notes store.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a note.
pub type NoteId = Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub text: String,
}

impl Note {
    /// Creates a note with a generated id.
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            text: text.into(),
        }
    }

    /// Demo record every fresh store starts with.
    pub fn demo() -> Self {
        Self::new("Hello", "Demo note")
    }
}

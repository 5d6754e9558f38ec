//! Notes use-case service.
//!
//! # Invariants
//! - Titles are trimmed and must not be blank.
//! - Body text is stored verbatim.

use crate::context::AppContext;
use crate::model::note::{Note, NoteId};
use crate::repo::notes_repo::{NotesRepoError, NotesRepository};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, PartialEq, Eq)]
pub enum NotesServiceError {
    /// Title is blank after trim.
    InvalidTitle,
    /// Repository-level failure.
    Repo(NotesRepoError),
}

impl Display for NotesServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTitle => write!(f, "note title must not be blank"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for NotesServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::InvalidTitle => None,
        }
    }
}

impl From<NotesRepoError> for NotesServiceError {
    fn from(value: NotesRepoError) -> Self {
        Self::Repo(value)
    }
}

/// Notes service facade.
pub struct NotesService<R: NotesRepository> {
    repo: R,
    context: AppContext,
}

impl<R: NotesRepository> NotesService<R> {
    pub fn new(repo: R, context: AppContext) -> Self {
        Self { repo, context }
    }

    /// All notes in insertion order.
    pub fn list_notes(&self) -> Vec<Note> {
        self.repo.list()
    }

    pub fn get_note(&self, id: NoteId) -> Option<Note> {
        self.repo.get(id)
    }

    /// Creates and stores one note, returning the stored record.
    pub fn add_note(
        &self,
        title: impl Into<String>,
        text: impl Into<String>,
    ) -> Result<Note, NotesServiceError> {
        let title = normalize_title(title.into())?;
        let note = Note::new(title, text);
        self.repo.add(note.clone())?;

        let params = BTreeMap::from([("note_id".to_string(), note.id.to_string())]);
        self.context.analytics().track("notes.add", &params);
        Ok(note)
    }
}

fn normalize_title(value: String) -> Result<String, NotesServiceError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(NotesServiceError::InvalidTitle);
    }
    Ok(trimmed.to_string())
}

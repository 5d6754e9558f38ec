//! Domain model shared by the interactive state machines and stores.
//!
//! # Responsibility
//! - Define the plain data structures rendered by the host UI.
//! - Keep identity rules in one place (`ItemId`, `NoteId`).
//!
//! # Invariants
//! - Items and notes are identified by a stable UUID.
//! - Committed strokes are never empty.

pub mod item;
pub mod note;
pub mod stroke;

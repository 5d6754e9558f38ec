//! Use-case services over repositories.
//!
//! # Responsibility
//! - Validate input before it reaches a repository.
//! - Emit breadcrumbs and analytics through the injected `AppContext`.

pub mod notes_service;

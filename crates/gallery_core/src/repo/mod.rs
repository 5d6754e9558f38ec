//! Repository contracts and in-memory implementations.
//!
//! # Responsibility
//! - Define record access contracts used by services.
//! - Keep storage details out of service orchestration.
//!
//! # Invariants
//! - Repositories return semantic errors (`Duplicate`) instead of panicking.
//! - No repository persists beyond the owning process.

pub mod notes_repo;

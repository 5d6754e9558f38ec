//! Core logic for the UI feature gallery.
//! Host screens render; this crate owns the state they render.

pub mod config;
pub mod context;
pub mod drawing;
pub mod fetch;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod transfer;

pub use config::{ConfigError, CoreConfig, DrawingConfig};
pub use context::{
    Analytics, AppContext, EventLogger, FeatureFlags, LogAnalytics, LogFacadeLogger,
};
pub use drawing::{CaptureState, StrokeCapture};
pub use fetch::{
    decode_sample_response, FetchController, FetchError, LoadState, RawResponse, SampleFetcher,
    SampleGetResponse, SAMPLE_GET_URL,
};
pub use logging::{default_log_level, init_logging, logging_status, LogSettings, LoggingError};
pub use model::item::{sample_left, sample_right, DraggableItem, ItemId, ItemTag};
pub use model::note::{Note, NoteId};
pub use model::stroke::{Point, Stroke};
pub use repo::notes_repo::{
    InMemoryNotesRepository, NotesRepoError, NotesRepoResult, NotesRepository,
};
pub use service::notes_service::{NotesService, NotesServiceError};
pub use transfer::{Column, DragGesture, TransferListPair};

/// Minimal health-check API for host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

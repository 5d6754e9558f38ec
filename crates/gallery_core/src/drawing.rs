//! Freehand stroke capture.
//!
//! # Responsibility
//! - Accumulate pointer samples into the in-progress stroke.
//! - Commit finished strokes to an append-only history.
//!
//! # Invariants
//! - Committed strokes are non-empty and never change after commit.
//! - Committing an empty active stroke is a no-op.
//! - `clear_all` always ends in `Idle` with empty history.

use crate::config::DrawingConfig;
use crate::model::stroke::{Point, Stroke};
use log::debug;

/// Capture lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureState {
    /// No points in the active stroke.
    Idle,
    /// Active stroke has at least one point.
    Drawing,
}

#[derive(Debug, Default)]
pub struct StrokeCapture {
    committed: Vec<Stroke>,
    active: Vec<Point>,
    max_points_per_stroke: Option<usize>,
}

impl StrokeCapture {
    /// Unbounded capture.
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture honoring configured limits.
    pub fn with_config(config: &DrawingConfig) -> Self {
        Self {
            max_points_per_stroke: config.max_points_per_stroke,
            ..Self::default()
        }
    }

    pub fn committed_strokes(&self) -> &[Stroke] {
        &self.committed
    }

    pub fn active_stroke(&self) -> &[Point] {
        &self.active
    }

    pub fn state(&self) -> CaptureState {
        if self.active.is_empty() {
            CaptureState::Idle
        } else {
            CaptureState::Drawing
        }
    }

    /// Appends one pointer sample to the active stroke.
    ///
    /// With a point cap configured, samples past the cap are dropped.
    pub fn append_point(&mut self, point: impl Into<Point>) {
        if let Some(cap) = self.max_points_per_stroke {
            if self.active.len() >= cap {
                debug!("event=append_point module=drawing status=dropped reason=point_cap cap={cap}");
                return;
            }
        }
        self.active.push(point.into());
    }

    /// Moves the active stroke into history.
    ///
    /// Returns `false` (and records nothing) when the active stroke is empty,
    /// e.g. a tap without drag.
    pub fn commit_active_stroke(&mut self) -> bool {
        match Stroke::from_points(std::mem::take(&mut self.active)) {
            Some(stroke) => {
                self.committed.push(stroke);
                true
            }
            None => false,
        }
    }

    /// Drops all history and the active stroke. No undo.
    pub fn clear_all(&mut self) {
        self.committed.clear();
        self.active.clear();
    }
}

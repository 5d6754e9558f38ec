//! Freehand stroke model.

use serde::{Deserialize, Serialize};

/// 2-D point in canvas-local logical coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Committed polyline.
///
/// Only constructible from a non-empty point list, and exposes no mutators,
/// so a committed stroke stays immutable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stroke {
    points: Vec<Point>,
}

impl Stroke {
    /// Builds a stroke from captured points. Returns `None` for an empty list.
    pub fn from_points(points: Vec<Point>) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        Some(Self { points })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the stroke has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Point {
        self.points[0]
    }
}

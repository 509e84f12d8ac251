//! Stroke model: the polyline recorded by the input layer

use serde::{Deserialize, Serialize};

use super::Gesture;

/// A sampled pointer position
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
    /// Milliseconds since the stroke started
    pub time: u32,
}

impl Point {
    pub fn new(x: i32, y: i32, time: u32) -> Self {
        Self { x, y, time }
    }
}

/// A recorded stroke
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Stroke {
    pub points: Vec<Point>,
}

impl Stroke {
    /// Strokes that fit inside a box this size are treated as clicks
    pub const TRIVIAL_EXTENT: i32 = 16;

    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Width and height of the bounding box
    pub fn extent(&self) -> (i32, i32) {
        let Some(first) = self.points.first() else {
            return (0, 0);
        };
        let (mut min_x, mut max_x, mut min_y, mut max_y) = (first.x, first.x, first.y, first.y);
        for p in &self.points[1..] {
            min_x = min_x.min(p.x);
            max_x = max_x.max(p.x);
            min_y = min_y.min(p.y);
            max_y = max_y.max(p.y);
        }
        (max_x - min_x, max_y - min_y)
    }
}

impl Gesture for Stroke {
    fn is_trivial(&self) -> bool {
        if self.points.len() < 2 {
            return true;
        }
        let (w, h) = self.extent();
        w < Self::TRIVIAL_EXTENT && h < Self::TRIVIAL_EXTENT
    }
}

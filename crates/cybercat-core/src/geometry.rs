//! Axis-aligned rectangles and overlap testing.
//!
//! Collision works on plain values derived from an entity's position and a
//! fixed size, never on anything the renderer knows about.

use glam::DVec2;

use crate::types::Position;

/// Closed axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: DVec2,
    pub max: DVec2,
}

impl Rect {
    /// Box from its top-left corner and extent. Negative extents are
    /// normalized so `min <= max` always holds.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        let a = DVec2::new(x, y);
        let b = DVec2::new(x + width, y + height);
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Box whose top-left corner sits at `pos`.
    pub fn from_position(pos: Position, size: DVec2) -> Self {
        Self::new(pos.x, pos.y, size.x, size.y)
    }

    /// Box centred on `center`.
    pub fn centered(center: Position, size: DVec2) -> Self {
        let half = size * 0.5;
        Self::new(center.x - half.x, center.y - half.y, size.x, size.y)
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Position {
        Position::from((self.min + self.max) * 0.5)
    }
}

/// True iff the closed rectangles overlap on both axes. Touching edges count.
pub fn intersects(a: &Rect, b: &Rect) -> bool {
    !(a.max.x < b.min.x || a.min.x > b.max.x || a.max.y < b.min.y || a.min.y > b.max.y)
}

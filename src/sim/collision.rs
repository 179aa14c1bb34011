//! Axis-aligned bounding boxes and overlap testing
//!
//! Everything that can collide in this game is an axis-aligned box: each
//! obstacle's square footprint and the box enclosing the player's circle.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box in board space
///
/// Board coordinates have the origin at the top-left corner with y growing
/// downward, so `min` is the top-left corner and `max` the bottom-right.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Box covering a square footprint from its top-left corner
    pub fn from_corner_size(corner: Vec2, size: f32) -> Self {
        Self {
            min: corner,
            max: corner + Vec2::splat(size),
        }
    }

    /// Box enclosing a circle
    pub fn from_center_radius(center: Vec2, radius: f32) -> Self {
        Self {
            min: center - Vec2::splat(radius),
            max: center + Vec2::splat(radius),
        }
    }

    /// Strict-inequality overlap test
    ///
    /// All four comparisons are strict: boxes that merely share an edge or
    /// a corner do not overlap.
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

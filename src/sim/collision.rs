//! Collision detection
//!
//! Everything is an axis-aligned box. The plane is drawn rotated but its
//! hitbox never rotates.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned box anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Strict overlap: boxes that only share an edge do not intersect
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let (a_max, b_max) = (self.max(), other.max());
        self.min.x < b_max.x && a_max.x > other.min.x && self.min.y < b_max.y && a_max.y > other.min.y
    }
}

/// Check whether a plane at `y` with the given hitbox has left the playfield
#[inline]
pub fn out_of_bounds(y: f32, hitbox: f32, playfield_height: f32) -> bool {
    y < 0.0 || y > playfield_height - hitbox
}

/// Index of the first box in `others` overlapping `hitbox`
pub fn first_overlap(hitbox: &Aabb, others: impl IntoIterator<Item = Aabb>) -> Option<usize> {
    others.into_iter().position(|b| hitbox.overlaps(&b))
}

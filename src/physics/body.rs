//! Physics domain: the fighter's collision footprint.

use bevy::prelude::*;

use crate::stage::Platform;

/// Tolerance for edge-equality comparisons (bottom resting on a top,
/// body edge flush with a platform edge).
///
/// Positions are clamped to exact platform edges, so this only absorbs
/// accumulated float error; it is well below a single frame of gravity.
pub const EDGE_EPSILON: f32 = 1e-3;

/// Axis-aligned footprint stored as bottom-left corner plus size.
///
/// Keeping the size separate means writing `bottom = top` never perturbs the
/// height, so a resting body stays exactly flush frame after frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub position: Vec2,
    pub size: Vec2,
}

impl Body {
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self { position, size }
    }

    /// Body whose bottom edge is centred on `foot`.
    pub fn from_midbottom(foot: Vec2, size: Vec2) -> Self {
        Self::new(Vec2::new(foot.x - size.x * 0.5, foot.y), size)
    }

    pub fn left(&self) -> f32 {
        self.position.x
    }

    pub fn right(&self) -> f32 {
        self.position.x + self.size.x
    }

    pub fn bottom(&self) -> f32 {
        self.position.y
    }

    pub fn top(&self) -> f32 {
        self.position.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.position + self.size * 0.5
    }

    pub fn set_left(&mut self, left: f32) {
        self.position.x = left;
    }

    pub fn set_right(&mut self, right: f32) {
        self.position.x = right - self.size.x;
    }

    pub fn set_bottom(&mut self, bottom: f32) {
        self.position.y = bottom;
    }

    pub fn set_top(&mut self, top: f32) {
        self.position.y = top - self.size.y;
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.position += delta;
    }

    pub fn rect(&self) -> Rect {
        Rect::from_corners(self.position, self.position + self.size)
    }

    /// Strictly positive horizontal overlap with a platform's span.
    pub fn overlaps_x(&self, platform: &Platform) -> bool {
        overlap_len(self.left(), self.right(), platform.left(), platform.right()) > EDGE_EPSILON
    }

    /// Strictly positive vertical overlap with a platform's span.
    pub fn overlaps_y(&self, platform: &Platform) -> bool {
        overlap_len(self.bottom(), self.top(), platform.bottom(), platform.top()) > EDGE_EPSILON
    }

    /// Positive-area overlap with a platform's interior.
    pub fn overlaps_interior(&self, platform: &Platform) -> bool {
        self.overlaps_x(platform) && self.overlaps_y(platform)
    }

    /// Bottom edge rests on the platform's top within tolerance.
    pub fn rests_on(&self, platform: &Platform) -> bool {
        (self.bottom() - platform.top()).abs() <= EDGE_EPSILON && self.overlaps_x(platform)
    }
}

/// Length of the overlap of two 1D intervals (negative when apart).
pub fn overlap_len(a_min: f32, a_max: f32, b_min: f32, b_max: f32) -> f32 {
    a_max.min(b_max) - a_min.max(b_min)
}

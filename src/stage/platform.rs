//! Stage domain: platform geometry and classification.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Stable identity of a platform within its stage (its index in the layout).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize, Reflect)]
pub struct PlatformId(pub u16);

/// How a platform collides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, Reflect)]
pub enum PlatformKind {
    /// Blocks from every side (main stage).
    #[default]
    Solid,
    /// Blocks only landings from above; can be dropped through.
    Thin,
}

/// Axis-aligned platform rectangle, immutable for the lifetime of a stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Platform {
    pub id: PlatformId,
    pub rect: Rect,
    pub kind: PlatformKind,
}

impl Platform {
    /// Build a platform from its bottom-left corner and size.
    ///
    /// Panics on a zero-area rectangle: a degenerate platform is a stage
    /// authoring defect, not something the resolver can recover from.
    pub fn new(id: PlatformId, position: Vec2, size: Vec2, kind: PlatformKind) -> Self {
        assert!(
            size.x > 0.0 && size.y > 0.0,
            "platform {:?} has zero area ({} x {})",
            id,
            size.x,
            size.y
        );
        Self {
            id,
            rect: Rect::from_corners(position, position + size),
            kind,
        }
    }

    pub fn solid(id: u16, position: Vec2, size: Vec2) -> Self {
        Self::new(PlatformId(id), position, size, PlatformKind::Solid)
    }

    pub fn thin(id: u16, position: Vec2, size: Vec2) -> Self {
        Self::new(PlatformId(id), position, size, PlatformKind::Thin)
    }

    pub fn is_thin(&self) -> bool {
        self.kind == PlatformKind::Thin
    }

    pub fn is_solid(&self) -> bool {
        self.kind == PlatformKind::Solid
    }

    pub fn left(&self) -> f32 {
        self.rect.min.x
    }

    pub fn right(&self) -> f32 {
        self.rect.max.x
    }

    pub fn bottom(&self) -> f32 {
        self.rect.min.y
    }

    pub fn top(&self) -> f32 {
        self.rect.max.y
    }

    pub fn width(&self) -> f32 {
        self.rect.width()
    }
}

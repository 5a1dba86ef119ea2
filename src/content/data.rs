//! Data definitions for RON content files.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::stage::PlatformKind;

/// Wrapper for RON list files with a schema version.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataFile<T> {
    pub schema_version: u32,
    pub items: Vec<T>,
}

// ============================================================================
// Stages (stages.ron)
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct StageDef {
    pub id: String,
    pub name: String,
    pub platforms: Vec<PlatformDef>,
    /// Bottom-centre spawn positions, one per player slot.
    #[serde(default)]
    pub spawn_points: Vec<[f32; 2]>,
}

/// A platform given by its bottom-left corner and size.
#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct PlatformDef {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    #[serde(default)]
    pub kind: PlatformKind,
}

impl PlatformDef {
    pub fn solid(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            kind: PlatformKind::Solid,
        }
    }

    pub fn thin(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            kind: PlatformKind::Thin,
            ..Self::solid(x, y, width, height)
        }
    }
}

impl Default for StageDef {
    /// The battlefield-style stage: one wide solid base and two thin side
    /// platforms on a 960 x 540 field.
    fn default() -> Self {
        Self {
            id: "stage_twin_perch".to_string(),
            name: "Twin Perch".to_string(),
            platforms: vec![
                PlatformDef::solid(80.0, 50.0, 800.0, 80.0),
                PlatformDef::thin(205.0, 205.0, 150.0, 20.0),
                PlatformDef::thin(605.0, 205.0, 150.0, 20.0),
            ],
            spawn_points: vec![[280.0, 285.0], [680.0, 285.0]],
        }
    }
}

// ============================================================================
// Gameplay defaults (gameplay_defaults.ron)
// ============================================================================

/// Which stage to load and how many fighters to spawn on it.
#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct GameplayDefaults {
    pub schema_version: u32,
    pub stage_id: String,
    pub player_count: u8,
}

impl Default for GameplayDefaults {
    fn default() -> Self {
        Self {
            schema_version: 1,
            stage_id: "stage_twin_perch".to_string(),
            player_count: 2,
        }
    }
}

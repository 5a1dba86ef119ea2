//! Stage domain: the platform set every fighter is resolved against.

mod platform;

#[cfg(test)]
mod tests;

pub use platform::{Platform, PlatformId, PlatformKind};

use bevy::prelude::*;

use crate::content::{PlatformDef, StageDef};

/// The platforms of the active stage plus its spawn points.
///
/// Shared read-only by every fighter within a frame.
#[derive(Resource, Debug, Clone)]
pub struct StageLayout {
    pub name: String,
    pub platforms: Vec<Platform>,
    pub spawn_points: Vec<Vec2>,
}

impl StageLayout {
    /// Build the layout from its data definition, assigning platform ids in
    /// declaration order.
    pub fn from_def(def: &StageDef) -> Self {
        let platforms = def
            .platforms
            .iter()
            .enumerate()
            .map(|(index, platform)| platform_from_def(index, platform))
            .collect();

        Self {
            name: def.name.clone(),
            platforms,
            spawn_points: def
                .spawn_points
                .iter()
                .map(|[x, y]| Vec2::new(*x, *y))
                .collect(),
        }
    }

    pub fn get(&self, id: PlatformId) -> Option<&Platform> {
        self.platforms.iter().find(|platform| platform.id == id)
    }

    /// Spawn point for a player slot, wrapping around when there are more
    /// players than points.
    pub fn spawn_point(&self, slot: usize) -> Vec2 {
        if self.spawn_points.is_empty() {
            return Vec2::ZERO;
        }
        self.spawn_points[slot % self.spawn_points.len()]
    }
}

impl Default for StageLayout {
    fn default() -> Self {
        Self::from_def(&StageDef::default())
    }
}

fn platform_from_def(index: usize, def: &PlatformDef) -> Platform {
    let id = u16::try_from(index)
        .unwrap_or_else(|_| panic!("platform index {} does not fit a PlatformId", index));
    Platform::new(
        PlatformId(id),
        Vec2::new(def.x, def.y),
        Vec2::new(def.width, def.height),
        def.kind,
    )
}

pub struct StagePlugin;

impl Plugin for StagePlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<PlatformKind>()
            .register_type::<PlatformId>()
            .init_resource::<StageLayout>();
    }
}

//! Fixed-step simulation core for a 2D platform fighter: stage platforms,
//! kinematic resolution, ledge guarding, the character state machine and
//! its dodge and shield policy.

pub mod combat;
pub mod content;
pub mod core;
#[cfg(feature = "dev-tools")]
pub mod debug;
pub mod fighter;
pub mod physics;
pub mod stage;

#[cfg(test)]
mod tests;

use bevy::prelude::*;

/// Everything the simulation needs, in dependency order.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            core::CorePlugin,
            stage::StagePlugin,
            content::ContentPlugin,
            fighter::FighterPlugin,
            combat::CombatPlugin,
        ));

        #[cfg(feature = "dev-tools")]
        app.add_plugins(debug::DebugPlugin);
    }
}

//! Combat domain: attack hitboxes, hits, shields and knockback.

mod components;
mod events;
mod hits;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{AttackHitbox, Hit};
pub use events::HitLanded;
pub use hits::{HitOutcome, receive_hit};

use bevy::prelude::*;

use crate::core::{SimulationSet, simulation_active};

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<HitLanded>().add_systems(
            Update,
            (
                systems::spawn_attack_hitboxes,
                systems::apply_hitboxes,
                systems::expire_hitboxes,
            )
                .chain()
                .in_set(SimulationSet::Combat)
                .run_if(simulation_active),
        );
    }
}

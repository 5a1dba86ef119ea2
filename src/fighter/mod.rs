//! Fighter domain: per-character state machine, dodge and shield policy,
//! and the fixed-step update that ties them to the physics resolver.

mod actions;
mod components;
mod dodge;
mod events;
mod fsm;
mod input;
mod resources;
mod systems;
mod update;


pub use actions::{AttackKind, break_shield};
pub use components::{DodgeKind, DodgeTracker, Facing, Fighter, ShieldState, StateView};
pub use dodge::{classify_dodge, drop_through_intent, gravity_suspended};
pub use events::{ActionStateChanged, AttackStarted, DroppedThrough, FighterLanded};
pub use fsm::{ActionState, GuardContext, StateChange, StateMachine, Transition, transitions};
pub use input::{Buttons, FighterInput, InputFrame};
pub use resources::{AttackProfile, FighterTuning};
pub use systems::{attack_hitbox, spawn_fighter};
pub use update::FrameReport;

use bevy::prelude::*;

use crate::core::{SimulationSet, simulation_active};

pub struct FighterPlugin;

impl Plugin for FighterPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<ActionState>()
            .register_type::<DodgeKind>()
            .register_type::<Facing>()
            .init_resource::<FighterTuning>()
            .add_message::<ActionStateChanged>()
            .add_message::<FighterLanded>()
            .add_message::<DroppedThrough>()
            .add_message::<AttackStarted>()
            .add_systems(
                Update,
                systems::update_fighters
                    .in_set(SimulationSet::Fighters)
                    .run_if(simulation_active),
            )
            .add_systems(
                Update,
                systems::sync_fighter_transforms.in_set(SimulationSet::Present),
            );
    }
}

//! Core domain: simulation ordering, pause control and match configuration.

mod resources;

pub use resources::{MatchConfig, SimulationFrame, SimulationPaused, simulation_active};

use bevy::prelude::*;

/// Per-frame phases. Inputs are written before fighters advance; combat
/// reads the attacks fighters started; presentation mirrors the result.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    Input,
    Fighters,
    Combat,
    Present,
}

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimulationPaused>()
            .init_resource::<SimulationFrame>()
            .init_resource::<MatchConfig>()
            .configure_sets(
                Update,
                (
                    SimulationSet::Input,
                    SimulationSet::Fighters,
                    SimulationSet::Combat,
                    SimulationSet::Present,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                advance_frame
                    .after(SimulationSet::Combat)
                    .before(SimulationSet::Present)
                    .run_if(simulation_active),
            );
    }
}

fn advance_frame(mut frame: ResMut<SimulationFrame>) {
    frame.0 += 1;
}

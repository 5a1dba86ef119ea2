//! Debug domain: developer tracing for dev-tools builds.
//!
//! Features:
//! - Log state changes, drops and hits as they happen
//! - Dump every fighter's state view as JSON at a fixed frame interval

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::combat::HitLanded;
use crate::core::{SimulationFrame, SimulationSet};
use crate::fighter::{ActionStateChanged, DroppedThrough, Fighter, StateView};
use crate::stage::StageLayout;

/// Resource controlling debug tracing
#[derive(Resource, Debug)]
pub struct DebugState {
    /// Dump state views every this many frames; 0 disables the dump.
    pub trace_every: u64,
    /// Whether to log simulation messages
    pub log_events: bool,
}

impl Default for DebugState {
    fn default() -> Self {
        Self {
            trace_every: 60,
            log_events: true,
        }
    }
}

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>().add_systems(
            Update,
            (log_simulation_events, trace_state_views)
                .chain()
                .in_set(SimulationSet::Present),
        );
    }
}

/// Serialize state views in slot order.
pub fn state_views_json(mut views: Vec<StateView>) -> Result<String, serde_json::Error> {
    views.sort_by_key(|view| view.slot);
    serde_json::to_string(&views)
}

fn log_simulation_events(
    state: Res<DebugState>,
    mut changes: MessageReader<ActionStateChanged>,
    mut drops: MessageReader<DroppedThrough>,
    mut hits: MessageReader<HitLanded>,
    fighters: Query<&Fighter>,
    stage: Res<StageLayout>,
) {
    if !state.log_events {
        return;
    }

    let slot_of = |entity: Entity| fighters.get(entity).map(|fighter| fighter.slot).ok();

    for change in changes.read() {
        debug!(
            "[DEBUG] fighter {:?}: {} -> {}",
            slot_of(change.entity),
            change.from.name(),
            change.to.name()
        );
    }

    for drop in drops.read() {
        let top = stage.get(drop.platform).map(|platform| platform.top());
        debug!(
            "[DEBUG] fighter {:?} dropped through {:?} (top {:?})",
            slot_of(drop.entity),
            drop.platform,
            top
        );
    }

    for hit in hits.read() {
        info!(
            "[DEBUG] fighter {:?} hit fighter {:?}: {:?}",
            slot_of(hit.attacker),
            slot_of(hit.target),
            hit.outcome
        );
    }
}

fn trace_state_views(
    state: Res<DebugState>,
    frame: Res<SimulationFrame>,
    fighters: Query<&Fighter>,
) {
    if state.trace_every == 0 || frame.0 % state.trace_every != 0 {
        return;
    }

    let views = fighters.iter().map(Fighter::view).collect();
    match state_views_json(views) {
        Ok(json) => info!("[DEBUG] frame {} {}", frame.0, json),
        Err(error) => warn!("[DEBUG] failed to serialize state views: {}", error),
    }
}

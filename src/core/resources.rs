//! Core domain: shared resources for pausing and match setup.

use bevy::prelude::*;
use std::collections::HashSet;

/// Resource tracking if the simulation should be paused.
/// The simulation is paused if any source is active.
#[derive(Resource, Debug, Default)]
pub struct SimulationPaused {
    pub sources: HashSet<String>,
}

impl SimulationPaused {
    pub fn is_paused(&self) -> bool {
        !self.sources.is_empty()
    }

    pub fn pause(&mut self, source: impl Into<String>) {
        self.sources.insert(source.into());
    }

    pub fn unpause(&mut self, source: impl Into<String>) {
        self.sources.remove(&source.into());
    }
}

/// Run condition: returns true only when the simulation is not paused
pub fn simulation_active(paused: Res<SimulationPaused>) -> bool {
    !paused.is_paused()
}

/// Number of simulated frames so far.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SimulationFrame(pub u64);

/// Seed for anything random that drives fighters (bot or replay inputs).
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct MatchConfig {
    pub seed: u64,
}

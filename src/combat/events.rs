//! Combat domain: combat-related events.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use super::hits::HitOutcome;

/// A hitbox connected with a fighter.
#[derive(Debug, Clone, Copy)]
pub struct HitLanded {
    pub attacker: Entity,
    pub target: Entity,
    pub outcome: HitOutcome,
}

impl Message for HitLanded {}

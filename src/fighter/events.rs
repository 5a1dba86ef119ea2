//! Fighter domain: messages emitted by the per-frame update.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use super::actions::AttackKind;
use super::fsm::ActionState;
use crate::stage::PlatformId;

#[derive(Debug, Clone, Copy)]
pub struct ActionStateChanged {
    pub entity: Entity,
    pub from: ActionState,
    pub to: ActionState,
}

impl Message for ActionStateChanged {}

/// Touched down after being airborne.
#[derive(Debug, Clone, Copy)]
pub struct FighterLanded {
    pub entity: Entity,
    pub platform: PlatformId,
}

impl Message for FighterLanded {}

#[derive(Debug, Clone, Copy)]
pub struct DroppedThrough {
    pub entity: Entity,
    pub platform: PlatformId,
}

impl Message for DroppedThrough {}

/// An attack began this frame. The hitbox is already placed in world space.
#[derive(Debug, Clone, Copy)]
pub struct AttackStarted {
    pub entity: Entity,
    pub kind: AttackKind,
    pub hitbox: Rect,
    /// +1 launches targets to the right, -1 to the left.
    pub direction: f32,
}

impl Message for AttackStarted {}

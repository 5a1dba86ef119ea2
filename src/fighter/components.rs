//! Fighter domain: the per-character simulation record.

use bevy::prelude::*;
use serde::Serialize;

use super::fsm::{ActionState, GuardContext, StateMachine};
use super::resources::FighterTuning;
use crate::physics::Body;
use crate::stage::PlatformId;

/// Which kind of dodge is in progress. Set when a dodge starts and cleared
/// once its end has been handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect, Serialize)]
pub enum DodgeKind {
    #[default]
    None,
    GroundSpotDodge,
    AirDodge,
    DirectionalDodge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect, Serialize)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DodgeTracker {
    pub timer: u32,
    pub kind: DodgeKind,
    /// One air dodge per airtime; refreshed on landing.
    pub air_dodge_ok: bool,
}

impl DodgeTracker {
    pub fn is_spot_dodge(&self) -> bool {
        self.kind == DodgeKind::GroundSpotDodge
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShieldState {
    /// Shield is requested this frame and conditions allow it.
    pub attempting: bool,
    pub hp: f32,
}

/// One fighter's full simulation state.
///
/// Positions are y-up world units; `body.position` is the bottom-left corner.
#[derive(Component, Debug, Clone)]
pub struct Fighter {
    pub slot: u8,
    pub body: Body,
    pub velocity: Vec2,
    pub on_ground: bool,
    pub drop_platform: Option<PlatformId>,
    pub facing: Facing,
    pub fsm: StateMachine,
    pub dodge: DodgeTracker,
    pub shield: ShieldState,
    pub jumps_remaining: u8,
    pub attack_timer: u32,
    pub hurt_timer: u32,
    pub stun_timer: u32,
    /// Accumulated damage; scales knockback.
    pub percent: f32,
    pub invulnerable: bool,
}

impl Fighter {
    /// A fighter standing with its feet at `foot`.
    pub fn new(slot: u8, foot: Vec2, tuning: &FighterTuning) -> Self {
        Self {
            slot,
            body: Body::from_midbottom(foot, tuning.body_size()),
            velocity: Vec2::ZERO,
            on_ground: false,
            drop_platform: None,
            facing: if slot % 2 == 0 {
                Facing::Right
            } else {
                Facing::Left
            },
            fsm: StateMachine::new(ActionState::Idle),
            dodge: DodgeTracker {
                air_dodge_ok: true,
                ..default()
            },
            shield: ShieldState {
                attempting: false,
                hp: tuning.shield_max_hp,
            },
            jumps_remaining: tuning.max_jumps,
            attack_timer: 0,
            hurt_timer: 0,
            stun_timer: 0,
            percent: 0.0,
            invulnerable: false,
        }
    }

    pub fn state(&self) -> ActionState {
        self.fsm.state()
    }

    /// A hit or shield break is pending or playing out. The state machine
    /// may not have caught up yet, but input is already locked out.
    pub fn in_hitstun(&self) -> bool {
        self.hurt_timer > 0 || self.stun_timer > 0
    }

    pub fn guard_context(&self) -> GuardContext {
        GuardContext {
            on_ground: self.on_ground,
            velocity: self.velocity,
            dodge_timer: self.dodge.timer,
            dodge_kind: self.dodge.kind,
            shield_attempting: self.shield.attempting,
            attack_timer: self.attack_timer,
            hurt_timer: self.hurt_timer,
            stun_timer: self.stun_timer,
        }
    }

    /// Frames left on the timer that bounds the current state, if any.
    pub fn remaining_frames(&self) -> Option<u32> {
        match self.state() {
            ActionState::Dodge => Some(self.dodge.timer),
            ActionState::Attack => Some(self.attack_timer),
            ActionState::Hurt => Some(self.hurt_timer),
            ActionState::Stun => Some(self.stun_timer),
            _ => None,
        }
    }

    /// Read-only snapshot for renderers and debug output.
    pub fn view(&self) -> StateView {
        StateView {
            slot: self.slot,
            state: self.state().name(),
            frames_in_state: self.fsm.frames_in_state(),
            remaining_frames: self.remaining_frames(),
            facing: self.facing,
            on_ground: self.on_ground,
            dodge: self.dodge.kind,
            x: self.body.center().x,
            y: self.body.bottom(),
            vx: self.velocity.x,
            vy: self.velocity.y,
            shield_hp: self.shield.hp,
            percent: self.percent,
            invulnerable: self.invulnerable,
        }
    }
}

/// Serializable per-frame snapshot of a fighter. `x` is the body centre and
/// `y` its feet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateView {
    pub slot: u8,
    pub state: &'static str,
    pub frames_in_state: u32,
    pub remaining_frames: Option<u32>,
    pub facing: Facing,
    pub on_ground: bool,
    pub dodge: DodgeKind,
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub shield_hp: f32,
    pub percent: f32,
    pub invulnerable: bool,
}

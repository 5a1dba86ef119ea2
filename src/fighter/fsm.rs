//! Fighter domain: table-driven action state machine.
//!
//! Each state owns an ordered list of guarded transitions. Guards are pure
//! predicates over a [`GuardContext`] snapshot; the first guard that holds
//! wins. A transition that names the current state is a no-op.

use bevy::prelude::*;
use serde::Serialize;

use super::components::DodgeKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect, Serialize)]
pub enum ActionState {
    #[default]
    Idle,
    Move,
    Jump,
    Fall,
    Shield,
    Dodge,
    Attack,
    Hurt,
    Stun,
}

impl ActionState {
    pub fn name(self) -> &'static str {
        match self {
            ActionState::Idle => "idle",
            ActionState::Move => "move",
            ActionState::Jump => "jump",
            ActionState::Fall => "fall",
            ActionState::Shield => "shield",
            ActionState::Dodge => "dodge",
            ActionState::Attack => "attack",
            ActionState::Hurt => "hurt",
            ActionState::Stun => "stun",
        }
    }

    /// Whether this state reads jump, dodge, shield, attack and movement input.
    pub fn accepts_actions(self) -> bool {
        !matches!(
            self,
            ActionState::Dodge | ActionState::Hurt | ActionState::Stun
        )
    }

    pub fn can_start_dodge(self) -> bool {
        matches!(
            self,
            ActionState::Idle
                | ActionState::Move
                | ActionState::Jump
                | ActionState::Fall
                | ActionState::Shield
        )
    }
}

/// Snapshot the guards are evaluated against.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GuardContext {
    pub on_ground: bool,
    pub velocity: Vec2,
    pub dodge_timer: u32,
    pub dodge_kind: DodgeKind,
    pub shield_attempting: bool,
    pub attack_timer: u32,
    pub hurt_timer: u32,
    pub stun_timer: u32,
}

#[derive(Clone, Copy)]
pub struct Transition {
    pub to: ActionState,
    pub guard: fn(&GuardContext) -> bool,
}

impl Transition {
    const fn new(to: ActionState, guard: fn(&GuardContext) -> bool) -> Self {
        Self { to, guard }
    }
}

impl std::fmt::Debug for Transition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transition").field("to", &self.to).finish()
    }
}

// ----------------------------------------------------------------------------
// Guards
// ----------------------------------------------------------------------------

fn stunned(ctx: &GuardContext) -> bool {
    ctx.stun_timer > 0
}

fn hurt(ctx: &GuardContext) -> bool {
    ctx.hurt_timer > 0
}

fn attacking(ctx: &GuardContext) -> bool {
    ctx.attack_timer > 0
}

fn dodging(ctx: &GuardContext) -> bool {
    ctx.dodge_timer > 0
}

fn rising(ctx: &GuardContext) -> bool {
    ctx.velocity.y > 0.0
}

fn falling(ctx: &GuardContext) -> bool {
    !ctx.on_ground && ctx.velocity.y <= 0.0
}

fn airborne(ctx: &GuardContext) -> bool {
    !ctx.on_ground
}

fn shielding(ctx: &GuardContext) -> bool {
    ctx.shield_attempting && ctx.on_ground
}

fn not_shielding(ctx: &GuardContext) -> bool {
    !ctx.shield_attempting
}

fn moving_on_ground(ctx: &GuardContext) -> bool {
    ctx.on_ground && ctx.velocity.x != 0.0
}

fn still(ctx: &GuardContext) -> bool {
    ctx.velocity.x == 0.0
}

fn still_on_ground(ctx: &GuardContext) -> bool {
    ctx.on_ground && ctx.velocity.x == 0.0
}

fn settled_on_ground(ctx: &GuardContext) -> bool {
    ctx.on_ground && ctx.velocity.y <= 0.0
}

fn dodge_over_into_shield(ctx: &GuardContext) -> bool {
    ctx.dodge_timer == 0 && ctx.shield_attempting && ctx.on_ground
}

fn dodge_over_on_ground(ctx: &GuardContext) -> bool {
    ctx.dodge_timer == 0 && ctx.on_ground && ctx.dodge_kind != DodgeKind::GroundSpotDodge
}

fn dodge_over_in_air(ctx: &GuardContext) -> bool {
    ctx.dodge_timer == 0 && !ctx.on_ground
}

fn attack_over_on_ground(ctx: &GuardContext) -> bool {
    ctx.attack_timer == 0 && ctx.on_ground
}

fn attack_over_in_air(ctx: &GuardContext) -> bool {
    ctx.attack_timer == 0 && !ctx.on_ground
}

fn hurt_over_on_ground(ctx: &GuardContext) -> bool {
    ctx.hurt_timer == 0 && ctx.on_ground
}

fn hurt_over_in_air(ctx: &GuardContext) -> bool {
    ctx.hurt_timer == 0 && !ctx.on_ground
}

fn stun_over_on_ground(ctx: &GuardContext) -> bool {
    ctx.stun_timer == 0 && ctx.on_ground
}

fn stun_over_in_air(ctx: &GuardContext) -> bool {
    ctx.stun_timer == 0 && !ctx.on_ground
}

// ----------------------------------------------------------------------------
// Table
// ----------------------------------------------------------------------------

use ActionState::*;

const FROM_IDLE: &[Transition] = &[
    Transition::new(Stun, stunned),
    Transition::new(Hurt, hurt),
    Transition::new(Attack, attacking),
    Transition::new(Dodge, dodging),
    Transition::new(Jump, rising),
    Transition::new(Fall, falling),
    Transition::new(Shield, shielding),
    Transition::new(Move, moving_on_ground),
];

const FROM_MOVE: &[Transition] = &[
    Transition::new(Stun, stunned),
    Transition::new(Hurt, hurt),
    Transition::new(Attack, attacking),
    Transition::new(Dodge, dodging),
    Transition::new(Jump, rising),
    Transition::new(Fall, airborne),
    Transition::new(Shield, shielding),
    Transition::new(Idle, still),
];

const FROM_JUMP: &[Transition] = &[
    Transition::new(Stun, stunned),
    Transition::new(Hurt, hurt),
    Transition::new(Attack, attacking),
    Transition::new(Dodge, dodging),
    Transition::new(Fall, falling),
    Transition::new(Idle, settled_on_ground),
];

const FROM_FALL: &[Transition] = &[
    Transition::new(Stun, stunned),
    Transition::new(Hurt, hurt),
    Transition::new(Attack, attacking),
    Transition::new(Dodge, dodging),
    Transition::new(Jump, rising),
    Transition::new(Idle, still_on_ground),
    Transition::new(Move, moving_on_ground),
];

const FROM_SHIELD: &[Transition] = &[
    Transition::new(Stun, stunned),
    Transition::new(Hurt, hurt),
    Transition::new(Dodge, dodging),
    Transition::new(Jump, rising),
    Transition::new(Idle, not_shielding),
    Transition::new(Fall, airborne),
];

const FROM_DODGE: &[Transition] = &[
    Transition::new(Shield, dodge_over_into_shield),
    Transition::new(Idle, dodge_over_on_ground),
    Transition::new(Fall, dodge_over_in_air),
];

const FROM_ATTACK: &[Transition] = &[
    Transition::new(Stun, stunned),
    Transition::new(Hurt, hurt),
    Transition::new(Idle, attack_over_on_ground),
    Transition::new(Fall, attack_over_in_air),
];

const FROM_HURT: &[Transition] = &[
    Transition::new(Stun, stunned),
    Transition::new(Idle, hurt_over_on_ground),
    Transition::new(Fall, hurt_over_in_air),
];

const FROM_STUN: &[Transition] = &[
    Transition::new(Idle, stun_over_on_ground),
    Transition::new(Fall, stun_over_in_air),
];

/// Ordered outgoing transitions for `state`.
pub fn transitions(state: ActionState) -> &'static [Transition] {
    match state {
        Idle => FROM_IDLE,
        Move => FROM_MOVE,
        Jump => FROM_JUMP,
        Fall => FROM_FALL,
        Shield => FROM_SHIELD,
        Dodge => FROM_DODGE,
        Attack => FROM_ATTACK,
        Hurt => FROM_HURT,
        Stun => FROM_STUN,
    }
}

/// A state change produced by [`StateMachine::evaluate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateChange {
    pub from: ActionState,
    pub to: ActionState,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateMachine {
    state: ActionState,
    frames_in_state: u32,
}

impl StateMachine {
    pub fn new(state: ActionState) -> Self {
        Self {
            state,
            frames_in_state: 0,
        }
    }

    pub fn state(&self) -> ActionState {
        self.state
    }

    pub fn frames_in_state(&self) -> u32 {
        self.frames_in_state
    }

    /// Take the first outgoing transition whose guard holds.
    pub fn evaluate(&mut self, ctx: &GuardContext) -> Option<StateChange> {
        let next = transitions(self.state)
            .iter()
            .find(|transition| (transition.guard)(ctx))?
            .to;

        if next == self.state {
            return None;
        }

        let change = StateChange {
            from: self.state,
            to: next,
        };
        self.state = next;
        self.frames_in_state = 0;
        Some(change)
    }

    /// Advance the in-state frame counter. Called once at the end of a frame.
    pub fn tick(&mut self) {
        self.frames_in_state = self.frames_in_state.saturating_add(1);
    }
}

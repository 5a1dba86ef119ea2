//! Fighter domain: input-driven actions and horizontal control.

use bevy::prelude::*;
use serde::Serialize;

use super::components::{Facing, Fighter};
use super::dodge;
use super::fsm::ActionState;
use super::input::{Buttons, InputFrame};
use super::resources::{AttackProfile, FighterTuning};
use crate::physics::apply_horizontal_friction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect, Serialize)]
pub enum AttackKind {
    /// Attack A.
    Light,
    /// Attack B.
    Heavy,
}

impl AttackKind {
    pub fn profile(self, tuning: &FighterTuning) -> &AttackProfile {
        match self {
            AttackKind::Light => &tuning.light_attack,
            AttackKind::Heavy => &tuning.heavy_attack,
        }
    }
}

/// What the action step started this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActionOutcome {
    pub jumped: bool,
    pub dodge_started: bool,
    pub attack: Option<AttackKind>,
}

/// Read jump, dodge, shield and attack input, in that priority. A jump or a
/// started dodge consumes the frame.
pub fn handle_actions(
    fighter: &mut Fighter,
    input: &InputFrame,
    tuning: &FighterTuning,
) -> ActionOutcome {
    let mut outcome = ActionOutcome::default();
    let state = fighter.state();

    if input.just_pressed(Buttons::UP) && fighter.jumps_remaining > 0 {
        fighter.velocity.y = tuning.jump_velocity;
        fighter.jumps_remaining -= 1;
        fighter.shield.attempting = false;
        debug!(
            "Fighter {} jumped ({} left)",
            fighter.slot, fighter.jumps_remaining
        );
        outcome.jumped = true;
        return outcome;
    }

    if state.can_start_dodge() && fighter.dodge.timer == 0 {
        let allowed = fighter.on_ground || fighter.dodge.air_dodge_ok;
        let requested = dodge::decode_dodge_direction(fighter, input).filter(|_| allowed);
        if let Some(direction) = requested {
            dodge::start_dodge(fighter, direction, tuning);
            outcome.dodge_started = true;
            return outcome;
        }
    }

    let can_shield = fighter.on_ground
        && fighter.shield.hp > 0.0
        && matches!(
            state,
            ActionState::Idle | ActionState::Move | ActionState::Shield
        );
    fighter.shield.attempting = input.is_held(Buttons::SHIELD) && can_shield;

    if state != ActionState::Shield && fighter.attack_timer == 0 {
        let kind = if input.just_pressed(Buttons::ATTACK_A) {
            Some(AttackKind::Light)
        } else if input.just_pressed(Buttons::ATTACK_B) {
            Some(AttackKind::Heavy)
        } else {
            None
        };

        if let Some(kind) = kind {
            fighter.attack_timer = tuning.attack_frames;
            debug!("Fighter {} started {:?} attack", fighter.slot, kind);
            outcome.attack = Some(kind);
        }
    }

    outcome
}

/// Friction, then run input. Opposing directions cancel; shielding locks
/// horizontal control.
pub fn step_horizontal(fighter: &mut Fighter, input: &InputFrame, tuning: &FighterTuning) {
    apply_friction(fighter, tuning);

    if input.left_and_right() || fighter.state() == ActionState::Shield {
        return;
    }

    if input.is_held(Buttons::LEFT) {
        fighter.velocity.x = -tuning.move_speed;
        fighter.facing = Facing::Left;
    } else if input.is_held(Buttons::RIGHT) {
        fighter.velocity.x = tuning.move_speed;
        fighter.facing = Facing::Right;
    }
}

pub fn apply_friction(fighter: &mut Fighter, tuning: &FighterTuning) {
    apply_horizontal_friction(
        &mut fighter.velocity,
        fighter.on_ground,
        tuning.ground_friction,
        tuning.air_friction,
        tuning.friction_dead_zone,
    );
}

/// Drain the shield while shielding, regenerate otherwise. Running dry
/// breaks the shield, once.
pub fn tick_shield(fighter: &mut Fighter, tuning: &FighterTuning) {
    if fighter.state() == ActionState::Shield {
        fighter.shield.hp = (fighter.shield.hp - tuning.shield_drain).max(0.0);
        if fighter.shield.hp == 0.0 && fighter.stun_timer == 0 {
            break_shield(fighter, tuning);
        }
    } else {
        fighter.shield.hp = (fighter.shield.hp + tuning.shield_regen).min(tuning.shield_max_hp);
    }
}

/// Shield break: stunned in place with the shield dropped.
pub fn break_shield(fighter: &mut Fighter, tuning: &FighterTuning) {
    fighter.stun_timer = tuning.stun_frames;
    fighter.velocity = Vec2::ZERO;
    fighter.shield.attempting = false;
    info!("Fighter {} shield broke", fighter.slot);
}

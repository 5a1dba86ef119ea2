//! Fighter domain: dodge and shield sub-policy.
//!
//! Decides which dodge an input starts, whether gravity runs this frame,
//! whether a held down input may drop through a thin platform, and how a
//! dodge hands off to shield when it ends.

use bevy::prelude::*;

use super::components::{DodgeKind, Fighter};
use super::fsm::ActionState;
use super::input::{Buttons, InputFrame};
use super::resources::FighterTuning;
use crate::physics::apply_gravity;

/// Grounded speed above which a bare shield press rolls in the direction of
/// motion.
const ROLL_FROM_MOTION_SPEED: f32 = 0.1;

fn pressed_direction(input: &InputFrame) -> Option<i8> {
    if input.just_pressed(Buttons::DOWN) {
        Some(0)
    } else if input.just_pressed(Buttons::LEFT) {
        Some(-1)
    } else if input.just_pressed(Buttons::RIGHT) {
        Some(1)
    } else {
        None
    }
}

/// Horizontal dodge direction requested this frame: `0` is neutral, `-1`
/// left, `1` right. `None` means no dodge was asked for.
pub fn decode_dodge_direction(fighter: &Fighter, input: &InputFrame) -> Option<i8> {
    if input.just_pressed(Buttons::SHIELD) {
        if let Some(direction) = pressed_direction(input) {
            return Some(direction);
        }
        if !fighter.on_ground {
            return Some(0);
        }
        if fighter.velocity.x.abs() > ROLL_FROM_MOTION_SPEED {
            return Some(fighter.velocity.x.signum() as i8);
        }
        return None;
    }

    if input.is_held(Buttons::SHIELD) {
        return pressed_direction(input);
    }

    None
}

pub fn classify_dodge(direction: i8, on_ground: bool) -> DodgeKind {
    match (direction, on_ground) {
        (0, true) => DodgeKind::GroundSpotDodge,
        (0, false) => DodgeKind::AirDodge,
        _ => DodgeKind::DirectionalDodge,
    }
}

/// Enter a dodge. Velocity is set according to the dodge kind; an air
/// dodge keeps its vertical speed and stays under gravity.
pub fn start_dodge(fighter: &mut Fighter, direction: i8, tuning: &FighterTuning) -> DodgeKind {
    let kind = classify_dodge(direction, fighter.on_ground);

    match kind {
        DodgeKind::GroundSpotDodge => fighter.velocity = Vec2::ZERO,
        DodgeKind::AirDodge => fighter.velocity.x = 0.0,
        _ => {
            fighter.velocity.x = f32::from(direction) * tuning.dodge_speed;
            if fighter.on_ground {
                fighter.velocity.y = 0.0;
            }
        }
    }

    if !fighter.on_ground {
        fighter.dodge.air_dodge_ok = false;
    }
    fighter.dodge.timer = tuning.dodge_frames;
    fighter.dodge.kind = kind;
    fighter.invulnerable = true;

    debug!(
        "Fighter {} started {:?} (direction {}, grounded {})",
        fighter.slot, kind, direction, fighter.on_ground
    );
    kind
}

/// Gravity is suspended only for a grounded spot dodge.
pub fn gravity_suspended(fighter: &Fighter) -> bool {
    fighter.state() == ActionState::Dodge && fighter.dodge.is_spot_dodge() && fighter.on_ground
}

pub fn apply_gravity_policy(fighter: &mut Fighter, tuning: &FighterTuning) {
    if gravity_suspended(fighter) {
        fighter.velocity.y = 0.0;
    } else {
        apply_gravity(&mut fighter.velocity, tuning.gravity, tuning.max_fall_speed);
    }
}

/// Holding down drops through thin platforms, except while it is part of a
/// spot dodge or a shield.
pub fn drop_through_intent(fighter: &Fighter, input: &InputFrame) -> bool {
    if !input.is_held(Buttons::DOWN) {
        return false;
    }

    let spot_dodging = fighter.state() == ActionState::Dodge
        && fighter.dodge.is_spot_dodge()
        && input.is_held(Buttons::SHIELD);
    let shielding = fighter.state() == ActionState::Shield && fighter.shield.attempting;

    !(spot_dodging || shielding)
}

/// Drop a dodge the state machine is not running: invulnerability and the
/// dodge kind never outlive the Dodge state.
pub fn cancel_dodge(fighter: &mut Fighter) {
    debug!(
        "Fighter {} cancelled {:?} in {}",
        fighter.slot,
        fighter.dodge.kind,
        fighter.state().name()
    );
    fighter.invulnerable = false;
    fighter.dodge.timer = 0;
    fighter.dodge.kind = DodgeKind::None;
}

/// Called on the frame the dodge timer runs out while still dodging.
pub fn finish_dodge(fighter: &mut Fighter, input: &InputFrame) {
    fighter.invulnerable = false;
    fighter.velocity.x = 0.0;

    if fighter.dodge.is_spot_dodge() && input.is_held(Buttons::SHIELD) {
        fighter.shield.attempting = true;
    }

    debug!(
        "Fighter {} finished {:?} (shield held {})",
        fighter.slot,
        fighter.dodge.kind,
        input.is_held(Buttons::SHIELD)
    );
    fighter.dodge.kind = DodgeKind::None;
}

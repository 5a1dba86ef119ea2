//! Combat domain: applying a hit to a fighter.

use bevy::prelude::*;
use serde::Serialize;

use super::components::Hit;
use crate::fighter::{Fighter, FighterTuning, break_shield};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HitOutcome {
    /// Target was invulnerable.
    Ignored,
    /// Shield absorbed the damage.
    Shielded,
    /// Shield absorbed the damage and broke.
    ShieldBroken,
    /// Damage taken and launched.
    Launched,
}

/// Apply `hit` to `fighter`. A raised shield soaks the damage; otherwise the
/// fighter takes damage, enters hitstun and is launched away from the
/// attacker, harder the more damage it already carries.
pub fn receive_hit(fighter: &mut Fighter, hit: &Hit, tuning: &FighterTuning) -> HitOutcome {
    if fighter.invulnerable {
        return HitOutcome::Ignored;
    }

    if fighter.shield.attempting && fighter.shield.hp > 0.0 {
        fighter.shield.hp = (fighter.shield.hp - hit.damage).max(0.0);
        if fighter.shield.hp == 0.0 {
            break_shield(fighter, tuning);
            return HitOutcome::ShieldBroken;
        }
        return HitOutcome::Shielded;
    }

    fighter.percent += hit.damage;
    fighter.hurt_timer = tuning.hurt_frames;
    fighter.attack_timer = 0;
    fighter.velocity = hit.launch_velocity(fighter.percent);
    debug!(
        "Fighter {} hit for {:.1} (now {:.1}%), launched at {:?}",
        fighter.slot, hit.damage, fighter.percent, fighter.velocity
    );
    HitOutcome::Launched
}

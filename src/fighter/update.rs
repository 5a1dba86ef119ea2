//! Fighter domain: the per-frame update.
//!
//! Frame order:
//! 1. shield bookkeeping
//! 2. actions and horizontal control (skipped while dodging or in hitstun)
//! 3. state machine, against the previous frame's contact state
//! 4. gravity policy and drop-through intent
//! 5. ledge guard, platform resolution, ledge clamp
//! 6. landing refresh, then timers

use bevy::prelude::*;

use super::actions::{self, AttackKind};
use super::components::{DodgeKind, Fighter};
use super::dodge;
use super::fsm::{ActionState, StateChange};
use super::input::{Buttons, InputFrame};
use super::resources::FighterTuning;
use crate::physics::{find_supporting_platform, guard_after_move, guard_before_move, resolve};
use crate::stage::{Platform, PlatformId};

/// Everything noteworthy that happened to one fighter in one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameReport {
    pub transition: Option<StateChange>,
    pub attack: Option<AttackKind>,
    /// Platform touched down on after being airborne.
    pub landed_on: Option<PlatformId>,
    /// Thin platform a new drop-through started on.
    pub dropped_through: Option<PlatformId>,
    /// The ledge guard stopped or pulled back a dodge.
    pub ledge_guarded: bool,
}

impl Fighter {
    /// Advance this fighter by one fixed frame.
    ///
    /// # Panics
    ///
    /// Panics if `platforms` is empty.
    pub fn update(
        &mut self,
        input: &InputFrame,
        platforms: &[Platform],
        tuning: &FighterTuning,
    ) -> FrameReport {
        let mut report = FrameReport::default();
        let was_airborne = !self.on_ground;

        actions::tick_shield(self, tuning);
        if !input.is_held(Buttons::SHIELD) && !input.just_pressed(Buttons::SHIELD) {
            self.shield.attempting = false;
        }

        if self.state().accepts_actions() && !self.in_hitstun() {
            let outcome = actions::handle_actions(self, input, tuning);
            report.attack = outcome.attack;
            if !outcome.dodge_started {
                actions::step_horizontal(self, input, tuning);
            }
        } else if self.state() != ActionState::Dodge {
            actions::apply_friction(self, tuning);
        }

        report.transition = self.fsm.evaluate(&self.guard_context());
        if let Some(change) = report.transition {
            debug!(
                "Fighter {}: {} -> {}",
                self.slot,
                change.from.name(),
                change.to.name()
            );
        }
        if self.state() != ActionState::Dodge && self.dodge.kind != DodgeKind::None {
            dodge::cancel_dodge(self);
        }

        dodge::apply_gravity_policy(self, tuning);
        let want_drop_through = dodge::drop_through_intent(self, input);

        let ledge_guard = self.state() == ActionState::Dodge && self.on_ground;
        if ledge_guard {
            if let Some(platform) = find_supporting_platform(&self.body, platforms) {
                report.ledge_guarded |= guard_before_move(&mut self.body, &mut self.velocity, platform);
            }
        }

        let previous_drop = self.drop_platform;
        let resolution = resolve(
            self.body,
            self.velocity,
            platforms,
            want_drop_through,
            self.drop_platform,
        );
        self.body = resolution.body;
        self.velocity = resolution.velocity;
        self.on_ground = resolution.on_ground;
        self.drop_platform = resolution.drop_platform;

        if self.drop_platform.is_some() && self.drop_platform != previous_drop {
            report.dropped_through = self.drop_platform;
        }

        if ledge_guard && self.on_ground {
            if let Some(platform) = find_supporting_platform(&self.body, platforms) {
                report.ledge_guarded |= guard_after_move(&mut self.body, &mut self.velocity, platform);
            }
        }

        if self.on_ground {
            self.jumps_remaining = tuning.max_jumps;
            self.dodge.air_dodge_ok = true;
            if was_airborne {
                report.landed_on = resolution.landed_on;
            }
        }

        self.tick_timers(input);
        self.fsm.tick();
        report
    }

    fn tick_timers(&mut self, input: &InputFrame) {
        self.attack_timer = self.attack_timer.saturating_sub(1);
        self.hurt_timer = self.hurt_timer.saturating_sub(1);
        self.stun_timer = self.stun_timer.saturating_sub(1);

        if self.dodge.timer > 0 {
            self.dodge.timer -= 1;
            if self.dodge.timer == 0 {
                if self.state() == ActionState::Dodge {
                    dodge::finish_dodge(self, input);
                } else {
                    dodge::cancel_dodge(self);
                }
            }
        }
    }
}

//! Fighter domain: abstract button state consumed by the per-frame update.

use bevy::prelude::*;
use bitflags::bitflags;

bitflags! {
    /// Logical buttons. Device mapping happens outside the simulation.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Buttons: u8 {
        const LEFT = 1 << 0;
        const RIGHT = 1 << 1;
        const UP = 1 << 2;
        const DOWN = 1 << 3;
        const SHIELD = 1 << 4;
        const ATTACK_A = 1 << 5;
        const ATTACK_B = 1 << 6;
    }
}

/// One frame of input: what is held, and what went down this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputFrame {
    pub held: Buttons,
    pub pressed: Buttons,
}

impl InputFrame {
    pub fn new(held: Buttons, pressed: Buttons) -> Self {
        Self { held, pressed }
    }

    /// Buttons held since an earlier frame, nothing freshly pressed.
    pub fn holding(held: Buttons) -> Self {
        Self::new(held, Buttons::empty())
    }

    /// Buttons all pressed this very frame.
    pub fn pressing(buttons: Buttons) -> Self {
        Self::new(buttons, buttons)
    }

    /// Next frame given the buttons now held; press edges are derived from
    /// this frame's held set.
    pub fn advance(&self, held: Buttons) -> Self {
        Self::new(held, held.difference(self.held))
    }

    pub fn is_held(&self, buttons: Buttons) -> bool {
        self.held.contains(buttons)
    }

    pub fn just_pressed(&self, buttons: Buttons) -> bool {
        self.pressed.contains(buttons)
    }

    pub fn left_and_right(&self) -> bool {
        self.is_held(Buttons::LEFT | Buttons::RIGHT)
    }
}

/// Input slot written by whatever drives a fighter (player devices, replays,
/// scripted tests) before the simulation step runs.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct FighterInput(pub InputFrame);

impl FighterInput {
    /// Record the buttons held this frame, deriving press edges.
    pub fn set_held(&mut self, held: Buttons) {
        self.0 = self.0.advance(held);
    }
}

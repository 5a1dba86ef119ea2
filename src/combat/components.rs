//! Combat domain: attack hitboxes and hit payloads.

use bevy::prelude::*;

use crate::fighter::{AttackKind, AttackProfile, Fighter};

/// What a hitbox does to the fighter it connects with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub damage: f32,
    pub base_knockback: f32,
    pub knockback_scale: f32,
    pub angle_degrees: f32,
    /// +1 launches to the right, -1 to the left.
    pub direction: f32,
}

impl Hit {
    pub fn from_profile(profile: &AttackProfile, direction: f32) -> Self {
        Self {
            damage: profile.damage,
            base_knockback: profile.base_knockback,
            knockback_scale: profile.knockback_scale,
            angle_degrees: profile.angle_degrees,
            direction,
        }
    }

    /// Knockback magnitude against a target carrying `percent` damage.
    pub fn knockback(&self, percent: f32) -> f32 {
        self.base_knockback + self.knockback_scale * percent
    }

    /// Launch velocity against a target carrying `percent` damage.
    pub fn launch_velocity(&self, percent: f32) -> Vec2 {
        let strength = self.knockback(percent);
        let angle = self.angle_degrees.to_radians();
        Vec2::new(angle.cos() * self.direction, angle.sin()) * strength
    }
}

/// A live attack area. Hits at most one fighter, never its owner, and
/// expires after its lifetime.
#[derive(Component, Debug, Clone)]
pub struct AttackHitbox {
    pub owner: Entity,
    pub kind: AttackKind,
    pub area: Rect,
    pub hit: Hit,
    pub frames_left: u32,
    pub spent: bool,
}

impl AttackHitbox {
    pub fn new(owner: Entity, kind: AttackKind, area: Rect, hit: Hit, lifetime: u32) -> Self {
        Self {
            owner,
            kind,
            area,
            hit,
            frames_left: lifetime,
            spent: false,
        }
    }

    /// Whether this hitbox can connect with `fighter`, owned by `target`.
    pub fn can_hit(&self, target: Entity, fighter: &Fighter) -> bool {
        !self.spent
            && self.frames_left > 0
            && target != self.owner
            && !fighter.invulnerable
            && !self.area.intersect(fighter.body.rect()).is_empty()
    }
}

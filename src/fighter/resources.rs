//! Fighter domain: tuning resource.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Per-frame tuning for every fighter. Values are in world units per frame
/// at a fixed 60 Hz step.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FighterTuning {
    pub body_width: f32,
    pub body_height: f32,
    pub gravity: f32,
    pub max_fall_speed: f32,
    pub move_speed: f32,
    pub jump_velocity: f32,
    /// Ground jump plus air jumps.
    pub max_jumps: u8,
    pub ground_friction: f32,
    pub air_friction: f32,
    pub friction_dead_zone: f32,
    pub dodge_frames: u32,
    pub dodge_speed: f32,
    pub shield_max_hp: f32,
    pub shield_drain: f32,
    pub shield_regen: f32,
    pub attack_frames: u32,
    pub hurt_frames: u32,
    pub stun_frames: u32,
    pub light_attack: AttackProfile,
    pub heavy_attack: AttackProfile,
}

impl Default for FighterTuning {
    fn default() -> Self {
        Self {
            body_width: 40.0,
            body_height: 60.0,
            gravity: 0.5,
            max_fall_speed: 12.0,
            move_speed: 5.0,
            jump_velocity: 10.0,
            max_jumps: 2,
            ground_friction: 0.8,
            air_friction: 0.95,
            friction_dead_zone: 0.05,
            dodge_frames: 15,
            dodge_speed: 8.0,
            shield_max_hp: 50.0,
            shield_drain: 0.2,
            shield_regen: 0.2,
            attack_frames: 18,
            hurt_frames: 20,
            stun_frames: 90,
            light_attack: AttackProfile::default(),
            heavy_attack: AttackProfile {
                damage: 14.0,
                base_knockback: 6.0,
                knockback_scale: 0.12,
                angle_degrees: 45.0,
                width: 36.0,
                height: 24.0,
                lifetime_frames: 16,
            },
        }
    }
}

impl FighterTuning {
    pub fn body_size(&self) -> Vec2 {
        Vec2::new(self.body_width, self.body_height)
    }
}

/// Shape and strength of one attack hitbox.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AttackProfile {
    pub damage: f32,
    pub base_knockback: f32,
    /// Extra knockback per point of accumulated damage on the target.
    pub knockback_scale: f32,
    /// Launch angle above the horizontal, away from the attacker.
    pub angle_degrees: f32,
    pub width: f32,
    pub height: f32,
    pub lifetime_frames: u32,
}

impl Default for AttackProfile {
    fn default() -> Self {
        Self {
            damage: 8.0,
            base_knockback: 4.0,
            knockback_scale: 0.08,
            angle_degrees: 30.0,
            width: 30.0,
            height: 18.0,
            lifetime_frames: 12,
        }
    }
}

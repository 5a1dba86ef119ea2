//! Combat domain: hitbox lifecycle systems.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use super::components::{AttackHitbox, Hit};
use super::events::HitLanded;
use super::hits::receive_hit;
use crate::fighter::{AttackStarted, Fighter, FighterTuning};

pub(crate) fn spawn_attack_hitboxes(
    mut commands: Commands,
    mut attacks: MessageReader<AttackStarted>,
    tuning: Res<FighterTuning>,
) {
    for attack in attacks.read() {
        let profile = attack.kind.profile(&tuning);
        commands.spawn(AttackHitbox::new(
            attack.entity,
            attack.kind,
            attack.hitbox,
            Hit::from_profile(profile, attack.direction),
            profile.lifetime_frames,
        ));
    }
}

pub(crate) fn apply_hitboxes(
    tuning: Res<FighterTuning>,
    mut hitboxes: Query<&mut AttackHitbox>,
    mut fighters: Query<(Entity, &mut Fighter)>,
    mut hit_events: MessageWriter<HitLanded>,
) {
    for mut hitbox in &mut hitboxes {
        for (target, mut fighter) in &mut fighters {
            if !hitbox.can_hit(target, &fighter) {
                continue;
            }

            let outcome = receive_hit(&mut fighter, &hitbox.hit, &tuning);
            hitbox.spent = true;
            hit_events.write(HitLanded {
                attacker: hitbox.owner,
                target,
                outcome,
            });
            break;
        }
    }
}

pub(crate) fn expire_hitboxes(
    mut commands: Commands,
    mut hitboxes: Query<(Entity, &mut AttackHitbox)>,
) {
    for (entity, mut hitbox) in &mut hitboxes {
        hitbox.frames_left = hitbox.frames_left.saturating_sub(1);
        if hitbox.frames_left == 0 || hitbox.spent {
            commands.entity(entity).despawn();
        }
    }
}

//! Fighter domain: ECS systems driving the per-frame update.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use super::actions::AttackKind;
use super::components::Fighter;
use super::events::{ActionStateChanged, AttackStarted, DroppedThrough, FighterLanded};
use super::input::FighterInput;
use super::resources::FighterTuning;
use crate::stage::StageLayout;

const FIGHTER_Z: f32 = 10.0;

/// Spawn a fighter standing on the stage's spawn point for `slot`.
pub fn spawn_fighter(
    commands: &mut Commands,
    slot: u8,
    stage: &StageLayout,
    tuning: &FighterTuning,
) -> Entity {
    let fighter = Fighter::new(slot, stage.spawn_point(usize::from(slot)), tuning);
    let translation = fighter.body.center().extend(FIGHTER_Z);
    info!(
        "Spawning fighter {} at ({:.1}, {:.1}) on {}",
        slot,
        translation.x,
        fighter.body.bottom(),
        stage.name
    );

    commands
        .spawn((
            Name::new(format!("Fighter {slot}")),
            fighter,
            FighterInput::default(),
            Transform::from_translation(translation),
        ))
        .id()
}

/// Where an attack's hitbox sits: just in front of the fighter, centred on
/// its body height.
pub fn attack_hitbox(fighter: &Fighter, kind: AttackKind, tuning: &FighterTuning) -> Rect {
    let profile = kind.profile(tuning);
    let half_size = Vec2::new(profile.width, profile.height) * 0.5;
    let reach = fighter.body.size.x * 0.5 + half_size.x;
    let center = fighter.body.center() + Vec2::new(reach * fighter.facing.sign(), 0.0);
    Rect::from_center_half_size(center, half_size)
}

pub(crate) fn update_fighters(
    stage: Res<StageLayout>,
    tuning: Res<FighterTuning>,
    mut fighters: Query<(Entity, &mut Fighter, &FighterInput)>,
    mut state_events: MessageWriter<ActionStateChanged>,
    mut landed_events: MessageWriter<FighterLanded>,
    mut drop_events: MessageWriter<DroppedThrough>,
    mut attack_events: MessageWriter<AttackStarted>,
) {
    for (entity, mut fighter, input) in &mut fighters {
        let report = fighter.update(&input.0, &stage.platforms, &tuning);

        if let Some(change) = report.transition {
            state_events.write(ActionStateChanged {
                entity,
                from: change.from,
                to: change.to,
            });
        }

        if let Some(platform) = report.landed_on {
            landed_events.write(FighterLanded { entity, platform });
        }

        if let Some(platform) = report.dropped_through {
            drop_events.write(DroppedThrough { entity, platform });
        }

        if let Some(kind) = report.attack {
            attack_events.write(AttackStarted {
                entity,
                kind,
                hitbox: attack_hitbox(&fighter, kind, &tuning),
                direction: fighter.facing.sign(),
            });
        }
    }
}

pub(crate) fn sync_fighter_transforms(mut query: Query<(&Fighter, &mut Transform)>) {
    for (fighter, mut transform) in &mut query {
        let center = fighter.body.center();
        transform.translation.x = center.x;
        transform.translation.y = center.y;
    }
}

//! App-level smoke tests: the plugins wired together and stepped.

use bevy::prelude::*;

use crate::SimulationPlugin;
use crate::core::{SimulationFrame, SimulationPaused};
use crate::fighter::{Buttons, Fighter, FighterInput, FighterTuning, spawn_fighter};
use crate::stage::StageLayout;

fn spawn_pair(mut commands: Commands, stage: Res<StageLayout>, tuning: Res<FighterTuning>) {
    spawn_fighter(&mut commands, 0, &stage, &tuning);
    spawn_fighter(&mut commands, 1, &stage, &tuning);
}

fn test_app() -> App {
    let mut app = App::new();
    app.add_plugins(SimulationPlugin)
        .add_systems(Startup, spawn_pair);
    app
}

fn fighter_entities(app: &mut App) -> Vec<(Entity, u8)> {
    let mut query = app.world_mut().query::<(Entity, &Fighter)>();
    let mut entities: Vec<(Entity, u8)> = query
        .iter(app.world())
        .map(|(entity, fighter)| (entity, fighter.slot))
        .collect();
    entities.sort_by_key(|(_, slot)| *slot);
    entities
}

fn set_held(app: &mut App, entity: Entity, held: Buttons) {
    if let Some(mut input) = app.world_mut().get_mut::<FighterInput>(entity) {
        input.set_held(held);
    }
}

#[test]
fn test_fighters_spawn_fall_and_settle() {
    let mut app = test_app();
    for _ in 0..120 {
        app.update();
    }

    assert_eq!(app.world().resource::<SimulationFrame>().0, 120);

    let entities = fighter_entities(&mut app);
    assert_eq!(entities.len(), 2);

    for (entity, _) in entities {
        let fighter = app.world().get::<Fighter>(entity).expect("fighter exists");
        let transform = app.world().get::<Transform>(entity).expect("transform exists");
        assert!(fighter.on_ground);
        assert_eq!(transform.translation.truncate(), fighter.body.center());
    }
}

#[test]
fn test_attack_lands_through_the_schedule() {
    let mut app = test_app();
    for _ in 0..120 {
        app.update();
    }

    let entities = fighter_entities(&mut app);
    let (attacker, _) = entities[0];
    let (target, _) = entities[1];

    let attacker_body = app.world().get::<Fighter>(attacker).expect("attacker").body;
    if let Some(mut fighter) = app.world_mut().get_mut::<Fighter>(target) {
        fighter.body.position = Vec2::new(attacker_body.right(), attacker_body.bottom());
        fighter.velocity = Vec2::ZERO;
    }

    set_held(&mut app, attacker, Buttons::ATTACK_A);
    app.update();

    let target_fighter = app.world().get::<Fighter>(target).expect("target");
    assert!(target_fighter.percent > 0.0);
    assert!(target_fighter.hurt_timer > 0);
}

#[test]
fn test_paused_simulation_does_not_advance() {
    let mut app = test_app();
    app.update();

    app.world_mut()
        .resource_mut::<SimulationPaused>()
        .pause("test");
    let before = *app.world().resource::<SimulationFrame>();
    for _ in 0..10 {
        app.update();
    }

    assert_eq!(*app.world().resource::<SimulationFrame>(), before);
}

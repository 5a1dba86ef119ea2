//! Combat domain: tests for hit resolution and hitbox rules.

use bevy::prelude::*;

use super::*;
use crate::fighter::{
    ActionState, AttackKind, Buttons, DodgeKind, Facing, Fighter, FighterTuning, InputFrame,
    StateChange, attack_hitbox,
};
use crate::stage::Platform;

fn floor() -> Vec<Platform> {
    vec![Platform::solid(0, Vec2::ZERO, Vec2::new(1000.0, 20.0))]
}

fn standing(slot: u8, x: f32, tuning: &FighterTuning) -> Fighter {
    let mut fighter = Fighter::new(slot, Vec2::new(x, 20.0), tuning);
    let platforms = floor();
    for _ in 0..3 {
        fighter.update(&InputFrame::default(), &platforms, tuning);
    }
    fighter
}

fn entities<const N: usize>() -> [Entity; N] {
    let mut world = World::new();
    std::array::from_fn(|_| world.spawn_empty().id())
}

fn light_hit(direction: f32) -> Hit {
    Hit::from_profile(&FighterTuning::default().light_attack, direction)
}

#[test]
fn test_knockback_grows_with_damage() {
    let tuning = FighterTuning::default();
    let hit = light_hit(1.0);

    let mut fresh = standing(0, 100.0, &tuning);
    let mut worn = standing(1, 300.0, &tuning);
    worn.percent = 120.0;

    assert_eq!(receive_hit(&mut fresh, &hit, &tuning), HitOutcome::Launched);
    assert_eq!(receive_hit(&mut worn, &hit, &tuning), HitOutcome::Launched);

    assert!(worn.velocity.length() > fresh.velocity.length());
    assert_eq!(fresh.percent, hit.damage);
    assert_eq!(fresh.hurt_timer, tuning.hurt_frames);
}

#[test]
fn test_launch_points_away_from_the_attacker() {
    let tuning = FighterTuning::default();

    let mut pushed_right = standing(0, 100.0, &tuning);
    receive_hit(&mut pushed_right, &light_hit(1.0), &tuning);
    assert!(pushed_right.velocity.x > 0.0);
    assert!(pushed_right.velocity.y > 0.0);

    let mut pushed_left = standing(0, 100.0, &tuning);
    receive_hit(&mut pushed_left, &light_hit(-1.0), &tuning);
    assert!(pushed_left.velocity.x < 0.0);
}

#[test]
fn test_launched_fighter_enters_hurt_then_recovers() {
    let tuning = FighterTuning::default();
    let platforms = floor();
    let mut fighter = standing(0, 100.0, &tuning);

    receive_hit(&mut fighter, &light_hit(1.0), &tuning);
    fighter.update(&InputFrame::default(), &platforms, &tuning);
    assert_eq!(fighter.state(), ActionState::Hurt);

    for _ in 0..200 {
        fighter.update(&InputFrame::default(), &platforms, &tuning);
    }
    assert_eq!(fighter.state(), ActionState::Idle);
}

#[test]
fn test_dodge_pressed_while_hurt_never_starts() {
    let tuning = FighterTuning::default();
    let platforms = floor();
    let mut fighter = standing(0, 100.0, &tuning);

    receive_hit(&mut fighter, &light_hit(1.0), &tuning);
    let report = fighter.update(
        &InputFrame::pressing(Buttons::SHIELD | Buttons::DOWN),
        &platforms,
        &tuning,
    );

    assert_eq!(
        report.transition,
        Some(StateChange {
            from: ActionState::Idle,
            to: ActionState::Hurt,
        })
    );
    assert!(!fighter.invulnerable);
    assert_eq!(fighter.dodge.kind, DodgeKind::None);
    assert_eq!(fighter.dodge.timer, 0);

    for _ in 0..200 {
        fighter.update(&InputFrame::default(), &platforms, &tuning);
    }
    assert_eq!(fighter.state(), ActionState::Idle);
    assert!(!fighter.invulnerable);
    assert_eq!(
        receive_hit(&mut fighter, &light_hit(1.0), &tuning),
        HitOutcome::Launched
    );
}

#[test]
fn test_attack_pressed_while_hurt_never_starts() {
    let tuning = FighterTuning::default();
    let mut fighter = standing(0, 100.0, &tuning);

    receive_hit(&mut fighter, &light_hit(1.0), &tuning);
    let report = fighter.update(
        &InputFrame::pressing(Buttons::ATTACK_A),
        &floor(),
        &tuning,
    );

    assert_eq!(fighter.state(), ActionState::Hurt);
    assert_eq!(report.attack, None);
    assert_eq!(fighter.attack_timer, 0);
}

#[test]
fn test_shield_break_blocks_a_dodge_on_the_next_frame() {
    let tuning = FighterTuning::default();
    let platforms = floor();
    let mut fighter = standing(0, 100.0, &tuning);
    fighter.update(&InputFrame::pressing(Buttons::SHIELD), &platforms, &tuning);
    assert_eq!(fighter.state(), ActionState::Shield);
    fighter.shield.hp = 3.0;

    let outcome = receive_hit(&mut fighter, &light_hit(1.0), &tuning);
    assert_eq!(outcome, HitOutcome::ShieldBroken);

    let left = fighter.body.left();
    fighter.update(
        &InputFrame::new(Buttons::SHIELD | Buttons::RIGHT, Buttons::RIGHT),
        &platforms,
        &tuning,
    );

    assert_eq!(fighter.state(), ActionState::Stun);
    assert!(!fighter.invulnerable);
    assert_eq!(fighter.dodge.kind, DodgeKind::None);
    assert_eq!(fighter.body.left(), left);
    assert_eq!(fighter.stun_timer, tuning.stun_frames - 1);
}

#[test]
fn test_shield_absorbs_damage() {
    let tuning = FighterTuning::default();
    let mut fighter = standing(0, 100.0, &tuning);
    fighter.shield.attempting = true;

    let outcome = receive_hit(&mut fighter, &light_hit(1.0), &tuning);

    assert_eq!(outcome, HitOutcome::Shielded);
    assert_eq!(fighter.percent, 0.0);
    assert_eq!(fighter.shield.hp, tuning.shield_max_hp - tuning.light_attack.damage);
    assert_eq!(fighter.hurt_timer, 0);
}

#[test]
fn test_shield_break_stuns_and_stops() {
    let tuning = FighterTuning::default();
    let mut fighter = standing(0, 100.0, &tuning);
    fighter.shield.attempting = true;
    fighter.shield.hp = 3.0;
    fighter.velocity = Vec2::new(2.0, 0.0);

    let outcome = receive_hit(&mut fighter, &light_hit(1.0), &tuning);

    assert_eq!(outcome, HitOutcome::ShieldBroken);
    assert_eq!(fighter.stun_timer, tuning.stun_frames);
    assert_eq!(fighter.velocity, Vec2::ZERO);
    assert!(!fighter.shield.attempting);

    fighter.update(&InputFrame::default(), &floor(), &tuning);
    assert_eq!(fighter.state(), ActionState::Stun);
}

#[test]
fn test_dodging_fighter_is_not_hit() {
    let tuning = FighterTuning::default();
    let platforms = floor();
    let mut fighter = standing(0, 100.0, &tuning);
    fighter.update(
        &InputFrame::pressing(Buttons::SHIELD | Buttons::DOWN),
        &platforms,
        &tuning,
    );
    assert!(fighter.invulnerable);

    let [owner, target] = entities();
    let hitbox = AttackHitbox::new(
        owner,
        AttackKind::Light,
        fighter.body.rect(),
        light_hit(1.0),
        12,
    );
    assert!(!hitbox.can_hit(target, &fighter));
    assert_eq!(
        receive_hit(&mut fighter, &light_hit(1.0), &tuning),
        HitOutcome::Ignored
    );
}

// -----------------------------------------------------------------------------
// Hitboxes
// -----------------------------------------------------------------------------

#[test]
fn test_hitbox_never_hits_its_owner() {
    let tuning = FighterTuning::default();
    let fighter = standing(0, 100.0, &tuning);
    let [owner, other] = entities();

    let hitbox = AttackHitbox::new(
        owner,
        AttackKind::Heavy,
        fighter.body.rect(),
        light_hit(1.0),
        12,
    );

    assert!(!hitbox.can_hit(owner, &fighter));
    assert!(hitbox.can_hit(other, &fighter));
}

#[test]
fn test_spent_or_expired_hitbox_cannot_hit() {
    let tuning = FighterTuning::default();
    let fighter = standing(0, 100.0, &tuning);
    let [owner, target] = entities();
    let mut hitbox = AttackHitbox::new(
        owner,
        AttackKind::Light,
        fighter.body.rect(),
        light_hit(1.0),
        12,
    );

    hitbox.spent = true;
    assert!(!hitbox.can_hit(target, &fighter));

    hitbox.spent = false;
    hitbox.frames_left = 0;
    assert!(!hitbox.can_hit(target, &fighter));
}

#[test]
fn test_attack_hitbox_sits_in_front_of_the_fighter() {
    let tuning = FighterTuning::default();
    let mut fighter = standing(0, 100.0, &tuning);

    fighter.facing = Facing::Right;
    let right = attack_hitbox(&fighter, AttackKind::Light, &tuning);
    assert_eq!(right.min.x, fighter.body.right());
    assert_eq!(right.width(), tuning.light_attack.width);

    fighter.facing = Facing::Left;
    let left = attack_hitbox(&fighter, AttackKind::Light, &tuning);
    assert_eq!(left.max.x, fighter.body.left());
    assert_eq!(left.center().y, fighter.body.center().y);
}

#[test]
fn test_hitbox_reaches_an_adjacent_opponent() {
    let tuning = FighterTuning::default();
    let attacker = standing(0, 100.0, &tuning);
    let target = standing(1, 140.0, &tuning);

    let [attacker_entity, target_entity] = entities();
    let area = attack_hitbox(&attacker, AttackKind::Light, &tuning);
    let hitbox = AttackHitbox::new(
        attacker_entity,
        AttackKind::Light,
        area,
        light_hit(attacker.facing.sign()),
        tuning.light_attack.lifetime_frames,
    );

    assert!(hitbox.can_hit(target_entity, &target));
}

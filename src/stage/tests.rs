//! Stage domain: tests for layouts built from stage data.

use bevy::prelude::*;

use super::*;
use crate::content::{PlatformDef, StageDef};

#[test]
fn test_default_layout_has_one_solid_and_two_thin_platforms() {
    let layout = StageLayout::default();

    let solid = layout.platforms.iter().filter(|p| p.is_solid()).count();
    let thin = layout.platforms.iter().filter(|p| p.is_thin()).count();
    assert_eq!(solid, 1);
    assert_eq!(thin, 2);
}

#[test]
fn test_platform_ids_follow_declaration_order() {
    let layout = StageLayout::from_def(&StageDef::default());

    for (index, platform) in layout.platforms.iter().enumerate() {
        assert_eq!(platform.id, PlatformId(index as u16));
        assert_eq!(layout.get(platform.id), Some(platform));
    }
    assert_eq!(layout.get(PlatformId(99)), None);
}

#[test]
fn test_platform_edges_come_from_corner_and_size() {
    let layout = StageLayout::default();
    let base = layout.get(PlatformId(0)).expect("base platform");

    assert_eq!(base.left(), 80.0);
    assert_eq!(base.right(), 880.0);
    assert_eq!(base.bottom(), 50.0);
    assert_eq!(base.top(), 130.0);
}

#[test]
fn test_spawn_points_wrap_around() {
    let layout = StageLayout::default();

    assert_eq!(layout.spawn_point(0), Vec2::new(280.0, 285.0));
    assert_eq!(layout.spawn_point(1), Vec2::new(680.0, 285.0));
    assert_eq!(layout.spawn_point(2), layout.spawn_point(0));
}

#[test]
fn test_spawn_point_without_any_defined_is_origin() {
    let def = StageDef {
        spawn_points: Vec::new(),
        ..StageDef::default()
    };

    assert_eq!(StageLayout::from_def(&def).spawn_point(3), Vec2::ZERO);
}

#[test]
#[should_panic(expected = "does not fit a PlatformId")]
fn test_more_platforms_than_ids_fails_fast() {
    let def = StageDef {
        platforms: vec![PlatformDef::thin(0.0, 0.0, 10.0, 10.0); 65_537],
        ..StageDef::default()
    };

    StageLayout::from_def(&def);
}

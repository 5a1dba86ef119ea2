//! Physics domain: platform-edge detection and clamping.
//!
//! Used while a fighter dodges on the ground so that no dodge velocity can
//! carry it past the edge of the platform it stands on. Every check below
//! goes through [`span_overhang`], so the pre-move and post-move passes can
//! never disagree about where an edge is.

use bevy::prelude::*;

use crate::physics::body::{Body, EDGE_EPSILON, overlap_len};
use crate::stage::Platform;

/// How far a body sticks out past each side of a platform's span.
/// Positive values are overhang; zero or negative means inside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overhang {
    pub left: f32,
    pub right: f32,
}

pub fn span_overhang(body: &Body, platform: &Platform) -> Overhang {
    Overhang {
        left: platform.left() - body.left(),
        right: body.right() - platform.right(),
    }
}

/// The platform whose top the body currently rests on.
/// Solid platforms win over thin ones; otherwise stage order decides.
pub fn find_supporting_platform<'a>(body: &Body, platforms: &'a [Platform]) -> Option<&'a Platform> {
    let mut support: Option<&Platform> = None;
    for platform in platforms.iter().filter(|platform| body.rests_on(platform)) {
        match support {
            Some(current) if !(current.is_thin() && platform.is_solid()) => {}
            _ => support = Some(platform),
        }
    }
    support
}

/// True if translating the body horizontally by `dx` would leave no
/// horizontal overlap with the platform.
pub fn would_move_off_platform(body: &Body, dx: f32, platform: &Platform) -> bool {
    overlap_len(
        body.left() + dx,
        body.right() + dx,
        platform.left(),
        platform.right(),
    ) <= EDGE_EPSILON
}

/// Pull the body's horizontal span back inside the platform's span.
/// Returns true if the body moved. Applying it twice is a no-op.
pub fn clamp_to_platform(body: &mut Body, platform: &Platform) -> bool {
    let before = body.position.x;

    if body.size.x >= platform.width() {
        // Cannot fit; centre it so repeated clamps agree.
        body.set_left(platform.left() + (platform.width() - body.size.x) * 0.5);
    } else {
        let overhang = span_overhang(body, platform);
        if overhang.left > EDGE_EPSILON {
            body.set_left(platform.left());
        } else if overhang.right > EDGE_EPSILON {
            body.set_right(platform.right());
        }
    }

    (body.position.x - before).abs() > EDGE_EPSILON
}

/// Pre-move pass: cancel horizontal velocity that would leave the platform
/// and pull back a body that has already drifted past an edge.
/// Returns true if anything was blocked.
pub fn guard_before_move(body: &mut Body, velocity: &mut Vec2, platform: &Platform) -> bool {
    let mut blocked = false;

    if velocity.x != 0.0 && would_move_off_platform(body, velocity.x, platform) {
        velocity.x = 0.0;
        blocked = true;
    }

    if clamp_to_platform(body, platform) {
        velocity.x = 0.0;
        blocked = true;
    }

    blocked
}

/// Post-move pass, run strictly after the resolver.
pub fn guard_after_move(body: &mut Body, velocity: &mut Vec2, platform: &Platform) -> bool {
    if clamp_to_platform(body, platform) {
        velocity.x = 0.0;
        return true;
    }
    false
}

//! Physics domain: per-frame body-versus-platform resolution.

use bevy::prelude::*;

use crate::physics::body::{Body, EDGE_EPSILON};
use crate::stage::{Platform, PlatformId};

/// Result of resolving one frame of motion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    pub body: Body,
    pub velocity: Vec2,
    pub on_ground: bool,
    /// Thin platform currently being dropped through, if any.
    pub drop_platform: Option<PlatformId>,
    /// Platform landed on this frame, if any.
    pub landed_on: Option<PlatformId>,
}

/// Move `body` by `velocity` against `platforms`.
///
/// Vertical motion is resolved first, then horizontal motion at the
/// resulting height. `drop_platform` is the value returned by the previous
/// frame's resolution; `want_drop_through` is this frame's intent to fall
/// through a thin platform underfoot.
///
/// The returned body never overlaps the interior of a solid platform.
pub fn resolve(
    body: Body,
    velocity: Vec2,
    platforms: &[Platform],
    want_drop_through: bool,
    drop_platform: Option<PlatformId>,
) -> Resolution {
    assert!(
        !platforms.is_empty(),
        "resolve called with an empty platform set"
    );

    let mut body = body;
    let mut velocity = velocity;

    let vertical = resolve_vertical(
        &mut body,
        &mut velocity,
        platforms,
        want_drop_through,
        drop_platform,
    );
    resolve_horizontal(&mut body, &mut velocity, platforms);
    let pushed_up = depenetrate(&mut body, &mut velocity, platforms);

    Resolution {
        body,
        velocity,
        on_ground: vertical.landed_on.is_some() || pushed_up,
        drop_platform: vertical.drop_platform,
        landed_on: vertical.landed_on,
    }
}

struct VerticalOutcome {
    landed_on: Option<PlatformId>,
    drop_platform: Option<PlatformId>,
}

fn resolve_vertical(
    body: &mut Body,
    velocity: &mut Vec2,
    platforms: &[Platform],
    want_drop_through: bool,
    drop_platform: Option<PlatformId>,
) -> VerticalOutcome {
    let prev_body = *body;
    let prev_bottom = body.bottom();
    let prev_top = body.top();
    body.position.y += velocity.y;

    // The dropped platform stays ignored until the body has fully left its span.
    let mut drop_platform = drop_platform.filter(|id| {
        platforms
            .iter()
            .find(|platform| platform.id == *id)
            .is_some_and(|platform| {
                within_vertical_span(&prev_body, platform) && within_vertical_span(body, platform)
            })
    });

    let mut landing: Option<&Platform> = None;
    let mut passing: Option<&Platform> = None;
    let mut ceiling: Option<&Platform> = None;

    for platform in platforms {
        if Some(platform.id) == drop_platform || !body.overlaps_x(platform) {
            continue;
        }

        let from_above = velocity.y <= 0.0
            && prev_bottom >= platform.top() - EDGE_EPSILON
            && body.bottom() <= platform.top() + EDGE_EPSILON;

        if from_above {
            if platform.is_thin() && want_drop_through {
                if passing.is_none_or(|current| platform.top() > current.top()) {
                    passing = Some(platform);
                }
            } else if landing.is_none_or(|current| lands_first(platform, current)) {
                landing = Some(platform);
            }
            continue;
        }

        let from_below = platform.is_solid()
            && velocity.y > 0.0
            && prev_top <= platform.bottom() + EDGE_EPSILON
            && body.top() > platform.bottom();

        if from_below && ceiling.is_none_or(|current| platform.bottom() < current.bottom()) {
            ceiling = Some(platform);
        }
    }

    if let Some(platform) = landing {
        body.set_bottom(platform.top());
        velocity.y = 0.0;
        return VerticalOutcome {
            landed_on: Some(platform.id),
            drop_platform: None,
        };
    }

    if let Some(platform) = passing {
        debug!("Dropping through thin platform {:?}", platform.id);
        drop_platform = Some(platform.id);
    } else if let Some(platform) = ceiling {
        body.set_top(platform.bottom());
        velocity.y = 0.0;
    }

    VerticalOutcome {
        landed_on: None,
        drop_platform,
    }
}

/// Higher tops are met first; equal tops prefer solid over thin.
fn lands_first(candidate: &Platform, current: &Platform) -> bool {
    if (candidate.top() - current.top()).abs() <= EDGE_EPSILON {
        candidate.is_solid() && current.is_thin()
    } else {
        candidate.top() > current.top()
    }
}

fn within_vertical_span(body: &Body, platform: &Platform) -> bool {
    let cleared_above = body.bottom() > platform.top() + EDGE_EPSILON;
    let cleared_below = body.top() <= platform.bottom();
    !cleared_above && !cleared_below
}

fn resolve_horizontal(body: &mut Body, velocity: &mut Vec2, platforms: &[Platform]) {
    if velocity.x == 0.0 {
        return;
    }

    let prev_left = body.left();
    let prev_right = body.right();
    body.position.x += velocity.x;

    let mut blocking_edge: Option<f32> = None;
    for platform in platforms.iter().filter(|platform| platform.is_solid()) {
        if !body.overlaps_interior(platform) {
            continue;
        }

        if velocity.x > 0.0 && prev_right <= platform.left() + EDGE_EPSILON {
            blocking_edge = Some(blocking_edge.map_or(platform.left(), |edge| edge.min(platform.left())));
        } else if velocity.x < 0.0 && prev_left >= platform.right() - EDGE_EPSILON {
            blocking_edge =
                Some(blocking_edge.map_or(platform.right(), |edge| edge.max(platform.right())));
        }
    }

    if let Some(edge) = blocking_edge {
        if velocity.x > 0.0 {
            body.set_right(edge);
        } else {
            body.set_left(edge);
        }
        velocity.x = 0.0;
    }
}

/// Push the body out of any solid interior it still overlaps, along the axis
/// needing the smallest correction. Returns true if the body was pushed up
/// onto a platform.
fn depenetrate(body: &mut Body, velocity: &mut Vec2, platforms: &[Platform]) -> bool {
    let mut pushed_up = false;

    for platform in platforms.iter().filter(|platform| platform.is_solid()) {
        if !body.overlaps_interior(platform) {
            continue;
        }

        let up = platform.top() - body.bottom();
        let down = body.top() - platform.bottom();
        let left = body.right() - platform.left();
        let right = platform.right() - body.left();
        let smallest = up.min(down).min(left).min(right);

        if smallest == up {
            body.set_bottom(platform.top());
            velocity.y = velocity.y.max(0.0);
            pushed_up = true;
        } else if smallest == down {
            body.set_top(platform.bottom());
            velocity.y = velocity.y.min(0.0);
        } else if smallest == left {
            body.set_right(platform.left());
            velocity.x = velocity.x.min(0.0);
        } else {
            body.set_left(platform.right());
            velocity.x = velocity.x.max(0.0);
        }
        debug!(
            "Depenetrated body from solid platform {:?} by {:.3}",
            platform.id, smallest
        );
    }

    pushed_up
}

/// Add one frame of gravity, never exceeding the maximum fall speed.
pub fn apply_gravity(velocity: &mut Vec2, gravity: f32, max_fall_speed: f32) {
    velocity.y = (velocity.y - gravity).max(-max_fall_speed);
}

/// Scale horizontal velocity by the ground or air friction factor; tiny
/// residual speeds snap to zero.
pub fn apply_horizontal_friction(
    velocity: &mut Vec2,
    on_ground: bool,
    ground_friction: f32,
    air_friction: f32,
    dead_zone: f32,
) {
    let factor = if on_ground { ground_friction } else { air_friction };
    velocity.x *= factor;
    if velocity.x.abs() < dead_zone {
        velocity.x = 0.0;
    }
}

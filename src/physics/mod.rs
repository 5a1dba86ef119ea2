//! Physics domain: kinematic body resolution against stage platforms.
//!
//! Everything here is a pure function of its inputs; fighters call into it
//! from their per-frame update.

mod body;
mod ledge;
mod resolver;


pub use body::{Body, EDGE_EPSILON, overlap_len};
pub use ledge::{
    Overhang, clamp_to_platform, find_supporting_platform, guard_after_move, guard_before_move,
    span_overhang, would_move_off_platform,
};
pub use resolver::{Resolution, apply_gravity, apply_horizontal_friction, resolve};

//! Collision detection
//!
//! Everything in ZayDroids collides as a circle: bullets are tiny fixed-radius
//! circles, the ship uses its hull radius, asteroids use their tier radius.

use glam::Vec2;

/// True when two circles touch or overlap. Touching counts.
#[inline]
pub fn circles_overlap(c1: Vec2, r1: f32, c2: Vec2, r2: f32) -> bool {
    let reach = r1 + r2;
    c1.distance_squared(c2) <= reach * reach
}

//! Movement domain: applies a resolved move to the body.

use bevy::prelude::*;

use crate::movement::resolver::Resolution;

/// Translate by the resolved displacement, then drop vertical velocity that
/// ran into a floor or ceiling so gravity does not pile up while resting.
pub fn apply_motion(position: &mut Vec2, velocity: &mut Vec2, resolution: &Resolution) {
    *position += resolution.displacement;

    if resolution.collision.grounded || resolution.collision.ceiling {
        velocity.y = 0.0;
    }
}

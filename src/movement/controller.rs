//! Movement domain: one full controller tick, independent of the ECS.

use bevy::prelude::*;

use crate::movement::applier::apply_motion;
use crate::movement::integrator::{integrate_horizontal, integrate_vertical};
use crate::movement::raycast::{RayCaster, RaycastOrigins};
use crate::movement::resolver::{Resolution, resolve};
use crate::movement::{ControllerTuning, KinematicBody, MovementInput, MovementState};

/// Integrate, resolve and apply one tick of motion.
///
/// Velocity is integrated against the contacts of the previous tick; the
/// contacts found by this tick replace them in `state`.
pub fn step<C: RayCaster>(
    tuning: &ControllerTuning,
    body: &mut KinematicBody,
    state: &mut MovementState,
    position: &mut Vec2,
    input: &MovementInput,
    dt: f32,
    caster: &mut C,
) -> Resolution {
    let grounded = state.on_ground();

    body.velocity.x = integrate_horizontal(
        tuning,
        body.velocity.x,
        &mut state.smoothing_velocity,
        input.axis(),
        grounded,
        dt,
    );
    body.velocity.y = integrate_vertical(
        tuning,
        body.velocity.y,
        &mut state.jump_timer,
        input,
        grounded,
        dt,
    );

    let origins = RaycastOrigins::around(*position, body.half_extents, tuning.skin_width);
    let resolution = resolve(
        caster,
        &origins,
        body.fan(),
        tuning.skin_width,
        body.velocity * dt,
    );

    apply_motion(position, &mut body.velocity, &resolution);
    state.collision = resolution.collision;

    resolution
}

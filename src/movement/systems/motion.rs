//! Movement domain: per-frame controller tick over the avian2d level.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::controller::step;
use crate::movement::raycast::{LevelCaster, TracingCaster};
use crate::movement::{
    ControllerTuning, KinematicBody, MovementInput, MovementState, Player, RayDebug,
};

pub(crate) fn move_player(
    time: Res<Time>,
    tuning: Res<ControllerTuning>,
    input: Res<MovementInput>,
    spatial_query: SpatialQuery,
    mut ray_debug: ResMut<RayDebug>,
    mut query: Query<(&mut Transform, &mut KinematicBody, &mut MovementState), With<Player>>,
) {
    let dt = time.delta_secs();
    let filter = tuning.obstruction_filter();
    let ray_trace = &mut *ray_debug;
    ray_trace.segments.clear();

    for (mut transform, mut body, mut state) in &mut query {
        let was_on_ground = state.on_ground();
        let mut position = transform.translation.truncate();

        let trace = ray_trace.enabled.then_some(&mut ray_trace.segments);
        let mut caster = TracingCaster::new(LevelCaster::new(&spatial_query, &filter), trace);
        step(
            &tuning,
            &mut body,
            &mut state,
            &mut position,
            &input,
            dt,
            &mut caster,
        );

        transform.translation.x = position.x;
        transform.translation.y = position.y;

        if state.on_ground() && !was_on_ground {
            debug!("Landed: position={:?}, velocity={:?}", position, body.velocity);
        } else if !state.on_ground() && was_on_ground {
            debug!("Left ground: position={:?}, velocity={:?}", position, body.velocity);
        }
    }
}

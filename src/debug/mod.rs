//! Debug tools for tuning the controller.
//!
//! Features:
//! - F3 toggles drawing of every ray cast by the controller
//! - F5 puts the player back at its spawn point at rest

use bevy::prelude::*;

use crate::movement::{KinematicBody, MovementSet, MovementState, Player, PlayerSpawn, RayDebug};

const CLEAR_RAY: Color = Color::srgb(0.2, 0.9, 0.3);
const HIT_RAY: Color = Color::srgb(0.95, 0.25, 0.2);

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (toggle_ray_debug, reset_player).before(MovementSet))
            .add_systems(
                Update,
                draw_ray_fans
                    .after(MovementSet)
                    .run_if(|debug: Res<RayDebug>| debug.enabled),
            );
    }
}

/// Toggle ray drawing with F3
fn toggle_ray_debug(keyboard: Res<ButtonInput<KeyCode>>, mut ray_debug: ResMut<RayDebug>) {
    if keyboard.just_pressed(KeyCode::F3) {
        ray_debug.enabled = !ray_debug.enabled;
        if !ray_debug.enabled {
            ray_debug.segments.clear();
        }
        info!("Ray debug: {}", ray_debug.enabled);
    }
}

/// Reset the player with F5
fn reset_player(
    keyboard: Res<ButtonInput<KeyCode>>,
    spawn: Res<PlayerSpawn>,
    mut query: Query<(&mut Transform, &mut KinematicBody, &mut MovementState), With<Player>>,
) {
    if !keyboard.just_pressed(KeyCode::F5) {
        return;
    }

    for (mut transform, mut body, mut state) in &mut query {
        transform.translation.x = spawn.position.x;
        transform.translation.y = spawn.position.y;
        body.velocity = Vec2::ZERO;
        *state = MovementState::default();
        info!("Player reset to {:?}", spawn.position);
    }
}

fn draw_ray_fans(mut gizmos: Gizmos, ray_debug: Res<RayDebug>) {
    for segment in &ray_debug.segments {
        let color = if segment.hit { HIT_RAY } else { CLEAR_RAY };
        gizmos.line_2d(segment.origin, segment.end, color);
    }
}

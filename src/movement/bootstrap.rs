//! Movement domain: player bootstrap from the loaded controller config.

use bevy::prelude::*;

use crate::movement::{
    ControllerTuning, Facing, KinematicBody, MovementState, Player, PlayerSpawn,
};
use crate::sprites::{AnimationController, AnimationState, ClipManifest};

pub(crate) fn spawn_player(
    mut commands: Commands,
    tuning: Res<ControllerTuning>,
    spawn: Res<PlayerSpawn>,
    clips: Res<ClipManifest>,
    existing_player: Query<Entity, With<Player>>,
) {
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let body = KinematicBody::new(spawn.size * 0.5, &tuning);
    let idle = clips.clip(AnimationState::Idle);
    info!(
        "Spawning player: position={:?}, size={:?}, fan={:?}",
        spawn.position,
        spawn.size,
        body.fan()
    );

    commands.spawn((
        Player,
        body,
        MovementState::default(),
        Facing::default(),
        AnimationController::new(idle),
        Sprite {
            color: idle.color(),
            custom_size: Some(spawn.size),
            ..default()
        },
        Transform::from_translation(spawn.position.extend(1.0)),
    ));
}

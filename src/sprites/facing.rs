//! Facing direction: mirrors the body when horizontal motion turns around.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::movement::{Facing, KinematicBody};

/// New facing if `velocity_x` strictly points away from `current`.
/// Zero velocity never flips.
pub fn facing_flip(current: Facing, velocity_x: f32) -> Option<Facing> {
    match current {
        Facing::Left if velocity_x > 0.0 => Some(Facing::Right),
        Facing::Right if velocity_x < 0.0 => Some(Facing::Left),
        _ => None,
    }
}

/// Message fired when the body turns around.
#[derive(Debug)]
pub struct FacingFlipped {
    pub entity: Entity,
    /// Horizontal scale sign after the flip.
    pub scale_sign: f32,
}

impl Message for FacingFlipped {}

pub fn flip_facing(
    mut query: Query<(Entity, &KinematicBody, &mut Facing, &mut Transform)>,
    mut flipped_events: MessageWriter<FacingFlipped>,
) {
    for (entity, body, mut facing, mut transform) in &mut query {
        let Some(next) = facing_flip(*facing, body.velocity.x) else {
            continue;
        };

        *facing = next;
        transform.scale.x = -transform.scale.x;
        debug!("Facing {:?}, scale.x={}", next, transform.scale.x);
        flipped_events.write(FacingFlipped {
            entity,
            scale_sign: transform.scale.x.signum(),
        });
    }
}

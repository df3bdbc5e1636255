//! Sprites module for presenting the controller's motion.
//!
//! This module handles:
//! - Loading the animation clip manifest from JSON
//! - Selecting Idle / Run / Push / Jump / Fall from contacts and velocity
//! - Frame playback
//! - Mirroring the sprite when the player turns around

pub mod animation;
pub mod facing;
pub mod manifest;

#[cfg(test)]
mod tests;

use bevy::prelude::*;

pub use animation::*;
pub use facing::*;
pub use manifest::*;

use crate::movement::MovementSet;

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ClipManifest>()
            .add_message::<AnimationStateChanged>()
            .add_message::<FacingFlipped>()
            .add_systems(PreStartup, load_clip_manifest)
            .add_systems(
                Update,
                (drive_animation, flip_facing, update_animation_frames)
                    .chain()
                    .after(MovementSet),
            );
    }
}

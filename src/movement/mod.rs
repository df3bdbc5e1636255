//! Movement domain: raycast kinematic controller plugin wiring and public
//! exports.
//!
//! Per frame: sample input, integrate velocity, sweep the ray fans against
//! the level, apply the clamped displacement. Presentation runs after
//! [`MovementSet`].

mod applier;
mod bootstrap;
mod components;
mod controller;
mod integrator;
mod raycast;
mod resolver;
mod resources;
mod systems;


pub use components::{Facing, GameLayer, Ground, KinematicBody, MovementState, Player, Wall};
pub use controller::step;
pub use integrator::{JumpTimer, smooth_damp};
pub use raycast::{RayCaster, RayFan, RayHit, RaySegment, RaycastOrigins};
pub use resolver::{CollisionState, Resolution, resolve};
pub use resources::{ControllerTuning, MIN_RAY_COUNT, MovementInput, PlayerSpawn, RayDebug};

use bevy::prelude::*;

use crate::movement::bootstrap::spawn_player;
use crate::movement::systems::{move_player, read_input};

/// Input sampling and the controller tick, in that order.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct MovementSet;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ControllerTuning>()
            .init_resource::<PlayerSpawn>()
            .init_resource::<MovementInput>()
            .init_resource::<RayDebug>()
            .add_systems(Startup, spawn_player)
            .add_systems(
                Update,
                (read_input, move_player).chain().in_set(MovementSet),
            );
    }
}

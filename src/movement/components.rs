//! Movement domain: components and physics layers for the kinematic body.

use avian2d::prelude::*;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::raycast::RayFan;
use crate::movement::resolver::CollisionState;
use crate::movement::{ControllerTuning, JumpTimer};

/// Physics layers for ray filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum GameLayer {
    #[default]
    Default,
    /// Floors and platforms
    Ground,
    /// Wall surfaces
    Wall,
    /// Player character (never part of the obstruction mask)
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// Box-shaped body moved by the ray controller instead of the physics solver.
///
/// Position lives in the entity's `Transform`; everything else the controller
/// needs between ticks lives here.
#[derive(Component, Debug, Clone)]
pub struct KinematicBody {
    pub half_extents: Vec2,
    pub velocity: Vec2,
    fan: RayFan,
}

impl KinematicBody {
    /// `half_extents` must be non-zero on both axes.
    pub fn new(half_extents: Vec2, tuning: &ControllerTuning) -> Self {
        Self {
            half_extents,
            velocity: Vec2::ZERO,
            fan: RayFan::new(half_extents, tuning),
        }
    }

    /// Change the box size, re-deriving the ray spacing.
    pub fn resize(&mut self, half_extents: Vec2, tuning: &ControllerTuning) {
        self.half_extents = half_extents;
        self.fan = RayFan::new(half_extents, tuning);
    }

    pub fn fan(&self) -> &RayFan {
        &self.fan
    }
}

/// Per-tick controller state carried into the next tick.
#[derive(Component, Debug, Default, Clone)]
pub struct MovementState {
    /// Contacts found by the most recent move.
    pub collision: CollisionState,
    pub jump_timer: JumpTimer,
    /// Rate of change kept by the horizontal smooth damp.
    pub smoothing_velocity: f32,
}

impl MovementState {
    pub fn on_ground(&self) -> bool {
        self.collision.grounded
    }
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }
}

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for wall colliders
#[derive(Component, Debug)]
pub struct Wall;

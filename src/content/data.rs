//! Data definitions for the controller RON file.
//!
//! These structs mirror assets/data/controller.ron and are converted into the
//! movement resources once validated.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::{ControllerTuning, GameLayer, PlayerSpawn};

// ============================================================================
// Controller (controller.ron)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ControllerDef {
    pub schema_version: u32,
    pub body: BodyDef,
    pub collision: CollisionDef,
    pub motion: MotionDef,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BodyDef {
    /// Full box size in world units.
    pub size: (f32, f32),
    pub spawn: (f32, f32),
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CollisionDef {
    pub skin_width: f32,
    pub horizontal_ray_count: u32,
    pub vertical_ray_count: u32,
    pub obstruction_mask: Vec<GameLayer>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MotionDef {
    pub max_speed: f32,
    pub jump_speed: f32,
    pub jump_sustain: f32,
    pub gravity: f32,
    pub ground_smoothing: f32,
    pub air_smoothing: f32,
}

impl Default for ControllerDef {
    fn default() -> Self {
        Self::from_resources(&ControllerTuning::default(), &PlayerSpawn::default())
    }
}

impl ControllerDef {
    pub fn from_resources(tuning: &ControllerTuning, spawn: &PlayerSpawn) -> Self {
        Self {
            schema_version: 1,
            body: BodyDef {
                size: spawn.size.into(),
                spawn: spawn.position.into(),
            },
            collision: CollisionDef {
                skin_width: tuning.skin_width,
                horizontal_ray_count: tuning.horizontal_ray_count,
                vertical_ray_count: tuning.vertical_ray_count,
                obstruction_mask: tuning.obstruction_mask.clone(),
            },
            motion: MotionDef {
                max_speed: tuning.max_speed,
                jump_speed: tuning.jump_speed,
                jump_sustain: tuning.jump_sustain,
                gravity: tuning.gravity,
                ground_smoothing: tuning.ground_smoothing,
                air_smoothing: tuning.air_smoothing,
            },
        }
    }

    pub fn tuning(&self) -> ControllerTuning {
        ControllerTuning {
            skin_width: self.collision.skin_width,
            horizontal_ray_count: self.collision.horizontal_ray_count,
            vertical_ray_count: self.collision.vertical_ray_count,
            max_speed: self.motion.max_speed,
            jump_speed: self.motion.jump_speed,
            jump_sustain: self.motion.jump_sustain,
            gravity: self.motion.gravity,
            ground_smoothing: self.motion.ground_smoothing,
            air_smoothing: self.motion.air_smoothing,
            obstruction_mask: self.collision.obstruction_mask.clone(),
        }
    }

    pub fn player_spawn(&self) -> PlayerSpawn {
        PlayerSpawn {
            position: Vec2::from(self.body.spawn),
            size: Vec2::from(self.body.size),
        }
    }
}

//! Movement domain: tuning and input resources.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::GameLayer;
use crate::movement::raycast::RaySegment;

/// Fewest rays a fan may have: one at each extreme of the box edge.
pub const MIN_RAY_COUNT: u32 = 2;

/// Load-time constants for a controller instance.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct ControllerTuning {
    /// Inset of the ray origins and padding of every ray. Must be > 0.
    pub skin_width: f32,
    pub horizontal_ray_count: u32,
    pub vertical_ray_count: u32,
    pub max_speed: f32,
    pub jump_speed: f32,
    /// Seconds a held jump keeps re-asserting `jump_speed`.
    pub jump_sustain: f32,
    /// Magnitude, applied downward.
    pub gravity: f32,
    /// Smooth damp time constants in seconds, independent of frame rate.
    /// Not pre-multiplied by the tick length, so a value tuned in frames
    /// must be converted (frames / 60 at 60 Hz).
    pub ground_smoothing: f32,
    pub air_smoothing: f32,
    pub obstruction_mask: Vec<GameLayer>,
}

impl Default for ControllerTuning {
    fn default() -> Self {
        Self {
            skin_width: 1.0,
            horizontal_ray_count: 4,
            vertical_ray_count: 3,
            max_speed: 320.0,
            jump_speed: 420.0,
            jump_sustain: 0.25,
            gravity: 1800.0,
            ground_smoothing: 0.05,
            air_smoothing: 0.2,
            obstruction_mask: vec![GameLayer::Ground, GameLayer::Wall],
        }
    }
}

impl ControllerTuning {
    pub fn horizontal_rays(&self) -> usize {
        self.horizontal_ray_count.max(MIN_RAY_COUNT) as usize
    }

    pub fn vertical_rays(&self) -> usize {
        self.vertical_ray_count.max(MIN_RAY_COUNT) as usize
    }

    /// Raise both ray counts to the minimum, returning true if anything changed.
    pub fn clamp_ray_counts(&mut self) -> bool {
        let before = (self.horizontal_ray_count, self.vertical_ray_count);
        self.horizontal_ray_count = self.horizontal_ray_count.max(MIN_RAY_COUNT);
        self.vertical_ray_count = self.vertical_ray_count.max(MIN_RAY_COUNT);
        before != (self.horizontal_ray_count, self.vertical_ray_count)
    }

    pub fn obstruction_filter(&self) -> SpatialQueryFilter {
        let bits = self
            .obstruction_mask
            .iter()
            .fold(0, |bits, layer| bits | layer.to_bits());
        SpatialQueryFilter::from_mask(LayerMask(bits))
    }
}

/// Where the player appears and how big its box is.
#[derive(Resource, Debug, Clone)]
pub struct PlayerSpawn {
    pub position: Vec2,
    pub size: Vec2,
}

impl Default for PlayerSpawn {
    fn default() -> Self {
        Self {
            position: Vec2::new(0.0, 100.0),
            size: Vec2::new(24.0, 48.0),
        }
    }
}

/// Input sampled once per tick. Edge flags are true only on the tick the
/// jump control changes.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct MovementInput {
    pub move_right_held: bool,
    pub move_left_held: bool,
    pub jump_held: bool,
    pub jump_pressed: bool,
    pub jump_released: bool,
}

impl MovementInput {
    /// Directional intent in {-1, 0, 1}. Right wins when both are held.
    pub fn axis(&self) -> f32 {
        if self.move_right_held {
            1.0
        } else if self.move_left_held {
            -1.0
        } else {
            0.0
        }
    }
}

/// Rays cast during the last tick, kept while `enabled` for debug drawing.
#[derive(Resource, Debug, Default)]
pub struct RayDebug {
    pub enabled: bool,
    pub segments: Vec<RaySegment>,
}

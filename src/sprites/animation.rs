//! Animation state selection and playback.
//!
//! The state is chosen from the contacts and velocity of the last controller
//! tick and re-asserted every frame; playback only restarts when it changes.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use super::{ClipDef, ClipManifest};
use crate::movement::{CollisionState, KinematicBody, MovementState};

/// Animation states for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationState {
    #[default]
    Idle,
    Run,
    Push,
    Jump,
    Fall,
}

impl AnimationState {
    pub const ALL: [AnimationState; 5] = [
        AnimationState::Idle,
        AnimationState::Run,
        AnimationState::Push,
        AnimationState::Jump,
        AnimationState::Fall,
    ];

    /// Key used in the clip manifest and sprite names.
    pub fn key(self) -> &'static str {
        match self {
            AnimationState::Idle => "idle",
            AnimationState::Run => "run",
            AnimationState::Push => "push",
            AnimationState::Jump => "jump",
            AnimationState::Fall => "fall",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|state| state.key() == key)
    }
}

/// Pick the animation for this tick.
///
/// Airborne with a vertical velocity of exactly zero has no animation of its
/// own: `None` means keep whatever is playing.
pub fn select_animation(collision: &CollisionState, velocity: Vec2) -> Option<AnimationState> {
    if collision.grounded {
        if velocity.x != 0.0 {
            if collision.pushing() {
                Some(AnimationState::Push)
            } else {
                Some(AnimationState::Run)
            }
        } else {
            Some(AnimationState::Idle)
        }
    } else if velocity.y > 0.0 {
        Some(AnimationState::Jump)
    } else if velocity.y < 0.0 {
        Some(AnimationState::Fall)
    } else {
        None
    }
}

/// Component for animation playback on the player sprite.
#[derive(Component, Debug)]
pub struct AnimationController {
    /// Current animation state.
    pub state: AnimationState,
    /// Current frame index (0-based).
    pub current_frame: u32,
    /// Total frames in current animation.
    pub total_frames: u32,
    /// Time accumulator for frame timing.
    pub frame_timer: f32,
    /// Seconds per frame.
    pub frame_duration: f32,
    /// Whether the animation should loop.
    pub looping: bool,
    /// Whether the animation has finished (for non-looping).
    pub finished: bool,
}

impl AnimationController {
    /// Start in Idle, playing the given idle clip from its first frame.
    pub fn new(idle: &ClipDef) -> Self {
        Self {
            state: AnimationState::Idle,
            current_frame: 0,
            total_frames: idle.frames,
            frame_timer: 0.0,
            frame_duration: idle.frame_duration,
            looping: idle.looping,
            finished: false,
        }
    }

    /// Play `state`. Re-playing the current state keeps its frame; returns
    /// true only when the state changed.
    pub fn play(&mut self, state: AnimationState, clip: &ClipDef) -> bool {
        if self.state == state {
            return false;
        }

        self.state = state;
        self.current_frame = 0;
        self.frame_timer = 0.0;
        self.finished = false;
        self.total_frames = clip.frames;
        self.frame_duration = clip.frame_duration;
        self.looping = clip.looping;
        true
    }

    /// Advance playback by `dt`; returns true when a non-looping clip ends.
    pub fn advance(&mut self, dt: f32) -> bool {
        if self.finished {
            return false;
        }

        self.frame_timer += dt;
        while self.frame_timer >= self.frame_duration {
            self.frame_timer -= self.frame_duration;
            self.current_frame += 1;

            if self.current_frame >= self.total_frames {
                if self.looping {
                    self.current_frame = 0;
                } else {
                    self.current_frame = self.total_frames - 1;
                    self.finished = true;
                    return true;
                }
            }
        }
        false
    }
}

/// Message fired when animation state changes.
#[derive(Debug)]
pub struct AnimationStateChanged {
    pub entity: Entity,
    pub from: AnimationState,
    pub to: AnimationState,
}

impl Message for AnimationStateChanged {}

/// Feed the selected state to the controller every frame.
pub fn drive_animation(
    manifest: Res<ClipManifest>,
    mut query: Query<(
        Entity,
        &KinematicBody,
        &MovementState,
        &mut AnimationController,
        &mut Sprite,
    )>,
    mut changed_events: MessageWriter<AnimationStateChanged>,
) {
    for (entity, body, state, mut controller, mut sprite) in &mut query {
        let Some(next) = select_animation(&state.collision, body.velocity) else {
            continue;
        };

        let clip = manifest.clip(next);
        let from = controller.state;
        if controller.play(next, clip) {
            sprite.color = clip.color();
            debug!("Animation {:?} -> {:?}", from, next);
            changed_events.write(AnimationStateChanged {
                entity,
                from,
                to: next,
            });
        }
    }
}

/// System that updates animation frames based on time.
/// One-shot clips hold their last frame until the state changes.
pub fn update_animation_frames(
    time: Res<Time>,
    mut query: Query<(Entity, &mut AnimationController)>,
) {
    for (entity, mut controller) in &mut query {
        if controller.advance(time.delta_secs()) {
            debug!("Animation {:?} finished on {:?}", controller.state, entity);
        }
    }
}

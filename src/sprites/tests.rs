//! Sprites domain: tests for animation selection, playback and facing.

use bevy::prelude::*;

use super::{AnimationController, AnimationState, ClipManifest, facing_flip, select_animation};
use crate::movement::{CollisionState, Facing};

fn grounded() -> CollisionState {
    CollisionState {
        grounded: true,
        ..Default::default()
    }
}

fn pushing_on_ground() -> CollisionState {
    let mut world = World::new();
    CollisionState {
        grounded: true,
        horizontal: Some(world.spawn_empty().id()),
        ..Default::default()
    }
}

// -----------------------------------------------------------------------------
// Selection tests
// -----------------------------------------------------------------------------

#[test]
fn test_grounded_selection() {
    assert_eq!(
        select_animation(&grounded(), Vec2::ZERO),
        Some(AnimationState::Idle)
    );
    assert_eq!(
        select_animation(&grounded(), Vec2::new(-3.0, 0.0)),
        Some(AnimationState::Run)
    );
    assert_eq!(
        select_animation(&pushing_on_ground(), Vec2::new(3.0, 0.0)),
        Some(AnimationState::Push)
    );
    assert_eq!(
        select_animation(&pushing_on_ground(), Vec2::ZERO),
        Some(AnimationState::Idle)
    );
}

#[test]
fn test_airborne_selection() {
    let airborne = CollisionState::default();
    assert_eq!(
        select_animation(&airborne, Vec2::new(5.0, 10.0)),
        Some(AnimationState::Jump)
    );
    assert_eq!(
        select_animation(&airborne, Vec2::new(5.0, -10.0)),
        Some(AnimationState::Fall)
    );
}

#[test]
fn test_airborne_at_apex_keeps_previous_animation() {
    let ceiling = CollisionState {
        ceiling: true,
        ..Default::default()
    };
    assert_eq!(select_animation(&CollisionState::default(), Vec2::X), None);
    assert_eq!(select_animation(&ceiling, Vec2::ZERO), None);
}

#[test]
fn test_pushing_while_airborne_is_not_push() {
    let mut world = World::new();
    let wall_contact = CollisionState {
        horizontal: Some(world.spawn_empty().id()),
        ..Default::default()
    };
    assert_eq!(
        select_animation(&wall_contact, Vec2::new(4.0, -1.0)),
        Some(AnimationState::Fall)
    );
}

// -----------------------------------------------------------------------------
// Playback tests
// -----------------------------------------------------------------------------

#[test]
fn test_replaying_same_state_keeps_frame() {
    let manifest = ClipManifest::default();
    let mut controller = AnimationController::new(manifest.clip(AnimationState::Idle));
    controller.current_frame = 2;

    assert!(!controller.play(AnimationState::Idle, manifest.clip(AnimationState::Idle)));
    assert_eq!(controller.current_frame, 2);

    assert!(controller.play(AnimationState::Run, manifest.clip(AnimationState::Run)));
    assert_eq!(controller.current_frame, 0);
    assert_eq!(controller.state, AnimationState::Run);
    assert_eq!(controller.total_frames, 6);
}

#[test]
fn test_looping_clip_wraps() {
    let manifest = ClipManifest::default();
    let mut controller = AnimationController::new(manifest.clip(AnimationState::Idle));
    controller.play(AnimationState::Run, manifest.clip(AnimationState::Run));

    for _ in 0..6 {
        assert!(!controller.advance(0.125));
    }
    assert!(controller.current_frame < 6);
    assert!(!controller.finished);
}

#[test]
fn test_one_shot_clip_finishes_once() {
    let manifest = ClipManifest::default();
    let mut controller = AnimationController::new(manifest.clip(AnimationState::Idle));
    controller.play(AnimationState::Jump, manifest.clip(AnimationState::Jump));

    assert!(controller.advance(1.0));
    assert!(controller.finished);
    assert_eq!(controller.current_frame, 1);
    assert!(!controller.advance(1.0));
}

#[test]
fn test_controller_starts_with_manifest_idle_clip() {
    let json = r#"{
        "version": 1,
        "clips": {
            "idle": { "frames": 8, "frame_duration": 0.25, "looping": false }
        }
    }"#;
    let manifest = ClipManifest::from_json(json).expect("valid manifest");
    let idle = manifest.clip(AnimationState::Idle);
    let mut controller = AnimationController::new(idle);

    assert_eq!(controller.total_frames, 8);
    assert_eq!(controller.frame_duration, 0.25);
    assert!(!controller.looping);

    // Re-asserting Idle on the first tick keeps the loaded clip.
    assert!(!controller.play(AnimationState::Idle, idle));
    assert_eq!(controller.total_frames, 8);
    assert!(controller.advance(2.0));
    assert_eq!(controller.current_frame, 7);
}

// -----------------------------------------------------------------------------
// Manifest tests
// -----------------------------------------------------------------------------

#[test]
fn test_state_keys_round_trip() {
    for state in AnimationState::ALL {
        assert_eq!(AnimationState::from_key(state.key()), Some(state));
    }
    assert_eq!(AnimationState::from_key("walk"), None);
}

#[test]
fn test_manifest_overrides_listed_clips_only() {
    let json = r#"{
        "version": 2,
        "clips": {
            "run": { "frames": 8, "frame_duration": 0.05, "looping": true }
        }
    }"#;
    let manifest = ClipManifest::from_json(json).expect("valid manifest");
    assert_eq!(manifest.version, 2);
    assert_eq!(manifest.clip(AnimationState::Run).frames, 8);
    assert_eq!(manifest.clip(AnimationState::Run).tint, [0.9, 0.9, 0.9]);
    assert_eq!(
        manifest.clip(AnimationState::Idle),
        ClipManifest::default().clip(AnimationState::Idle)
    );
}

#[test]
fn test_manifest_rejects_unknown_state_and_empty_clip() {
    let unknown = r#"{ "version": 1, "clips": { "walk": { "frames": 2, "frame_duration": 0.1, "looping": true } } }"#;
    assert!(ClipManifest::from_json(unknown).is_err());

    let empty = r#"{ "version": 1, "clips": { "idle": { "frames": 0, "frame_duration": 0.1, "looping": true } } }"#;
    assert!(ClipManifest::from_json(empty).is_err());

    assert!(ClipManifest::from_json("not json").is_err());
}

// -----------------------------------------------------------------------------
// Facing tests
// -----------------------------------------------------------------------------

#[test]
fn test_facing_flips_on_strict_sign_change() {
    assert_eq!(facing_flip(Facing::Left, 2.0), Some(Facing::Right));
    assert_eq!(facing_flip(Facing::Right, -2.0), Some(Facing::Left));
    assert_eq!(facing_flip(Facing::Right, 2.0), None);
    assert_eq!(facing_flip(Facing::Left, -2.0), None);
    assert_eq!(facing_flip(Facing::Left, 0.0), None);
    assert_eq!(facing_flip(Facing::Right, -0.0), None);
}

#[test]
fn test_facing_flip_is_idempotent() {
    let mut facing = Facing::Left;
    let mut flips = 0;
    for _ in 0..2 {
        if let Some(next) = facing_flip(facing, 7.0) {
            facing = next;
            flips += 1;
        }
    }
    assert_eq!(flips, 1);
    assert_eq!(facing, Facing::Right);
    assert_eq!(facing.sign(), 1.0);
}

//! Content domain: tests for controller parsing, validation and fallback.

use std::fs;
use std::path::Path;

use super::{ControllerDef, controller_or_default, parse_controller, validate_controller};
use crate::movement::{ControllerTuning, GameLayer};

const SHIPPED: &str = include_str!("../../assets/data/controller.ron");

fn fields(def: &ControllerDef) -> Vec<&'static str> {
    validate_controller(def).iter().map(|e| e.field).collect()
}

// -----------------------------------------------------------------------------
// Parsing tests
// -----------------------------------------------------------------------------

#[test]
fn test_shipped_controller_matches_defaults() {
    let def = parse_controller("controller.ron", SHIPPED).expect("shipped file parses");
    assert_eq!(def, ControllerDef::default());
    assert!(validate_controller(&def).is_empty());
}

#[test]
fn test_default_def_round_trips_tuning() {
    let def = ControllerDef::default();
    assert_eq!(def.tuning(), ControllerTuning::default());
    assert_eq!(def.player_spawn().size, bevy::math::Vec2::new(24.0, 48.0));
}

#[test]
fn test_parse_error_names_file() {
    let err = parse_controller("broken.ron", "(schema_version: 1,").unwrap_err();
    assert_eq!(err.file, "broken.ron");
    assert!(err.to_string().starts_with("Failed to load broken.ron"));
}

#[test]
fn test_obstruction_mask_parses_layer_names() {
    let text = SHIPPED.replace("[Ground, Wall]", "[Ground]");
    let def = parse_controller("controller.ron", &text).expect("parses");
    assert_eq!(def.collision.obstruction_mask, vec![GameLayer::Ground]);
}

// -----------------------------------------------------------------------------
// Validation tests
// -----------------------------------------------------------------------------

#[test]
fn test_non_positive_skin_is_rejected() {
    let mut def = ControllerDef::default();
    def.collision.skin_width = 0.0;
    assert!(fields(&def).contains(&"collision.skin_width"));
}

#[test]
fn test_degenerate_box_is_rejected() {
    let mut def = ControllerDef::default();
    def.body.size = (0.0, 48.0);
    assert!(fields(&def).contains(&"body.size"));

    // Skin eats the whole box.
    let mut def = ControllerDef::default();
    def.body.size = (2.0, 48.0);
    assert_eq!(fields(&def), vec!["body.size"]);
}

#[test]
fn test_low_ray_counts_are_not_errors() {
    let mut def = ControllerDef::default();
    def.collision.horizontal_ray_count = 0;
    def.collision.vertical_ray_count = 1;
    assert!(validate_controller(&def).is_empty());
}

#[test]
fn test_motion_ranges() {
    let mut def = ControllerDef::default();
    def.motion.gravity = -10.0;
    def.motion.air_smoothing = 0.0;
    def.collision.obstruction_mask.clear();
    assert_eq!(
        fields(&def),
        vec![
            "collision.obstruction_mask",
            "motion.air_smoothing",
            "motion.gravity"
        ]
    );
}

// -----------------------------------------------------------------------------
// Fallback tests
// -----------------------------------------------------------------------------

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let (def, problems) = controller_or_default(Path::new("does/not/exist.ron"));
    assert_eq!(def, ControllerDef::default());
    assert_eq!(problems.len(), 1);
    assert!(problems[0].contains("IO error"));
}

#[test]
fn test_invalid_file_falls_back_to_defaults() {
    let path = std::env::temp_dir().join("skinwalk_invalid_controller.ron");
    let text = SHIPPED
        .replace("skin_width: 1.0", "skin_width: -1.0")
        .replace("max_speed: 320.0", "max_speed: 999.0");
    fs::write(&path, text).expect("temp file is writable");

    let (def, problems) = controller_or_default(&path);
    let _ = fs::remove_file(&path);

    assert_eq!(def, ControllerDef::default());
    assert!(!problems.is_empty());
    assert!(problems.iter().any(|p| p.contains("collision.skin_width")));
}

#[test]
fn test_valid_file_is_used() {
    let path = std::env::temp_dir().join("skinwalk_valid_controller.ron");
    fs::write(&path, SHIPPED.replace("max_speed: 320.0", "max_speed: 200.0"))
        .expect("temp file is writable");

    let (def, problems) = controller_or_default(&path);
    let _ = fs::remove_file(&path);

    assert!(problems.is_empty());
    assert_eq!(def.motion.max_speed, 200.0);
}

//! Level domain: sanity checks on the test room layout.

use bevy::prelude::*;

use super::spawn::{LevelBlock, TEST_ROOM};
use crate::movement::{GameLayer, PlayerSpawn};

fn rect(block: &LevelBlock) -> Rect {
    Rect::from_center_size(block.center, block.size)
}

#[test]
fn test_spawn_point_is_clear_of_geometry() {
    let spawn = PlayerSpawn::default();
    let body = Rect::from_center_size(spawn.position, spawn.size);
    for block in &TEST_ROOM {
        assert!(rect(block).intersect(body).is_empty(), "{:?}", block);
    }
}

#[test]
fn test_floor_is_under_spawn_point() {
    let spawn = PlayerSpawn::default();
    let below = TEST_ROOM
        .iter()
        .filter(|block| block.layer == GameLayer::Ground)
        .map(rect)
        .filter(|r| r.min.x <= spawn.position.x && spawn.position.x <= r.max.x)
        .any(|r| r.max.y < spawn.position.y);
    assert!(below);
}

#[test]
fn test_blocks_only_use_obstruction_layers() {
    let mask = crate::movement::ControllerTuning::default().obstruction_mask;
    assert!(TEST_ROOM.iter().all(|block| mask.contains(&block.layer)));
}

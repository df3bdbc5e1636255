//! Level domain: test room layout and spawning.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, Ground, Wall};

/// One axis-aligned block of level geometry.
#[derive(Debug, Clone, Copy)]
pub struct LevelBlock {
    pub center: Vec2,
    pub size: Vec2,
    pub layer: GameLayer,
}

const fn block(x: f32, y: f32, width: f32, height: f32, layer: GameLayer) -> LevelBlock {
    LevelBlock {
        center: Vec2::new(x, y),
        size: Vec2::new(width, height),
        layer,
    }
}

/// Floor, boundary walls, a ceiling, platforms at a few heights, a low step
/// and a pillar to push against.
pub const TEST_ROOM: [LevelBlock; 9] = [
    block(0.0, -200.0, 800.0, 40.0, GameLayer::Ground),
    block(-420.0, 50.0, 40.0, 500.0, GameLayer::Wall),
    block(420.0, 50.0, 40.0, 500.0, GameLayer::Wall),
    block(0.0, 320.0, 880.0, 40.0, GameLayer::Ground),
    block(-250.0, -50.0, 150.0, 20.0, GameLayer::Ground),
    block(250.0, 50.0, 150.0, 20.0, GameLayer::Ground),
    block(0.0, 150.0, 120.0, 20.0, GameLayer::Ground),
    block(160.0, -170.0, 60.0, 20.0, GameLayer::Ground),
    block(-100.0, -80.0, 30.0, 200.0, GameLayer::Wall),
];

pub(crate) fn spawn_test_room(mut commands: Commands) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let ground_color = Color::srgb(0.4, 0.5, 0.4);

    for block in TEST_ROOM {
        let color = match block.layer {
            GameLayer::Wall => wall_color,
            _ => ground_color,
        };

        let mut entity = commands.spawn((
            Sprite {
                color,
                custom_size: Some(block.size),
                ..default()
            },
            Transform::from_translation(block.center.extend(0.0)),
            RigidBody::Static,
            Collider::rectangle(block.size.x, block.size.y),
            CollisionLayers::new(block.layer, [GameLayer::Player]),
        ));
        match block.layer {
            GameLayer::Wall => entity.insert(Wall),
            _ => entity.insert(Ground),
        };
    }

    info!("Spawned test room with {} blocks", TEST_ROOM.len());
}

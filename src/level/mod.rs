//! Level domain: static collision geometry the controller moves through.

mod spawn;

#[cfg(test)]
mod tests;

use bevy::prelude::*;

use crate::level::spawn::spawn_test_room;

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_test_room);
    }
}

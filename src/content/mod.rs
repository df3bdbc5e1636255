//! Content domain: data-driven controller configuration.

pub mod data;
pub mod loader;
pub mod validation;

#[cfg(test)]
mod tests;

pub use data::*;
pub use loader::*;
pub use validation::*;

use bevy::prelude::*;
use std::path::Path;

pub const CONTROLLER_PATH: &str = "assets/data/controller.ron";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, load_controller_content);
    }
}

/// Read, validate and normalise a controller file. Any failure falls back to
/// the built-in defaults; every problem is returned for logging.
pub fn controller_or_default(path: &Path) -> (ControllerDef, Vec<String>) {
    let def = match load_controller(path) {
        Ok(def) => def,
        Err(e) => return (ControllerDef::default(), vec![e.to_string()]),
    };

    let errors = validate_controller(&def);
    if errors.is_empty() {
        (def, Vec::new())
    } else {
        let problems = errors.iter().map(ToString::to_string).collect();
        (ControllerDef::default(), problems)
    }
}

fn load_controller_content(mut commands: Commands) {
    let (def, problems) = controller_or_default(Path::new(CONTROLLER_PATH));
    for problem in &problems {
        warn!("{}", problem);
    }
    if !problems.is_empty() {
        warn!("Using default controller tuning");
    }

    let mut tuning = def.tuning();
    if tuning.clamp_ray_counts() {
        warn!(
            "Ray counts raised to at least 2: horizontal={}, vertical={}",
            tuning.horizontal_ray_count, tuning.vertical_ray_count
        );
    }

    info!(
        "Controller loaded: skin={}, rays={}x{}, max_speed={}, jump_speed={}, sustain={}s, gravity={}, smoothing={}/{}s",
        tuning.skin_width,
        tuning.horizontal_ray_count,
        tuning.vertical_ray_count,
        tuning.max_speed,
        tuning.jump_speed,
        tuning.jump_sustain,
        tuning.gravity,
        tuning.ground_smoothing,
        tuning.air_smoothing
    );

    commands.insert_resource(def.player_spawn());
    commands.insert_resource(tuning);
}

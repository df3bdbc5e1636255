//! Animation clip manifest loading.
//!
//! Loads the clip JSON which defines, per animation state, the frame count,
//! frame timing, looping and the placeholder tint drawn until real sprite
//! sheets exist.

use bevy::prelude::*;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::AnimationState;

/// Playback data for one animation state.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClipDef {
    pub frames: u32,
    /// Seconds per frame.
    pub frame_duration: f32,
    pub looping: bool,
    /// Linear sRGB tint applied to the placeholder sprite.
    #[serde(default = "default_tint")]
    pub tint: [f32; 3],
}

fn default_tint() -> [f32; 3] {
    [0.9, 0.9, 0.9]
}

impl ClipDef {
    pub fn color(&self) -> Color {
        let [r, g, b] = self.tint;
        Color::srgb(r, g, b)
    }
}

/// Raw manifest JSON structure.
#[derive(Deserialize)]
struct ManifestJson {
    version: u32,
    clips: HashMap<String, ClipDef>,
}

/// Error type for clip manifest failures.
#[derive(Debug)]
pub struct ManifestError {
    pub path: String,
    pub message: String,
}

impl std::fmt::Display for ManifestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load clip manifest {}: {}", self.path, self.message)
    }
}

impl std::error::Error for ManifestError {}

/// Resource holding clip data for every animation state.
#[derive(Resource, Debug, Clone)]
pub struct ClipManifest {
    pub version: u32,
    clips: HashMap<AnimationState, ClipDef>,
}

impl Default for ClipManifest {
    fn default() -> Self {
        let clip = |frames, frame_duration, looping, tint| ClipDef {
            frames,
            frame_duration,
            looping,
            tint,
        };
        let clips = HashMap::from([
            (AnimationState::Idle, clip(4, 0.15, true, [0.9, 0.9, 0.9])),
            (AnimationState::Run, clip(6, 0.1, true, [0.85, 0.95, 0.85])),
            (AnimationState::Push, clip(4, 0.2, true, [0.95, 0.8, 0.6])),
            (AnimationState::Jump, clip(2, 0.1, false, [0.8, 0.85, 1.0])),
            (AnimationState::Fall, clip(2, 0.1, true, [0.7, 0.7, 0.95])),
        ]);
        Self { version: 1, clips }
    }
}

impl ClipManifest {
    /// Parse manifest JSON. States missing from the file keep their defaults;
    /// unknown keys are rejected.
    pub fn from_json(contents: &str) -> Result<Self, String> {
        let raw: ManifestJson =
            serde_json::from_str(contents).map_err(|e| format!("Parse error: {}", e))?;

        let mut manifest = Self {
            version: raw.version,
            ..Self::default()
        };
        for (key, clip) in raw.clips {
            let state = AnimationState::from_key(&key)
                .ok_or_else(|| format!("Unknown animation state '{}'", key))?;
            if clip.frames == 0 || clip.frame_duration <= 0.0 {
                return Err(format!(
                    "Clip '{}' needs at least one frame and a positive frame duration",
                    key
                ));
            }
            manifest.clips.insert(state, clip);
        }
        Ok(manifest)
    }

    pub fn load_from_file(path: &Path) -> Result<Self, ManifestError> {
        let error = |message: String| ManifestError {
            path: path.display().to_string(),
            message,
        };
        let contents =
            fs::read_to_string(path).map_err(|e| error(format!("IO error: {}", e)))?;
        Self::from_json(&contents).map_err(error)
    }

    /// Clip for `state`; every state has one.
    pub fn clip(&self, state: AnimationState) -> &ClipDef {
        &self.clips[&state]
    }
}

/// System to load the clip manifest at startup.
pub(crate) fn load_clip_manifest(mut manifest: ResMut<ClipManifest>) {
    let path = Path::new("assets/sprites/clips.json");
    match ClipManifest::load_from_file(path) {
        Ok(loaded) => {
            info!("Loaded clip manifest v{} from {:?}", loaded.version, path);
            *manifest = loaded;
        }
        Err(e) => warn!("{}; using built-in clips", e),
    }
}

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::api::types::BodyId;
use crate::components::body::{BodyKind, CelestialBody};
use crate::components::color::Rgba;
use crate::core::runner::RunnerConfig;
use crate::core::scene::Scene;
use crate::error::SceneError;

/// Scene description: timing plus the bodies in update/draw order.
/// Loaded from a JSON file at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneManifest {
    /// Wall time per simulation tick in seconds (default: 1/60).
    #[serde(default = "default_time_step")]
    pub time_step: f32,
    /// Simulation time handed to each body per tick (default: 1.0).
    #[serde(default = "default_elapsed")]
    pub elapsed_per_tick: f32,
    /// Bodies in scene order. Parents must come before their children.
    pub bodies: Vec<BodyEntry>,
}

/// Describes a single body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyEntry {
    /// Unique name, also used to reference this body as a parent.
    pub tag: String,
    /// Capability set (default: plain).
    #[serde(default)]
    pub kind: BodyKind,
    pub radius: f32,
    /// Orbit radius around the parent (default: 0).
    #[serde(default)]
    pub distance: f32,
    /// Elapsed time per full orbit; zero or negative means stationary.
    #[serde(default)]
    pub period: f32,
    /// Self-rotation in degrees per tick.
    #[serde(default)]
    pub self_speed: f32,
    /// RGB color (default: white).
    #[serde(default)]
    pub color: Option<[f32; 3]>,
    /// Tag of the body this one orbits.
    #[serde(default)]
    pub parent: Option<String>,
}

fn default_time_step() -> f32 {
    1.0 / 60.0
}

fn default_elapsed() -> f32 {
    1.0
}

impl SceneManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a manifest file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SceneError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SceneError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loaded manifest {} ({} bytes)", path.display(), json.len());
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String, SceneError> {
        serde_json::to_string_pretty(self).map_err(SceneError::Serialize)
    }

    /// Timing settings for the frame driver.
    pub fn runner_config(&self) -> RunnerConfig {
        RunnerConfig {
            fixed_dt: self.time_step,
            elapsed_per_tick: self.elapsed_per_tick,
            ..Default::default()
        }
    }

    /// Validate the body list and build a scene from it.
    pub fn build_scene(&self) -> Result<Scene, SceneError> {
        let mut scene = Scene::with_capacity(self.bodies.len());
        let mut ids: HashMap<&str, BodyId> = HashMap::with_capacity(self.bodies.len());

        for entry in &self.bodies {
            if ids.contains_key(entry.tag.as_str()) {
                return Err(SceneError::DuplicateTag(entry.tag.clone()));
            }
            for (field, value) in [("radius", entry.radius), ("distance", entry.distance)] {
                // NaN fails this too
                if !(value >= 0.0) {
                    return Err(SceneError::NegativeDimension {
                        body: entry.tag.clone(),
                        field,
                        value,
                    });
                }
            }

            let parent = match &entry.parent {
                Some(tag) => Some(*ids.get(tag.as_str()).ok_or_else(|| {
                    SceneError::UnknownParent {
                        body: entry.tag.clone(),
                        parent: tag.clone(),
                    }
                })?),
                None => None,
            };

            let id = scene.spawn(entry.to_body(parent));
            ids.insert(entry.tag.as_str(), id);
        }

        log::info!("built scene with {} bodies", scene.len());
        Ok(scene)
    }
}

impl BodyEntry {
    fn to_body(&self, parent: Option<BodyId>) -> CelestialBody {
        let mut body = CelestialBody::new(self.radius, self.distance, self.period, self.self_speed)
            .with_tag(self.tag.clone());
        if self.kind != BodyKind::Plain {
            body = body.with_kind(self.kind, self.color.unwrap_or([1.0, 1.0, 1.0]));
        } else if let Some(rgb) = self.color {
            body = body.with_color(Rgba::from_rgb_array(rgb));
        }
        if let Some(parent) = parent {
            body = body.with_parent(parent);
        }
        body
    }
}

impl Scene {
    /// Build a scene from a parsed manifest.
    pub fn from_manifest(manifest: &SceneManifest) -> Result<Self, SceneError> {
        manifest.build_scene()
    }
}

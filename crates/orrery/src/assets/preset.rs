//! The classic solar system: a luminous sun, eight shaded planets, and
//! Earth's moon.
//!
//! Radii and distances are display units, not to scale. Periods are in
//! elapsed-time units (one unit per tick at the default rate, so Earth
//! takes 365 ticks per orbit).

use crate::api::types::BodyId;
use crate::assets::manifest::{BodyEntry, SceneManifest};
use crate::components::body::{BodyKind, CelestialBody};
use crate::core::scene::Scene;

/// Self-rotation step shared by every body, degrees per tick.
pub const SELF_ROTATE: f32 = 3.0;

/// Simulation time per tick.
pub const ELAPSED_PER_TICK: f32 = 1.0;

/// One row of the preset table.
pub struct PresetBody {
    pub tag: &'static str,
    pub kind: BodyKind,
    pub radius: f32,
    pub distance: f32,
    pub period: f32,
    pub color: [f32; 3],
    /// Tag of the parent, always an earlier row.
    pub parent: Option<&'static str>,
}

// ── Sun ──────────────────────────────────────────────────────────────

pub static SUN: PresetBody = PresetBody {
    tag: "sun",
    kind: BodyKind::Luminous,
    radius: 48.74,
    distance: 0.0,
    period: 0.0,
    color: [1.0, 0.0, 0.0],
    parent: None,
};

// ── Planets and moon, in draw order ──────────────────────────────────

pub static PLANETS: [PresetBody; 9] = [
    planet("mercury", 7.32, 62.06, 87.0, [0.2, 0.2, 0.5]),
    planet("venus", 18.15, 115.56, 225.0, [1.0, 0.7, 0.0]),
    planet("earth", 19.13, 168.00, 365.0, [0.0, 1.0, 0.0]),
    PresetBody {
        tag: "moon",
        kind: BodyKind::Shaded,
        radius: 6.15,
        distance: 26.01,
        period: 30.0,
        color: [1.0, 1.0, 0.0],
        parent: Some("earth"),
    },
    planet("mars", 10.19, 228.00, 687.0, [1.0, 0.5, 0.5]),
    planet("jupiter", 42.90, 333.40, 1298.4, [1.0, 1.0, 0.5]),
    planet("saturn", 36.16, 428.10, 3225.6, [0.5, 1.0, 0.5]),
    planet("uranus", 25.56, 848.00, 3066.4, [0.4, 0.4, 0.4]),
    planet("neptune", 24.78, 949.10, 6014.8, [0.5, 0.5, 1.0]),
];

const fn planet(tag: &'static str, radius: f32, distance: f32, period: f32, color: [f32; 3]) -> PresetBody {
    PresetBody {
        tag,
        kind: BodyKind::Shaded,
        radius,
        distance,
        period,
        color,
        parent: Some("sun"),
    }
}

/// Every preset row, sun first.
pub fn preset_bodies() -> impl Iterator<Item = &'static PresetBody> {
    std::iter::once(&SUN).chain(PLANETS.iter())
}

impl PresetBody {
    fn entry(&self) -> BodyEntry {
        BodyEntry {
            tag: self.tag.to_string(),
            kind: self.kind,
            radius: self.radius,
            distance: self.distance,
            period: self.period,
            self_speed: SELF_ROTATE,
            color: Some(self.color),
            parent: self.parent.map(str::to_string),
        }
    }
}

/// The preset as a manifest, e.g. for writing out and editing.
pub fn classic_manifest() -> SceneManifest {
    SceneManifest {
        time_step: 1.0 / 60.0,
        elapsed_per_tick: ELAPSED_PER_TICK,
        bodies: preset_bodies().map(PresetBody::entry).collect(),
    }
}

/// Build the preset scene directly.
pub fn classic_scene() -> Scene {
    let mut scene = Scene::with_capacity(PLANETS.len() + 1);
    for row in preset_bodies() {
        let parent: Option<BodyId> = row.parent.and_then(|tag| scene.find_by_tag(tag));
        let mut body = CelestialBody::new(row.radius, row.distance, row.period, SELF_ROTATE)
            .with_kind(row.kind, row.color)
            .with_tag(row.tag);
        if let Some(parent) = parent {
            body = body.with_parent(parent);
        }
        scene.spawn(body);
    }
    log::info!("built classic solar system with {} bodies", scene.len());
    scene
}

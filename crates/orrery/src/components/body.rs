use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::api::types::BodyId;
use crate::components::color::Rgba;
use crate::components::material::Material;
use crate::renderer::traits::{Axis, Canvas, SPHERE_SLICES, SPHERE_STACKS};
use crate::systems::lighting::{LightSlot, PointLight};
use crate::systems::orbit::{self, ORBIT_SEGMENTS};

/// What a body does besides orbiting and drawing its sphere.
///
/// Capabilities stack: a luminous body is also shaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyKind {
    /// Orbit path and flat-colored sphere only.
    #[default]
    Plain,
    /// Sets a surface material (emitting its own color) before drawing.
    Shaded,
    /// Installs the primary point light at its frame origin, then draws as
    /// a shaded body.
    Luminous,
}

impl BodyKind {
    pub fn is_shaded(self) -> bool {
        matches!(self, BodyKind::Shaded | BodyKind::Luminous)
    }

    pub fn emits_light(self) -> bool {
        matches!(self, BodyKind::Luminous)
    }
}

/// A sphere on a circular orbit, optionally around another body.
///
/// Angles are in degrees and accumulate without wrapping.
#[derive(Debug, Clone, PartialEq)]
pub struct CelestialBody {
    /// Name for lookups and logs.
    pub tag: String,
    pub kind: BodyKind,
    /// Sphere radius.
    pub radius: f32,
    /// Distance from the parent's center (orbit radius).
    pub distance: f32,
    /// Orbital speed in degrees per unit of elapsed time.
    pub speed: f32,
    /// Self-rotation in degrees per update, independent of elapsed time.
    pub self_speed: f32,
    /// Current orbital angle.
    pub alpha: f32,
    /// Current self-rotation angle.
    pub alpha_self: f32,
    pub color: Rgba,
    /// Body this one orbits, read only for its angle and distance.
    pub parent: Option<BodyId>,
}

impl CelestialBody {
    /// A plain white body. `period` is the elapsed time for one full orbit;
    /// zero or negative leaves the body stationary.
    pub fn new(radius: f32, distance: f32, period: f32, self_speed: f32) -> Self {
        Self {
            tag: String::new(),
            kind: BodyKind::Plain,
            radius,
            distance,
            speed: orbit::angular_speed(period),
            self_speed,
            alpha: 0.0,
            alpha_self: 0.0,
            color: Rgba::WHITE,
            parent: None,
        }
    }

    /// A shaded body colored `rgb` (opaque).
    pub fn shaded(radius: f32, distance: f32, period: f32, self_speed: f32, rgb: [f32; 3]) -> Self {
        Self::new(radius, distance, period, self_speed).with_kind(BodyKind::Shaded, rgb)
    }

    /// A light-emitting body colored `rgb` (opaque).
    pub fn luminous(radius: f32, distance: f32, period: f32, self_speed: f32, rgb: [f32; 3]) -> Self {
        Self::new(radius, distance, period, self_speed).with_kind(BodyKind::Luminous, rgb)
    }

    // -- Builder pattern --

    /// Switch capability set. Shaded kinds take `rgb` with alpha forced to 1.
    pub fn with_kind(mut self, kind: BodyKind, rgb: [f32; 3]) -> Self {
        self.kind = kind;
        self.color = Rgba::from_rgb_array(rgb);
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_parent(mut self, parent: BodyId) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn with_color(mut self, color: Rgba) -> Self {
        self.color = color;
        self
    }

    // -- Per-frame --

    /// Advance the orbit by `elapsed` time units and spin by one step.
    pub fn update(&mut self, elapsed: f32) {
        self.alpha += elapsed * self.speed;
        self.alpha_self += self.self_speed;
    }

    /// Issue this body's draw calls. `parent` is the body named by
    /// `self.parent`, if it exists.
    ///
    /// Order is light, then material, then geometry, each only when the
    /// kind calls for it.
    pub fn draw<C: Canvas + ?Sized>(&self, parent: Option<&CelestialBody>, canvas: &mut C) {
        if self.kind.emits_light() {
            canvas.set_light(LightSlot::PRIMARY, &PointLight::luminous());
        }
        if self.kind.is_shaded() {
            canvas.set_material(&Material::body(self.color));
        }
        self.draw_geometry(parent, canvas);
    }

    fn draw_geometry<C: Canvas + ?Sized>(&self, parent: Option<&CelestialBody>, canvas: &mut C) {
        canvas.push_matrix();

        // Moons orbit a point on the parent's orbit, not the origin
        if let Some(parent) = parent.filter(|p| p.distance > 0.0) {
            canvas.rotate(parent.alpha, Axis::Z);
            canvas.translate(Vec3::new(parent.distance, 0.0, 0.0));
        }

        canvas.line_loop(&orbit::orbit_path(self.distance, ORBIT_SEGMENTS));

        canvas.rotate(self.alpha, Axis::Z);
        canvas.translate(Vec3::new(self.distance, 0.0, 0.0));
        canvas.rotate(self.alpha_self, Axis::Z);

        canvas.set_color(self.color);
        canvas.solid_sphere(self.radius, SPHERE_SLICES, SPHERE_STACKS);

        canvas.pop_matrix();
    }
}

//! Headless canvas that resolves immediate-mode calls into world space.
//!
//! Everything a GPU backend needs for one frame ends up in flat buffers:
//! spheres in `SphereBuffer`, orbit loops as world-space point lists (and,
//! with the `vectors` feature, as stroked triangles), and the light slots
//! with their world positions. State that a fixed-function context carries
//! across draws (current color, current material) carries across here too.

use glam::{Mat4, Vec2, Vec3, Vec4};

use super::matrix_stack::MatrixStack;
use super::sphere_instance::{SphereBuffer, SphereInstance};
use super::traits::{Axis, Canvas};
use crate::components::color::Rgba;
use crate::components::material::Material;
use crate::systems::lighting::{LightSlot, LightState, PointLight};
#[cfg(feature = "vectors")]
use crate::systems::vector::VectorState;

/// Line width used when stroking orbit loops.
pub const ORBIT_LINE_WIDTH: f32 = 0.5;

/// One orbit loop, resolved to world space.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitPath {
    pub points: Vec<Vec3>,
    /// Flat color current when the loop was stroked.
    pub color: Rgba,
}

impl OrbitPath {
    /// Mean of the loop's points. For a sampled circle this is its center.
    pub fn centroid(&self) -> Vec3 {
        if self.points.is_empty() {
            return Vec3::ZERO;
        }
        self.points.iter().copied().sum::<Vec3>() / self.points.len() as f32
    }
}

/// A configured light slot, position already in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedLight {
    pub slot: LightSlot,
    pub light: PointLight,
    /// World-space homogeneous position.
    pub world_position: Vec4,
}

/// Canvas that tracks the matrix stack on the CPU and records the results.
pub struct FrameCanvas {
    base: Mat4,
    stack: MatrixStack,
    color: Rgba,
    material: Option<Material>,
    lighting: LightState,
    spheres: SphereBuffer,
    orbits: Vec<OrbitPath>,
    lights: Vec<PlacedLight>,
    #[cfg(feature = "vectors")]
    vectors: VectorState,
}

impl FrameCanvas {
    pub fn new() -> Self {
        Self::with_base(Mat4::IDENTITY)
    }

    /// Start every frame from `base` instead of identity (e.g. a view matrix).
    pub fn with_base(base: Mat4) -> Self {
        Self {
            base,
            stack: MatrixStack::with_base(base),
            color: Rgba::WHITE,
            material: None,
            lighting: LightState::unlit(),
            spheres: SphereBuffer::new(),
            orbits: Vec::new(),
            lights: Vec::new(),
            #[cfg(feature = "vectors")]
            vectors: VectorState::new(),
        }
    }

    pub fn spheres(&self) -> &SphereBuffer {
        &self.spheres
    }

    pub fn orbits(&self) -> &[OrbitPath] {
        &self.orbits
    }

    /// Light slots configured this frame, latest configuration per slot.
    pub fn lights(&self) -> &[PlacedLight] {
        &self.lights
    }

    /// Lighting switches for the current frame.
    pub fn lighting(&self) -> &LightState {
        &self.lighting
    }

    #[cfg(feature = "vectors")]
    pub fn vectors(&self) -> &VectorState {
        &self.vectors
    }

    /// Current matrix nesting; zero between balanced draws.
    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    fn clear(&mut self) {
        self.stack = MatrixStack::with_base(self.base);
        self.spheres.clear();
        self.orbits.clear();
        self.lights.clear();
        #[cfg(feature = "vectors")]
        self.vectors.clear();
    }
}

impl Default for FrameCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas for FrameCanvas {
    fn begin_frame(&mut self, lights: &LightState) {
        self.clear();
        self.lighting = *lights;
    }

    fn end_frame(&mut self) {
        if self.stack.depth() != 0 {
            log::warn!("frame ended with {} unpopped matrices", self.stack.depth());
        }
        log::trace!(
            "frame resolved: {} spheres, {} orbits, {} lights",
            self.spheres.instance_count(),
            self.orbits.len(),
            self.lights.len()
        );
    }

    fn push_matrix(&mut self) {
        self.stack.push();
    }

    fn pop_matrix(&mut self) {
        self.stack.pop();
    }

    fn rotate(&mut self, degrees: f32, axis: Axis) {
        self.stack.rotate(degrees, axis.to_vec3());
    }

    fn translate(&mut self, offset: Vec3) {
        self.stack.translate(offset);
    }

    fn set_color(&mut self, color: Rgba) {
        self.color = color.with_alpha(1.0);
    }

    fn set_material(&mut self, material: &Material) {
        self.material = Some(*material);
    }

    fn set_light(&mut self, slot: LightSlot, light: &PointLight) {
        let world_position = self.stack.transform_homogeneous(Vec4::from_array(light.position));
        let placed = PlacedLight { slot, light: *light, world_position };
        match self.lights.iter_mut().find(|l| l.slot == slot) {
            Some(existing) => *existing = placed,
            None => self.lights.push(placed),
        }
    }

    fn solid_sphere(&mut self, radius: f32, _slices: u32, _stacks: u32) {
        let pos = self.stack.transform_point(Vec3::ZERO);
        let lit = self.lighting.active_count() > 0 && self.material.is_some();
        let (emission, shininess) = match &self.material {
            Some(m) => (m.emission, m.shininess),
            None => (Rgba::BLACK, 0.0),
        };
        let [ambient_r, ambient_g, ambient_b] = if lit { self.lighting.ambient() } else { [0.0; 3] };
        self.spheres.push(SphereInstance {
            x: pos.x,
            y: pos.y,
            z: pos.z,
            radius,
            spin: self.stack.z_rotation(),
            r: self.color.r,
            g: self.color.g,
            b: self.color.b,
            emit_r: emission.r,
            emit_g: emission.g,
            emit_b: emission.b,
            shininess,
            lit: if lit { 1.0 } else { 0.0 },
            ambient_r,
            ambient_g,
            ambient_b,
        });
    }

    fn line_loop(&mut self, points: &[Vec2]) {
        let world: Vec<Vec3> = points
            .iter()
            .map(|p| self.stack.transform_point(p.extend(0.0)))
            .collect();

        // Stationary bodies stroke a loop collapsed onto one point
        #[cfg(feature = "vectors")]
        {
            if world.iter().any(|p| p.distance_squared(world[0]) > f32::EPSILON) {
                let flat: Vec<Vec2> = world.iter().map(|p| p.truncate()).collect();
                self.vectors.stroke_loop(&flat, ORBIT_LINE_WIDTH, self.color);
            }
        }

        self.orbits.push(OrbitPath { points: world, color: self.color });
    }
}

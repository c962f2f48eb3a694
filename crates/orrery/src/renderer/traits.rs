//! The immediate-mode drawing surface bodies draw through.
//!
//! `Canvas` mirrors the slice of a fixed-function API the scene needs: a
//! matrix stack, flat color, materials, light slots, a solid sphere and a
//! line loop. Backends implement it. The crate ships two: `CommandList`
//! (records calls verbatim) and `FrameCanvas` (resolves them into world-space
//! buffers for upload).
//!
//! # Example Implementation
//!
//! ```ignore
//! struct GlCanvas;
//!
//! impl Canvas for GlCanvas {
//!     fn push_matrix(&mut self) { unsafe { gl::PushMatrix() } }
//!     fn pop_matrix(&mut self) { unsafe { gl::PopMatrix() } }
//!     fn rotate(&mut self, degrees: f32, axis: Axis) {
//!         let [x, y, z] = axis.to_array();
//!         unsafe { gl::Rotatef(degrees, x, y, z) }
//!     }
//!     // ...
//! }
//! ```

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::components::color::Rgba;
use crate::components::material::Material;
use crate::systems::lighting::{LightSlot, LightState, PointLight};

/// Longitudinal subdivisions requested for body spheres.
pub const SPHERE_SLICES: u32 = 40;
/// Latitudinal subdivisions requested for body spheres.
pub const SPHERE_STACKS: u32 = 32;

/// Rotation axis for `Canvas::rotate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub fn to_vec3(self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }

    pub fn to_array(self) -> [f32; 3] {
        self.to_vec3().to_array()
    }
}

/// An immediate-mode 3D drawing surface.
///
/// Transforms compose like a fixed-function modelview stack: each `rotate`
/// or `translate` post-multiplies the current matrix, so calls apply to
/// geometry in reverse order of issue.
pub trait Canvas {
    /// Called by the frame driver before any body draws.
    fn begin_frame(&mut self, _lights: &LightState) {}

    /// Called by the frame driver after every body has drawn.
    fn end_frame(&mut self) {}

    /// Save the current transform.
    fn push_matrix(&mut self);

    /// Restore the most recently saved transform.
    fn pop_matrix(&mut self);

    /// Rotate by `degrees` counter-clockwise about `axis`.
    fn rotate(&mut self, degrees: f32, axis: Axis);

    /// Translate the local origin by `offset`.
    fn translate(&mut self, offset: Vec3);

    /// Set the flat color used by subsequent geometry. Alpha is ignored.
    fn set_color(&mut self, color: Rgba);

    /// Set the surface material used by subsequent lit geometry.
    fn set_material(&mut self, material: &Material);

    /// Configure a light slot. The light's position is taken in the current
    /// transform.
    fn set_light(&mut self, slot: LightSlot, light: &PointLight);

    /// Draw a filled sphere of `radius` at the local origin.
    fn solid_sphere(&mut self, radius: f32, slices: u32, stacks: u32);

    /// Stroke a closed loop through `points` in the local XY plane.
    fn line_loop(&mut self, points: &[Vec2]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_vectors() {
        assert_eq!(Axis::X.to_vec3(), Vec3::X);
        assert_eq!(Axis::Y.to_array(), [0.0, 1.0, 0.0]);
        assert_eq!(Axis::Z.to_array(), [0.0, 0.0, 1.0]);
    }
}

//! Lyon-based stroke tessellation for orbit paths.
//!
//! Line loops reach the frame canvas as world-space points. Backends without
//! native wide lines want triangles instead, so `VectorState` strokes each
//! loop (projected onto the orbital XY plane) into a flat triangle-list
//! vertex buffer.
//!
//! ```ignore
//! let mut vectors = VectorState::new();
//! vectors.stroke_loop(&orbit_points, 0.5, Rgba::WHITE.with_alpha(0.25));
//! upload(vectors.as_floats());
//! ```

use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use lyon::math::point;
use lyon::path::Path;
use lyon::tessellation::{
    BuffersBuilder, StrokeOptions, StrokeTessellator, StrokeVertex, StrokeVertexConstructor,
    VertexBuffers,
};

use crate::components::color::Rgba;

/// Per-vertex data for stroked paths.
/// 6 floats = 24 bytes per vertex.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct VectorVertex {
    pub x: f32,
    pub y: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl VectorVertex {
    /// Number of floats per vertex.
    pub const FLOATS: usize = 6;
    /// Stride in bytes.
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4; // 24
}

/// Vertex constructor for lyon stroke tessellation.
struct StrokeVertexCtor {
    color: Rgba,
}

impl StrokeVertexConstructor<VectorVertex> for StrokeVertexCtor {
    fn new_vertex(&mut self, vertex: StrokeVertex) -> VectorVertex {
        VectorVertex {
            x: vertex.position().x,
            y: vertex.position().y,
            r: self.color.r,
            g: self.color.g,
            b: self.color.b,
            a: self.color.a,
        }
    }
}

/// Stroke tessellator plus its output buffer.
///
/// Cleared each frame and filled by stroke calls.
pub struct VectorState {
    stroke_tess: StrokeTessellator,
    geometry: VertexBuffers<VectorVertex, u32>,
    vertices: Vec<VectorVertex>,
    tolerance: f32,
}

impl VectorState {
    pub fn new() -> Self {
        Self {
            stroke_tess: StrokeTessellator::new(),
            geometry: VertexBuffers::new(),
            vertices: Vec::with_capacity(16384),
            tolerance: 0.5,
        }
    }

    /// Clear the vertex buffer. Called at the start of each frame.
    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    /// Number of vertices currently in the buffer.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn vertices(&self) -> &[VectorVertex] {
        &self.vertices
    }

    /// Flat float view for upload.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Expand indexed geometry into the triangle list.
    fn flush_geometry(&mut self) {
        for idx in &self.geometry.indices {
            self.vertices.push(self.geometry.vertices[*idx as usize]);
        }
        self.geometry.vertices.clear();
        self.geometry.indices.clear();
    }

    /// Stroke a closed loop. Needs at least 3 points.
    pub fn stroke_loop(&mut self, points: &[Vec2], width: f32, color: Rgba) {
        if points.len() < 3 {
            return;
        }
        let path = Self::build_path(points, true);
        self.stroke_path(&path, width, color);
    }

    /// Stroke an open polyline. Needs at least 2 points.
    pub fn stroke_polyline(&mut self, points: &[Vec2], width: f32, color: Rgba) {
        if points.len() < 2 {
            return;
        }
        let path = Self::build_path(points, false);
        self.stroke_path(&path, width, color);
    }

    /// Tessellate an arbitrary stroked lyon Path.
    pub fn stroke_path(&mut self, path: &Path, width: f32, color: Rgba) {
        let result = self.stroke_tess.tessellate_path(
            path,
            &StrokeOptions::tolerance(self.tolerance).with_line_width(width),
            &mut BuffersBuilder::new(&mut self.geometry, StrokeVertexCtor { color }),
        );

        match result {
            Ok(_) => self.flush_geometry(),
            Err(err) => {
                log::warn!("stroke tessellation failed: {err:?}");
                self.geometry.vertices.clear();
                self.geometry.indices.clear();
            }
        }
    }

    fn build_path(points: &[Vec2], close: bool) -> Path {
        let mut builder = Path::builder();
        builder.begin(point(points[0].x, points[0].y));
        for p in &points[1..] {
            builder.line_to(point(p.x, p.y));
        }
        builder.end(close);
        builder.build()
    }
}

impl Default for VectorState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    fn square() -> [Vec2; 4] {
        [
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
        ]
    }

    #[test]
    fn vector_vertex_is_24_bytes() {
        assert_eq!(size_of::<VectorVertex>(), 24);
        assert_eq!(VectorVertex::STRIDE_BYTES, 24);
    }

    #[test]
    fn stroke_loop_produces_triangles() {
        let mut state = VectorState::new();
        state.stroke_loop(&square(), 1.0, Rgba::WHITE);
        assert!(state.vertex_count() > 0);
        assert_eq!(state.vertex_count() % 3, 0);
        assert_eq!(state.as_floats().len(), state.vertex_count() * VectorVertex::FLOATS);
    }

    #[test]
    fn stroke_carries_color() {
        let mut state = VectorState::new();
        let color = Rgba::new(0.3, 0.5, 0.8, 0.25);
        state.stroke_loop(&square(), 1.0, color);
        assert!(state.vertices().iter().all(|v| v.r == 0.3 && v.a == 0.25));
    }

    #[test]
    fn closed_loop_has_more_geometry_than_open() {
        let mut closed = VectorState::new();
        closed.stroke_loop(&square(), 1.0, Rgba::WHITE);
        let mut open = VectorState::new();
        open.stroke_polyline(&square(), 1.0, Rgba::WHITE);
        assert!(closed.vertex_count() > open.vertex_count());
    }

    #[test]
    fn degenerate_inputs_produce_nothing() {
        let mut state = VectorState::new();
        state.stroke_loop(&[Vec2::ZERO, Vec2::ONE], 1.0, Rgba::WHITE);
        state.stroke_polyline(&[Vec2::ZERO], 1.0, Rgba::WHITE);
        assert_eq!(state.vertex_count(), 0);
    }

    #[test]
    fn clear_resets_buffer() {
        let mut state = VectorState::new();
        state.stroke_loop(&square(), 1.0, Rgba::WHITE);
        state.clear();
        assert_eq!(state.vertex_count(), 0);
    }
}

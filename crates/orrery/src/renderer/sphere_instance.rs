use bytemuck::{Pod, Zeroable};

/// Per-instance sphere data resolved to world space.
/// 16 floats = 64 bytes per instance.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct SphereInstance {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub radius: f32,
    /// Accumulated rotation about +Z in radians (orbit + self-rotation).
    pub spin: f32,
    /// Flat color.
    pub r: f32,
    pub g: f32,
    pub b: f32,
    /// Material emission, or zero when drawn without a material.
    pub emit_r: f32,
    pub emit_g: f32,
    pub emit_b: f32,
    /// Material specular exponent.
    pub shininess: f32,
    /// 1.0 when the sphere was drawn under active lighting with a material.
    pub lit: f32,
    /// Global ambient light in effect for a lit sphere, zero otherwise.
    pub ambient_r: f32,
    pub ambient_g: f32,
    pub ambient_b: f32,
}

impl SphereInstance {
    pub const FLOATS: usize = 16;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    pub fn position(&self) -> glam::Vec3 {
        glam::Vec3::new(self.x, self.y, self.z)
    }

    pub fn is_lit(&self) -> bool {
        self.lit != 0.0
    }
}

/// Per-frame sphere instances in draw order.
pub struct SphereBuffer {
    instances: Vec<SphereInstance>,
}

impl SphereBuffer {
    pub fn new() -> Self {
        Self::with_capacity(16)
    }

    pub fn with_capacity(max: usize) -> Self {
        Self {
            instances: Vec::with_capacity(max),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: SphereInstance) {
        self.instances.push(instance);
    }

    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }

    pub fn instances(&self) -> &[SphereInstance] {
        &self.instances
    }

    /// Flat float view for upload.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances)
    }
}

impl Default for SphereBuffer {
    fn default() -> Self {
        Self::new()
    }
}

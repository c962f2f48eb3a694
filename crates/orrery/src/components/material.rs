use serde::{Deserialize, Serialize};

use super::color::Rgba;

/// Which faces a material applies to. Bodies only ever light front faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Face {
    Front,
    Back,
    FrontAndBack,
}

/// Fixed-function surface material.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub face: Face,
    /// Light left in the environment after many reflections.
    pub ambient: Rgba,
    /// Diffuse reflection.
    pub diffuse: Rgba,
    /// Specular reflection.
    pub specular: Rgba,
    /// Light the surface gives off by itself. Does not illuminate other bodies.
    pub emission: Rgba,
    /// Specular exponent. Higher is glossier, with a smaller highlight.
    pub shininess: f32,
}

impl Material {
    /// Shininess used by every shaded body.
    pub const BODY_SHININESS: f32 = 90.0;

    /// The material shaded bodies draw with: a fixed blue reflective base,
    /// emitting the body's own color.
    pub fn body(color: Rgba) -> Self {
        Self {
            face: Face::Front,
            ambient: Rgba::new(0.0, 0.0, 0.5, 1.0),
            diffuse: Rgba::new(0.0, 0.0, 0.5, 1.0),
            specular: Rgba::new(0.0, 0.0, 1.0, 1.0),
            emission: color,
            shininess: Self::BODY_SHININESS,
        }
    }

    pub fn with_emission(mut self, emission: Rgba) -> Self {
        self.emission = emission;
        self
    }

    pub fn with_shininess(mut self, shininess: f32) -> Self {
        self.shininess = shininess;
        self
    }
}

impl Default for Material {
    /// Fixed-function defaults for front faces.
    fn default() -> Self {
        Self {
            face: Face::Front,
            ambient: Rgba::new(0.2, 0.2, 0.2, 1.0),
            diffuse: Rgba::new(0.8, 0.8, 0.8, 1.0),
            specular: Rgba::new(0.0, 0.0, 0.0, 1.0),
            emission: Rgba::new(0.0, 0.0, 0.0, 1.0),
            shininess: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_material_emits_body_color() {
        let color = Rgba::rgb(1.0, 0.7, 0.0);
        let m = Material::body(color);
        assert_eq!(m.face, Face::Front);
        assert_eq!(m.ambient.to_array(), [0.0, 0.0, 0.5, 1.0]);
        assert_eq!(m.diffuse.to_array(), [0.0, 0.0, 0.5, 1.0]);
        assert_eq!(m.specular.to_array(), [0.0, 0.0, 1.0, 1.0]);
        assert_eq!(m.emission, color);
        assert_eq!(m.shininess, 90.0);
    }

    #[test]
    fn builders_override_fields() {
        let m = Material::default()
            .with_emission(Rgba::RED)
            .with_shininess(16.0);
        assert_eq!(m.emission, Rgba::RED);
        assert_eq!(m.shininess, 16.0);
    }
}

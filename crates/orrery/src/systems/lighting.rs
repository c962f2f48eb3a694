//! Fixed-function point lights and the global lighting switches.
//!
//! Bodies only ever *configure* a light slot while drawing. Whether lighting
//! is on at all, and which slots are live, belongs to the frame driver.

use serde::{Deserialize, Serialize};

use crate::components::color::Rgba;

/// Number of light slots a fixed-function pipeline guarantees.
pub const MAX_LIGHTS: u8 = 8;

/// Index of a hardware light slot (0..MAX_LIGHTS).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LightSlot(pub u8);

impl LightSlot {
    /// The slot luminous bodies configure.
    pub const PRIMARY: Self = Self(0);

    /// Whether the slot exists (below `MAX_LIGHTS`).
    pub fn is_valid(self) -> bool {
        self.0 < MAX_LIGHTS
    }

    fn bit(self) -> Option<u8> {
        self.is_valid().then(|| 1 << self.0)
    }
}

/// A light source with separate ambient/diffuse/specular channels.
///
/// `position` is homogeneous: `w == 0` means a directional light shining from
/// `(x, y, z)`, otherwise a positional light at `(x/w, y/w, z/w)` in the frame
/// that is current when the light is set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointLight {
    pub position: [f32; 4],
    pub ambient: Rgba,
    pub diffuse: Rgba,
    pub specular: Rgba,
}

impl PointLight {
    /// The light a luminous body installs: white, positional, at the body's
    /// local origin, with no ambient contribution.
    pub fn luminous() -> Self {
        Self {
            position: [0.0, 0.0, 0.0, 1.0],
            ambient: Rgba::new(0.0, 0.0, 0.0, 1.0),
            diffuse: Rgba::new(1.0, 1.0, 1.0, 1.0),
            specular: Rgba::new(1.0, 1.0, 1.0, 1.0),
        }
    }

    /// Set the position.
    pub fn with_position(mut self, position: [f32; 4]) -> Self {
        self.position = position;
        self
    }

    /// Whether the light sits at a point rather than at infinity.
    pub fn is_positional(&self) -> bool {
        self.position[3] != 0.0
    }
}

/// Global lighting switches owned by the frame driver.
///
/// Defaults to lighting on with the primary slot enabled, which is what a
/// scene with one luminous body needs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LightState {
    lighting: bool,
    enabled: u8,
    ambient: [f32; 3],
}

impl LightState {
    pub fn new() -> Self {
        Self {
            lighting: true,
            enabled: 1 << LightSlot::PRIMARY.0,
            ambient: [0.2, 0.2, 0.2],
        }
    }

    /// Everything off, as a fresh fixed-function context starts.
    pub fn unlit() -> Self {
        Self {
            lighting: false,
            enabled: 0,
            ambient: [0.2, 0.2, 0.2],
        }
    }

    pub fn set_lighting(&mut self, on: bool) {
        self.lighting = on;
    }

    pub fn lighting(&self) -> bool {
        self.lighting
    }

    /// Out-of-range slots are ignored with a warning.
    pub fn enable(&mut self, slot: LightSlot) {
        match slot.bit() {
            Some(bit) => self.enabled |= bit,
            None => log::warn!("ignoring enable of light slot {} (max {})", slot.0, MAX_LIGHTS),
        }
    }

    pub fn disable(&mut self, slot: LightSlot) {
        if let Some(bit) = slot.bit() {
            self.enabled &= !bit;
        }
    }

    /// Whether a slot contributes to shading (lighting must be on as well).
    pub fn is_active(&self, slot: LightSlot) -> bool {
        self.lighting && slot.bit().is_some_and(|bit| self.enabled & bit != 0)
    }

    /// Number of slots that currently contribute to shading.
    pub fn active_count(&self) -> usize {
        if self.lighting {
            self.enabled.count_ones() as usize
        } else {
            0
        }
    }

    /// Set the global ambient light color.
    pub fn set_ambient(&mut self, r: f32, g: f32, b: f32) {
        self.ambient = [r, g, b];
    }

    pub fn ambient(&self) -> [f32; 3] {
        self.ambient
    }
}

impl Default for LightState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn luminous_light_channels() {
        let light = PointLight::luminous();
        assert_eq!(light.position, [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(light.ambient.to_array(), [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(light.diffuse.to_array(), [1.0; 4]);
        assert_eq!(light.specular.to_array(), [1.0; 4]);
        assert!(light.is_positional());
    }

    #[test]
    fn directional_when_w_is_zero() {
        let light = PointLight::luminous().with_position([0.0, 0.0, 1.0, 0.0]);
        assert!(!light.is_positional());
    }

    #[test]
    fn default_state_lights_primary_slot() {
        let state = LightState::new();
        assert!(state.lighting());
        assert!(state.is_active(LightSlot::PRIMARY));
        assert!(!state.is_active(LightSlot(1)));
        assert_eq!(state.active_count(), 1);
    }

    #[test]
    fn lighting_switch_masks_every_slot() {
        let mut state = LightState::new();
        state.enable(LightSlot(3));
        state.set_lighting(false);
        assert!(!state.is_active(LightSlot::PRIMARY));
        assert_eq!(state.active_count(), 0);
        state.set_lighting(true);
        assert_eq!(state.active_count(), 2);
    }

    #[test]
    fn disable_slot() {
        let mut state = LightState::new();
        state.disable(LightSlot::PRIMARY);
        assert!(!state.is_active(LightSlot::PRIMARY));
    }

    #[test]
    fn out_of_range_slots_do_not_alias() {
        let mut state = LightState::unlit();
        state.set_lighting(true);
        state.enable(LightSlot(MAX_LIGHTS));
        state.enable(LightSlot(200));
        assert_eq!(state.active_count(), 0);
        assert!(!state.is_active(LightSlot::PRIMARY));
        assert!(!state.is_active(LightSlot(MAX_LIGHTS)));

        let mut state = LightState::new();
        state.disable(LightSlot(MAX_LIGHTS));
        assert!(state.is_active(LightSlot::PRIMARY));
        assert!(LightSlot(7).is_valid());
        assert!(!LightSlot(8).is_valid());
    }

    #[test]
    fn unlit_starts_dark() {
        let state = LightState::unlit();
        assert!(!state.lighting());
        assert_eq!(state.active_count(), 0);
        assert_eq!(state.ambient(), [0.2, 0.2, 0.2]);
    }
}

//! Recording canvas.
//!
//! `CommandList` stores every canvas call as a `DrawCommand`, in order. It
//! serializes to JSON so an out-of-process backend (a browser, a GL shim)
//! can replay a frame, and it is what tests assert draw sequencing against.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::traits::{Axis, Canvas};
use crate::components::color::Rgba;
use crate::components::material::Material;
use crate::systems::lighting::{LightSlot, LightState, PointLight};

/// One recorded canvas call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    PushMatrix,
    PopMatrix,
    Rotate { degrees: f32, axis: Axis },
    Translate { offset: [f32; 3] },
    SetColor { rgb: [f32; 3] },
    SetMaterial(Material),
    SetLight { slot: LightSlot, light: PointLight },
    SolidSphere { radius: f32, slices: u32, stacks: u32 },
    LineLoop { points: Vec<[f32; 2]> },
}

/// A canvas that records calls instead of drawing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommandList {
    commands: Vec<DrawCommand>,
    /// Lighting switches in effect for the recorded frame.
    lights: Option<LightState>,
}

impl CommandList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded commands, in issue order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Lighting switches passed to the last `begin_frame`, if any.
    pub fn lights(&self) -> Option<&LightState> {
        self.lights.as_ref()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
        self.lights = None;
    }

    /// Deepest matrix nesting reached, or `None` if a pop ever underflows.
    pub fn max_depth(&self) -> Option<usize> {
        let mut depth = 0usize;
        let mut max = 0usize;
        for cmd in &self.commands {
            match cmd {
                DrawCommand::PushMatrix => {
                    depth += 1;
                    max = max.max(depth);
                }
                DrawCommand::PopMatrix => depth = depth.checked_sub(1)?,
                _ => {}
            }
        }
        Some(max)
    }

    /// Serialize the recorded frame.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse a recorded frame.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Re-issue every recorded command against another canvas.
    pub fn replay<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        for cmd in &self.commands {
            match cmd {
                DrawCommand::PushMatrix => canvas.push_matrix(),
                DrawCommand::PopMatrix => canvas.pop_matrix(),
                DrawCommand::Rotate { degrees, axis } => canvas.rotate(*degrees, *axis),
                DrawCommand::Translate { offset } => canvas.translate(Vec3::from_array(*offset)),
                DrawCommand::SetColor { rgb } => canvas.set_color(Rgba::from_rgb_array(*rgb)),
                DrawCommand::SetMaterial(material) => canvas.set_material(material),
                DrawCommand::SetLight { slot, light } => canvas.set_light(*slot, light),
                DrawCommand::SolidSphere { radius, slices, stacks } => {
                    canvas.solid_sphere(*radius, *slices, *stacks)
                }
                DrawCommand::LineLoop { points } => {
                    let points: Vec<Vec2> = points.iter().map(|p| Vec2::from_array(*p)).collect();
                    canvas.line_loop(&points);
                }
            }
        }
    }
}

impl Canvas for CommandList {
    fn begin_frame(&mut self, lights: &LightState) {
        self.clear();
        self.lights = Some(*lights);
    }

    fn push_matrix(&mut self) {
        self.commands.push(DrawCommand::PushMatrix);
    }

    fn pop_matrix(&mut self) {
        self.commands.push(DrawCommand::PopMatrix);
    }

    fn rotate(&mut self, degrees: f32, axis: Axis) {
        self.commands.push(DrawCommand::Rotate { degrees, axis });
    }

    fn translate(&mut self, offset: Vec3) {
        self.commands.push(DrawCommand::Translate { offset: offset.to_array() });
    }

    fn set_color(&mut self, color: Rgba) {
        self.commands.push(DrawCommand::SetColor { rgb: color.rgb_array() });
    }

    fn set_material(&mut self, material: &Material) {
        self.commands.push(DrawCommand::SetMaterial(*material));
    }

    fn set_light(&mut self, slot: LightSlot, light: &PointLight) {
        self.commands.push(DrawCommand::SetLight { slot, light: *light });
    }

    fn solid_sphere(&mut self, radius: f32, slices: u32, stacks: u32) {
        self.commands.push(DrawCommand::SolidSphere { radius, slices, stacks });
    }

    fn line_loop(&mut self, points: &[Vec2]) {
        self.commands.push(DrawCommand::LineLoop {
            points: points.iter().map(|p| p.to_array()).collect(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_order() {
        let mut list = CommandList::new();
        list.push_matrix();
        list.rotate(45.0, Axis::Z);
        list.translate(Vec3::new(1.0, 2.0, 3.0));
        list.pop_matrix();

        assert_eq!(
            list.commands(),
            &[
                DrawCommand::PushMatrix,
                DrawCommand::Rotate { degrees: 45.0, axis: Axis::Z },
                DrawCommand::Translate { offset: [1.0, 2.0, 3.0] },
                DrawCommand::PopMatrix,
            ]
        );
    }

    #[test]
    fn set_color_drops_alpha() {
        let mut list = CommandList::new();
        list.set_color(Rgba::new(0.1, 0.2, 0.3, 0.4));
        assert_eq!(list.commands()[0], DrawCommand::SetColor { rgb: [0.1, 0.2, 0.3] });
    }

    #[test]
    fn begin_frame_clears_and_keeps_lights() {
        let mut list = CommandList::new();
        list.push_matrix();
        list.begin_frame(&LightState::unlit());
        assert!(list.is_empty());
        assert_eq!(list.lights(), Some(&LightState::unlit()));
    }

    #[test]
    fn max_depth_tracks_nesting() {
        let mut list = CommandList::new();
        list.push_matrix();
        list.push_matrix();
        list.pop_matrix();
        list.pop_matrix();
        assert_eq!(list.max_depth(), Some(2));

        list.pop_matrix();
        assert_eq!(list.max_depth(), None);
    }

    #[test]
    fn json_uses_op_tags() {
        let mut list = CommandList::new();
        list.solid_sphere(2.0, 40, 32);
        let json = list.to_json().unwrap();
        assert!(json.contains(r#""op":"solid_sphere""#), "json = {json}");

        let back = CommandList::from_json(&json).unwrap();
        assert_eq!(back.commands(), list.commands());
    }

    #[test]
    fn replay_reproduces_commands() {
        let mut list = CommandList::new();
        list.set_light(LightSlot::PRIMARY, &PointLight::luminous());
        list.set_material(&Material::body(Rgba::GREEN));
        list.push_matrix();
        list.line_loop(&[Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0), Vec2::new(-1.0, 0.0)]);
        list.set_color(Rgba::GREEN);
        list.solid_sphere(1.0, 40, 32);
        list.pop_matrix();

        let mut copy = CommandList::new();
        list.replay(&mut copy);
        assert_eq!(copy.commands(), list.commands());
    }
}

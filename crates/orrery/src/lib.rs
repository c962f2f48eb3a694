pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod assets;
pub mod error;

// Re-export key types at crate root for convenience
pub use api::types::BodyId;
pub use components::body::{BodyKind, CelestialBody};
pub use components::color::Rgba;
pub use components::material::{Face, Material};
pub use core::scene::Scene;
pub use core::time::TickClock;
pub use core::runner::{Orrery, RunnerConfig};
pub use renderer::traits::{Axis, Canvas, SPHERE_SLICES, SPHERE_STACKS};
pub use renderer::command::{CommandList, DrawCommand};
pub use renderer::frame::{FrameCanvas, OrbitPath, PlacedLight};
pub use renderer::matrix_stack::MatrixStack;
pub use renderer::sphere_instance::{SphereInstance, SphereBuffer};
pub use systems::lighting::{PointLight, LightSlot, LightState, MAX_LIGHTS};
pub use systems::orbit::{ORBIT_SEGMENTS, angular_speed, orbit_path, wrap_degrees};
pub use assets::manifest::{SceneManifest, BodyEntry};
pub use assets::preset::{classic_manifest, classic_scene};
pub use error::SceneError;

#[cfg(feature = "vectors")]
pub use systems::vector::{VectorState, VectorVertex};

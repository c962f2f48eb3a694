pub mod command;
pub mod frame;
pub mod matrix_stack;
pub mod sphere_instance;
pub mod traits;

// Re-export key types for convenient access
pub use command::{CommandList, DrawCommand};
pub use frame::{FrameCanvas, OrbitPath, PlacedLight};
pub use traits::{Axis, Canvas};

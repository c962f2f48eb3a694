pub mod manifest;
pub mod preset;

pub mod runner;
pub mod scene;
pub mod time;

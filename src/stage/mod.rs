//! Stage module housing the camera, input boundary, and window state.
pub mod components;
pub mod events;
pub mod plugin;
pub mod systems;

pub use plugin::StagePlugin;

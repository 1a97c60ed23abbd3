//! Bubble module owning entity identity, the live ledger, and the lifecycle.
pub mod components;
pub mod events;
pub mod ledger;
pub mod plugin;
pub mod systems;

pub use plugin::BubblePlugin;

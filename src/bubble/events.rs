//! Bubble lifecycle events broadcast between systems.
use bevy::prelude::{Event, Message, Vec2};

/// Fired when a pointer press requests a new bubble at a world position.
#[derive(Event, Message, Debug, Clone)]
pub struct SpawnBubbleEvent {
    pub position: Vec2,
}

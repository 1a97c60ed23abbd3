//! Stage-level events emitted by the overlay controls.
use bevy::prelude::{Event, Message};

/// Requests flipping the primary window between windowed and fullscreen.
#[derive(Event, Message, Debug, Clone)]
pub struct ToggleFullscreenEvent;

/// Requests cycling the canvas background to its other tone.
#[derive(Event, Message, Debug, Clone)]
pub struct ToggleBackgroundEvent;

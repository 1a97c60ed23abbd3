//! Components and resources for the stage module.
use bevy::prelude::*;

/// Marker component for the camera that projects pointer coordinates onto
/// the canvas.
#[derive(Component, Default)]
pub struct StageCamera;

/// Two-tone canvas background, cycled by the overlay control.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Background {
    #[default]
    Black,
    White,
}

impl Background {
    /// Fill color for the canvas.
    pub fn fill(self) -> Color {
        match self {
            Background::Black => Color::BLACK,
            Background::White => Color::WHITE,
        }
    }

    /// The opposite tone, used for overlay text so it stays readable.
    pub fn contrast(self) -> Color {
        match self {
            Background::Black => Color::WHITE,
            Background::White => Color::BLACK,
        }
    }

    pub fn toggle(&mut self) {
        *self = match self {
            Background::Black => Background::White,
            Background::White => Background::Black,
        };
    }
}

/// Mirrors whether the primary window is actually fullscreen.
///
/// Synced from the window mode each frame, so leaving fullscreen through the
/// keyboard is observed the same way as the overlay control.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FullscreenState {
    pub active: bool,
}

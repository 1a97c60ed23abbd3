// src/ui/overlay/components.rs
//
// Components and resources for the overlay controls.

use bevy::prelude::*;

/// Marker component for overlay control entities.
///
/// Controls are hidden while the window is fullscreen and restored when it
/// returns to windowed mode.
#[derive(Component, Debug)]
pub struct OverlayControl;

/// Action dispatched when an overlay control is pressed.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayAction {
    ToggleFullscreen,
    ToggleBackground,
}

/// Resource containing layout settings for the overlay controls.
#[derive(Resource, Debug)]
pub struct OverlaySettings {
    /// Offset of both controls from the top edge (pixels).
    pub top_offset: f32,

    /// Left offset of the fullscreen control (pixels).
    pub fullscreen_left: f32,

    /// Left offset of the background control (pixels).
    pub background_left: f32,

    /// Font size for control labels (points).
    pub font_size: f32,

    /// Opacity of control labels.
    pub text_opacity: f32,
}

impl Default for OverlaySettings {
    fn default() -> Self {
        Self {
            top_offset: 8.0,
            fullscreen_left: 8.0,
            background_left: 112.0,
            font_size: 14.0,
            text_opacity: 0.8,
        }
    }
}

// src/ui/overlay/plugin.rs
//
// UiPlugin coordinates the overlay control systems and resources.

use bevy::prelude::*;

use super::components::OverlaySettings;
use super::systems::{
    handle_overlay_buttons, setup_overlay, update_overlay_palette, update_overlay_visibility,
};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        info!("UiPlugin registered");

        app.init_resource::<OverlaySettings>()
            .add_systems(Startup, setup_overlay)
            .add_systems(
                Update,
                (
                    handle_overlay_buttons,
                    update_overlay_visibility,
                    update_overlay_palette,
                ),
            );
    }
}

//! StagePlugin coordinates the camera, pointer input, and window state.
use bevy::prelude::*;

use crate::stage::{
    components::{Background, FullscreenState},
    events::{ToggleBackgroundEvent, ToggleFullscreenEvent},
    systems::{
        apply_background, apply_background_toggle, apply_fullscreen_toggle,
        exit_fullscreen_on_escape, pointer_input, spawn_stage, sync_fullscreen_state,
    },
};

pub struct StagePlugin;

impl Plugin for StagePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Background::default())
            .insert_resource(ClearColor(Background::default().fill()))
            .init_resource::<FullscreenState>()
            .add_event::<ToggleFullscreenEvent>()
            .add_event::<ToggleBackgroundEvent>()
            .add_systems(Startup, spawn_stage)
            .add_systems(
                Update,
                (
                    pointer_input,
                    (
                        apply_fullscreen_toggle,
                        exit_fullscreen_on_escape.after(apply_fullscreen_toggle),
                        sync_fullscreen_state.after(exit_fullscreen_on_escape),
                    ),
                    (
                        apply_background_toggle,
                        apply_background.after(apply_background_toggle),
                    ),
                ),
            );
    }
}

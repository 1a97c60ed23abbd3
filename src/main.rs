use bevy::prelude::*;

mod bubble;
mod stage;
mod ui;

use crate::{bubble::BubblePlugin, stage::StagePlugin, ui::UiPlugin};

fn main() {
    App::new()
        .add_plugins((
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Bubbles".into(),
                    ..default()
                }),
                ..default()
            }),
            StagePlugin,
            BubblePlugin,
            UiPlugin, // After StagePlugin to observe fullscreen/background state
        ))
        .run();
}

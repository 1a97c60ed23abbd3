//! Systems for the stage module.
use bevy::{
    ecs::message::MessageReader,
    input::ButtonInput,
    prelude::*,
    window::{MonitorSelection, PrimaryWindow, WindowMode},
};

use crate::bubble::events::SpawnBubbleEvent;
use crate::stage::components::{Background, FullscreenState, StageCamera};
use crate::stage::events::{ToggleBackgroundEvent, ToggleFullscreenEvent};

/// Spawns the 2D camera that maps pointer coordinates onto the canvas.
pub fn spawn_stage(mut commands: Commands) {
    commands.spawn((Camera2d, StageCamera));
}

/// Convert a window cursor position (top-left origin) to world coordinates.
fn cursor_world_pos(
    camera: &Camera,
    camera_transform: &GlobalTransform,
    screen_pos: Vec2,
) -> Option<Vec2> {
    camera
        .viewport_to_world_2d(camera_transform, screen_pos)
        .ok()
}

/// Turns pointer presses (mouse click or touch tap) into bubble spawn
/// requests.
///
/// A press with no cursor position, or one the camera cannot project, is
/// ignored rather than spawning a malformed bubble.
pub fn pointer_input(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<(&Camera, &GlobalTransform), With<StageCamera>>,
    mut spawn_writer: MessageWriter<SpawnBubbleEvent>,
) {
    let Ok(window) = window_query.single() else {
        return;
    };
    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };

    for touch in touches.iter_just_pressed() {
        if let Some(position) = cursor_world_pos(camera, camera_transform, touch.position()) {
            spawn_writer.write(SpawnBubbleEvent { position });
        }
    }

    if mouse_buttons.just_pressed(MouseButton::Left) {
        let Some(cursor) = window.cursor_position() else {
            return;
        };
        if let Some(position) = cursor_world_pos(camera, camera_transform, cursor) {
            spawn_writer.write(SpawnBubbleEvent { position });
        }
    }
}

/// Flips the primary window between windowed and borderless fullscreen.
pub fn apply_fullscreen_toggle(
    mut events: MessageReader<ToggleFullscreenEvent>,
    mut window_query: Query<&mut Window, With<PrimaryWindow>>,
) {
    let Ok(mut window) = window_query.single_mut() else {
        return;
    };

    for _ in events.read() {
        window.mode = match window.mode {
            WindowMode::Windowed => WindowMode::BorderlessFullscreen(MonitorSelection::Primary),
            _ => WindowMode::Windowed,
        };
    }
}

/// Leaves fullscreen when Escape is pressed, matching browser chrome.
pub fn exit_fullscreen_on_escape(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut window_query: Query<&mut Window, With<PrimaryWindow>>,
) {
    if !keyboard.just_pressed(KeyCode::Escape) {
        return;
    }

    let Ok(mut window) = window_query.single_mut() else {
        return;
    };
    if window.mode != WindowMode::Windowed {
        window.mode = WindowMode::Windowed;
    }
}

/// Publishes the window's actual mode into [`FullscreenState`].
pub fn sync_fullscreen_state(
    window_query: Query<&Window, With<PrimaryWindow>>,
    mut state: ResMut<FullscreenState>,
) {
    let Ok(window) = window_query.single() else {
        return;
    };

    let active = window.mode != WindowMode::Windowed;
    if state.active != active {
        state.active = active;
    }
}

/// Cycles the background between its two fixed tones.
pub fn apply_background_toggle(
    mut events: MessageReader<ToggleBackgroundEvent>,
    mut background: ResMut<Background>,
) {
    for _ in events.read() {
        background.toggle();
    }
}

/// Keeps the canvas clear color in step with the background choice.
pub fn apply_background(background: Res<Background>, mut clear_color: ResMut<ClearColor>) {
    if background.is_changed() {
        clear_color.0 = background.fill();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn background_toggle_updates_canvas_and_contrast() {
        let mut app = App::new();
        app.insert_resource(Background::default());
        app.insert_resource(ClearColor(Background::default().fill()));
        app.add_event::<ToggleBackgroundEvent>();
        app.add_systems(
            Update,
            (
                apply_background_toggle,
                apply_background.after(apply_background_toggle),
            ),
        );

        app.world_mut().write_message(ToggleBackgroundEvent);
        app.update();

        assert_eq!(*app.world().resource::<Background>(), Background::White);
        assert_eq!(app.world().resource::<ClearColor>().0, Color::WHITE);
        assert_eq!(
            app.world().resource::<Background>().contrast(),
            Color::BLACK
        );

        app.world_mut().write_message(ToggleBackgroundEvent);
        app.update();

        assert_eq!(*app.world().resource::<Background>(), Background::Black);
        assert_eq!(app.world().resource::<ClearColor>().0, Color::BLACK);
        assert_eq!(
            app.world().resource::<Background>().contrast(),
            Color::WHITE
        );
    }

    #[test]
    fn fullscreen_toggle_flips_window_mode_and_state() {
        let mut app = App::new();
        app.init_resource::<FullscreenState>();
        app.add_event::<ToggleFullscreenEvent>();
        app.add_systems(
            Update,
            (
                apply_fullscreen_toggle,
                sync_fullscreen_state.after(apply_fullscreen_toggle),
            ),
        );
        app.world_mut().spawn((Window::default(), PrimaryWindow));

        app.world_mut().write_message(ToggleFullscreenEvent);
        app.update();
        assert!(app.world().resource::<FullscreenState>().active);

        app.world_mut().write_message(ToggleFullscreenEvent);
        app.update();
        assert!(!app.world().resource::<FullscreenState>().active);
    }

    #[test]
    fn escape_returns_to_windowed_mode() {
        let mut app = App::new();
        app.init_resource::<FullscreenState>();
        app.init_resource::<ButtonInput<KeyCode>>();
        app.add_systems(
            Update,
            (
                exit_fullscreen_on_escape,
                sync_fullscreen_state.after(exit_fullscreen_on_escape),
            ),
        );
        app.world_mut().spawn((
            Window {
                mode: WindowMode::BorderlessFullscreen(MonitorSelection::Primary),
                ..Default::default()
            },
            PrimaryWindow,
        ));

        app.update();
        assert!(app.world().resource::<FullscreenState>().active);

        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::Escape);
        app.update();

        assert!(!app.world().resource::<FullscreenState>().active);
        let mut windows = app.world_mut().query::<&Window>();
        assert_eq!(
            windows.single(app.world()).expect("window exists").mode,
            WindowMode::Windowed
        );
    }
}

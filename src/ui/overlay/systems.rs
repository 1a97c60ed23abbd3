// src/ui/overlay/systems.rs
//
// Systems for spawning and driving the overlay controls.

use bevy::prelude::*;

use crate::stage::components::{Background, FullscreenState};
use crate::stage::events::{ToggleBackgroundEvent, ToggleFullscreenEvent};

use super::components::{OverlayAction, OverlayControl, OverlaySettings};

const FULLSCREEN_LABEL: &str = "Enter fullscreen";
const BACKGROUND_LABEL: &str = "Change background";

/// Spawn the two overlay controls in the top-left corner.
pub fn setup_overlay(
    mut commands: Commands,
    settings: Res<OverlaySettings>,
    background: Res<Background>,
) {
    let text_color = background.contrast().with_alpha(settings.text_opacity);

    for (label, left, action) in [
        (
            FULLSCREEN_LABEL,
            settings.fullscreen_left,
            OverlayAction::ToggleFullscreen,
        ),
        (
            BACKGROUND_LABEL,
            settings.background_left,
            OverlayAction::ToggleBackground,
        ),
    ] {
        commands.spawn((
            Button,
            Interaction::None,
            Text::new(label),
            TextFont {
                font_size: settings.font_size,
                ..default()
            },
            TextColor(text_color),
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(left),
                top: Val::Px(settings.top_offset),
                ..default()
            },
            BackgroundColor(Color::NONE),
            ZIndex(100),
            OverlayControl,
            action,
        ));
    }

    info!("Overlay controls created");
}

/// Forward control presses to the stage as toggle events.
///
/// Pass-through only; the controls keep no state of their own.
#[allow(clippy::type_complexity)]
pub fn handle_overlay_buttons(
    mut fullscreen_writer: MessageWriter<ToggleFullscreenEvent>,
    mut background_writer: MessageWriter<ToggleBackgroundEvent>,
    buttons: Query<(&Interaction, &OverlayAction), (Changed<Interaction>, With<Button>)>,
) {
    for (interaction, action) in buttons.iter() {
        if *interaction != Interaction::Pressed {
            continue;
        }

        match action {
            OverlayAction::ToggleFullscreen => {
                fullscreen_writer.write(ToggleFullscreenEvent);
            }
            OverlayAction::ToggleBackground => {
                background_writer.write(ToggleBackgroundEvent);
            }
        }
    }
}

/// Hide the controls while fullscreen, restore them when windowed.
pub fn update_overlay_visibility(
    fullscreen: Res<FullscreenState>,
    mut controls: Query<&mut Visibility, With<OverlayControl>>,
) {
    if !fullscreen.is_changed() {
        return;
    }

    let visibility = if fullscreen.active {
        Visibility::Hidden
    } else {
        Visibility::Inherited
    };
    for mut control_visibility in controls.iter_mut() {
        *control_visibility = visibility;
    }
}

/// Re-color control labels to contrast the canvas background.
pub fn update_overlay_palette(
    background: Res<Background>,
    settings: Res<OverlaySettings>,
    mut controls: Query<&mut TextColor, With<OverlayControl>>,
) {
    if !background.is_changed() {
        return;
    }

    let text_color = background.contrast().with_alpha(settings.text_opacity);
    for mut color in controls.iter_mut() {
        color.0 = text_color;
    }
}

#[cfg(test)]
mod tests {
    use bevy::ecs::message::Messages;

    use super::*;

    #[test]
    fn pressing_a_control_emits_the_matching_toggle() {
        let mut app = App::new();
        app.add_event::<ToggleFullscreenEvent>();
        app.add_event::<ToggleBackgroundEvent>();
        app.add_systems(Update, handle_overlay_buttons);

        app.world_mut().spawn((
            Button,
            Interaction::Pressed,
            OverlayControl,
            OverlayAction::ToggleBackground,
        ));
        app.update();

        assert!(!app
            .world()
            .resource::<Messages<ToggleBackgroundEvent>>()
            .is_empty());
        assert!(app
            .world()
            .resource::<Messages<ToggleFullscreenEvent>>()
            .is_empty());
    }

    #[test]
    fn hover_alone_emits_nothing() {
        let mut app = App::new();
        app.add_event::<ToggleFullscreenEvent>();
        app.add_event::<ToggleBackgroundEvent>();
        app.add_systems(Update, handle_overlay_buttons);

        app.world_mut().spawn((
            Button,
            Interaction::Hovered,
            OverlayControl,
            OverlayAction::ToggleFullscreen,
        ));
        app.update();

        assert!(app
            .world()
            .resource::<Messages<ToggleFullscreenEvent>>()
            .is_empty());
    }

    #[test]
    fn fullscreen_hides_and_restores_controls() {
        let mut app = App::new();
        app.init_resource::<FullscreenState>();
        app.add_systems(Update, update_overlay_visibility);

        let control = app
            .world_mut()
            .spawn((Visibility::Inherited, OverlayControl))
            .id();
        app.update();

        app.world_mut().resource_mut::<FullscreenState>().active = true;
        app.update();
        assert_eq!(
            *app.world().get::<Visibility>(control).unwrap(),
            Visibility::Hidden
        );

        app.world_mut().resource_mut::<FullscreenState>().active = false;
        app.update();
        assert_eq!(
            *app.world().get::<Visibility>(control).unwrap(),
            Visibility::Inherited
        );
    }

    #[test]
    fn labels_take_the_contrasting_color() {
        let mut app = App::new();
        app.insert_resource(Background::White);
        app.init_resource::<OverlaySettings>();
        app.add_systems(Update, update_overlay_palette);

        let control = app
            .world_mut()
            .spawn((TextColor(Color::WHITE), OverlayControl))
            .id();
        app.update();

        let expected = Color::BLACK.with_alpha(0.8);
        assert_eq!(app.world().get::<TextColor>(control).unwrap().0, expected);
    }
}

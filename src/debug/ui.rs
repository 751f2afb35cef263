//! Debug domain: on-screen debug message line.

use bevy::prelude::*;

use crate::debug::state::DebugState;

/// Marker for the debug message text
#[derive(Component)]
pub struct DebugMessageText;

pub(crate) fn spawn_debug_message_ui(mut commands: Commands) {
    // Bottom-left, above the game world
    commands.spawn((
        DebugMessageText,
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(16.0),
            bottom: Val::Px(16.0),
            ..default()
        },
        Text::new(""),
        TextFont {
            font_size: 16.0,
            ..default()
        },
        TextColor(Color::srgb(1.0, 0.9, 0.4)),
    ));
}

pub(crate) fn update_debug_message(
    debug_state: Res<DebugState>,
    mut query: Query<&mut Text, With<DebugMessageText>>,
) {
    if !debug_state.is_changed() {
        return;
    }

    for mut text in &mut query {
        **text = debug_state.message_text().to_string();
    }
}

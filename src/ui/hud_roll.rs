//! UI domain: heelies status HUD.

use bevy::prelude::*;

use crate::heelies::{IconTier, STATUS_NAME};
use crate::movement::{ActiveSpeedStatus, LocalPlayer};

pub(crate) const ROLL_HUD_PADDING: f32 = 16.0;
pub(crate) const ROLL_ICON_SIZE: f32 = 20.0;

/// Marker for the heelies status container
#[derive(Component)]
pub struct RollStatusUI;

/// Marker for the tier-coloured icon square
#[derive(Component)]
pub struct RollStatusIcon;

/// Marker for the status name and modifier text
#[derive(Component)]
pub struct RollStatusText;

/// Marker for the "needs a push" description line
#[derive(Component)]
pub struct RollStatusDescription;

pub(crate) fn spawn_roll_status_ui(mut commands: Commands) {
    // Top-right, hidden until a status is published
    commands
        .spawn((
            RollStatusUI,
            Node {
                position_type: PositionType::Absolute,
                right: Val::Px(ROLL_HUD_PADDING),
                top: Val::Px(ROLL_HUD_PADDING),
                flex_direction: FlexDirection::Row,
                align_items: AlignItems::Center,
                column_gap: Val::Px(8.0),
                ..default()
            },
            Visibility::Hidden,
        ))
        .with_children(|parent| {
            parent.spawn((
                RollStatusIcon,
                Node {
                    width: Val::Px(ROLL_ICON_SIZE),
                    height: Val::Px(ROLL_ICON_SIZE),
                    ..default()
                },
                BackgroundColor(icon_color(IconTier::Cruising)),
            ));

            parent
                .spawn(Node {
                    flex_direction: FlexDirection::Column,
                    ..default()
                })
                .with_children(|column| {
                    column.spawn((
                        RollStatusText,
                        Text::new(STATUS_NAME),
                        TextFont {
                            font_size: 18.0,
                            ..default()
                        },
                        TextColor(Color::srgb(0.9, 0.9, 0.95)),
                    ));
                    column.spawn((
                        RollStatusDescription,
                        Text::new(""),
                        TextFont {
                            font_size: 14.0,
                            ..default()
                        },
                        TextColor(Color::srgb(0.75, 0.7, 0.6)),
                    ));
                });
        });
}

pub(crate) fn icon_color(tier: IconTier) -> Color {
    match tier {
        IconTier::Cruising => Color::srgb(0.3, 0.85, 0.95),
        IconTier::Gliding => Color::srgb(0.4, 0.75, 0.6),
        IconTier::Coasting => Color::srgb(0.85, 0.75, 0.3),
        IconTier::NeedsPush => Color::srgb(0.6, 0.35, 0.3),
    }
}

pub(crate) fn update_roll_status(
    player_query: Query<&ActiveSpeedStatus, (With<LocalPlayer>, Changed<ActiveSpeedStatus>)>,
    mut root_query: Query<&mut Visibility, With<RollStatusUI>>,
    mut icon_query: Query<&mut BackgroundColor, With<RollStatusIcon>>,
    mut text_query: Query<&mut Text, (With<RollStatusText>, Without<RollStatusDescription>)>,
    mut description_query: Query<
        &mut Text,
        (With<RollStatusDescription>, Without<RollStatusText>),
    >,
) {
    let Some(active) = player_query.iter().next() else {
        return;
    };

    for mut visibility in &mut root_query {
        *visibility = if active.0.is_some() {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
    }

    let Some(status) = active.0 else {
        return;
    };

    for mut bg_color in &mut icon_query {
        bg_color.0 = icon_color(status.icon);
    }
    for mut text in &mut text_query {
        **text = format!("{} {:+.1}", STATUS_NAME, status.speed);
    }
    for mut text in &mut description_query {
        **text = status.description().to_string();
    }
}

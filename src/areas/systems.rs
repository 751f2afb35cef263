//! Areas domain: edge crossing and backdrop systems.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::areas::events::AreaChangedEvent;
use crate::areas::map::{AreaMap, CurrentArea};
use crate::movement::LocalPlayer;

/// Marker for the sprite filling the visible area.
#[derive(Component, Debug)]
pub struct AreaBackdrop;

pub(crate) fn spawn_backdrop(mut commands: Commands, map: Res<AreaMap>) {
    commands.spawn((
        AreaBackdrop,
        Sprite {
            color: map.color(CurrentArea::default().0),
            custom_size: Some(map.half_extent * 2.0),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, -10.0),
    ));
}

/// Move players that stepped off an edge into the neighbouring area.
pub(crate) fn cross_area_edges(
    map: Res<AreaMap>,
    mut players: Query<(&LocalPlayer, &mut Transform, &mut CurrentArea)>,
    mut area_events: MessageWriter<AreaChangedEvent>,
) {
    for (local, mut transform, mut area) in &mut players {
        let position = transform.translation.truncate();
        let Some(edge) = map.crossed_edge(position) else {
            continue;
        };

        let Some(next) = map.neighbour(area.0, edge) else {
            let clamped = map.clamp(position);
            transform.translation.x = clamped.x;
            transform.translation.y = clamped.y;
            continue;
        };

        let entry = map.entry_point(position, edge);
        transform.translation.x = entry.x;
        transform.translation.y = entry.y;

        info!(
            "Session {:?} walked from {} to {}",
            local.0,
            map.name(area.0),
            map.name(next)
        );

        area_events.write(AreaChangedEvent {
            session: local.0,
            from: area.0,
            to: next,
        });
        area.0 = next;
    }
}

pub(crate) fn tint_backdrop(
    map: Res<AreaMap>,
    changed: Query<&CurrentArea, (With<LocalPlayer>, Changed<CurrentArea>)>,
    mut backdrops: Query<&mut Sprite, With<AreaBackdrop>>,
) {
    let Some(area) = changed.iter().next() else {
        return;
    };

    for mut sprite in &mut backdrops {
        sprite.color = map.color(area.0);
    }
}

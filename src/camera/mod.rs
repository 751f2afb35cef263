//! Camera domain: following the local player, with roll-driven targets.


use bevy::prelude::*;

use crate::core::TickSet;
use crate::heelies::CameraTarget;
use crate::movement::{LocalPlayer, Player};

/// Per-player camera request. Without a target the camera sits on the player.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct CameraFollow {
    pub target: Option<CameraTarget>,
}

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(FixedUpdate, follow_player.in_set(TickSet::Camera));
    }
}

fn follow_player(
    mut players: Query<(&Transform, &mut CameraFollow), (With<Player>, With<LocalPlayer>)>,
    mut cameras: Query<&mut Transform, (With<Camera2d>, Without<Player>)>,
) {
    let Some((player, mut follow)) = players.iter_mut().next() else {
        return;
    };
    let Ok(mut camera) = cameras.single_mut() else {
        return;
    };

    let current = camera.translation.truncate();
    let next = match follow.target {
        Some(target) => {
            let next = approach(current, target.position, target.speed);
            if next == target.position {
                follow.target = None;
            }
            next
        }
        None => player.translation.truncate(),
    };

    camera.translation.x = next.x;
    camera.translation.y = next.y;
}

/// Step from `current` toward `target` by at most `speed`.
pub(crate) fn approach(current: Vec2, target: Vec2, speed: f32) -> Vec2 {
    let speed = speed.max(0.0);
    let offset = target - current;
    let distance = offset.length();
    if distance <= speed {
        target
    } else {
        current + offset / distance * speed
    }
}

//! Movement domain: spawning local players.

use bevy::prelude::*;

use crate::areas::CurrentArea;
use crate::camera::CameraFollow;
use crate::heelies::SessionId;
use crate::movement::{
    ActiveSpeedStatus, LocalPlayer, Locomotion, MovementTuning, Player, RollSprite, StatusEffects,
};

pub(crate) const PLAYER_SIZE: Vec2 = Vec2::new(16.0, 32.0);

pub(crate) fn spawn_local_player(
    mut commands: Commands,
    tuning: Res<MovementTuning>,
    existing_player: Query<Entity, With<Player>>,
) {
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let session = SessionId(0);
    info!(
        "Spawning local player for session {:?} with base speed {}",
        session, tuning.base_speed
    );

    commands.spawn((
        (
            Player,
            LocalPlayer(session),
            Name::new("Farmer"),
            Locomotion::new(tuning.base_speed),
            StatusEffects::default(),
            ActiveSpeedStatus::default(),
            RollSprite::default(),
            CameraFollow::default(),
            CurrentArea::default(),
        ),
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(PLAYER_SIZE),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 1.0),
    ));
}

//! Movement domain: per-tick walking and roll sprite presentation.

use bevy::prelude::*;

use crate::heelies::Facing;
use crate::movement::{
    ActiveSpeedStatus, Locomotion, MovementTuning, Player, RollSprite, StatusEffects,
};

const WALK_COLOR: Color = Color::srgb(0.9, 0.9, 0.9);
const ROLL_COLOR: Color = Color::srgb(0.6, 0.85, 1.0);

pub(crate) fn walk_players(
    tuning: Res<MovementTuning>,
    mut query: Query<
        (
            &mut Transform,
            &mut Locomotion,
            &StatusEffects,
            &ActiveSpeedStatus,
        ),
        With<Player>,
    >,
) {
    for (mut transform, mut locomotion, statuses, heelies) in &mut query {
        let mut speed = locomotion.base_speed + statuses.speed_bonus + heelies.speed();
        if locomotion.mounted {
            speed += tuning.mounted_speed_bonus;
        }

        let step = walk_step(&locomotion.directions, speed.max(tuning.min_speed));
        transform.translation += step.extend(0.0);
        locomotion.moved_last_tick = step != Vec2::ZERO;
    }
}

/// Displacement for one tick. Diagonals are normalized so they are not faster.
pub(crate) fn walk_step(directions: &[i32], speed: f32) -> Vec2 {
    directions
        .iter()
        .filter_map(|dir| Facing::from_index(*dir))
        .map(Facing::step)
        .sum::<Vec2>()
        .normalize_or_zero()
        * speed
}

pub(crate) fn apply_roll_sprite(
    mut query: Query<(&RollSprite, &mut Sprite), (With<Player>, Changed<RollSprite>)>,
) {
    for (roll, mut sprite) in &mut query {
        match roll.frame {
            Some(frame) => {
                sprite.flip_x = frame.flip_x;
                sprite.color = ROLL_COLOR;
            }
            None => {
                sprite.flip_x = false;
                sprite.color = WALK_COLOR;
            }
        }
    }
}

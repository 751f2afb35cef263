//! Movement domain: input sampling for walking.

use bevy::prelude::*;

use crate::movement::{LocalPlayer, Locomotion};

/// Keys per direction index: up, right, down, left.
const DIRECTION_KEYS: [[KeyCode; 2]; 4] = [
    [KeyCode::KeyW, KeyCode::ArrowUp],
    [KeyCode::KeyD, KeyCode::ArrowRight],
    [KeyCode::KeyS, KeyCode::ArrowDown],
    [KeyCode::KeyA, KeyCode::ArrowLeft],
];

pub(crate) fn read_walk_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut query: Query<&mut Locomotion, With<LocalPlayer>>,
) {
    let held = DIRECTION_KEYS.map(|keys| keys.iter().any(|key| keyboard.pressed(*key)));

    for mut locomotion in &mut query {
        update_held_directions(&mut locomotion.directions, held);
    }
}

/// Keep earlier presses first, drop released directions, append new ones.
pub(crate) fn update_held_directions(directions: &mut Vec<i32>, held: [bool; 4]) {
    directions.retain(|dir| usize::try_from(*dir).is_ok_and(|i| held.get(i) == Some(&true)));

    for (index, pressed) in held.iter().enumerate() {
        let dir = index as i32;
        if *pressed && !directions.contains(&dir) {
            directions.push(dir);
        }
    }
}

//! Core domain: boot, pause, and tick clock systems.

use bevy::prelude::*;

use crate::core::resources::SimulationTick;
use crate::core::state::GameState;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

pub(crate) fn finish_boot(mut game_state: ResMut<NextState<GameState>>) {
    game_state.set(GameState::Playing);
}

pub(crate) fn toggle_pause(
    keyboard: Res<ButtonInput<KeyCode>>,
    state: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if !keyboard.just_pressed(KeyCode::Escape) {
        return;
    }

    match state.get() {
        GameState::Playing => {
            info!("Paused");
            next_state.set(GameState::Paused);
        }
        GameState::Paused => {
            info!("Resumed");
            next_state.set(GameState::Playing);
        }
        GameState::Boot => {}
    }
}

pub(crate) fn advance_tick(mut tick: ResMut<SimulationTick>) {
    tick.advance();
}

//! Core domain: app state, the simulation clock, and camera setup.

mod resources;
mod state;
mod systems;

pub use resources::{SimulationTick, TICKS_PER_SECOND};
pub use state::{GameState, TickSet};

use bevy::prelude::*;

use crate::core::systems::{advance_tick, finish_boot, setup_camera, toggle_pause};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<SimulationTick>()
            .insert_resource(Time::<Fixed>::from_hz(TICKS_PER_SECOND))
            .configure_sets(
                FixedUpdate,
                (
                    TickSet::Clock,
                    TickSet::Walk,
                    TickSet::Areas,
                    TickSet::Roll,
                    TickSet::Camera,
                )
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(Startup, (setup_camera, finish_boot))
            .add_systems(Update, toggle_pause)
            .add_systems(FixedUpdate, advance_tick.in_set(TickSet::Clock));
    }
}

//! Movement domain: top-down walking for local players.

mod bootstrap;
mod components;
mod resources;
mod systems;

pub use components::{ActiveSpeedStatus, LocalPlayer, Locomotion, Player, RollSprite, StatusEffects};
pub use resources::MovementTuning;

use bevy::prelude::*;

use crate::core::TickSet;
use crate::movement::bootstrap::spawn_local_player;
use crate::movement::systems::{apply_roll_sprite, read_walk_input, walk_players};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .add_systems(Startup, spawn_local_player)
            .add_systems(Update, (read_walk_input, apply_roll_sprite))
            .add_systems(FixedUpdate, walk_players.in_set(TickSet::Walk));
    }
}

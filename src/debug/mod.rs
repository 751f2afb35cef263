//! Debug domain: dev-tools hotkeys for statuses and mounting.

mod state;
mod systems;
mod ui;

pub use state::{DebugAction, DebugState};

use bevy::prelude::*;

use crate::debug::systems::{handle_debug_hotkeys, update_status_message};
use crate::debug::ui::{spawn_debug_message_ui, update_debug_message};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Startup, spawn_debug_message_ui)
            .add_systems(
                Update,
                (
                    handle_debug_hotkeys,
                    update_status_message,
                    update_debug_message,
                )
                    .chain(),
            );
    }
}

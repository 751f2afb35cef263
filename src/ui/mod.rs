//! UI domain: in-game HUD elements.

mod hud_roll;

use bevy::prelude::*;

use crate::ui::hud_roll::{spawn_roll_status_ui, update_roll_status};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_roll_status_ui)
            .add_systems(Update, update_roll_status);
    }
}

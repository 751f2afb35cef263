//! Config domain: user-editable heelies settings.

mod keybind;
mod loader;

pub use keybind::KeybindList;
pub use loader::{load_or_create_config, parse_config, write_config};

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::heelies::{DecayPolicy, RollSettings};

/// Where the config lives relative to the working directory.
pub const CONFIG_PATH: &str = "assets/config/heelies.ron";

/// Error type for config loading failures.
#[derive(Debug)]
pub struct ConfigLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ConfigLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct HeeliesConfig {
    /// Press to start rolling, release to stop.
    pub heelies_button: KeybindList,
    pub initial_speed_boost: f32,
    pub decay: DecayPolicy,
    pub camera_follow: bool,
    pub stack_existing_bonus: bool,
}

impl Default for HeeliesConfig {
    fn default() -> Self {
        let settings = RollSettings::default();
        Self {
            heelies_button: KeybindList::default(),
            initial_speed_boost: settings.initial_speed_boost,
            decay: settings.decay,
            camera_follow: settings.camera_follow,
            stack_existing_bonus: settings.stack_existing_bonus,
        }
    }
}

impl HeeliesConfig {
    pub fn roll_settings(&self) -> RollSettings {
        RollSettings {
            initial_speed_boost: self.initial_speed_boost,
            decay: self.decay,
            camera_follow: self.camera_follow,
            stack_existing_bonus: self.stack_existing_bonus,
        }
    }
}

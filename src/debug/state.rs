//! Debug domain: state for debug tooling.

use bevy::prelude::*;

/// Resource tracking debug mode state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Message to display temporarily, with seconds remaining
    pub status_message: Option<(String, f32)>,
}

impl DebugState {
    /// Set a status message that will fade after a duration
    pub fn set_message(&mut self, message: impl Into<String>, duration: f32) {
        self.status_message = Some((message.into(), duration));
    }

    /// Count the message down, dropping it once expired.
    pub fn tick_message(&mut self, dt: f32) {
        if let Some((_, remaining)) = &mut self.status_message {
            *remaining -= dt;
            if *remaining <= 0.0 {
                self.status_message = None;
            }
        }
    }

    /// Text currently shown in the debug message line.
    pub fn message_text(&self) -> &str {
        self.status_message
            .as_ref()
            .map(|(message, _)| message.as_str())
            .unwrap_or("")
    }
}

/// Actions that can be triggered from debug hotkeys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugAction {
    ToggleSlimed,
    ToggleTipsy,
    ToggleMounted,
    AddSpeedBonus,
    ClearSpeedBonus,
}

//! Movement domain: player components shared with the heelies host adapter.

use bevy::prelude::*;
use std::collections::HashSet;

use crate::heelies::{RollFrame, SessionId, SpeedStatus, StatusEffect};

#[derive(Component, Debug)]
pub struct Player;

/// Binds a player entity to its local session ("screen").
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalPlayer(pub SessionId);

#[derive(Component, Debug, Clone)]
pub struct Locomotion {
    /// Held direction indices in press order (0 up, 1 right, 2 down, 3 left).
    pub directions: Vec<i32>,
    pub moved_last_tick: bool,
    pub base_speed: f32,
    pub mounted: bool,
}

impl Locomotion {
    pub fn new(base_speed: f32) -> Self {
        Self {
            directions: Vec::new(),
            moved_last_tick: false,
            base_speed,
            mounted: false,
        }
    }
}

/// Status effects from food, drink and monsters.
#[derive(Component, Debug, Default, Clone)]
pub struct StatusEffects {
    pub active: HashSet<StatusEffect>,
    /// Speed bonus from everything other than heelies.
    pub speed_bonus: f32,
}

impl StatusEffects {
    /// Returns whether the status is active afterwards.
    pub fn toggle(&mut self, status: StatusEffect) -> bool {
        if !self.active.remove(&status) {
            self.active.insert(status);
            return true;
        }
        false
    }
}

/// The heelies speed status as last published by the controller.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct ActiveSpeedStatus(pub Option<SpeedStatus>);

impl ActiveSpeedStatus {
    pub fn speed(&self) -> f32 {
        self.0.map(|status| status.speed).unwrap_or(0.0)
    }
}

/// Roll frame override for the player sprite. `None` means normal walking.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct RollSprite {
    pub frame: Option<RollFrame>,
}

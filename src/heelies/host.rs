//! Heelies domain: the narrow contract the controller has with its host.

use bevy::prelude::*;

use crate::heelies::session::Facing;

/// Display name of the speed status applied while rolling.
pub const STATUS_NAME: &str = "Heelies";

const NEEDS_PUSH_DESCRIPTION: &str = "Looks like you need a push.";

/// Negative statuses that block engaging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusEffect {
    /// Slowed by slime.
    Slimed,
    Tipsy,
}

/// Status icon tier, picked from the current modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconTier {
    Cruising = 0,
    Gliding = 1,
    Coasting = 2,
    NeedsPush = 3,
}

impl IconTier {
    pub fn for_modifier(modifier: f32) -> Self {
        if modifier > 2.0 {
            IconTier::Cruising
        } else if modifier > 1.0 {
            IconTier::Gliding
        } else if modifier > 0.0 {
            IconTier::Coasting
        } else {
            IconTier::NeedsPush
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Duration-less speed status published to the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedStatus {
    pub speed: f32,
    pub icon: IconTier,
}

impl SpeedStatus {
    pub fn for_modifier(speed: f32) -> Self {
        Self {
            speed,
            icon: IconTier::for_modifier(speed),
        }
    }

    /// Tooltip text, derived from `speed` rather than stored.
    pub fn description(&self) -> &'static str {
        if self.speed <= 0.0 {
            NEEDS_PUSH_DESCRIPTION
        } else {
            ""
        }
    }
}

/// Animation frame request for the player sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollFrame {
    pub facing: Facing,
    pub frame: u32,
    pub flip_x: bool,
}

/// Where the camera should head and how fast (world units per tick).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraTarget {
    pub position: Vec2,
    pub speed: f32,
}

/// Services the host simulation provides to the roll controller.
///
/// Queries are assumed infallible. Commands are fire-and-forget.
pub trait RollHost {
    fn player_name(&self) -> &str;
    /// False during cutscenes, menus and pauses.
    fn player_is_free(&self) -> bool;
    fn moved_last_tick(&self) -> bool;
    fn is_mounted(&self) -> bool;
    fn has_status(&self, status: StatusEffect) -> bool;
    /// Held movement directions, primary first.
    fn movement_directions(&self) -> Vec<i32>;
    fn position(&self) -> Vec2;
    fn base_speed(&self) -> f32;
    /// Speed bonus from other temporary effects already on the player.
    fn temporary_speed_bonus(&self) -> f32 {
        0.0
    }

    fn apply_speed_status(&mut self, status: SpeedStatus);
    fn clear_speed_status(&mut self);
    fn show_frame(&mut self, frame: RollFrame);
    fn halt_animation(&mut self);
    fn move_camera(&mut self, target: CameraTarget);
}

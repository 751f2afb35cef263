//! Heelies domain: per-session rolling state.

use bevy::prelude::*;

/// Identity of one local player session ("screen").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SessionId(pub u32);

/// Facing direction, indexed the way the host orders movement directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Facing {
    Up = 0,
    Right = 1,
    #[default]
    Down = 2,
    Left = 3,
}

impl Facing {
    /// Map a raw host direction index. Anything outside 0..=3 is rejected.
    pub fn from_index(index: i32) -> Option<Self> {
        match index {
            0 => Some(Facing::Up),
            1 => Some(Facing::Right),
            2 => Some(Facing::Down),
            3 => Some(Facing::Left),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Unit step in world space (y grows upward).
    pub fn step(self) -> Vec2 {
        match self {
            Facing::Up => Vec2::Y,
            Facing::Right => Vec2::X,
            Facing::Down => Vec2::NEG_Y,
            Facing::Left => Vec2::NEG_X,
        }
    }
}

/// Rolling state for a single session. Reset to default on every disengage.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RollSession {
    pub is_rolling: bool,
    pub speed_modifier: f32,
    pub facing: Facing,
}

/// Edge state of the activation binding for one input change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    #[default]
    Idle,
    /// Pressed this frame.
    Pressed,
    Held,
    /// Released this frame.
    Released,
}

impl ButtonState {
    pub fn just_pressed(self) -> bool {
        self == ButtonState::Pressed
    }

    pub fn is_transition(self) -> bool {
        matches!(self, ButtonState::Pressed | ButtonState::Released)
    }
}

//! Core domain: app states and fixed-tick ordering.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum GameState {
    #[default]
    Boot,
    /// Player is free to move. Anything else counts as a menu or cutscene.
    Playing,
    Paused,
}

/// Order of work inside one simulation tick.
#[derive(SystemSet, Debug, Hash, Eq, PartialEq, Clone)]
pub enum TickSet {
    Clock,
    Walk,
    Areas,
    Roll,
    Camera,
}

//! Core domain: shared simulation resources.

use bevy::prelude::*;

/// Simulation steps per second.
pub const TICKS_PER_SECOND: f64 = 60.0;

/// Monotonic count of simulation ticks since startup.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SimulationTick(pub u64);

impl SimulationTick {
    pub fn advance(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(1);
        self.0
    }
}

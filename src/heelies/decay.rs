//! Heelies domain: speed modifier decay policies.

use serde::{Deserialize, Serialize};

/// Modifiers are held in hundredths so repeated steps land on exact tier thresholds.
pub const MODIFIER_SCALE: f32 = 100.0;

/// Snap `modifier` to the nearest hundredth.
pub fn quantize(modifier: f32) -> f32 {
    (modifier * MODIFIER_SCALE).round() / MODIFIER_SCALE
}

/// How the speed modifier bleeds off while rolling.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub enum DecayPolicy {
    /// Subtract `step` on every tick, unbounded below.
    EveryTick { step: f32 },
    /// Subtract `step` on ticks divisible by `every`, never dropping below `floor`.
    Batched { every: u64, step: f32, floor: f32 },
}

impl Default for DecayPolicy {
    fn default() -> Self {
        DecayPolicy::Batched {
            every: 6,
            step: 0.1,
            floor: -5.0,
        }
    }
}

impl DecayPolicy {
    pub fn every_tick() -> Self {
        DecayPolicy::EveryTick { step: 0.02 }
    }

    /// Whether `tick` is a decay tick under this policy.
    pub fn decays_on(&self, tick: u64) -> bool {
        match *self {
            DecayPolicy::EveryTick { .. } => true,
            DecayPolicy::Batched { every, .. } => tick % every.max(1) == 0,
        }
    }

    /// Modifier after `tick`. Non-decay ticks return it unchanged.
    pub fn apply(&self, modifier: f32, tick: u64) -> f32 {
        if !self.decays_on(tick) {
            return modifier;
        }

        let decayed = match *self {
            DecayPolicy::EveryTick { step } => modifier - step,
            DecayPolicy::Batched { step, floor, .. } => (modifier - step).max(floor),
        };
        quantize(decayed)
    }
}

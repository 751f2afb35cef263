//! Movement domain: walking tuning.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct MovementTuning {
    /// World units per tick on foot.
    pub base_speed: f32,
    /// Effective speed never drops below this, however spent the heelies are.
    pub min_speed: f32,
    pub mounted_speed_bonus: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            base_speed: 5.0,
            min_speed: 1.0,
            mounted_speed_bonus: 3.0,
        }
    }
}

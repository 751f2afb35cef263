//! Heelies domain: roll engagement, decay, and the host adapter wiring.

mod controller;
mod decay;
mod host;
mod session;
mod systems;
#[cfg(test)]
mod tests;

pub use controller::{
    CAMERA_DAMPING, CATCH_UP_SPEED, DisengageCause, ROLL_FRAMES, RollController, RollSettings,
    animate_roll, camera_speed, can_roll,
};
pub use decay::{DecayPolicy, quantize};
pub use host::{
    CameraTarget, IconTier, RollFrame, RollHost, STATUS_NAME, SpeedStatus, StatusEffect,
};
pub use session::{ButtonState, Facing, RollSession, SessionId};

use bevy::prelude::*;

use crate::config::HeeliesConfig;
use crate::core::TickSet;
use crate::heelies::systems::{
    forward_activation_input, forward_area_changes, load_heelies_config, tick_rolls,
};

pub struct HeeliesPlugin;

impl Plugin for HeeliesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HeeliesConfig>()
            .init_resource::<RollController>()
            .add_systems(Startup, load_heelies_config)
            .add_systems(Update, forward_activation_input)
            .add_systems(
                FixedUpdate,
                (forward_area_changes, tick_rolls)
                    .chain()
                    .in_set(TickSet::Roll),
            );
    }
}

//! Areas domain: distinct walkable areas and the transitions between them.

mod events;
mod map;
mod systems;

pub use events::AreaChangedEvent;
pub use map::{AreaMap, CurrentArea, ENTRY_MARGIN, Edge};

use bevy::prelude::*;

use crate::areas::systems::{cross_area_edges, spawn_backdrop, tint_backdrop};
use crate::core::TickSet;

pub struct AreasPlugin;

impl Plugin for AreasPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AreaMap>()
            .add_message::<AreaChangedEvent>()
            .add_systems(Startup, spawn_backdrop)
            .add_systems(FixedUpdate, cross_area_edges.in_set(TickSet::Areas))
            .add_systems(Update, tint_backdrop);
    }
}

//! Areas domain: area transition messages.

use bevy::ecs::message::Message;

use crate::heelies::SessionId;

/// Fired when a local player walks from one area into another.
#[derive(Debug)]
pub struct AreaChangedEvent {
    pub session: SessionId,
    pub from: usize,
    pub to: usize,
}

impl Message for AreaChangedEvent {}

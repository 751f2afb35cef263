//! Movement domain: system modules for walking.

pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use input::read_walk_input;
pub(crate) use movement::{apply_roll_sprite, walk_players};

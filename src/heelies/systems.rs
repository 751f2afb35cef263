//! Heelies domain: ECS systems that drive the controller from the host world.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use std::path::Path;

use crate::areas::AreaChangedEvent;
use crate::camera::CameraFollow;
use crate::config::{CONFIG_PATH, HeeliesConfig, load_or_create_config};
use crate::core::{GameState, SimulationTick};
use crate::heelies::controller::RollController;
use crate::heelies::host::{CameraTarget, RollFrame, RollHost, SpeedStatus, StatusEffect};
use crate::movement::{
    ActiveSpeedStatus, LocalPlayer, Locomotion, Player, RollSprite, StatusEffects,
};

/// Components the controller reads and writes through `PlayerHost`.
type RollerQuery<'w, 's> = Query<
    'w,
    's,
    (
        &'static LocalPlayer,
        &'static Name,
        &'static Transform,
        &'static Locomotion,
        &'static StatusEffects,
        &'static mut ActiveSpeedStatus,
        &'static mut RollSprite,
        &'static mut CameraFollow,
    ),
    With<Player>,
>;

/// One player's view of the world, borrowed for the duration of a handler call.
pub(crate) struct PlayerHost<'a> {
    pub name: &'a str,
    pub free: bool,
    pub position: Vec2,
    pub locomotion: &'a Locomotion,
    pub statuses: &'a StatusEffects,
    pub speed_status: &'a mut ActiveSpeedStatus,
    pub sprite: &'a mut RollSprite,
    pub camera: &'a mut CameraFollow,
}

impl RollHost for PlayerHost<'_> {
    fn player_name(&self) -> &str {
        self.name
    }

    fn player_is_free(&self) -> bool {
        self.free
    }

    fn moved_last_tick(&self) -> bool {
        self.locomotion.moved_last_tick
    }

    fn is_mounted(&self) -> bool {
        self.locomotion.mounted
    }

    fn has_status(&self, status: StatusEffect) -> bool {
        self.statuses.active.contains(&status)
    }

    fn movement_directions(&self) -> Vec<i32> {
        self.locomotion.directions.clone()
    }

    fn position(&self) -> Vec2 {
        self.position
    }

    fn base_speed(&self) -> f32 {
        self.locomotion.base_speed
    }

    fn temporary_speed_bonus(&self) -> f32 {
        self.statuses.speed_bonus
    }

    fn apply_speed_status(&mut self, status: SpeedStatus) {
        self.speed_status.0 = Some(status);
    }

    fn clear_speed_status(&mut self) {
        self.speed_status.0 = None;
    }

    fn show_frame(&mut self, frame: RollFrame) {
        self.sprite.frame = Some(frame);
    }

    fn halt_animation(&mut self) {
        self.sprite.frame = None;
    }

    fn move_camera(&mut self, target: CameraTarget) {
        self.camera.target = Some(target);
    }
}

pub(crate) fn load_heelies_config(
    mut config: ResMut<HeeliesConfig>,
    mut controller: ResMut<RollController>,
) {
    match load_or_create_config(Path::new(CONFIG_PATH)) {
        Ok(loaded) => {
            info!(
                "Loaded heelies config: button={}, initial_speed_boost={}, decay={:?}",
                String::from(loaded.heelies_button.clone()),
                loaded.initial_speed_boost,
                loaded.decay
            );
            *config = loaded;
        }
        Err(e) => warn!("{}; using default heelies config", e),
    }

    controller.set_settings(config.roll_settings());
}

/// Feed activation binding transitions to every local player's session.
pub(crate) fn forward_activation_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    config: Res<HeeliesConfig>,
    state: Res<State<GameState>>,
    mut controller: ResMut<RollController>,
    mut players: RollerQuery,
) {
    let button = config.heelies_button.state(&keyboard);
    if !button.is_transition() {
        return;
    }

    let free = *state.get() == GameState::Playing;
    for (local, name, transform, locomotion, statuses, mut speed, mut sprite, mut camera) in
        &mut players
    {
        let mut host = PlayerHost {
            name: name.as_str(),
            free,
            position: transform.translation.truncate(),
            locomotion,
            statuses,
            speed_status: &mut speed,
            sprite: &mut sprite,
            camera: &mut camera,
        };
        controller.on_input_changed(local.0, button, &mut host);
    }
}

/// Force-disengage players that just walked into another area.
pub(crate) fn forward_area_changes(
    mut events: MessageReader<AreaChangedEvent>,
    state: Res<State<GameState>>,
    mut controller: ResMut<RollController>,
    mut players: RollerQuery,
) {
    let free = *state.get() == GameState::Playing;

    for event in events.read() {
        for (local, name, transform, locomotion, statuses, mut speed, mut sprite, mut camera) in
            &mut players
        {
            if local.0 != event.session {
                continue;
            }

            let mut host = PlayerHost {
                name: name.as_str(),
                free,
                position: transform.translation.truncate(),
                locomotion,
                statuses,
                speed_status: &mut speed,
                sprite: &mut sprite,
                camera: &mut camera,
            };
            controller.on_area_changed(local.0, &mut host);
        }
    }
}

pub(crate) fn tick_rolls(
    tick: Res<SimulationTick>,
    state: Res<State<GameState>>,
    mut controller: ResMut<RollController>,
    mut players: RollerQuery,
) {
    let free = *state.get() == GameState::Playing;

    for (local, name, transform, locomotion, statuses, mut speed, mut sprite, mut camera) in
        &mut players
    {
        if !controller.is_rolling(local.0) {
            continue;
        }

        let mut host = PlayerHost {
            name: name.as_str(),
            free,
            position: transform.translation.truncate(),
            locomotion,
            statuses,
            speed_status: &mut speed,
            sprite: &mut sprite,
            camera: &mut camera,
        };
        controller.on_tick(local.0, tick.0, &mut host);
    }
}

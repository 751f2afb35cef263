//! Heelies domain: the rolling state machine.
//!
//! Each session is either idle or rolling. Engaging needs a fresh press of the
//! activation binding while the player is free to move and eligible to roll.
//! Releasing the binding or changing area drops back to idle.

use std::collections::HashMap;

use bevy::prelude::*;

use crate::heelies::decay::{DecayPolicy, quantize};
use crate::heelies::host::{CameraTarget, RollFrame, RollHost, SpeedStatus, StatusEffect};
use crate::heelies::session::{ButtonState, Facing, RollSession, SessionId};

/// Sprite frame per facing, indexed by `Facing::index`.
pub const ROLL_FRAMES: [u32; 4] = [13, 7, 1, 7];

/// Camera lag factor applied to the boosted tracking speed.
pub const CAMERA_DAMPING: f32 = 0.95;

/// Camera approach speed used to catch up after a manual release.
pub const CATCH_UP_SPEED: f32 = 40.0;

/// Tunables the controller reads on every transition.
#[derive(Debug, Clone, PartialEq)]
pub struct RollSettings {
    pub initial_speed_boost: f32,
    pub decay: DecayPolicy,
    pub camera_follow: bool,
    /// Add the host's other temporary speed bonuses to the initial boost.
    pub stack_existing_bonus: bool,
}

impl Default for RollSettings {
    fn default() -> Self {
        Self {
            initial_speed_boost: 3.5,
            decay: DecayPolicy::default(),
            camera_follow: true,
            stack_existing_bonus: false,
        }
    }
}

/// Why a session stopped rolling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisengageCause {
    Released,
    AreaChanged,
}

#[derive(Resource, Debug, Default)]
pub struct RollController {
    settings: RollSettings,
    sessions: HashMap<SessionId, RollSession>,
}

impl RollController {
    pub fn new(settings: RollSettings) -> Self {
        Self {
            settings,
            sessions: HashMap::new(),
        }
    }

    /// Swap tunables without touching live sessions.
    pub fn set_settings(&mut self, settings: RollSettings) {
        self.settings = settings;
    }

    /// State of `id`, defaulting to idle for sessions never seen.
    pub fn session(&self, id: SessionId) -> RollSession {
        self.sessions.get(&id).copied().unwrap_or_default()
    }

    pub fn is_rolling(&self, id: SessionId) -> bool {
        self.session(id).is_rolling
    }

    pub fn speed_modifier(&self, id: SessionId) -> f32 {
        self.session(id).speed_modifier
    }

    /// Forget a session whose player has left.
    pub fn end_session(&mut self, id: SessionId) {
        self.sessions.remove(&id);
    }

    pub fn on_input_changed<H: RollHost>(
        &mut self,
        id: SessionId,
        button: ButtonState,
        host: &mut H,
    ) {
        if !host.player_is_free() {
            return;
        }

        if !self.is_rolling(id) && button.just_pressed() && can_roll(&*host) {
            self.engage(id, host);
        }
        if self.is_rolling(id) && button == ButtonState::Released {
            self.disengage(id, host, DisengageCause::Released);
        }
    }

    pub fn on_tick<H: RollHost>(&mut self, id: SessionId, tick: u64, host: &mut H) {
        if self.is_rolling(id) {
            self.roll(id, tick, host);
        }
    }

    pub fn on_area_changed<H: RollHost>(&mut self, id: SessionId, host: &mut H) {
        if self.is_rolling(id) {
            self.disengage(id, host, DisengageCause::AreaChanged);
        }
    }

    pub fn engage<H: RollHost>(&mut self, id: SessionId, host: &mut H) {
        let mut modifier = self.settings.initial_speed_boost;
        if self.settings.stack_existing_bonus {
            modifier += host.temporary_speed_bonus();
        }
        let modifier = quantize(modifier);

        host.apply_speed_status(SpeedStatus::for_modifier(modifier));

        let session = self.sessions.entry(id).or_default();
        session.is_rolling = true;
        session.speed_modifier = modifier;

        let position = host.position();
        debug!(
            "{} engaged heelies at {} {} | Speed buff: {}",
            host.player_name(),
            position.x,
            position.y,
            modifier
        );
    }

    /// One tick of an active roll: animate, decay, republish.
    pub fn roll<H: RollHost>(&mut self, id: SessionId, tick: u64, host: &mut H) {
        let Some(session) = self.sessions.get_mut(&id) else {
            return;
        };
        if !session.is_rolling {
            return;
        }

        if let Some(frame) = animate_roll(&host.movement_directions(), host) {
            session.facing = frame.facing;
        }

        // The status is republished even on non-decay ticks so the host keeps it fresh.
        session.speed_modifier = self.settings.decay.apply(session.speed_modifier, tick);
        host.apply_speed_status(SpeedStatus::for_modifier(session.speed_modifier));

        if self.settings.camera_follow {
            host.move_camera(CameraTarget {
                position: host.position(),
                speed: camera_speed(host.base_speed(), session.speed_modifier),
            });
        }
    }

    /// Return `id` to idle. A no-op when it is not rolling.
    pub fn disengage<H: RollHost>(&mut self, id: SessionId, host: &mut H, cause: DisengageCause) {
        let Some(session) = self.sessions.get_mut(&id) else {
            return;
        };
        if !session.is_rolling {
            return;
        }

        *session = RollSession::default();
        host.clear_speed_status();
        host.halt_animation();

        let position = host.position();
        if cause == DisengageCause::Released && self.settings.camera_follow {
            host.move_camera(CameraTarget {
                position,
                speed: CATCH_UP_SPEED,
            });
        }

        debug!(
            "{} released heelies at {} {} ({:?})",
            host.player_name(),
            position.x,
            position.y,
            cause
        );
    }
}

/// Moving, on foot, and free of slime and tipsiness.
pub fn can_roll<H: RollHost + ?Sized>(host: &H) -> bool {
    host.moved_last_tick()
        && !host.is_mounted()
        && !host.has_status(StatusEffect::Slimed)
        && !host.has_status(StatusEffect::Tipsy)
}

/// Face the primary movement direction and show its roll frame.
///
/// Empty lists and out-of-range indices leave the sprite alone.
pub fn animate_roll<H: RollHost + ?Sized>(directions: &[i32], host: &mut H) -> Option<RollFrame> {
    let facing = Facing::from_index(*directions.first()?)?;
    let frame = RollFrame {
        facing,
        frame: ROLL_FRAMES[facing.index()],
        flip_x: facing == Facing::Left,
    };
    host.show_frame(frame);
    Some(frame)
}

pub fn camera_speed(base_speed: f32, modifier: f32) -> f32 {
    if modifier > 0.0 {
        (base_speed + modifier) * CAMERA_DAMPING
    } else {
        base_speed
    }
}

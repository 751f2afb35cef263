//! Debug domain: hotkeys for exercising roll eligibility by hand.

use bevy::prelude::*;

use crate::debug::state::{DebugAction, DebugState};
use crate::heelies::StatusEffect;
use crate::movement::{LocalPlayer, Locomotion, StatusEffects};

const COFFEE_BONUS: f32 = 1.0;

/// Map Ctrl+key chords to debug actions
pub(crate) fn debug_action(keyboard: &ButtonInput<KeyCode>) -> Option<DebugAction> {
    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);
    if !ctrl {
        return None;
    }

    if keyboard.just_pressed(KeyCode::Digit1) {
        Some(DebugAction::ToggleSlimed)
    } else if keyboard.just_pressed(KeyCode::Digit2) {
        Some(DebugAction::ToggleTipsy)
    } else if keyboard.just_pressed(KeyCode::KeyM) {
        Some(DebugAction::ToggleMounted)
    } else if keyboard.just_pressed(KeyCode::KeyB) {
        Some(DebugAction::AddSpeedBonus)
    } else if keyboard.just_pressed(KeyCode::KeyN) {
        Some(DebugAction::ClearSpeedBonus)
    } else {
        None
    }
}

/// Handle keyboard shortcuts for debug actions
pub(crate) fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    mut player_query: Query<(&mut StatusEffects, &mut Locomotion), With<LocalPlayer>>,
) {
    let Some(action) = debug_action(&keyboard) else {
        return;
    };

    for (mut statuses, mut locomotion) in &mut player_query {
        let msg = match action {
            DebugAction::ToggleSlimed => {
                let on = statuses.toggle(StatusEffect::Slimed);
                format!("Slimed {}", if on { "ON" } else { "OFF" })
            }
            DebugAction::ToggleTipsy => {
                let on = statuses.toggle(StatusEffect::Tipsy);
                format!("Tipsy {}", if on { "ON" } else { "OFF" })
            }
            DebugAction::ToggleMounted => {
                locomotion.mounted = !locomotion.mounted;
                format!("Mounted {}", if locomotion.mounted { "ON" } else { "OFF" })
            }
            DebugAction::AddSpeedBonus => {
                statuses.speed_bonus += COFFEE_BONUS;
                format!("Speed bonus {:+.1}", statuses.speed_bonus)
            }
            DebugAction::ClearSpeedBonus => {
                statuses.speed_bonus = 0.0;
                "Speed bonus cleared".to_string()
            }
        };

        info!("[DEBUG] {}", msg);
        debug_state.set_message(msg, 2.0);
    }
}

pub(crate) fn update_status_message(time: Res<Time>, mut debug_state: ResMut<DebugState>) {
    debug_state.tick_message(time.delta_secs());
}

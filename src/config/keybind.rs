//! Config domain: activation key bindings.

use bevy::prelude::*;

use crate::config::ConfigLoadError;
use crate::heelies::ButtonState;

/// Alternative keys that each trigger the same action, e.g. `"Space, KeyJ"`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(try_from = "String", into = "String")]
pub struct KeybindList {
    keys: Vec<KeyCode>,
}

impl KeybindList {
    pub fn parse(source: &str) -> Result<Self, ConfigLoadError> {
        let keys = source
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(|name| {
                key_from_name(name).ok_or_else(|| ConfigLoadError {
                    file: "heelies_button".to_string(),
                    message: format!("Unknown key '{}'", name),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if keys.is_empty() {
            return Err(ConfigLoadError {
                file: "heelies_button".to_string(),
                message: "Keybind list is empty".to_string(),
            });
        }

        Ok(Self { keys })
    }

    pub fn keys(&self) -> &[KeyCode] {
        &self.keys
    }

    /// Collapse the bound keys into one edge state for this frame.
    pub fn state(&self, input: &ButtonInput<KeyCode>) -> ButtonState {
        if self.keys.iter().any(|key| input.just_pressed(*key)) {
            ButtonState::Pressed
        } else if self.keys.iter().any(|key| input.pressed(*key)) {
            ButtonState::Held
        } else if self.keys.iter().any(|key| input.just_released(*key)) {
            ButtonState::Released
        } else {
            ButtonState::Idle
        }
    }
}

impl Default for KeybindList {
    fn default() -> Self {
        Self {
            keys: vec![KeyCode::Space],
        }
    }
}

impl TryFrom<String> for KeybindList {
    type Error = ConfigLoadError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<KeybindList> for String {
    fn from(list: KeybindList) -> Self {
        list.keys
            .iter()
            .map(|key| key_name(*key))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

const LETTERS: [KeyCode; 26] = [
    KeyCode::KeyA,
    KeyCode::KeyB,
    KeyCode::KeyC,
    KeyCode::KeyD,
    KeyCode::KeyE,
    KeyCode::KeyF,
    KeyCode::KeyG,
    KeyCode::KeyH,
    KeyCode::KeyI,
    KeyCode::KeyJ,
    KeyCode::KeyK,
    KeyCode::KeyL,
    KeyCode::KeyM,
    KeyCode::KeyN,
    KeyCode::KeyO,
    KeyCode::KeyP,
    KeyCode::KeyQ,
    KeyCode::KeyR,
    KeyCode::KeyS,
    KeyCode::KeyT,
    KeyCode::KeyU,
    KeyCode::KeyV,
    KeyCode::KeyW,
    KeyCode::KeyX,
    KeyCode::KeyY,
    KeyCode::KeyZ,
];

const NAMED: [(&str, KeyCode); 10] = [
    ("Space", KeyCode::Space),
    ("Enter", KeyCode::Enter),
    ("Tab", KeyCode::Tab),
    ("ShiftLeft", KeyCode::ShiftLeft),
    ("ShiftRight", KeyCode::ShiftRight),
    ("ControlLeft", KeyCode::ControlLeft),
    ("ControlRight", KeyCode::ControlRight),
    ("AltLeft", KeyCode::AltLeft),
    ("AltRight", KeyCode::AltRight),
    ("CapsLock", KeyCode::CapsLock),
];

/// Accepts the names above plus `A`..`Z` and `KeyA`..`KeyZ`, case-insensitively.
fn key_from_name(name: &str) -> Option<KeyCode> {
    if let Some((_, key)) = NAMED
        .iter()
        .find(|(named, _)| named.eq_ignore_ascii_case(name))
    {
        return Some(*key);
    }

    let prefixed = name.len() == 4
        && name
            .get(..3)
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case("key"));
    let letter = if prefixed {
        &name[3..]
    } else {
        name
    };
    let mut chars = letter.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => {
            let offset = (c.to_ascii_uppercase() as u8 - b'A') as usize;
            Some(LETTERS[offset])
        }
        _ => None,
    }
}

fn key_name(key: KeyCode) -> String {
    if let Some((name, _)) = NAMED.iter().find(|(_, named)| *named == key) {
        return name.to_string();
    }
    match LETTERS.iter().position(|letter| *letter == key) {
        Some(offset) => ((b'A' + offset as u8) as char).to_string(),
        None => format!("{:?}", key),
    }
}

//! Modifier+arrow session navigation.
//!
//! While the sidebar is mounted, `Alt` or `Ctrl` with `ArrowUp`/`ArrowDown`
//! steps through the session list. Wrap-around is the session store's
//! business.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Modifier key state at the time of a key press.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

/// A key-down event. `key` uses DOM key names (`"ArrowUp"`, `"a"`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyInput {
    pub key: String,
    #[serde(default)]
    pub modifiers: Modifiers,
}

impl KeyInput {
    pub fn new(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            key: key.into(),
            modifiers,
        }
    }

    pub fn alt(key: impl Into<String>) -> Self {
        Self::new(
            key,
            Modifiers {
                alt: true,
                ..Default::default()
            },
        )
    }

    pub fn ctrl(key: impl Into<String>) -> Self {
        Self::new(
            key,
            Modifiers {
                ctrl: true,
                ..Default::default()
            },
        )
    }
}

/// Externally owned ordered session list.
pub trait SessionNavigator {
    /// Move the current session by `delta` positions.
    fn navigate(&mut self, delta: i32);
}

/// The navigation step a key press requests, if any.
pub fn session_delta(input: &KeyInput) -> Option<i32> {
    if !(input.modifiers.alt || input.modifiers.ctrl) {
        return None;
    }
    match input.key.as_str() {
        "ArrowUp" => Some(-1),
        "ArrowDown" => Some(1),
        _ => None,
    }
}

/// Forwards recognized key presses to a [`SessionNavigator`].
#[derive(Debug, Clone, Copy, Default)]
pub struct HotkeySessionNavigator;

impl HotkeySessionNavigator {
    /// Returns whether the key press was consumed.
    pub fn handle<N: SessionNavigator + ?Sized>(&self, input: &KeyInput, sessions: &mut N) -> bool {
        match session_delta(input) {
            Some(delta) => {
                debug!(delta, key = %input.key, "session navigation hotkey");
                sessions.navigate(delta);
                true
            }
            None => false,
        }
    }
}

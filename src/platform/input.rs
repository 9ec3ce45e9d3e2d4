//! Keyboard mapping
//!
//! One key press is one action; held-key repeat is whatever the browser
//! delivers.

use crate::sim::{Direction, Intent};

/// What a key press asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Move(Direction),
    Restart,
    ToggleMute,
}

impl KeyAction {
    /// Map a `KeyboardEvent.key` value
    pub fn from_key(key: &str) -> Option<Self> {
        let action = match key {
            "ArrowUp" | "w" | "W" => KeyAction::Move(Direction::Up),
            "ArrowDown" | "s" | "S" => KeyAction::Move(Direction::Down),
            "ArrowLeft" | "a" | "A" => KeyAction::Move(Direction::Left),
            "ArrowRight" | "d" | "D" => KeyAction::Move(Direction::Right),
            "r" | "R" | "Enter" => KeyAction::Restart,
            "m" | "M" => KeyAction::ToggleMute,
            _ => return None,
        };
        Some(action)
    }

    /// The simulation intent for this action, if it has one
    pub fn intent(self) -> Option<Intent> {
        match self {
            KeyAction::Move(direction) => Some(Intent::Move(direction)),
            KeyAction::Restart => Some(Intent::Restart),
            KeyAction::ToggleMute => None,
        }
    }
}

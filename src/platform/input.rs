//! Keyboard mapping

use crate::engine::Command;
use crate::sim::GameStatus;

/// What a key press asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Forward to the engine
    Command(Command),
    /// Turn the idle/demo autopilot on or off
    ToggleAutopilot,
}

/// Map a key event to an action
///
/// `code` is the physical key (`KeyboardEvent.code`), `key` the produced
/// value (`KeyboardEvent.key`). Space and ArrowUp start the game from the
/// title screen and jump otherwise. The restart control is a button, not a key.
pub fn action_for_key(code: &str, key: &str, status: GameStatus) -> Option<InputAction> {
    if code == "Space" || key == "ArrowUp" {
        let command = match status {
            GameStatus::NotStarted => Command::Start,
            GameStatus::Running | GameStatus::GameOver => Command::Jump,
        };
        return Some(InputAction::Command(command));
    }

    match key {
        "i" | "I" => Some(InputAction::ToggleAutopilot),
        _ => None,
    }
}

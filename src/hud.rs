//! HUD view for the rendering layer

use serde::{Deserialize, Serialize};

use crate::consts::SCORE_DIGITS;
use crate::sim::{GameState, GameStatus};

/// Which overlay covers the play area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Overlay {
    /// "Press space to start"
    StartPrompt,
    /// Nothing during play
    Hidden,
    /// Game over panel with the restart control
    GameOver,
}

impl Overlay {
    pub fn for_status(status: GameStatus) -> Self {
        match status {
            GameStatus::NotStarted => Overlay::StartPrompt,
            GameStatus::Running => Overlay::Hidden,
            GameStatus::GameOver => Overlay::GameOver,
        }
    }
}

/// Text and overlay shown around the play area
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hud {
    pub score: String,
    pub high_score: String,
    pub overlay: Overlay,
}

impl Hud {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            score: format_score(state.score),
            high_score: format_score(state.high_score),
            overlay: Overlay::for_status(state.status),
        }
    }

    /// Single-line form, e.g. `HI 00120 00042`
    pub fn line(&self) -> String {
        format!("HI {} {}", self.high_score, self.score)
    }
}

/// Zero-pad to the HUD width. Longer numbers are shown in full.
pub fn format_score(score: u64) -> String {
    format!("{:0width$}", score, width = SCORE_DIGITS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_score_pads() {
        assert_eq!(format_score(0), "00000");
        assert_eq!(format_score(42), "00042");
        assert_eq!(format_score(99_999), "99999");
        assert_eq!(format_score(123_456), "123456");
    }

    #[test]
    fn test_hud_from_state() {
        let state = GameState {
            status: GameStatus::GameOver,
            score: 7,
            high_score: 1234,
            ..Default::default()
        };
        let hud = Hud::from_state(&state);
        assert_eq!(hud.score, "00007");
        assert_eq!(hud.high_score, "01234");
        assert_eq!(hud.overlay, Overlay::GameOver);
        assert_eq!(hud.line(), "HI 01234 00007");
    }

    #[test]
    fn test_overlay_for_status() {
        assert_eq!(Overlay::for_status(GameStatus::NotStarted), Overlay::StartPrompt);
        assert_eq!(Overlay::for_status(GameStatus::Running), Overlay::Hidden);
        assert_eq!(Overlay::for_status(GameStatus::GameOver), Overlay::GameOver);
    }
}

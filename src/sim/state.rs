//! Game state and core simulation types

use serde::{Deserialize, Serialize};

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameStatus {
    /// Waiting for the start input
    #[default]
    NotStarted,
    /// Active gameplay
    Running,
    /// Collided; waiting for a reset
    GameOver,
}

/// The player-controlled character. Only moves vertically.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Actor {
    /// Height above the ground (never negative)
    pub vertical_offset: f32,
    pub airborne: bool,
}

impl Actor {
    /// Launch from the ground. Returns false (and does nothing) when already airborne.
    pub fn jump(&mut self, force: f32) -> bool {
        if self.airborne {
            return false;
        }
        self.airborne = true;
        self.vertical_offset = force;
        true
    }

    /// Apply one tick of gravity; lands exactly on 0
    pub fn fall(&mut self, amount: f32) {
        if !self.airborne {
            return;
        }
        let next = self.vertical_offset - amount;
        if next <= 0.0 {
            self.vertical_offset = 0.0;
            self.airborne = false;
        } else {
            self.vertical_offset = next;
        }
    }
}

/// A scrolling obstacle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Horizontal position (pixels from the left edge)
    pub x: f32,
    /// Rendering only, see `collision`
    pub height: f32,
}

/// Complete game state (serializable for the rendering layer)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GameState {
    pub status: GameStatus,
    /// Ticks survived this run
    pub score: u64,
    /// Best score this session; never decreases
    pub high_score: u64,
    pub actor: Actor,
    /// Spawn order, which is also left-to-right
    pub obstacles: Vec<Obstacle>,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }

    /// Clear the run, keeping the session high score
    pub fn reset_run(&mut self) {
        self.score = 0;
        self.actor = Actor::default();
        self.obstacles.clear();
    }

    /// Fold the current score into the high score
    pub fn record_high_score(&mut self) -> bool {
        if self.score > self.high_score {
            self.high_score = self.score;
            true
        } else {
            false
        }
    }

    /// Nearest obstacle at or right of `x`
    pub fn next_obstacle_from(&self, x: f32) -> Option<&Obstacle> {
        self.obstacles.iter().find(|o| o.x >= x)
    }
}

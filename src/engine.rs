//! Game engine: the session state machine
//!
//! Owns the [`GameState`] and the two clocks that drive it. The tick clock
//! runs physics, collision and scoring every 20ms; the spawn clock adds an
//! obstacle every 2s. Both only run while the game is `Running`, and both
//! are cancelled the moment it stops.
//!
//! Input arrives as [`Command`]s. Everything happens on one thread through
//! `&mut self`, so callbacks can never interleave.

use std::time::Duration;

use crate::clock::Interval;
use crate::consts::MAX_FRAME_MS;
use crate::hud::Hud;
use crate::sim::{self, GameState, GameStatus, Spawner, TickOutcome};
use crate::tuning::Tuning;

/// Discrete input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// NotStarted -> Running
    Start,
    /// Leave the ground (Running only)
    Jump,
    /// GameOver -> NotStarted
    Reset,
}

/// A single game session
#[derive(Debug, Clone)]
pub struct GameEngine {
    state: GameState,
    tuning: Tuning,
    spawner: Spawner,
    tick_clock: Interval,
    spawn_clock: Interval,
}

impl GameEngine {
    /// Create a session waiting for `Start`
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        let tuning = tuning.sanitized();
        Self {
            state: GameState::new(),
            tick_clock: Interval::new(tuning.tick_interval()),
            spawn_clock: Interval::new(tuning.spawn_interval()),
            spawner: Spawner::new(seed),
            tuning,
        }
    }

    /// Default tuning
    pub fn with_seed(seed: u64) -> Self {
        Self::new(Tuning::default(), seed)
    }

    /// Read-only snapshot for rendering
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn hud(&self) -> Hud {
        Hud::from_state(&self.state)
    }

    /// True while either clock is scheduled
    pub fn clocks_armed(&self) -> bool {
        self.tick_clock.is_armed() || self.spawn_clock.is_armed()
    }

    /// Apply an input event. Returns false when it was a no-op.
    pub fn handle(&mut self, command: Command) -> bool {
        match command {
            Command::Start => self.start(),
            Command::Jump => self.jump(),
            Command::Reset => self.reset(),
        }
    }

    /// Begin a run (NotStarted only)
    pub fn start(&mut self) -> bool {
        if self.state.status != GameStatus::NotStarted {
            return false;
        }
        self.state.reset_run();
        self.state.status = GameStatus::Running;
        self.tick_clock.arm();
        self.spawn_clock.arm();
        log::info!("Run started (high score {})", self.state.high_score);
        true
    }

    pub fn jump(&mut self) -> bool {
        sim::jump(&mut self.state, &self.tuning)
    }

    /// Back to the start screen (GameOver only). Keeps the high score.
    pub fn reset(&mut self) -> bool {
        if self.state.status != GameStatus::GameOver {
            return false;
        }
        self.stop_clocks();
        self.state.reset_run();
        self.state.status = GameStatus::NotStarted;
        log::info!("Reset (high score {})", self.state.high_score);
        true
    }

    /// Run one simulation tick now
    pub fn tick(&mut self) -> TickOutcome {
        let outcome = sim::tick(&mut self.state, &self.tuning);
        if outcome == TickOutcome::Collided {
            self.stop_clocks();
            log::info!(
                "Game over: score {}, high score {}",
                self.state.score,
                self.state.high_score
            );
        }
        outcome
    }

    /// Add one obstacle at the right edge (Running only)
    pub fn spawn_obstacle(&mut self) -> bool {
        if !self.state.is_running() {
            return false;
        }
        let obstacle = self.spawner.next_obstacle(&self.tuning);
        log::debug!("Spawned obstacle (height {:.1})", obstacle.height);
        self.state.obstacles.push(obstacle);
        true
    }

    /// Let wall time pass, firing whichever clocks come due in order
    ///
    /// Frames longer than `MAX_FRAME_MS` are clamped so a suspended tab does
    /// not replay seconds of gameplay at once. When both clocks are due at the
    /// same instant the tick fires first.
    pub fn advance(&mut self, dt: Duration) {
        let mut remaining = dt.min(Duration::from_millis(MAX_FRAME_MS));

        while self.state.is_running() {
            let next = match (self.tick_clock.until_due(), self.spawn_clock.until_due()) {
                (Some(a), Some(b)) => a.min(b),
                (Some(a), None) | (None, Some(a)) => a,
                (None, None) => break,
            };

            if next > remaining {
                self.tick_clock.wait(remaining);
                self.spawn_clock.wait(remaining);
                break;
            }
            remaining -= next;

            let tick_due = self.tick_clock.wait(next);
            let spawn_due = self.spawn_clock.wait(next);

            if tick_due && self.tick() == TickOutcome::Collided {
                break;
            }
            if spawn_due {
                self.spawn_obstacle();
            }
        }
    }

    fn stop_clocks(&mut self) {
        self.tick_clock.cancel();
        self.spawn_clock.cancel();
    }
}

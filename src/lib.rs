//! Dino Dash - a side-scrolling jump-the-obstacle reflex game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (actor physics, obstacles, collisions)
//! - `engine`: Game state machine and the two fixed-rate clocks driving it
//! - `clock`: Periodic interval timers
//! - `hud`: Read-only view of the state for the rendering layer
//! - `platform`: Browser/native input mapping
//! - `tuning`: Data-driven game balance

pub mod clock;
pub mod engine;
pub mod hud;
pub mod platform;
pub mod sim;
pub mod tuning;

pub use engine::{Command, GameEngine};
pub use hud::{Hud, Overlay, format_score};
pub use tuning::Tuning;

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Fixed simulation tick (milliseconds)
    pub const TICK_INTERVAL_MS: u64 = 20;
    /// Obstacle spawn period (milliseconds)
    pub const SPAWN_INTERVAL_MS: u64 = 2000;
    /// Longest frame fed to the clocks in one call (milliseconds)
    pub const MAX_FRAME_MS: u64 = 250;

    /// Actor physics
    pub const JUMP_FORCE: f32 = 300.0;
    pub const GRAVITY: f32 = 0.9;
    /// Gravity is applied this many times per tick
    pub const GRAVITY_SCALE: f32 = 5.0;

    /// Horizontal scroll per tick
    pub const GAME_SPEED: f32 = 5.0;
    /// Obstacles enter at the right edge of the play area
    pub const SPAWN_X: f32 = 800.0;
    /// Obstacles at or left of this are off-screen
    pub const EXIT_X: f32 = -50.0;

    /// Horizontal band occupied by the actor (exclusive on both ends)
    pub const COLLISION_BAND_MIN: f32 = 0.0;
    pub const COLLISION_BAND_MAX: f32 = 60.0;
    /// Actor must be at least this high to clear an obstacle in the band
    pub const COLLISION_CLEARANCE: f32 = 60.0;

    /// Obstacle height range [min, max)
    pub const MIN_OBSTACLE_HEIGHT: f32 = 30.0;
    pub const MAX_OBSTACLE_HEIGHT: f32 = 60.0;

    /// Digits shown for score and high score
    pub const SCORE_DIGITS: usize = 5;
}

//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use autopilot::wants_jump;
pub use collision::{CollisionBand, detect_collision, obstacle_hits_actor};
pub use spawn::Spawner;
pub use state::{Actor, GameState, GameStatus, Obstacle};
pub use tick::{TickOutcome, jump, scroll_obstacles, tick};

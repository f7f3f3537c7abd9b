//! Fixed timestep simulation tick
//!
//! One tick: actor physics, then obstacle scroll, then collision, then score.

use super::collision::{CollisionBand, detect_collision};
use super::state::{GameState, GameStatus, Obstacle};
use crate::tuning::Tuning;

/// What a call to [`tick`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not running; nothing changed
    Idle,
    /// Survived the tick, score incremented
    Advanced,
    /// Hit an obstacle; the run is over
    Collided,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, tuning: &Tuning) -> TickOutcome {
    if state.status != GameStatus::Running {
        return TickOutcome::Idle;
    }

    state.actor.fall(tuning.fall_per_tick());

    scroll_obstacles(&mut state.obstacles, tuning.game_speed, tuning.exit_x);

    let band = CollisionBand::from_tuning(tuning);
    if detect_collision(&state.obstacles, &state.actor, &band) {
        state.status = GameStatus::GameOver;
        state.record_high_score();
        return TickOutcome::Collided;
    }

    state.score += 1;
    TickOutcome::Advanced
}

/// Scroll every obstacle left and drop the ones at or past `exit_x`
pub fn scroll_obstacles(obstacles: &mut Vec<Obstacle>, speed: f32, exit_x: f32) {
    for obstacle in obstacles.iter_mut() {
        obstacle.x -= speed;
    }
    obstacles.retain(|o| o.x > exit_x);
}

/// Jump if running and grounded. Returns true when the actor left the ground.
pub fn jump(state: &mut GameState, tuning: &Tuning) -> bool {
    if state.status != GameStatus::Running {
        return false;
    }
    state.actor.jump(tuning.jump_force)
}

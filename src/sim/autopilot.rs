//! Idle/demo mode - the game plays itself

use super::state::GameState;
use crate::tuning::Tuning;

/// How many ticks ahead of the collision band to take off
pub const LEAD_TICKS: f32 = 8.0;

/// Should the autopilot jump right now?
///
/// Jumps when grounded and the nearest obstacle still in front of the band
/// will enter it within [`LEAD_TICKS`].
pub fn wants_jump(state: &GameState, tuning: &Tuning) -> bool {
    if !state.is_running() || state.actor.airborne {
        return false;
    }
    let lead = tuning.game_speed * LEAD_TICKS;
    state
        .next_obstacle_from(tuning.band_max)
        .is_some_and(|o| o.x <= tuning.band_max + lead)
}

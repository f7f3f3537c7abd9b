//! Actor/obstacle collision
//!
//! The actor never moves horizontally, so a hit is a band test: an obstacle
//! inside the actor's horizontal band while the actor is below a fixed
//! clearance.
//!
//! NOTE: obstacle height is not part of the test. Tall and short obstacles
//! are cleared by the same jump, and no jump is high enough to matter beyond
//! the clearance. This matches the shipped game; changing it is a gameplay
//! decision, not a fix.

use super::state::{Actor, Obstacle};
use crate::tuning::Tuning;

/// Horizontal band plus vertical clearance the actor occupies
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionBand {
    /// Exclusive lower bound
    pub min_x: f32,
    /// Exclusive upper bound
    pub max_x: f32,
    /// Actor offsets below this collide
    pub clearance: f32,
}

impl CollisionBand {
    pub fn from_tuning(tuning: &Tuning) -> Self {
        Self {
            min_x: tuning.band_min,
            max_x: tuning.band_max,
            clearance: tuning.clearance,
        }
    }

    #[inline]
    pub fn contains_x(&self, x: f32) -> bool {
        x > self.min_x && x < self.max_x
    }
}

/// Does a single obstacle hit the actor?
#[inline]
pub fn obstacle_hits_actor(obstacle: &Obstacle, actor: &Actor, band: &CollisionBand) -> bool {
    band.contains_x(obstacle.x) && actor.vertical_offset < band.clearance
}

/// Does any obstacle hit the actor?
pub fn detect_collision(obstacles: &[Obstacle], actor: &Actor, band: &CollisionBand) -> bool {
    obstacles
        .iter()
        .any(|o| obstacle_hits_actor(o, actor, band))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn band() -> CollisionBand {
        CollisionBand::from_tuning(&Tuning::default())
    }

    fn grounded() -> Actor {
        Actor::default()
    }

    #[test]
    fn test_hit_inside_band_on_ground() {
        let obstacle = Obstacle { x: 50.0, height: 40.0 };
        assert!(obstacle_hits_actor(&obstacle, &grounded(), &band()));
    }

    #[test]
    fn test_band_bounds_are_exclusive() {
        let actor = grounded();
        for x in [0.0, 60.0, -5.0, 65.0] {
            let obstacle = Obstacle { x, height: 40.0 };
            assert!(!obstacle_hits_actor(&obstacle, &actor, &band()), "x = {x}");
        }
    }

    #[test]
    fn test_clearance() {
        let obstacle = Obstacle { x: 30.0, height: 40.0 };
        let low = Actor {
            vertical_offset: 59.9,
            airborne: true,
        };
        let high = Actor {
            vertical_offset: 60.0,
            airborne: true,
        };
        assert!(obstacle_hits_actor(&obstacle, &low, &band()));
        assert!(!obstacle_hits_actor(&obstacle, &high, &band()));
    }

    #[test]
    fn test_height_is_ignored() {
        // A 59px obstacle is cleared at offset 60 just like a 30px one
        let actor = Actor {
            vertical_offset: 60.0,
            airborne: true,
        };
        let short = Obstacle { x: 30.0, height: 30.0 };
        let tall = Obstacle { x: 30.0, height: 59.0 };
        assert_eq!(
            obstacle_hits_actor(&short, &actor, &band()),
            obstacle_hits_actor(&tall, &actor, &band())
        );
    }

    #[test]
    fn test_detect_collision_any() {
        let obstacles = [
            Obstacle { x: 400.0, height: 30.0 },
            Obstacle { x: 10.0, height: 30.0 },
        ];
        assert!(detect_collision(&obstacles, &grounded(), &band()));
        assert!(!detect_collision(&obstacles[..1], &grounded(), &band()));
        assert!(!detect_collision(&[], &grounded(), &band()));
    }
}

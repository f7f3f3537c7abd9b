//! Obstacle spawning policy

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::Obstacle;
use crate::tuning::Tuning;

/// Produces obstacles at the right edge with a seeded random height
#[derive(Debug, Clone)]
pub struct Spawner {
    seed: u64,
    rng: Pcg32,
}

impl Spawner {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Next obstacle, height uniform in [min, max)
    pub fn next_obstacle(&mut self, tuning: &Tuning) -> Obstacle {
        let height = if tuning.max_obstacle_height > tuning.min_obstacle_height {
            self.rng
                .random_range(tuning.min_obstacle_height..tuning.max_obstacle_height)
        } else {
            tuning.min_obstacle_height
        };
        Obstacle {
            x: tuning.spawn_x,
            height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawns_at_right_edge_with_height_in_range() {
        let tuning = Tuning::default();
        let mut spawner = Spawner::new(42);
        for _ in 0..1000 {
            let obstacle = spawner.next_obstacle(&tuning);
            assert_eq!(obstacle.x, 800.0);
            assert!(obstacle.height >= 30.0 && obstacle.height < 60.0);
        }
    }

    #[test]
    fn test_same_seed_same_obstacles() {
        let tuning = Tuning::default();
        let mut a = Spawner::new(7);
        let mut b = Spawner::new(7);
        for _ in 0..20 {
            assert_eq!(a.next_obstacle(&tuning), b.next_obstacle(&tuning));
        }
    }

    #[test]
    fn test_degenerate_range_uses_min() {
        let tuning = Tuning {
            min_obstacle_height: 45.0,
            max_obstacle_height: 45.0,
            ..Default::default()
        };
        let mut spawner = Spawner::new(1);
        assert_eq!(spawner.next_obstacle(&tuning).height, 45.0);
    }
}

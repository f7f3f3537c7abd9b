//! Game balance parameters
//!
//! Every gameplay constant lives here so a session can be retuned from JSON
//! without touching the simulation.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tunable gameplay values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Actor ===
    /// Offset the actor jumps to (pixels)
    pub jump_force: f32,
    /// Gravity per sub-step
    pub gravity: f32,
    /// Gravity sub-steps per tick
    pub gravity_scale: f32,

    // === World ===
    /// Scroll distance per tick (pixels)
    pub game_speed: f32,
    /// Where new obstacles appear
    pub spawn_x: f32,
    /// Obstacles at or past this are removed
    pub exit_x: f32,
    pub min_obstacle_height: f32,
    pub max_obstacle_height: f32,

    // === Collision ===
    pub band_min: f32,
    pub band_max: f32,
    pub clearance: f32,

    // === Clocks ===
    pub tick_interval_ms: u64,
    pub spawn_interval_ms: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            jump_force: JUMP_FORCE,
            gravity: GRAVITY,
            gravity_scale: GRAVITY_SCALE,

            game_speed: GAME_SPEED,
            spawn_x: SPAWN_X,
            exit_x: EXIT_X,
            min_obstacle_height: MIN_OBSTACLE_HEIGHT,
            max_obstacle_height: MAX_OBSTACLE_HEIGHT,

            band_min: COLLISION_BAND_MIN,
            band_max: COLLISION_BAND_MAX,
            clearance: COLLISION_CLEARANCE,

            tick_interval_ms: TICK_INTERVAL_MS,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON (missing fields take defaults)
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Distance the actor falls in one tick
    pub fn fall_per_tick(&self) -> f32 {
        self.gravity * self.gravity_scale
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn spawn_interval(&self) -> Duration {
        Duration::from_millis(self.spawn_interval_ms)
    }

    /// Replace values that would stall or break the simulation with defaults
    ///
    /// A zero fall rate would leave the actor airborne forever, a zero speed
    /// would freeze obstacles in place, and a zero period would spin the
    /// clocks without advancing time.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        let mut fixed = Vec::new();

        fn positive(value: &mut f32, default: f32, name: &'static str, fixed: &mut Vec<&str>) {
            if !value.is_finite() || *value <= 0.0 {
                *value = default;
                fixed.push(name);
            }
        }

        fn finite(value: &mut f32, default: f32, name: &'static str, fixed: &mut Vec<&str>) {
            if !value.is_finite() {
                *value = default;
                fixed.push(name);
            }
        }

        positive(&mut self.jump_force, defaults.jump_force, "jump_force", &mut fixed);
        positive(&mut self.gravity, defaults.gravity, "gravity", &mut fixed);
        positive(&mut self.gravity_scale, defaults.gravity_scale, "gravity_scale", &mut fixed);
        positive(&mut self.game_speed, defaults.game_speed, "game_speed", &mut fixed);
        finite(&mut self.spawn_x, defaults.spawn_x, "spawn_x", &mut fixed);
        finite(&mut self.exit_x, defaults.exit_x, "exit_x", &mut fixed);
        finite(&mut self.band_min, defaults.band_min, "band_min", &mut fixed);
        finite(&mut self.band_max, defaults.band_max, "band_max", &mut fixed);
        finite(&mut self.clearance, defaults.clearance, "clearance", &mut fixed);
        positive(
            &mut self.min_obstacle_height,
            defaults.min_obstacle_height,
            "min_obstacle_height",
            &mut fixed,
        );
        positive(
            &mut self.max_obstacle_height,
            defaults.max_obstacle_height,
            "max_obstacle_height",
            &mut fixed,
        );

        // Empty height range can't be sampled
        if self.max_obstacle_height <= self.min_obstacle_height {
            self.min_obstacle_height = defaults.min_obstacle_height;
            self.max_obstacle_height = defaults.max_obstacle_height;
            fixed.push("obstacle height range");
        }

        // Spawning at or past the exit would remove obstacles on their first tick
        if self.spawn_x <= self.exit_x {
            self.spawn_x = defaults.spawn_x;
            self.exit_x = defaults.exit_x;
            fixed.push("spawn_x/exit_x");
        }

        if self.tick_interval_ms == 0 {
            self.tick_interval_ms = defaults.tick_interval_ms;
            fixed.push("tick_interval_ms");
        }
        if self.spawn_interval_ms == 0 {
            self.spawn_interval_ms = defaults.spawn_interval_ms;
            fixed.push("spawn_interval_ms");
        }

        if !fixed.is_empty() {
            log::warn!("Tuning values reset to defaults: {}", fixed.join(", "));
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let tuning = Tuning::default();
        assert_eq!(tuning.jump_force, 300.0);
        assert_eq!(tuning.fall_per_tick(), 4.5);
        assert_eq!(tuning.tick_interval(), Duration::from_millis(20));
        assert_eq!(tuning.spawn_interval(), Duration::from_secs(2));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let tuning = Tuning::from_json(r#"{ "game_speed": 7.5 }"#).unwrap();
        assert_eq!(tuning.game_speed, 7.5);
        assert_eq!(tuning.spawn_x, SPAWN_X);
        assert_eq!(tuning.tick_interval_ms, TICK_INTERVAL_MS);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(Tuning::from_json("{ not json").is_err());
        assert!(Tuning::from_json(r#"{ "game_speed": "fast" }"#).is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let tuning = Tuning {
            jump_force: 250.0,
            ..Default::default()
        };
        let json = tuning.to_json().unwrap();
        assert_eq!(Tuning::from_json(&json).unwrap(), tuning);
    }

    #[test]
    fn test_sanitized_replaces_broken_values() {
        let tuning = Tuning {
            gravity: 0.0,
            game_speed: f32::NAN,
            min_obstacle_height: 80.0,
            spawn_x: -100.0,
            tick_interval_ms: 0,
            ..Default::default()
        }
        .sanitized();

        assert_eq!(tuning.gravity, GRAVITY);
        assert_eq!(tuning.game_speed, GAME_SPEED);
        assert_eq!(tuning.min_obstacle_height, MIN_OBSTACLE_HEIGHT);
        assert_eq!(tuning.max_obstacle_height, MAX_OBSTACLE_HEIGHT);
        assert_eq!(tuning.spawn_x, SPAWN_X);
        assert_eq!(tuning.exit_x, EXIT_X);
        assert_eq!(tuning.tick_interval_ms, TICK_INTERVAL_MS);
    }

    #[test]
    fn test_sanitized_keeps_valid_values() {
        let tuning = Tuning {
            jump_force: 420.0,
            spawn_interval_ms: 1500,
            ..Default::default()
        };
        assert_eq!(tuning.clone().sanitized(), tuning);
    }
}

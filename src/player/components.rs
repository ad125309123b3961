use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Component, Debug, Clone)]
pub struct Player {
    /// Current movement speed, including any active speed boost
    pub movement_speed: f32,
    pub regeneration: Option<Regeneration>,
}

impl Player {
    pub fn new(movement_speed: f32) -> Self {
        Self {
            movement_speed,
            regeneration: None,
        }
    }

    /// Turn on regeneration. Enabling it again replaces the previous tick
    /// parameters instead of stacking a second one.
    pub fn enable_regeneration(&mut self, fraction: f32, interval_secs: f32) {
        self.regeneration = Some(Regeneration::new(fraction, interval_secs));
    }
}

/// Recurring heal of `fraction × max health` every interval
#[derive(Debug, Clone)]
pub struct Regeneration {
    pub fraction: f32,
    timer: Timer,
}

impl Regeneration {
    pub fn new(fraction: f32, interval_secs: f32) -> Self {
        Self {
            fraction,
            timer: Timer::from_seconds(interval_secs, TimerMode::Repeating),
        }
    }

    /// Advance the timer and return how many heal ticks elapsed
    pub fn tick(&mut self, delta: Duration) -> u32 {
        self.timer.tick(delta);
        self.timer.times_finished_this_tick()
    }

    pub fn interval(&self) -> Duration {
        self.timer.duration()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub max_health: f32,
    pub movement_speed: f32,
    pub radius: f32,
    /// Per-enemy contact immunity window
    pub contact_immunity_secs: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            max_health: 100.0,
            movement_speed: 200.0,
            radius: 16.0,
            contact_immunity_secs: 0.5,
        }
    }
}

/// Baseline stat growth applied on every level gained
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelGrowth {
    pub max_health_multiplier: f32,
    pub movement_speed_multiplier: f32,
}

impl Default for LevelGrowth {
    fn default() -> Self {
        Self {
            max_health_multiplier: 1.1,
            movement_speed_multiplier: 1.05,
        }
    }
}

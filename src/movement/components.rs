use bevy::prelude::*;
use std::time::Duration;

/// Component for entities that have a velocity (direction + magnitude).
/// Velocity is in world units per second on the 2D play plane.
#[derive(Component, Clone, Copy, Debug, PartialEq, Default)]
pub struct Velocity(pub Vec2);

impl Velocity {
    pub fn new(velocity: Vec2) -> Self {
        Self(velocity)
    }

    pub fn from_direction_and_speed(direction: Vec2, speed: f32) -> Self {
        Self(direction.normalize_or_zero() * speed)
    }

    pub fn value(&self) -> Vec2 {
        self.0
    }

    pub fn magnitude(&self) -> f32 {
        self.0.length()
    }

    pub fn direction(&self) -> Vec2 {
        self.0.normalize_or_zero()
    }
}

/// Knockback impulse applied by an explosion.
/// While present the entity is stunned: its own steering is suppressed and it
/// slides along the impulse until the timer finishes.
#[derive(Component, Clone, Debug)]
pub struct Knockback {
    impulse: Vec2,
    stun: Timer,
}

impl Knockback {
    pub fn new(impulse: Vec2, stun_secs: f32) -> Self {
        Self {
            impulse,
            stun: Timer::from_seconds(stun_secs.max(0.0), TimerMode::Once),
        }
    }

    /// Velocity applied while the stun lasts, fading out with it
    pub fn velocity(&self) -> Vec2 {
        self.impulse * self.remaining_fraction()
    }

    pub fn tick(&mut self, delta: Duration) {
        self.stun.tick(delta);
    }

    pub fn is_finished(&self) -> bool {
        self.stun.is_finished()
    }

    /// Remaining stun as a fraction (0.0 to 1.0)
    pub fn remaining_fraction(&self) -> f32 {
        1.0 - self.stun.fraction()
    }
}

use bevy::prelude::*;
use std::collections::HashMap;
use std::time::Duration;

/// Health component for entities that can take damage.
/// `current` always stays within `[0, max]`.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct Health {
    pub current: f32,
    pub max: f32,
}

impl Health {
    /// Create a new Health component with full health
    pub fn new(max: f32) -> Self {
        Self { current: max, max }
    }

    /// Apply damage, clamping at zero.
    /// Returns true only for the hit that moves the entity from alive to dead;
    /// damage on an already dead entity is a no-op.
    pub fn take_damage(&mut self, amount: f32) -> bool {
        if self.is_dead() {
            return false;
        }
        self.current = (self.current - amount.max(0.0)).max(0.0);
        self.is_dead()
    }

    /// Check if this entity is dead
    pub fn is_dead(&self) -> bool {
        self.current <= 0.0
    }

    pub fn is_alive(&self) -> bool {
        !self.is_dead()
    }

    /// Get health as a percentage (0.0 to 1.0)
    pub fn percentage(&self) -> f32 {
        if self.max <= 0.0 {
            0.0
        } else {
            self.current / self.max
        }
    }

    /// Heal this entity, clamped to max. Dead entities stay dead.
    pub fn heal(&mut self, amount: f32) {
        if self.is_dead() {
            return;
        }
        self.current = (self.current + amount.max(0.0)).min(self.max);
    }

    /// Change max health, keeping current within the new bound
    pub fn set_max(&mut self, max: f32) {
        self.max = max.max(0.0);
        self.current = self.current.min(self.max);
    }

    pub fn restore_full(&mut self) {
        if self.is_alive() {
            self.current = self.max;
        }
    }
}

impl Default for Health {
    fn default() -> Self {
        Self::new(100.0)
    }
}

/// Circular collision radius
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Hitbox(pub f32);

impl Hitbox {
    pub fn new(radius: f32) -> Self {
        Self(radius)
    }

    pub fn radius(&self) -> f32 {
        self.0
    }

    /// Two hitboxes overlap when their centres are closer than the sum of radii
    pub fn overlaps(&self, position: Vec2, other: &Hitbox, other_position: Vec2) -> bool {
        position.distance(other_position) < self.0 + other.0
    }
}

impl Default for Hitbox {
    fn default() -> Self {
        Self(16.0)
    }
}

/// Per-source damage immunity window.
/// Repeated contact from the same source within the window is ignored,
/// while a different source still lands its hit.
#[derive(Component, Debug, Clone)]
pub struct ContactImmunity {
    window: Duration,
    sources: HashMap<Entity, Timer>,
}

impl ContactImmunity {
    pub fn new(window_secs: f32) -> Self {
        Self {
            window: Duration::from_secs_f32(window_secs.max(0.0)),
            sources: HashMap::new(),
        }
    }

    /// Returns true and opens a window for `source` if it may deal damage now
    pub fn try_register_hit(&mut self, source: Entity) -> bool {
        if self.sources.contains_key(&source) {
            return false;
        }
        self.sources
            .insert(source, Timer::new(self.window, TimerMode::Once));
        true
    }

    pub fn is_immune_to(&self, source: Entity) -> bool {
        self.sources.contains_key(&source)
    }

    /// Advance every window and forget the expired ones
    pub fn tick(&mut self, delta: Duration) {
        self.sources.retain(|_, timer| {
            timer.tick(delta);
            !timer.is_finished()
        });
    }

    pub fn active_windows(&self) -> usize {
        self.sources.len()
    }
}

impl Default for ContactImmunity {
    fn default() -> Self {
        Self::new(0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod health_tests {
        use super::*;

        #[test]
        fn test_health_new() {
            let health = Health::new(50.0);
            assert_eq!(health.current, 50.0);
            assert_eq!(health.max, 50.0);
        }

        #[test]
        fn test_health_take_damage() {
            let mut health = Health::new(100.0);
            assert!(!health.take_damage(30.0));
            assert_eq!(health.current, 70.0);
        }

        #[test]
        fn test_health_take_damage_clamps_to_zero() {
            let mut health = Health::new(50.0);
            assert!(health.take_damage(100.0));
            assert_eq!(health.current, 0.0);
        }

        #[test]
        fn test_death_transition_reported_once() {
            let mut health = Health::new(10.0);
            assert!(health.take_damage(10.0));
            assert!(!health.take_damage(10.0));
            assert!(!health.take_damage(0.0));
            assert_eq!(health.current, 0.0);
        }

        #[test]
        fn test_damage_matches_saturating_subtraction() {
            for start in [1.0_f32, 17.5, 50.0, 100.0] {
                for amount in [0.0_f32, 0.5, 6.0, 49.0, 50.0, 250.0] {
                    let mut health = Health::new(start);
                    let died = health.take_damage(amount);
                    assert_eq!(health.current, (start - amount).max(0.0));
                    assert_eq!(died, health.current == 0.0);
                }
            }
        }

        #[test]
        fn test_negative_damage_is_ignored() {
            let mut health = Health::new(40.0);
            health.take_damage(-15.0);
            assert_eq!(health.current, 40.0);
        }

        #[test]
        fn test_health_heal_clamps_to_max() {
            let mut health = Health::new(100.0);
            health.take_damage(10.0);
            health.heal(50.0);
            assert_eq!(health.current, 100.0);
        }

        #[test]
        fn test_heal_does_not_revive() {
            let mut health = Health::new(10.0);
            health.take_damage(10.0);
            health.heal(5.0);
            assert!(health.is_dead());
        }

        #[test]
        fn test_set_max_clamps_current() {
            let mut health = Health::new(100.0);
            health.set_max(60.0);
            assert_eq!(health.current, 60.0);
            health.set_max(120.0);
            assert_eq!(health.current, 60.0);
            assert_eq!(health.max, 120.0);
        }

        #[test]
        fn test_health_percentage_zero_max() {
            let health = Health { current: 0.0, max: 0.0 };
            assert_eq!(health.percentage(), 0.0);
        }
    }

    mod hitbox_tests {
        use super::*;

        #[test]
        fn test_hitbox_overlap() {
            let a = Hitbox::new(16.0);
            let b = Hitbox::new(12.0);
            assert!(a.overlaps(Vec2::ZERO, &b, Vec2::new(27.0, 0.0)));
            assert!(!a.overlaps(Vec2::ZERO, &b, Vec2::new(28.0, 0.0)));
        }
    }

    mod immunity_tests {
        use super::*;

        #[test]
        fn test_same_source_blocked_within_window() {
            let mut world = World::new();
            let enemy = world.spawn_empty().id();
            let mut immunity = ContactImmunity::new(0.5);

            assert!(immunity.try_register_hit(enemy));
            assert!(!immunity.try_register_hit(enemy));
            immunity.tick(Duration::from_secs_f32(0.3));
            assert!(!immunity.try_register_hit(enemy));
            immunity.tick(Duration::from_secs_f32(0.3));
            assert!(immunity.try_register_hit(enemy));
        }

        #[test]
        fn test_different_sources_are_independent() {
            let mut world = World::new();
            let first = world.spawn_empty().id();
            let second = world.spawn_empty().id();
            let mut immunity = ContactImmunity::new(0.5);

            assert!(immunity.try_register_hit(first));
            assert!(immunity.try_register_hit(second));
            assert_eq!(immunity.active_windows(), 2);
        }
    }
}

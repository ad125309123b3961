use bevy::prelude::*;

use crate::combat::components::Hitbox;
use crate::game::components::RunEntity;
use crate::movement::components::Velocity;

/// A fired projectile. Destroyed on its first enemy hit or when its lifetime runs out.
#[derive(Component, Debug)]
pub struct Bullet {
    pub damage: f32,
    pub lifetime: Timer,
}

impl Bullet {
    pub fn new(damage: f32, lifetime_secs: f32) -> Self {
        Self {
            damage,
            lifetime: Timer::from_seconds(lifetime_secs, TimerMode::Once),
        }
    }
}

pub fn bullet_bundle(bullet: Bullet, velocity: Vec2, radius: f32, position: Vec2) -> impl Bundle {
    (
        bullet,
        Velocity::new(velocity),
        Hitbox::new(radius),
        Transform::from_translation(position.extend(2.0)),
        RunEntity,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bullet_component_creation() {
        let bullet = Bullet::new(10.0, 4.0);
        assert_eq!(bullet.damage, 10.0);
        assert_eq!(bullet.lifetime.duration(), std::time::Duration::from_secs(4));
        assert!(!bullet.lifetime.is_finished());
    }
}

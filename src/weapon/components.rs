use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// An auto-targeting projectile weapon carried by the player.
/// Each weapon entity keeps its own cooldown.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct Weapon {
    pub damage: f32,
    /// Shots per second
    pub attack_speed: f32,
    pub projectile_speed: f32,
    /// Seconds since the last shot; starts infinite so the first shot is immediate
    pub since_last_fire: f32,
}

impl Weapon {
    pub fn from_config(config: &WeaponConfig) -> Self {
        Self {
            damage: config.damage,
            attack_speed: config.attack_speed,
            projectile_speed: config.projectile_speed,
            since_last_fire: f32::INFINITY,
        }
    }

    /// Seconds between shots
    pub fn cooldown(&self) -> f32 {
        1.0 / self.attack_speed
    }

    pub fn is_ready(&self) -> bool {
        self.since_last_fire >= self.cooldown()
    }

    pub fn mark_fired(&mut self) {
        self.since_last_fire = 0.0;
    }

    pub fn upgrade_damage(&mut self, multiplier: f32) {
        self.damage *= multiplier;
    }

    pub fn upgrade_speed(&mut self, multiplier: f32) {
        self.attack_speed *= multiplier;
    }

    pub fn upgrade_projectile_speed(&mut self, multiplier: f32) {
        self.projectile_speed *= multiplier;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaponConfig {
    pub damage: f32,
    pub attack_speed: f32,
    pub projectile_speed: f32,
    pub projectile_ttl_secs: f32,
    pub projectile_radius: f32,
}

impl Default for WeaponConfig {
    fn default() -> Self {
        Self {
            damage: 10.0,
            attack_speed: 3.0,
            projectile_speed: 400.0,
            projectile_ttl_secs: 4.0,
            projectile_radius: 4.0,
        }
    }
}

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::combat::components::Hitbox;
use crate::game::components::RunEntity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PickupKind {
    Health,
    Speed,
    Damage,
    Experience,
    Bomb,
}

impl PickupKind {
    pub const ALL: [PickupKind; 5] = [
        PickupKind::Health,
        PickupKind::Speed,
        PickupKind::Damage,
        PickupKind::Experience,
        PickupKind::Bomb,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PickupKind::Health => "health",
            PickupKind::Speed => "speed",
            PickupKind::Damage => "damage",
            PickupKind::Experience => "experience",
            PickupKind::Bomb => "bomb",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            PickupKind::Health => Color::srgb(0.9, 0.1, 0.2),
            PickupKind::Speed => Color::srgb(0.2, 0.6, 1.0),
            PickupKind::Damage => Color::srgb(1.0, 0.5, 0.0),
            PickupKind::Experience => Color::srgb(0.3, 1.0, 0.3),
            PickupKind::Bomb => Color::srgb(0.9, 0.9, 0.1),
        }
    }
}

/// A collectible lying in the world.
/// `value` is the heal amount, boost multiplier, XP grant or explosion multiplier.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Pickup {
    pub kind: PickupKind,
    pub value: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickupConfig {
    pub radius: f32,
    pub health_amount: f32,
    pub speed_multiplier: f32,
    pub damage_multiplier: f32,
    pub experience_amount: u32,
    pub boost_duration_secs: f32,
}

impl Default for PickupConfig {
    fn default() -> Self {
        Self {
            radius: 12.0,
            health_amount: 20.0,
            speed_multiplier: 1.5,
            damage_multiplier: 1.3,
            experience_amount: 50,
            boost_duration_secs: 5.0,
        }
    }
}

/// Area blast triggered by a Bomb pickup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplosionConfig {
    /// Multiplier applied to the current weapon damage
    pub damage_multiplier: f32,
    pub radius: f32,
    pub knockback_radius_multiplier: f32,
    pub knockback_force: f32,
    pub stun_secs: f32,
}

impl Default for ExplosionConfig {
    fn default() -> Self {
        Self {
            damage_multiplier: 10.0,
            radius: 250.0,
            knockback_radius_multiplier: 1.5,
            knockback_force: 900.0,
            stun_secs: 0.3,
        }
    }
}

impl ExplosionConfig {
    pub fn knockback_radius(&self) -> f32 {
        self.radius * self.knockback_radius_multiplier
    }
}

pub fn pickup_bundle(pickup: Pickup, radius: f32, position: Vec2) -> impl Bundle {
    (
        pickup,
        Hitbox::new(radius),
        Transform::from_translation(position.extend(0.5)),
        RunEntity,
        Name::new(format!("Pickup ({})", pickup.kind.name())),
    )
}

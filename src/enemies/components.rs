use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::combat::components::{Health, Hitbox};
use crate::game::components::RunEntity;
use crate::movement::components::Velocity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    Basic,
    Fast,
    Tank,
}

impl EnemyKind {
    pub const ALL: [EnemyKind; 3] = [EnemyKind::Basic, EnemyKind::Fast, EnemyKind::Tank];

    pub fn name(&self) -> &'static str {
        match self {
            EnemyKind::Basic => "basic",
            EnemyKind::Fast => "fast",
            EnemyKind::Tank => "tank",
        }
    }
}

/// Base stats fixed by an enemy kind
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemyStats {
    pub max_health: f32,
    pub speed: f32,
    pub contact_damage: f32,
    pub xp_reward: u32,
}

/// Per-kind stat table plus the shared death drop roll
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyConfig {
    pub basic: EnemyStats,
    pub fast: EnemyStats,
    pub tank: EnemyStats,
    pub radius: f32,
    /// Chance in [0, 1] that a dying enemy drops a pickup
    pub drop_chance: f32,
}

impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            basic: EnemyStats {
                max_health: 50.0,
                speed: 100.0,
                contact_damage: 6.0,
                xp_reward: 20,
            },
            fast: EnemyStats {
                max_health: 25.0,
                speed: 150.0,
                contact_damage: 3.0,
                xp_reward: 15,
            },
            tank: EnemyStats {
                max_health: 100.0,
                speed: 70.0,
                contact_damage: 9.0,
                xp_reward: 25,
            },
            radius: 16.0,
            drop_chance: 0.4,
        }
    }
}

impl EnemyConfig {
    pub fn stats(&self, kind: EnemyKind) -> &EnemyStats {
        match kind {
            EnemyKind::Basic => &self.basic,
            EnemyKind::Fast => &self.fast,
            EnemyKind::Tank => &self.tank,
        }
    }
}

#[derive(Component, Debug, Clone)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub speed: f32,
    pub contact_damage: f32,
    pub xp_reward: u32,
}

impl Enemy {
    pub fn from_stats(kind: EnemyKind, stats: &EnemyStats) -> Self {
        Self {
            kind,
            speed: stats.speed,
            contact_damage: stats.contact_damage,
            xp_reward: stats.xp_reward,
        }
    }
}

/// Everything an enemy of `kind` needs to take part in a run
pub fn enemy_bundle(kind: EnemyKind, config: &EnemyConfig, position: Vec2) -> impl Bundle {
    let stats = config.stats(kind);
    (
        Enemy::from_stats(kind, stats),
        Health::new(stats.max_health),
        Hitbox::new(config.radius),
        Velocity::default(),
        Transform::from_translation(position.extend(1.0)),
        RunEntity,
        Name::new(format!("Enemy ({})", kind.name())),
    )
}

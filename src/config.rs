//! Balance configuration for a run.
//!
//! `GameConfig::default()` is the canonical balance table. A RON file can
//! override any section; missing sections keep their defaults.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::enemies::components::{EnemyConfig, EnemyStats};
use crate::experience::resources::ExperienceCurve;
use crate::loot::components::{ExplosionConfig, PickupConfig, PickupKind};
use crate::player::components::{LevelGrowth, PlayerConfig};
use crate::upgrade::components::UpgradeEffect;
use crate::upgrade::resources::UpgradeConfig;
use crate::waves::components::{WaveConfig, WavePhase};
use crate::weapon::components::WeaponConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("invalid value for `{field}`: {reason}")]
    Invalid { field: String, reason: String },
}

impl ConfigError {
    fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Play area and camera view, in world units. The world spans `(0,0)..(width,height)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldConfig {
    pub width: f32,
    pub height: f32,
    pub view_width: f32,
    pub view_height: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 2048.0,
            height: 1536.0,
            view_width: 1024.0,
            view_height: 768.0,
        }
    }
}

impl WorldConfig {
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    pub fn center(&self) -> Vec2 {
        self.bounds().center()
    }

    pub fn view_size(&self) -> Vec2 {
        Vec2::new(self.view_width, self.view_height)
    }
}

#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub player: PlayerConfig,
    pub level_growth: LevelGrowth,
    pub enemies: EnemyConfig,
    pub weapon: WeaponConfig,
    pub experience: ExperienceCurve,
    pub pickups: PickupConfig,
    pub explosion: ExplosionConfig,
    pub waves: WaveConfig,
    pub world: WorldConfig,
    pub upgrades: UpgradeConfig,
}

impl GameConfig {
    /// Read, parse and validate a RON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: GameConfig = ron::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// The value a pickup of `kind` carries when spawned
    pub fn pickup_value(&self, kind: PickupKind) -> f32 {
        match kind {
            PickupKind::Health => self.pickups.health_amount,
            PickupKind::Speed => self.pickups.speed_multiplier,
            PickupKind::Damage => self.pickups.damage_multiplier,
            PickupKind::Experience => self.pickups.experience_amount as f32,
            PickupKind::Bomb => self.explosion.damage_multiplier,
        }
    }

    /// Reject values that would break the simulation instead of failing mid-run
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("player.max_health", self.player.max_health)?;
        positive("player.movement_speed", self.player.movement_speed)?;
        positive("player.radius", self.player.radius)?;
        non_negative("player.contact_immunity_secs", self.player.contact_immunity_secs)?;
        positive("level_growth.max_health_multiplier", self.level_growth.max_health_multiplier)?;
        positive(
            "level_growth.movement_speed_multiplier",
            self.level_growth.movement_speed_multiplier,
        )?;

        for (name, stats) in [
            ("basic", &self.enemies.basic),
            ("fast", &self.enemies.fast),
            ("tank", &self.enemies.tank),
        ] {
            validate_enemy(name, stats)?;
        }
        positive("enemies.radius", self.enemies.radius)?;
        unit_interval("enemies.drop_chance", self.enemies.drop_chance)?;

        positive("weapon.damage", self.weapon.damage)?;
        positive("weapon.attack_speed", self.weapon.attack_speed)?;
        positive("weapon.projectile_speed", self.weapon.projectile_speed)?;
        positive("weapon.projectile_ttl_secs", self.weapon.projectile_ttl_secs)?;
        positive("weapon.projectile_radius", self.weapon.projectile_radius)?;

        positive("experience.base", self.experience.base)?;
        if self.experience.scaling < 1.0 {
            return Err(ConfigError::invalid(
                "experience.scaling",
                format!("must be at least 1.0, got {}", self.experience.scaling),
            ));
        }

        positive("pickups.radius", self.pickups.radius)?;
        non_negative("pickups.health_amount", self.pickups.health_amount)?;
        positive("pickups.speed_multiplier", self.pickups.speed_multiplier)?;
        positive("pickups.damage_multiplier", self.pickups.damage_multiplier)?;
        positive("pickups.boost_duration_secs", self.pickups.boost_duration_secs)?;

        non_negative("explosion.damage_multiplier", self.explosion.damage_multiplier)?;
        positive("explosion.radius", self.explosion.radius)?;
        if self.explosion.knockback_radius_multiplier < 1.0 {
            return Err(ConfigError::invalid(
                "explosion.knockback_radius_multiplier",
                "must be at least 1.0",
            ));
        }
        non_negative("explosion.knockback_force", self.explosion.knockback_force)?;
        non_negative("explosion.stun_secs", self.explosion.stun_secs)?;

        for phase in WavePhase::ALL {
            let cfg = self.waves.phase(phase);
            let field = |name: &str| format!("waves.{}.{name}", phase.name());
            positive(&field("spawn_interval_secs"), cfg.spawn_interval_secs)?;
            positive(&field("duration_secs"), cfg.duration_secs)?;
            unit_interval(&field("enemy_chances.fast"), cfg.enemy_chances.fast)?;
            unit_interval(&field("enemy_chances.tank"), cfg.enemy_chances.tank)?;
        }
        non_negative("waves.same_edge_jitter", self.waves.same_edge_jitter)?;

        positive("world.width", self.world.width)?;
        positive("world.height", self.world.height)?;
        positive("world.view_width", self.world.view_width)?;
        positive("world.view_height", self.world.view_height)?;

        self.validate_upgrades()
    }

    fn validate_upgrades(&self) -> Result<(), ConfigError> {
        let catalog = &self.upgrades.catalog;
        if catalog.is_empty() {
            return Err(ConfigError::invalid("upgrades.catalog", "must not be empty"));
        }
        if self.upgrades.choices_per_level == 0 {
            return Err(ConfigError::invalid(
                "upgrades.choices_per_level",
                "must be at least 1",
            ));
        }

        let mut seen = HashSet::new();
        for definition in catalog {
            if definition.id.is_empty() {
                return Err(ConfigError::invalid("upgrades.catalog.id", "must not be empty"));
            }
            if !seen.insert(definition.id.as_str()) {
                return Err(ConfigError::invalid(
                    "upgrades.catalog.id",
                    format!("duplicate id `{}`", definition.id),
                ));
            }
            let field = format!("upgrades.{}", definition.id);
            match definition.effect {
                UpgradeEffect::Regeneration {
                    fraction,
                    interval_secs,
                } => {
                    if !(fraction > 0.0 && fraction <= 1.0) {
                        return Err(ConfigError::invalid(
                            field,
                            format!("regeneration fraction must be in (0, 1], got {fraction}"),
                        ));
                    }
                    positive(&field, interval_secs)?;
                }
                effect => {
                    if let Some(multiplier) = effect.multiplier() {
                        positive(&field, multiplier)?;
                    }
                }
            }
        }
        Ok(())
    }
}

fn validate_enemy(name: &str, stats: &EnemyStats) -> Result<(), ConfigError> {
    positive(&format!("enemies.{name}.max_health"), stats.max_health)?;
    positive(&format!("enemies.{name}.speed"), stats.speed)?;
    non_negative(&format!("enemies.{name}.contact_damage"), stats.contact_damage)
}

fn positive(field: &str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("must be positive, got {value}")))
    }
}

fn non_negative(field: &str, value: f32) -> Result<(), ConfigError> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("must not be negative, got {value}")))
    }
}

fn unit_interval(field: &str, value: f32) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("must be within [0, 1], got {value}")))
    }
}

use serde::{Deserialize, Serialize};

/// A permanent stat change offered on level-up
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum UpgradeEffect {
    /// Scale max health and heal by the amount gained
    MaxHealth { multiplier: f32 },
    MoveSpeed { multiplier: f32 },
    WeaponDamage { multiplier: f32 },
    AttackSpeed { multiplier: f32 },
    ProjectileSpeed { multiplier: f32 },
    /// Heal `fraction × max health` every `interval_secs`
    Regeneration { fraction: f32, interval_secs: f32 },
}

impl UpgradeEffect {
    pub fn apply(&self, target: &mut dyn UpgradeTarget) {
        match *self {
            UpgradeEffect::MaxHealth { multiplier } => target.scale_max_health(multiplier),
            UpgradeEffect::MoveSpeed { multiplier } => target.scale_movement_speed(multiplier),
            UpgradeEffect::WeaponDamage { multiplier } => target.scale_weapon_damage(multiplier),
            UpgradeEffect::AttackSpeed { multiplier } => target.scale_attack_speed(multiplier),
            UpgradeEffect::ProjectileSpeed { multiplier } => {
                target.scale_projectile_speed(multiplier)
            }
            UpgradeEffect::Regeneration {
                fraction,
                interval_secs,
            } => target.enable_regeneration(fraction, interval_secs),
        }
    }

    /// The multiplier carried by the effect, if it has one
    pub fn multiplier(&self) -> Option<f32> {
        match *self {
            UpgradeEffect::MaxHealth { multiplier }
            | UpgradeEffect::MoveSpeed { multiplier }
            | UpgradeEffect::WeaponDamage { multiplier }
            | UpgradeEffect::AttackSpeed { multiplier }
            | UpgradeEffect::ProjectileSpeed { multiplier } => Some(multiplier),
            UpgradeEffect::Regeneration { .. } => None,
        }
    }
}

/// What an upgrade can act on. The player side delegates weapon stats to every
/// weapon it carries.
pub trait UpgradeTarget {
    fn scale_max_health(&mut self, multiplier: f32);
    fn scale_movement_speed(&mut self, multiplier: f32);
    fn scale_weapon_damage(&mut self, multiplier: f32);
    fn scale_attack_speed(&mut self, multiplier: f32);
    fn scale_projectile_speed(&mut self, multiplier: f32);
    fn enable_regeneration(&mut self, fraction: f32, interval_secs: f32);
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpgradeDefinition {
    pub id: String,
    pub name: String,
    pub description: String,
    pub effect: UpgradeEffect,
}

impl UpgradeDefinition {
    pub fn new(id: &str, name: &str, description: &str, effect: UpgradeEffect) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            effect,
        }
    }
}

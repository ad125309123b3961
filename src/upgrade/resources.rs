use bevy::prelude::*;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::upgrade::components::{UpgradeDefinition, UpgradeEffect};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpgradeConfig {
    /// How many distinct upgrades are offered per level gained
    pub choices_per_level: usize,
    pub catalog: Vec<UpgradeDefinition>,
}

impl Default for UpgradeConfig {
    fn default() -> Self {
        Self {
            choices_per_level: 3,
            catalog: vec![
                UpgradeDefinition::new(
                    "health_boost",
                    "Vitality",
                    "+20% max health",
                    UpgradeEffect::MaxHealth { multiplier: 1.2 },
                ),
                UpgradeDefinition::new(
                    "speed_boost",
                    "Swift Feet",
                    "+15% movement speed",
                    UpgradeEffect::MoveSpeed { multiplier: 1.15 },
                ),
                UpgradeDefinition::new(
                    "weapon_damage",
                    "Hollow Points",
                    "+25% weapon damage",
                    UpgradeEffect::WeaponDamage { multiplier: 1.25 },
                ),
                UpgradeDefinition::new(
                    "weapon_speed",
                    "Quick Trigger",
                    "+20% attack speed",
                    UpgradeEffect::AttackSpeed { multiplier: 1.2 },
                ),
                UpgradeDefinition::new(
                    "health_regen",
                    "Regeneration",
                    "Regenerate 1% health every 5 seconds",
                    UpgradeEffect::Regeneration {
                        fraction: 0.01,
                        interval_secs: 5.0,
                    },
                ),
                UpgradeDefinition::new(
                    "projectile_speed",
                    "Velocity Rounds",
                    "+30% projectile speed",
                    UpgradeEffect::ProjectileSpeed { multiplier: 1.3 },
                ),
            ],
        }
    }
}

/// Validated set of upgrades offered during a run
#[derive(Resource, Debug, Clone, Default)]
pub struct UpgradeCatalog {
    definitions: Vec<UpgradeDefinition>,
}

impl UpgradeCatalog {
    pub fn new(definitions: Vec<UpgradeDefinition>) -> Self {
        Self { definitions }
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&UpgradeDefinition> {
        self.definitions.iter().find(|definition| definition.id == id)
    }

    /// Draw up to `count` distinct upgrades without replacement
    pub fn random_upgrades(&self, count: usize, rng: &mut impl Rng) -> Vec<UpgradeDefinition> {
        let mut pool = self.definitions.clone();
        let mut picked = Vec::with_capacity(count.min(pool.len()));
        while picked.len() < count && !pool.is_empty() {
            let index = rng.gen_range(0..pool.len());
            picked.push(pool.swap_remove(index));
        }
        picked
    }
}

/// Level-ups waiting for an upgrade choice and the choices currently on offer
#[derive(Resource, Debug, Clone, Default)]
pub struct PendingLevelUps {
    pub levels: u32,
    pub choices: Vec<UpgradeDefinition>,
}

impl PendingLevelUps {
    pub fn is_choosing(&self) -> bool {
        !self.choices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_random_upgrades_are_distinct() {
        let catalog = UpgradeCatalog::new(UpgradeConfig::default().catalog);
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let picked = catalog.random_upgrades(3, &mut rng);
            assert_eq!(picked.len(), 3);
            let ids: HashSet<_> = picked.iter().map(|u| u.id.clone()).collect();
            assert_eq!(ids.len(), 3, "seed {seed} repeated an upgrade");
        }
    }

    #[test]
    fn test_random_upgrades_caps_at_catalog_size() {
        let catalog = UpgradeCatalog::new(UpgradeConfig::default().catalog);
        let mut rng = StdRng::seed_from_u64(7);
        let picked = catalog.random_upgrades(10, &mut rng);
        assert_eq!(picked.len(), catalog.len());
    }

    #[test]
    fn test_random_upgrades_does_not_consume_catalog() {
        let catalog = UpgradeCatalog::new(UpgradeConfig::default().catalog);
        let mut rng = StdRng::seed_from_u64(1);
        catalog.random_upgrades(6, &mut rng);
        assert_eq!(catalog.len(), 6);
        assert!(catalog.get("health_regen").is_some());
    }

    #[test]
    fn test_empty_catalog_offers_nothing() {
        let catalog = UpgradeCatalog::default();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(catalog.random_upgrades(3, &mut rng).is_empty());
    }
}

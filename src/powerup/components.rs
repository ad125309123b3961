use bevy::prelude::*;
use std::collections::HashMap;

use crate::loot::components::PickupKind;

/// Stats that can be temporarily multiplied by a pickup
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BoostKind {
    /// Player movement speed
    Speed,
    /// Damage of every weapon the player carries
    Damage,
}

impl BoostKind {
    pub fn from_pickup(kind: PickupKind) -> Option<Self> {
        match kind {
            PickupKind::Speed => Some(BoostKind::Speed),
            PickupKind::Damage => Some(BoostKind::Damage),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            BoostKind::Speed => "Speed Boost",
            BoostKind::Damage => "Damage Boost",
        }
    }
}

/// One running boost: a multiplier, its remaining time, and the original
/// value of every boosted entity captured at first activation
#[derive(Debug, Clone)]
pub struct TimedBoost {
    pub multiplier: f32,
    pub remaining: f32,
    baselines: HashMap<Entity, f32>,
}

/// A boost whose timer ran out, with the values to restore
#[derive(Debug, Clone, PartialEq)]
pub struct ExpiredBoost {
    pub kind: BoostKind,
    pub restore: Vec<(Entity, f32)>,
}

/// Resource tracking every active timed boost.
/// At most one boost per kind is ever running, so only one revert can fire.
#[derive(Resource, Default, Debug)]
pub struct ActiveBoosts {
    boosts: HashMap<BoostKind, TimedBoost>,
}

impl ActiveBoosts {
    /// Start a boost, or refresh the running one of the same kind.
    ///
    /// `targets` carries each entity's current value. The baseline is only
    /// captured when the entity has none stored yet, so a refresh multiplies the
    /// original value and not the already boosted one. The previous timer is
    /// replaced. Returns the new value for every target.
    pub fn activate(
        &mut self,
        kind: BoostKind,
        multiplier: f32,
        duration: f32,
        targets: impl IntoIterator<Item = (Entity, f32)>,
    ) -> Vec<(Entity, f32)> {
        let boost = self.boosts.entry(kind).or_insert_with(|| TimedBoost {
            multiplier,
            remaining: duration,
            baselines: HashMap::new(),
        });
        boost.multiplier = multiplier;
        boost.remaining = duration;

        targets
            .into_iter()
            .map(|(entity, current)| {
                let baseline = *boost.baselines.entry(entity).or_insert(current);
                (entity, baseline * multiplier)
            })
            .collect()
    }

    /// Scale a stored baseline after a permanent change to the boosted stat,
    /// so the eventual revert keeps the permanent part
    pub fn rebase(&mut self, kind: BoostKind, entity: Entity, factor: f32) {
        if let Some(baseline) = self
            .boosts
            .get_mut(&kind)
            .and_then(|boost| boost.baselines.get_mut(&entity))
        {
            *baseline *= factor;
        }
    }

    /// Count down every boost and return the ones that ran out
    pub fn update_timers(&mut self, delta_time: f32) -> Vec<ExpiredBoost> {
        let mut expired = Vec::new();

        for (kind, boost) in self.boosts.iter_mut() {
            boost.remaining -= delta_time;
            if boost.remaining <= 0.0 {
                expired.push(*kind);
            }
        }

        expired
            .into_iter()
            .filter_map(|kind| self.boosts.remove(&kind).map(|boost| (kind, boost)))
            .map(|(kind, boost)| ExpiredBoost {
                kind,
                restore: boost.baselines.into_iter().collect(),
            })
            .collect()
    }

    pub fn is_active(&self, kind: BoostKind) -> bool {
        self.boosts.contains_key(&kind)
    }

    pub fn remaining(&self, kind: BoostKind) -> Option<f32> {
        self.boosts.get(&kind).map(|boost| boost.remaining)
    }

    pub fn multiplier(&self, kind: BoostKind) -> Option<f32> {
        self.boosts.get(&kind).map(|boost| boost.multiplier)
    }

    pub fn baseline(&self, kind: BoostKind, entity: Entity) -> Option<f32> {
        self.boosts
            .get(&kind)
            .and_then(|boost| boost.baselines.get(&entity))
            .copied()
    }

    /// Drop every boost without restoring anything
    pub fn clear(&mut self) {
        self.boosts.clear();
    }
}

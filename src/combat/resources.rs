use bevy::prelude::*;
use std::collections::HashMap;

/// Enemy health as it will be once this tick's queued hits land.
/// Seeded from `Health::current` on first touch and cleared every tick by the
/// projectile pass, so later dispatchers in the same tick see kills that
/// `apply_damage_system` has not applied yet.
#[derive(Resource, Debug, Default)]
pub struct PendingHealth(HashMap<Entity, f32>);

impl PendingHealth {
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Remaining health for `entity`, or `current` if nothing is queued against it
    pub fn remaining(&self, entity: Entity, current: f32) -> f32 {
        self.0.get(&entity).copied().unwrap_or(current)
    }

    pub fn is_doomed(&self, entity: Entity, current: f32) -> bool {
        self.remaining(entity, current) <= 0.0
    }

    /// Queue `amount` against `entity` and return what is left
    pub fn queue_hit(&mut self, entity: Entity, current: f32, amount: f32) -> f32 {
        let remaining = self.0.entry(entity).or_insert(current);
        *remaining = (*remaining - amount.max(0.0)).max(0.0);
        *remaining
    }
}

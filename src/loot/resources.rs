use bevy::prelude::*;
use std::collections::{HashSet, VecDeque};

use super::components::PickupKind;

/// Pickups already claimed by the player this life.
/// An entry is removed when the pickup entity is despawned.
#[derive(Resource, Debug, Default)]
pub struct CollectedPickups(pub HashSet<Entity>);

/// A pickup effect waiting for the next tick's deferred step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickupCommand {
    pub pickup: Entity,
    pub kind: PickupKind,
    pub value: f32,
    pub position: Vec2,
}

/// Effects queued by the collision handler, applied at the start of the next tick
#[derive(Resource, Debug, Default)]
pub struct PendingPickupEffects(pub VecDeque<PickupCommand>);

impl PendingPickupEffects {
    pub fn push(&mut self, command: PickupCommand) {
        self.0.push_back(command);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_effects_keep_fifo_order() {
        let mut world = World::new();
        let first = world.spawn_empty().id();
        let second = world.spawn_empty().id();

        let mut pending = PendingPickupEffects::default();
        assert!(pending.is_empty());
        for (pickup, kind) in [(first, PickupKind::Health), (second, PickupKind::Bomb)] {
            pending.push(PickupCommand {
                pickup,
                kind,
                value: 1.0,
                position: Vec2::ZERO,
            });
        }

        assert_eq!(pending.len(), 2);
        let order: Vec<Entity> = pending.0.drain(..).map(|c| c.pickup).collect();
        assert_eq!(order, vec![first, second]);
    }
}

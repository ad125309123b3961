use bevy::prelude::*;

use super::resources::{CollectedPickups, PendingPickupEffects};
use super::systems::{apply_pickup_effects_system, collect_pickup_system, loot_drop_system};
use crate::combat::plugin::CombatSets;
use crate::combat::systems::handle_enemy_death_system;
use crate::game::events::{ExplosionEvent, LootDropEvent, PickupCollectedEvent, PickupCreatedEvent};
use crate::game::sets::GameSet;
use crate::states::GameState;

pub fn plugin(app: &mut App) {
    app.add_message::<LootDropEvent>()
        .add_message::<PickupCreatedEvent>()
        .add_message::<PickupCollectedEvent>()
        .add_message::<ExplosionEvent>()
        .init_resource::<CollectedPickups>()
        .init_resource::<PendingPickupEffects>()
        .add_systems(
            Update,
            (
                apply_pickup_effects_system.in_set(GameSet::Deferred),
                collect_pickup_system.in_set(CombatSets::Dispatch),
                loot_drop_system
                    .in_set(GameSet::Resolve)
                    .after(handle_enemy_death_system),
            )
                .run_if(in_state(GameState::InGame)),
        );
}

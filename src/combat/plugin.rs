use bevy::prelude::*;

use super::events::{CollisionEvent, DamageEvent, DeathEvent};
use super::resources::PendingHealth;
use super::systems::{
    apply_damage_system, detect_collisions_system, handle_enemy_death_system,
    player_enemy_contact_system, projectile_hit_system, tick_contact_immunity_system,
};
use crate::game::sets::GameSet;
use crate::states::GameState;

/// System sets ordering the steps inside `GameSet::Combat`
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum CombatSets {
    /// Overlap detection
    Detect,
    /// Collision handlers turning overlaps into damage or pickup commands
    Dispatch,
    /// Damage application and death detection
    Damage,
}

/// Combat plugin: collision dispatch, damage, death handling
pub fn plugin(app: &mut App) {
    app.init_resource::<PendingHealth>()
        .add_message::<CollisionEvent>()
        .add_message::<DamageEvent>()
        .add_message::<DeathEvent>()
        .configure_sets(
            Update,
            (CombatSets::Detect, CombatSets::Dispatch, CombatSets::Damage)
                .chain()
                .in_set(GameSet::Combat),
        )
        .add_systems(
            Update,
            (
                detect_collisions_system.in_set(CombatSets::Detect),
                (projectile_hit_system, player_enemy_contact_system)
                    .chain()
                    .in_set(CombatSets::Dispatch),
                apply_damage_system.in_set(CombatSets::Damage),
            )
                .run_if(in_state(GameState::InGame)),
        )
        .add_systems(
            Update,
            handle_enemy_death_system
                .in_set(GameSet::Resolve)
                .run_if(in_state(GameState::InGame)),
        )
        .add_systems(
            Update,
            tick_contact_immunity_system
                .in_set(GameSet::Effects)
                .run_if(in_state(GameState::InGame)),
        );
}

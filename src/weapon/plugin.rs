use bevy::prelude::*;

use crate::game::events::WeaponFiredEvent;
use crate::game::sets::GameSet;
use crate::states::GameState;
use crate::weapon::systems::weapon_firing_system;

pub fn plugin(app: &mut App) {
    app.add_message::<WeaponFiredEvent>().add_systems(
        Update,
        weapon_firing_system
            .in_set(GameSet::Spawning)
            .run_if(in_state(GameState::InGame)),
    );
}

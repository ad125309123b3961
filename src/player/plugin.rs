use bevy::prelude::*;

use crate::game::sets::GameSet;
use crate::player::systems::player_regeneration_system;
use crate::states::GameState;

pub fn plugin(app: &mut App) {
    app.add_systems(
        Update,
        player_regeneration_system
            .in_set(GameSet::Effects)
            .run_if(in_state(GameState::InGame)),
    );
}

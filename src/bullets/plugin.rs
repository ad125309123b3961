use bevy::prelude::*;

use crate::bullets::systems::bullet_lifetime_system;
use crate::game::sets::GameSet;
use crate::states::GameState;

pub fn plugin(app: &mut App) {
    app.add_systems(
        Update,
        bullet_lifetime_system
            .in_set(GameSet::Cleanup)
            .run_if(in_state(GameState::InGame)),
    );
}

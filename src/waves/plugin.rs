use bevy::prelude::*;

use super::systems::wave_director_system;
use crate::game::events::WaveStateChangedEvent;
use crate::game::sets::GameSet;
use crate::states::GameState;

pub fn plugin(app: &mut App) {
    app.add_message::<WaveStateChangedEvent>().add_systems(
        Update,
        wave_director_system
            .in_set(GameSet::Spawning)
            .run_if(in_state(GameState::InGame)),
    );
}

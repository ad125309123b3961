use bevy::prelude::*;

use crate::experience::systems::experience_gain_system;
use crate::game::events::{ExperienceGainEvent, PlayerLevelUpEvent};
use crate::game::sets::GameSet;
use crate::states::GameState;

pub fn plugin(app: &mut App) {
    app.add_message::<ExperienceGainEvent>()
        .add_message::<PlayerLevelUpEvent>()
        .add_systems(
            Update,
            experience_gain_system
                .in_set(GameSet::Resolve)
                .after(crate::combat::systems::handle_enemy_death_system)
                .run_if(in_state(GameState::InGame)),
        );
}

use bevy::prelude::*;

use super::resources::PendingLevelUps;
use super::systems::{apply_upgrade_choice_system, begin_upgrade_selection_system};
use crate::game::events::UpgradeChosenEvent;
use crate::game::sets::GameSet;
use crate::states::GameState;

pub fn plugin(app: &mut App) {
    app.add_message::<UpgradeChosenEvent>()
        .init_resource::<PendingLevelUps>()
        .add_systems(
            Update,
            begin_upgrade_selection_system
                .in_set(GameSet::Resolve)
                .after(crate::experience::systems::experience_gain_system)
                .after(crate::game::systems::handle_player_death_system)
                .run_if(in_state(GameState::InGame)),
        )
        .add_systems(
            Update,
            apply_upgrade_choice_system.run_if(in_state(GameState::LevelUp)),
        );
}

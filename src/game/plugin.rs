use bevy::prelude::*;

use crate::config::GameConfig;
use crate::experience::systems::experience_gain_system;
use crate::game::events::PlayerDiedEvent;
use crate::game::resources::{LastRunSummary, RunStats};
use crate::game::sets::GameSet;
use crate::player::components::Player;
use crate::game::systems::*;
use crate::states::GameState;

/// Core simulation: tick phases, run lifecycle and every gameplay plugin
pub fn plugin(app: &mut App) {
    app.init_resource::<GameConfig>()
        .init_resource::<RunStats>()
        .init_resource::<LastRunSummary>()
        .add_message::<PlayerDiedEvent>()
        .configure_sets(
            Update,
            (
                GameSet::Deferred,
                GameSet::Input,
                GameSet::Movement,
                GameSet::Combat,
                GameSet::Resolve,
                GameSet::Spawning,
                GameSet::Effects,
                GameSet::Cleanup,
            )
                .chain()
                .run_if(in_state(GameState::InGame)),
        )
        .add_plugins((
            crate::movement::plugin,
            crate::combat::plugin,
            crate::player::plugin,
            crate::weapon::plugin,
            crate::bullets::plugin,
            crate::experience::plugin,
            crate::powerup::plugin,
            crate::loot::plugin,
            crate::waves::plugin,
            crate::upgrade::plugin,
        ))
        .add_systems(
            OnEnter(GameState::InGame),
            setup_run.run_if(not(any_with_component::<Player>)),
        )
        .add_systems(OnEnter(GameState::GameOver), teardown_run)
        .add_systems(
            Update,
            (
                handle_player_death_system
                    .in_set(GameSet::Resolve)
                    .after(experience_gain_system),
                tick_play_time_system.in_set(GameSet::Input),
            )
                .run_if(in_state(GameState::InGame)),
        );
}

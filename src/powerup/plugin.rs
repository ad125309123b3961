use bevy::prelude::*;

use crate::game::events::BoostExpiredEvent;
use crate::game::sets::GameSet;
use crate::powerup::components::ActiveBoosts;
use crate::powerup::systems::update_boost_timers;
use crate::states::GameState;

pub fn plugin(app: &mut App) {
    app.init_resource::<ActiveBoosts>()
        .add_message::<BoostExpiredEvent>()
        .add_systems(
            Update,
            update_boost_timers
                .in_set(GameSet::Effects)
                .run_if(in_state(GameState::InGame)),
        );
}

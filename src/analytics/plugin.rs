use bevy::prelude::*;

use super::systems::forward_analytics_system;
use crate::game::events::{
    EnemyKilledEvent, PickupCreatedEvent, PlayerDiedEvent, PlayerLevelUpEvent,
    WaveStateChangedEvent,
};

pub fn plugin(app: &mut App) {
    app.add_message::<WaveStateChangedEvent>()
        .add_message::<PlayerLevelUpEvent>()
        .add_message::<EnemyKilledEvent>()
        .add_message::<PickupCreatedEvent>()
        .add_message::<PlayerDiedEvent>()
        .add_systems(PostUpdate, forward_analytics_system);
}

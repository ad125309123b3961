use bevy::prelude::*;

use super::events::AnalyticsEvent;
use super::sink::Analytics;
use crate::game::events::{
    EnemyKilledEvent, PickupCreatedEvent, PlayerDiedEvent, PlayerLevelUpEvent,
    WaveStateChangedEvent,
};

/// Forward this frame's notifications to the analytics sink, if one is installed.
///
/// Kinds are sent in the order the tick produces them: kills, the level-ups
/// their XP caused, pickups dropped by those kills, wave changes from the
/// spawning pass, and the player's death last.
pub fn forward_analytics_system(
    analytics: Option<ResMut<Analytics>>,
    mut waves: MessageReader<WaveStateChangedEvent>,
    mut level_ups: MessageReader<PlayerLevelUpEvent>,
    mut kills: MessageReader<EnemyKilledEvent>,
    mut pickups: MessageReader<PickupCreatedEvent>,
    mut deaths: MessageReader<PlayerDiedEvent>,
) {
    let Some(mut analytics) = analytics else {
        return;
    };

    let mut batch: Vec<AnalyticsEvent> = Vec::new();
    batch.extend(kills.read().map(AnalyticsEvent::from));
    batch.extend(level_ups.read().map(AnalyticsEvent::from));
    batch.extend(pickups.read().map(AnalyticsEvent::from));
    batch.extend(waves.read().map(AnalyticsEvent::from));
    batch.extend(deaths.read().map(AnalyticsEvent::from));

    for event in batch {
        analytics.send(event);
    }
}

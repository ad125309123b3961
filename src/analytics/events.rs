use std::fmt;

use crate::game::events::{
    EnemyKilledEvent, PickupCreatedEvent, PlayerDiedEvent, PlayerLevelUpEvent,
    WaveStateChangedEvent,
};

/// A named notification with a flat key/value payload
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsEvent {
    pub name: &'static str,
    pub payload: Vec<(&'static str, String)>,
}

impl AnalyticsEvent {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            payload: Vec::new(),
        }
    }

    pub fn with(mut self, key: &'static str, value: impl ToString) -> Self {
        self.payload.push((key, value.to_string()));
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.payload
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl fmt::Display for AnalyticsEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        for (key, value) in self.payload.iter() {
            write!(f, " {key}={value}")?;
        }
        Ok(())
    }
}

impl From<&WaveStateChangedEvent> for AnalyticsEvent {
    fn from(event: &WaveStateChangedEvent) -> Self {
        AnalyticsEvent::new("wave_state_changed")
            .with("state", event.phase.name())
            .with("text", event.formatted_text())
    }
}

impl From<&PlayerLevelUpEvent> for AnalyticsEvent {
    fn from(event: &PlayerLevelUpEvent) -> Self {
        AnalyticsEvent::new("level_up")
            .with("new_level", event.new_level)
            .with("previous_level", event.previous_level)
    }
}

impl From<&EnemyKilledEvent> for AnalyticsEvent {
    fn from(event: &EnemyKilledEvent) -> Self {
        AnalyticsEvent::new("enemy_killed")
            .with("enemy_type", event.kind.name())
            .with("xp_value", event.xp_value)
    }
}

impl From<&PickupCreatedEvent> for AnalyticsEvent {
    fn from(event: &PickupCreatedEvent) -> Self {
        AnalyticsEvent::new("pickup_created")
            .with("pickup_type", event.kind.name())
            .with("x", event.position.x)
            .with("y", event.position.y)
    }
}

impl From<&PlayerDiedEvent> for AnalyticsEvent {
    fn from(event: &PlayerDiedEvent) -> Self {
        let summary = &event.summary;
        AnalyticsEvent::new("player_died")
            .with("enemies_killed", summary.enemies_killed)
            .with("xp_gained", summary.xp_gained)
            .with("level_reached", summary.level_reached)
            .with("play_time_seconds", summary.play_time_secs.round() as u32)
    }
}

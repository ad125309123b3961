use bevy::prelude::*;

use crate::enemies::components::EnemyKind;
use crate::game::resources::RunSummary;
use crate::loot::components::PickupKind;
use crate::powerup::components::BoostKind;
use crate::waves::components::{WaveDisplay, WavePhase};

/// Message fired when an enemy dies
#[derive(Message, Debug, Clone)]
pub struct EnemyKilledEvent {
    pub enemy: Entity,
    pub kind: EnemyKind,
    pub xp_value: u32,
    pub position: Vec2,
}

/// Message fired when a dead enemy gets its drop roll
#[derive(Message, Debug, Clone, Copy)]
pub struct LootDropEvent {
    pub position: Vec2,
}

/// Experience granted to the player, from kills or pickups
#[derive(Message, Debug, Clone, Copy)]
pub struct ExperienceGainEvent {
    pub amount: u32,
}

/// Fired once per level gained, in ascending order
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerLevelUpEvent {
    pub new_level: u32,
    pub previous_level: u32,
}

#[derive(Message, Debug, Clone)]
pub struct PickupCreatedEvent {
    pub entity: Entity,
    pub kind: PickupKind,
    pub position: Vec2,
}

/// Fired when a pickup's effect has been applied
#[derive(Message, Debug, Clone)]
pub struct PickupCollectedEvent {
    pub kind: PickupKind,
    pub position: Vec2,
}

#[derive(Message, Debug, Clone)]
pub struct WaveStateChangedEvent {
    pub phase: WavePhase,
    pub display: WaveDisplay,
}

impl WaveStateChangedEvent {
    pub fn formatted_text(&self) -> String {
        self.display.formatted_text()
    }
}

#[derive(Message, Debug, Clone)]
pub struct ExplosionEvent {
    pub center: Vec2,
    pub radius: f32,
    pub enemies_hit: usize,
}

#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoostExpiredEvent {
    pub kind: BoostKind,
}

/// Upgrade picked on the level-up screen, as an index into the offered choices
#[derive(Message, Debug, Clone, Copy)]
pub struct UpgradeChosenEvent {
    pub index: usize,
}

#[derive(Message, Debug, Clone, Copy)]
pub struct WeaponFiredEvent {
    pub origin: Vec2,
    pub direction: Vec2,
}

/// Fired when the player dies, with the final stats of the run
#[derive(Message, Debug, Clone, Copy)]
pub struct PlayerDiedEvent {
    pub summary: RunSummary,
}

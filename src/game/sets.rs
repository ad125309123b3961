use bevy::prelude::*;

/// System sets for explicit ordering of one simulation tick.
/// The game plugin chains them in declaration order.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum GameSet {
    /// Commands queued by last tick's collision handling (pickup effects)
    Deferred,
    /// Input vector consumption
    Input,
    /// Player, enemy and projectile movement
    Movement,
    /// Collision detection, contact/projectile damage, health updates
    Combat,
    /// Death handling, experience, level-up and game-over decisions
    Resolve,
    /// Wave director and weapon fire
    Spawning,
    /// Timed effects: boosts, regeneration, immunity, stun, notifications
    Effects,
    /// Projectile expiry and other despawning
    Cleanup,
}

impl GameSet {
    pub const ORDER: [GameSet; 8] = [
        GameSet::Deferred,
        GameSet::Input,
        GameSet::Movement,
        GameSet::Combat,
        GameSet::Resolve,
        GameSet::Spawning,
        GameSet::Effects,
        GameSet::Cleanup,
    ];
}

use bevy::prelude::*;

/// Type of entity that died (for death handling)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityType {
    Player,
    Enemy,
}

/// Message fired when an entity should take damage
#[derive(Message, Debug, Clone)]
pub struct DamageEvent {
    /// The entity that takes damage
    pub target: Entity,
    /// Amount of damage dealt
    pub amount: f32,
    /// Source of the damage (if any)
    pub source: Option<Entity>,
}

impl DamageEvent {
    pub fn new(target: Entity, amount: f32) -> Self {
        Self {
            target,
            amount,
            source: None,
        }
    }

    pub fn with_source(target: Entity, amount: f32, source: Entity) -> Self {
        Self {
            target,
            amount,
            source: Some(source),
        }
    }
}

/// Message fired exactly once when an entity's health reaches zero
#[derive(Message, Debug, Clone)]
pub struct DeathEvent {
    pub entity: Entity,
    pub position: Vec2,
    pub entity_type: EntityType,
}

impl DeathEvent {
    pub fn new(entity: Entity, position: Vec2, entity_type: EntityType) -> Self {
        Self {
            entity,
            position,
            entity_type,
        }
    }
}

/// Which pair of collections an overlap belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollisionKind {
    /// `a` = player, `b` = enemy
    PlayerEnemy,
    /// `a` = player, `b` = pickup
    PlayerPickup,
    /// `a` = projectile, `b` = enemy
    ProjectileEnemy,
}

/// Overlap notification between two entity handles.
/// Written by the overlap detector (or by an external physics layer).
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub struct CollisionEvent {
    pub kind: CollisionKind,
    pub a: Entity,
    pub b: Entity,
}

impl CollisionEvent {
    pub fn new(kind: CollisionKind, a: Entity, b: Entity) -> Self {
        Self { kind, a, b }
    }
}

use bevy::prelude::*;
use std::collections::HashSet;

use super::components::{ContactImmunity, Health, Hitbox};
use super::events::{CollisionEvent, CollisionKind, DamageEvent, DeathEvent, EntityType};
use super::resources::PendingHealth;
use crate::bullets::components::Bullet;
use crate::enemies::components::Enemy;
use crate::game::events::{EnemyKilledEvent, ExperienceGainEvent, LootDropEvent};
use crate::game::resources::RunStats;
use crate::loot::components::Pickup;
use crate::player::components::Player;

/// Circle-overlap detector. Writes one CollisionEvent per overlapping pair.
/// Only living enemies take part.
pub fn detect_collisions_system(
    player_query: Query<(Entity, &Transform, &Hitbox), With<Player>>,
    enemy_query: Query<(Entity, &Transform, &Hitbox, &Health), With<Enemy>>,
    pickup_query: Query<(Entity, &Transform, &Hitbox), With<Pickup>>,
    bullet_query: Query<(Entity, &Transform, &Hitbox), With<Bullet>>,
    mut collisions: MessageWriter<CollisionEvent>,
) {
    let living_enemies: Vec<(Entity, Vec2, Hitbox)> = enemy_query
        .iter()
        .filter(|(_, _, _, health)| health.is_alive())
        .map(|(entity, transform, hitbox, _)| (entity, transform.translation.truncate(), *hitbox))
        .collect();

    for (player, player_transform, player_hitbox) in player_query.iter() {
        let player_pos = player_transform.translation.truncate();

        for (enemy, enemy_pos, enemy_hitbox) in living_enemies.iter() {
            if player_hitbox.overlaps(player_pos, enemy_hitbox, *enemy_pos) {
                collisions.write(CollisionEvent::new(CollisionKind::PlayerEnemy, player, *enemy));
            }
        }

        for (pickup, pickup_transform, pickup_hitbox) in pickup_query.iter() {
            if player_hitbox.overlaps(player_pos, pickup_hitbox, pickup_transform.translation.truncate()) {
                collisions.write(CollisionEvent::new(CollisionKind::PlayerPickup, player, pickup));
            }
        }
    }

    for (bullet, bullet_transform, bullet_hitbox) in bullet_query.iter() {
        let bullet_pos = bullet_transform.translation.truncate();
        for (enemy, enemy_pos, enemy_hitbox) in living_enemies.iter() {
            if bullet_hitbox.overlaps(bullet_pos, enemy_hitbox, *enemy_pos) {
                collisions.write(CollisionEvent::new(CollisionKind::ProjectileEnemy, bullet, *enemy));
            }
        }
    }
}

/// Player↔Enemy contact damage, gated by the player's per-enemy immunity window.
/// Enemies already killed by this tick's projectiles deal no contact damage.
pub fn player_enemy_contact_system(
    mut collisions: MessageReader<CollisionEvent>,
    mut player_query: Query<&mut ContactImmunity, With<Player>>,
    enemy_query: Query<(&Enemy, &Health)>,
    pending: Res<PendingHealth>,
    mut damage_events: MessageWriter<DamageEvent>,
) {
    for collision in collisions.read() {
        if collision.kind != CollisionKind::PlayerEnemy {
            continue;
        }
        let Ok((enemy, health)) = enemy_query.get(collision.b) else {
            continue;
        };
        if health.is_dead() || pending.is_doomed(collision.b, health.current) {
            continue;
        }
        let Ok(mut immunity) = player_query.get_mut(collision.a) else {
            continue;
        };
        if immunity.try_register_hit(collision.b) {
            damage_events.write(DamageEvent::with_source(
                collision.a,
                enemy.contact_damage,
                collision.b,
            ));
        }
    }
}

/// Projectile↔Enemy hits. First hit wins: the projectile is spent and despawned,
/// and any further overlap it reports this tick is ignored. A projectile whose
/// target was already finished off by an earlier hit this tick is not spent and
/// flies on.
pub fn projectile_hit_system(
    mut commands: Commands,
    mut collisions: MessageReader<CollisionEvent>,
    bullet_query: Query<&Bullet>,
    enemy_query: Query<&Health, With<Enemy>>,
    mut pending: ResMut<PendingHealth>,
    mut damage_events: MessageWriter<DamageEvent>,
) {
    pending.clear();
    let mut spent = HashSet::new();

    for collision in collisions.read() {
        if collision.kind != CollisionKind::ProjectileEnemy || spent.contains(&collision.a) {
            continue;
        }
        let Ok(bullet) = bullet_query.get(collision.a) else {
            continue;
        };
        let Ok(health) = enemy_query.get(collision.b) else {
            continue;
        };
        if health.is_dead() || pending.is_doomed(collision.b, health.current) {
            continue;
        }

        pending.queue_hit(collision.b, health.current, bullet.damage);
        spent.insert(collision.a);
        damage_events.write(DamageEvent::with_source(collision.b, bullet.damage, collision.a));
        commands.entity(collision.a).try_despawn();
    }
}

/// Apply DamageEvents to Health and report each alive→dead transition once
pub fn apply_damage_system(
    mut messages: MessageReader<DamageEvent>,
    mut query: Query<(&mut Health, &Transform, Has<Player>)>,
    mut deaths: MessageWriter<DeathEvent>,
) {
    for event in messages.read() {
        let Ok((mut health, transform, is_player)) = query.get_mut(event.target) else {
            continue;
        };
        if health.take_damage(event.amount) {
            let entity_type = if is_player {
                EntityType::Player
            } else {
                EntityType::Enemy
            };
            deaths.write(DeathEvent::new(
                event.target,
                transform.translation.truncate(),
                entity_type,
            ));
        }
    }
}

/// Enemy death: kill counter, XP grant, drop roll request and removal
pub fn handle_enemy_death_system(
    mut commands: Commands,
    mut deaths: MessageReader<DeathEvent>,
    enemy_query: Query<&Enemy>,
    mut stats: ResMut<RunStats>,
    mut killed_events: MessageWriter<EnemyKilledEvent>,
    mut xp_events: MessageWriter<ExperienceGainEvent>,
    mut loot_events: MessageWriter<LootDropEvent>,
) {
    for event in deaths.read() {
        if event.entity_type != EntityType::Enemy {
            continue;
        }
        let Ok(enemy) = enemy_query.get(event.entity) else {
            continue;
        };

        stats.enemies_killed += 1;
        xp_events.write(ExperienceGainEvent {
            amount: enemy.xp_reward,
        });
        killed_events.write(EnemyKilledEvent {
            enemy: event.entity,
            kind: enemy.kind,
            xp_value: enemy.xp_reward,
            position: event.position,
        });
        loot_events.write(LootDropEvent {
            position: event.position,
        });

        commands.entity(event.entity).try_despawn();
    }
}

/// Forget expired per-enemy immunity windows
pub fn tick_contact_immunity_system(time: Res<Time>, mut query: Query<&mut ContactImmunity>) {
    for mut immunity in query.iter_mut() {
        immunity.tick(time.delta());
    }
}

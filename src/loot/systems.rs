use bevy::prelude::*;
use rand::Rng;

use super::components::{pickup_bundle, Pickup, PickupKind};
use super::explosion::resolve_explosion;
use super::resources::{CollectedPickups, PendingPickupEffects, PickupCommand};
use crate::combat::components::Health;
use crate::combat::events::{CollisionEvent, CollisionKind, DamageEvent};
use crate::config::GameConfig;
use crate::enemies::components::Enemy;
use crate::game::events::{
    ExperienceGainEvent, ExplosionEvent, LootDropEvent, PickupCollectedEvent, PickupCreatedEvent,
};
use crate::movement::components::Knockback;
use crate::player::components::Player;
use crate::powerup::components::ActiveBoosts;
use crate::powerup::systems::{activate_damage_boost, activate_speed_boost};
use crate::weapon::components::Weapon;

/// Roll the drop chance, then pick a kind uniformly
pub fn roll_drop(rng: &mut impl Rng, drop_chance: f32) -> Option<PickupKind> {
    if rng.gen::<f32>() >= drop_chance {
        return None;
    }
    let index = rng.gen_range(0..PickupKind::ALL.len());
    Some(PickupKind::ALL[index])
}

/// Spawn a pickup where a dead enemy fell, if the roll succeeds
pub fn loot_drop_system(
    mut commands: Commands,
    mut drops: MessageReader<LootDropEvent>,
    config: Res<GameConfig>,
    mut created_events: MessageWriter<PickupCreatedEvent>,
) {
    let mut rng = rand::thread_rng();

    for drop in drops.read() {
        let Some(kind) = roll_drop(&mut rng, config.enemies.drop_chance) else {
            continue;
        };
        let pickup = Pickup {
            kind,
            value: config.pickup_value(kind),
        };
        let entity = commands
            .spawn(pickup_bundle(pickup, config.pickups.radius, drop.position))
            .id();
        debug!("Dropped {} pickup at {:?}", kind.name(), drop.position);
        created_events.write(PickupCreatedEvent {
            entity,
            kind,
            position: drop.position,
        });
    }
}

/// Player↔Pickup overlaps. The first overlap claims the pickup and queues its
/// effect for the next tick; later overlaps of a claimed pickup are ignored.
pub fn collect_pickup_system(
    mut collisions: MessageReader<CollisionEvent>,
    pickup_query: Query<(&Pickup, &Transform)>,
    mut collected: ResMut<CollectedPickups>,
    mut pending: ResMut<PendingPickupEffects>,
) {
    for collision in collisions.read() {
        if collision.kind != CollisionKind::PlayerPickup {
            continue;
        }
        let Ok((pickup, transform)) = pickup_query.get(collision.b) else {
            continue;
        };
        if !collected.0.insert(collision.b) {
            continue;
        }
        pending.push(PickupCommand {
            pickup: collision.b,
            kind: pickup.kind,
            value: pickup.value,
            position: transform.translation.truncate(),
        });
    }
}

/// Apply queued pickup effects, then remove the pickups
#[allow(clippy::too_many_arguments)]
pub fn apply_pickup_effects_system(
    mut commands: Commands,
    mut pending: ResMut<PendingPickupEffects>,
    mut collected: ResMut<CollectedPickups>,
    mut boosts: ResMut<ActiveBoosts>,
    config: Res<GameConfig>,
    mut player_query: Query<(Entity, &mut Player, &mut Health)>,
    mut weapon_query: Query<(Entity, &mut Weapon)>,
    enemy_query: Query<(Entity, &Transform, &Health), (With<Enemy>, Without<Player>)>,
    mut xp_events: MessageWriter<ExperienceGainEvent>,
    mut damage_events: MessageWriter<DamageEvent>,
    mut explosion_events: MessageWriter<ExplosionEvent>,
    mut collected_events: MessageWriter<PickupCollectedEvent>,
) {
    if pending.is_empty() {
        return;
    }
    let duration = config.pickups.boost_duration_secs;

    for command in pending.0.drain(..) {
        match command.kind {
            PickupKind::Health => {
                if let Ok((_, _, mut health)) = player_query.single_mut() {
                    health.heal(command.value);
                }
            }
            PickupKind::Speed => {
                if let Ok((entity, mut player, _)) = player_query.single_mut() {
                    activate_speed_boost(&mut boosts, entity, &mut player, command.value, duration);
                }
            }
            PickupKind::Damage => {
                activate_damage_boost(&mut boosts, &mut weapon_query, command.value, duration);
            }
            PickupKind::Experience => {
                xp_events.write(ExperienceGainEvent {
                    amount: command.value.max(0.0) as u32,
                });
            }
            PickupKind::Bomb => {
                let base_damage = weapon_query
                    .iter()
                    .map(|(_, weapon)| weapon.damage)
                    .next()
                    .unwrap_or(config.weapon.damage);
                let living = enemy_query
                    .iter()
                    .filter(|(_, _, health)| health.is_alive())
                    .map(|(entity, transform, _)| (entity, transform.translation.truncate()));
                let hits = resolve_explosion(
                    command.position,
                    &config.explosion,
                    base_damage,
                    command.value,
                    living,
                );

                for hit in hits.iter() {
                    if let Some(amount) = hit.damage {
                        damage_events.write(DamageEvent::new(hit.entity, amount));
                    }
                    commands
                        .entity(hit.entity)
                        .try_insert(Knockback::new(hit.impulse, config.explosion.stun_secs));
                }
                info!(
                    "Bomb exploded at {:?}, {} enemies caught in the blast",
                    command.position,
                    hits.len()
                );
                explosion_events.write(ExplosionEvent {
                    center: command.position,
                    radius: config.explosion.radius,
                    enemies_hit: hits.len(),
                });
            }
        }

        commands.entity(command.pickup).try_despawn();
        collected.0.remove(&command.pickup);
        collected_events.write(PickupCollectedEvent {
            kind: command.kind,
            position: command.position,
        });
    }
}

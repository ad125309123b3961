use bevy::prelude::*;

use crate::game::events::BoostExpiredEvent;
use crate::player::components::Player;
use crate::powerup::components::{ActiveBoosts, BoostKind};
use crate::weapon::components::Weapon;

/// Start or refresh a speed boost on the player
pub fn activate_speed_boost(
    boosts: &mut ActiveBoosts,
    player_entity: Entity,
    player: &mut Player,
    multiplier: f32,
    duration: f32,
) {
    let boosted = boosts.activate(
        BoostKind::Speed,
        multiplier,
        duration,
        [(player_entity, player.movement_speed)],
    );
    for (_, speed) in boosted {
        player.movement_speed = speed;
    }
}

/// Start or refresh a damage boost on every weapon
pub fn activate_damage_boost(
    boosts: &mut ActiveBoosts,
    weapons: &mut Query<(Entity, &mut Weapon)>,
    multiplier: f32,
    duration: f32,
) {
    let current: Vec<(Entity, f32)> = weapons
        .iter()
        .map(|(entity, weapon)| (entity, weapon.damage))
        .collect();
    for (entity, damage) in boosts.activate(BoostKind::Damage, multiplier, duration, current) {
        if let Ok((_, mut weapon)) = weapons.get_mut(entity) {
            weapon.damage = damage;
        }
    }
}

/// Count down active boosts and restore the captured baselines of expired ones
pub fn update_boost_timers(
    time: Res<Time>,
    mut boosts: ResMut<ActiveBoosts>,
    mut player_query: Query<&mut Player>,
    mut weapon_query: Query<&mut Weapon>,
    mut expired_events: MessageWriter<BoostExpiredEvent>,
) {
    for expired in boosts.update_timers(time.delta_secs()) {
        for (entity, baseline) in expired.restore {
            match expired.kind {
                BoostKind::Speed => {
                    if let Ok(mut player) = player_query.get_mut(entity) {
                        player.movement_speed = baseline;
                    }
                }
                BoostKind::Damage => {
                    if let Ok(mut weapon) = weapon_query.get_mut(entity) {
                        weapon.damage = baseline;
                    }
                }
            }
        }
        debug!("{} expired", expired.kind.display_name());
        expired_events.write(BoostExpiredEvent { kind: expired.kind });
    }
}

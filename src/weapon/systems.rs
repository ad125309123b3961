use bevy::prelude::*;

use crate::bullets::components::{bullet_bundle, Bullet};
use crate::combat::components::Health;
use crate::config::GameConfig;
use crate::enemies::components::Enemy;
use crate::game::events::WeaponFiredEvent;
use crate::player::components::Player;
use crate::weapon::components::Weapon;

/// Fraction of the way toward the target where a projectile appears
const MUZZLE_OFFSET: f32 = 0.1;

/// Euclidean-nearest point to `origin`
pub fn nearest_target(origin: Vec2, candidates: impl IntoIterator<Item = Vec2>) -> Option<Vec2> {
    candidates.into_iter().min_by(|a, b| {
        origin
            .distance_squared(*a)
            .total_cmp(&origin.distance_squared(*b))
    })
}

/// Advance every weapon's cooldown and fire at the nearest living enemy.
/// With no living enemy a ready weapon stays ready and its timer keeps running.
pub fn weapon_firing_system(
    mut commands: Commands,
    time: Res<Time>,
    config: Res<GameConfig>,
    player_query: Query<&Transform, With<Player>>,
    enemy_query: Query<(&Transform, &Health), With<Enemy>>,
    mut weapon_query: Query<&mut Weapon>,
    mut fired_events: MessageWriter<WeaponFiredEvent>,
) {
    let Ok(player_transform) = player_query.single() else {
        return;
    };
    let player_pos = player_transform.translation.truncate();

    let target = nearest_target(
        player_pos,
        enemy_query
            .iter()
            .filter(|(_, health)| health.is_alive())
            .map(|(transform, _)| transform.translation.truncate()),
    );

    for mut weapon in weapon_query.iter_mut() {
        weapon.since_last_fire += time.delta_secs();

        let Some(target) = target else {
            continue;
        };
        if !weapon.is_ready() {
            continue;
        }

        let direction = (target - player_pos).normalize_or_zero();
        let origin = player_pos.lerp(target, MUZZLE_OFFSET);
        commands.spawn(bullet_bundle(
            Bullet::new(weapon.damage, config.weapon.projectile_ttl_secs),
            direction * weapon.projectile_speed,
            config.weapon.projectile_radius,
            origin,
        ));
        weapon.mark_fired();
        fired_events.write(WeaponFiredEvent { origin, direction });
    }
}

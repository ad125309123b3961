use bevy::prelude::*;

use super::components::ExplosionConfig;

/// How a single enemy is affected by a bomb blast
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlastHit {
    pub entity: Entity,
    pub distance: f32,
    /// Present only inside the damage radius
    pub damage: Option<f32>,
    pub impulse: Vec2,
}

/// Resolve a blast at `center` against enemy positions.
///
/// Enemies within `config.radius` take `base_damage * multiplier`.
/// Everything within the knockback radius is pushed away with a force that
/// falls off linearly to zero at the edge. Enemies beyond it are untouched.
pub fn resolve_explosion(
    center: Vec2,
    config: &ExplosionConfig,
    base_damage: f32,
    multiplier: f32,
    enemies: impl IntoIterator<Item = (Entity, Vec2)>,
) -> Vec<BlastHit> {
    let knockback_radius = config.knockback_radius();
    let damage = base_damage * multiplier;

    enemies
        .into_iter()
        .filter_map(|(entity, position)| {
            let offset = position - center;
            let distance = offset.length();
            if distance > knockback_radius {
                return None;
            }
            let falloff = if knockback_radius > 0.0 {
                1.0 - distance / knockback_radius
            } else {
                0.0
            };
            Some(BlastHit {
                entity,
                distance,
                damage: (distance <= config.radius).then_some(damage),
                impulse: offset.normalize_or_zero() * config.knockback_force * falloff,
            })
        })
        .collect()
}

use bevy::prelude::*;

use crate::config::GameConfig;
use crate::enemies::components::Enemy;
use crate::game::resources::{MoveInput, PlayerPosition, ViewBounds};
use crate::movement::components::{Knockback, Velocity};
use crate::player::components::Player;

/// Turn the coarse input vector into player velocity
pub fn player_movement(input: Res<MoveInput>, mut player_query: Query<(&Player, &mut Velocity)>) {
    let direction = input.0.normalize_or_zero();
    for (player, mut velocity) in player_query.iter_mut() {
        velocity.0 = direction * player.movement_speed;
    }
}

/// Steer enemies straight at the player. Knocked-back enemies are stunned and
/// do not steer.
pub fn enemy_movement_system(
    player_position: Res<PlayerPosition>,
    mut enemy_query: Query<(&Transform, &Enemy, &mut Velocity, Has<Knockback>)>,
) {
    for (transform, enemy, mut velocity, stunned) in enemy_query.iter_mut() {
        if stunned {
            velocity.0 = Vec2::ZERO;
            continue;
        }
        let direction = player_position.0 - transform.translation.truncate();
        *velocity = Velocity::from_direction_and_speed(direction, enemy.speed);
    }
}

/// Move every entity by its velocity
pub fn apply_velocity(mut query: Query<(&mut Transform, &Velocity)>, time: Res<Time>) {
    for (mut transform, velocity) in query.iter_mut() {
        let movement = velocity.value() * time.delta_secs();
        transform.translation += movement.extend(0.0);
    }
}

/// Slide knocked-back entities along their impulse and clear the stun when it ends
pub fn apply_knockback(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut Transform, &mut Knockback)>,
) {
    for (entity, mut transform, mut knockback) in query.iter_mut() {
        let movement = knockback.velocity() * time.delta_secs();
        transform.translation += movement.extend(0.0);

        knockback.tick(time.delta());
        if knockback.is_finished() {
            commands.entity(entity).try_remove::<Knockback>();
        }
    }
}

/// Keep the player inside the world rectangle
pub fn confine_player_to_world(
    config: Res<GameConfig>,
    mut player_query: Query<&mut Transform, With<Player>>,
) {
    let bounds = config.world.bounds();
    for mut transform in player_query.iter_mut() {
        let clamped = transform.translation.truncate().clamp(bounds.min, bounds.max);
        transform.translation.x = clamped.x;
        transform.translation.y = clamped.y;
    }
}

/// Mirror the player position and re-centre the view rectangle on it
pub fn update_player_position(
    config: Res<GameConfig>,
    player_query: Query<&Transform, With<Player>>,
    mut player_position: ResMut<PlayerPosition>,
    mut view: ResMut<ViewBounds>,
) {
    let Ok(transform) = player_query.single() else {
        return;
    };
    player_position.0 = transform.translation.truncate();
    *view = ViewBounds::centered_on(
        player_position.0,
        config.world.view_size(),
        config.world.bounds(),
    );
}

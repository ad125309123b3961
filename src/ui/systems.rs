use bevy::prelude::*;

use crate::bullets::components::Bullet;
use crate::combat::components::Hitbox;
use crate::enemies::components::{Enemy, EnemyKind};
use crate::game::components::RunEntity;
use crate::game::events::ExplosionEvent;
use crate::game::resources::MoveInput;
use crate::loot::components::Pickup;
use crate::player::components::Player;
use crate::states::GameState;
use crate::ui::components::ExplosionFlash;

/// WASD / arrow keys as a normalized direction, y up
pub fn direction_from_keys(keys: &ButtonInput<KeyCode>) -> Vec2 {
    let mut direction = Vec2::ZERO;
    if keys.any_pressed([KeyCode::KeyW, KeyCode::ArrowUp]) {
        direction.y += 1.0;
    }
    if keys.any_pressed([KeyCode::KeyS, KeyCode::ArrowDown]) {
        direction.y -= 1.0;
    }
    if keys.any_pressed([KeyCode::KeyA, KeyCode::ArrowLeft]) {
        direction.x -= 1.0;
    }
    if keys.any_pressed([KeyCode::KeyD, KeyCode::ArrowRight]) {
        direction.x += 1.0;
    }
    direction.normalize_or_zero()
}

pub fn keyboard_move_input(keys: Res<ButtonInput<KeyCode>>, mut input: ResMut<MoveInput>) {
    input.0 = direction_from_keys(&keys);
}

pub fn toggle_pause(
    keys: Res<ButtonInput<KeyCode>>,
    state: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if !keys.any_just_pressed([KeyCode::Escape, KeyCode::KeyP]) {
        return;
    }
    match state.get() {
        GameState::InGame => next_state.set(GameState::Paused),
        GameState::Paused => next_state.set(GameState::InGame),
        _ => {}
    }
}

pub fn enemy_color(kind: EnemyKind) -> Color {
    match kind {
        EnemyKind::Basic => Color::srgb(0.8, 0.2, 0.2),
        EnemyKind::Fast => Color::srgb(0.9, 0.6, 0.1),
        EnemyKind::Tank => Color::srgb(0.5, 0.1, 0.6),
    }
}

fn square(color: Color, hitbox: &Hitbox) -> Sprite {
    Sprite::from_color(color, Vec2::splat(hitbox.radius() * 2.0))
}

/// Give newly spawned simulation entities something to look at
#[allow(clippy::type_complexity)]
pub fn attach_sprites(
    mut commands: Commands,
    players: Query<(Entity, &Hitbox), Added<Player>>,
    enemies: Query<(Entity, &Enemy, &Hitbox), Added<Enemy>>,
    pickups: Query<(Entity, &Pickup, &Hitbox), Added<Pickup>>,
    bullets: Query<(Entity, &Hitbox), Added<Bullet>>,
) {
    for (entity, hitbox) in players.iter() {
        commands
            .entity(entity)
            .try_insert(square(Color::srgb(0.0, 1.0, 0.0), hitbox));
    }
    for (entity, enemy, hitbox) in enemies.iter() {
        commands
            .entity(entity)
            .try_insert(square(enemy_color(enemy.kind), hitbox));
    }
    for (entity, pickup, hitbox) in pickups.iter() {
        commands
            .entity(entity)
            .try_insert(square(pickup.kind.color(), hitbox));
    }
    for (entity, hitbox) in bullets.iter() {
        commands
            .entity(entity)
            .try_insert(square(Color::srgb(1.0, 1.0, 0.6), hitbox));
    }
}

/// Red circle at each bomb blast. Skipped when no mesh assets are available.
pub fn spawn_explosion_flash(
    mut commands: Commands,
    mut explosions: MessageReader<ExplosionEvent>,
    meshes: Option<ResMut<Assets<Mesh>>>,
    materials: Option<ResMut<Assets<ColorMaterial>>>,
) {
    let (Some(mut meshes), Some(mut materials)) = (meshes, materials) else {
        explosions.clear();
        return;
    };
    for explosion in explosions.read() {
        commands.spawn((
            Mesh2d(meshes.add(Circle::new(explosion.radius))),
            MeshMaterial2d(materials.add(Color::srgba(1.0, 0.0, 0.0, 0.7))),
            Transform::from_translation(explosion.center.extend(0.2)),
            ExplosionFlash::new(explosion.radius),
            RunEntity,
        ));
    }
}

pub fn animate_explosion_flash(
    mut commands: Commands,
    time: Res<Time>,
    mut flashes: Query<(
        Entity,
        &mut ExplosionFlash,
        &mut Transform,
        &MeshMaterial2d<ColorMaterial>,
    )>,
    mut materials: Option<ResMut<Assets<ColorMaterial>>>,
) {
    for (entity, mut flash, mut transform, material) in flashes.iter_mut() {
        flash.timer.tick(time.delta());
        if flash.timer.is_finished() {
            commands.entity(entity).try_despawn();
            continue;
        }
        let (scale, alpha) = flash.scale_and_alpha();
        transform.scale = Vec3::splat(scale);
        if let Some(material) = materials
            .as_mut()
            .and_then(|materials| materials.get_mut(&material.0))
        {
            material.color.set_alpha(alpha);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enemies::components::{enemy_bundle, EnemyConfig};

    #[test]
    fn test_diagonal_input_is_normalized() {
        let mut keys = ButtonInput::<KeyCode>::default();
        keys.press(KeyCode::KeyW);
        keys.press(KeyCode::KeyD);
        let direction = direction_from_keys(&keys);
        assert!((direction.length() - 1.0).abs() < 1e-5);
        assert!(direction.x > 0.0 && direction.y > 0.0);
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let mut keys = ButtonInput::<KeyCode>::default();
        keys.press(KeyCode::ArrowLeft);
        keys.press(KeyCode::ArrowRight);
        assert_eq!(direction_from_keys(&keys), Vec2::ZERO);
    }

    #[test]
    fn test_new_enemies_get_a_sprite_once() {
        let mut app = App::new();
        app.add_systems(Update, attach_sprites);
        let enemy = app
            .world_mut()
            .spawn(enemy_bundle(EnemyKind::Tank, &EnemyConfig::default(), Vec2::ZERO))
            .id();

        app.update();

        let sprite = app.world().get::<Sprite>(enemy).unwrap();
        assert_eq!(sprite.color, enemy_color(EnemyKind::Tank));
        assert_eq!(sprite.custom_size, Some(Vec2::splat(32.0)));
    }

    #[test]
    fn test_escape_toggles_pause() {
        let mut app = App::new();
        app.add_plugins(bevy::state::app::StatesPlugin);
        app.insert_state(GameState::InGame);
        app.init_resource::<ButtonInput<KeyCode>>();
        app.add_systems(Update, toggle_pause);

        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::Escape);
        app.update();
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .clear();
        app.update();

        assert_eq!(
            *app.world().resource::<State<GameState>>().get(),
            GameState::Paused
        );
    }
}

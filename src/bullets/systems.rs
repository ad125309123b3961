use bevy::prelude::*;

use crate::bullets::components::Bullet;

/// Despawn projectiles whose lifetime ran out without a hit
pub fn bullet_lifetime_system(
    mut commands: Commands,
    time: Res<Time>,
    mut bullet_query: Query<(Entity, &mut Bullet)>,
) {
    for (entity, mut bullet) in bullet_query.iter_mut() {
        bullet.lifetime.tick(time.delta());
        if bullet.lifetime.is_finished() {
            commands.entity(entity).try_despawn();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_bullet_despawns_after_lifetime() {
        let mut app = App::new();
        app.init_resource::<Time>();
        app.add_systems(Update, bullet_lifetime_system);
        let bullet = app.world_mut().spawn(Bullet::new(10.0, 4.0)).id();

        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_secs(3));
        app.update();
        assert!(app.world().get_entity(bullet).is_ok());

        app.update();
        assert!(app.world().get_entity(bullet).is_err());
    }
}

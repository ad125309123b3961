#[cfg(test)]
mod tests {
    use bevy::ecs::system::RunSystemOnce;
    use bevy::prelude::*;
    use std::time::Duration;

    use crate::game::events::BoostExpiredEvent;
    use crate::loot::components::PickupKind;
    use crate::player::components::Player;
    use crate::powerup::components::*;
    use crate::powerup::systems::*;
    use crate::weapon::components::{Weapon, WeaponConfig};

    fn entity() -> Entity {
        World::new().spawn_empty().id()
    }

    #[test]
    fn test_boost_kind_from_pickup() {
        assert_eq!(BoostKind::from_pickup(PickupKind::Speed), Some(BoostKind::Speed));
        assert_eq!(BoostKind::from_pickup(PickupKind::Damage), Some(BoostKind::Damage));
        assert_eq!(BoostKind::from_pickup(PickupKind::Health), None);
        assert_eq!(BoostKind::from_pickup(PickupKind::Bomb), None);
    }

    #[test]
    fn test_active_boosts_resource() {
        let mut boosts = ActiveBoosts::default();
        let player = entity();

        assert!(!boosts.is_active(BoostKind::Speed));
        let boosted = boosts.activate(BoostKind::Speed, 1.5, 5.0, [(player, 200.0)]);
        assert_eq!(boosted, vec![(player, 300.0)]);
        assert!(boosts.is_active(BoostKind::Speed));
        assert_eq!(boosts.remaining(BoostKind::Speed), Some(5.0));
        assert_eq!(boosts.baseline(BoostKind::Speed, player), Some(200.0));

        assert!(boosts.update_timers(2.0).is_empty());
        assert_eq!(boosts.remaining(BoostKind::Speed), Some(3.0));

        let expired = boosts.update_timers(3.5);
        assert_eq!(
            expired,
            vec![ExpiredBoost {
                kind: BoostKind::Speed,
                restore: vec![(player, 200.0)],
            }]
        );
        assert!(!boosts.is_active(BoostKind::Speed));
    }

    #[test]
    fn test_refresh_multiplies_original_not_boosted_value() {
        let mut boosts = ActiveBoosts::default();
        let player = entity();

        let first = boosts.activate(BoostKind::Speed, 1.5, 5.0, [(player, 200.0)]);
        // Second pickup sees the boosted 300 as the current value
        let second = boosts.activate(BoostKind::Speed, 2.0, 5.0, [(player, first[0].1)]);

        assert_eq!(second, vec![(player, 400.0)]);
        assert_eq!(boosts.multiplier(BoostKind::Speed), Some(2.0));
    }

    #[test]
    fn test_kinds_run_independently() {
        let mut boosts = ActiveBoosts::default();
        let player = entity();
        let weapon = entity();

        boosts.activate(BoostKind::Speed, 1.5, 5.0, [(player, 200.0)]);
        boosts.activate(BoostKind::Damage, 1.3, 2.0, [(weapon, 10.0)]);

        let expired = boosts.update_timers(2.5);
        assert_eq!(expired.len(), 1);
        assert_eq!(expired[0].kind, BoostKind::Damage);
        assert!(boosts.is_active(BoostKind::Speed));
    }

    #[test]
    fn test_clear_drops_everything() {
        let mut boosts = ActiveBoosts::default();
        boosts.activate(BoostKind::Damage, 1.3, 5.0, [(entity(), 10.0)]);
        boosts.clear();
        assert!(!boosts.is_active(BoostKind::Damage));
        assert!(boosts.update_timers(10.0).is_empty());
    }

    mod system_tests {
        use super::*;
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::Arc;

        #[derive(Resource, Clone, Default)]
        struct ExpiredCounter(Arc<AtomicUsize>);

        fn count_expired(mut events: MessageReader<BoostExpiredEvent>, counter: Res<ExpiredCounter>) {
            for _ in events.read() {
                counter.0.fetch_add(1, Ordering::SeqCst);
            }
        }

        fn boost_app() -> (App, ExpiredCounter) {
            let mut app = App::new();
            let counter = ExpiredCounter::default();
            app.init_resource::<Time>();
            app.init_resource::<ActiveBoosts>();
            app.insert_resource(counter.clone());
            app.add_message::<BoostExpiredEvent>();
            app.add_systems(Update, (update_boost_timers, count_expired).chain());
            (app, counter)
        }

        fn advance(app: &mut App, secs: f32) {
            app.world_mut()
                .resource_mut::<Time>()
                .advance_by(Duration::from_secs_f32(secs));
        }

        fn collect_speed_pickup(app: &mut App, player: Entity, multiplier: f32) {
            app.world_mut()
                .resource_scope(|world, mut boosts: Mut<ActiveBoosts>| {
                    let mut player_ref = world.get_mut::<Player>(player).unwrap();
                    activate_speed_boost(&mut boosts, player, &mut player_ref, multiplier, 5.0);
                });
        }

        fn speed(app: &App, player: Entity) -> f32 {
            app.world().get::<Player>(player).unwrap().movement_speed
        }

        #[test]
        fn test_overlapping_speed_pickups_revert_once_to_baseline() {
            let (mut app, counter) = boost_app();
            let player = app.world_mut().spawn(Player::new(200.0)).id();

            collect_speed_pickup(&mut app, player, 1.5);
            assert_eq!(speed(&app, player), 300.0);

            advance(&mut app, 3.0);
            app.update();
            collect_speed_pickup(&mut app, player, 2.0);
            assert_eq!(speed(&app, player), 400.0);

            // The first pickup's expiry time passes: the refreshed boost holds
            advance(&mut app, 2.5);
            app.update();
            assert_eq!(speed(&app, player), 400.0);
            assert_eq!(counter.0.load(Ordering::SeqCst), 0);

            // The refreshed timer runs out: exactly one revert, to the original baseline
            app.update();
            assert_eq!(speed(&app, player), 200.0);
            assert_eq!(counter.0.load(Ordering::SeqCst), 1);

            advance(&mut app, 10.0);
            app.update();
            assert_eq!(speed(&app, player), 200.0);
            assert_eq!(counter.0.load(Ordering::SeqCst), 1);
        }

        #[test]
        fn test_damage_boost_applies_to_every_weapon_and_reverts() {
            let (mut app, _) = boost_app();
            let config = WeaponConfig::default();
            let first = app.world_mut().spawn(Weapon::from_config(&config)).id();
            let second = app
                .world_mut()
                .spawn(Weapon {
                    damage: 20.0,
                    ..Weapon::from_config(&config)
                })
                .id();

            let _ = app.world_mut().run_system_once(
                |mut boosts: ResMut<ActiveBoosts>, mut weapons: Query<(Entity, &mut Weapon)>| {
                    activate_damage_boost(&mut boosts, &mut weapons, 1.5, 5.0);
                },
            );
            assert_eq!(app.world().get::<Weapon>(first).unwrap().damage, 15.0);
            assert_eq!(app.world().get::<Weapon>(second).unwrap().damage, 30.0);

            advance(&mut app, 5.0);
            app.update();
            assert_eq!(app.world().get::<Weapon>(first).unwrap().damage, 10.0);
            assert_eq!(app.world().get::<Weapon>(second).unwrap().damage, 20.0);
        }

        #[test]
        fn test_permanent_upgrade_survives_boost_revert() {
            let (mut app, _) = boost_app();
            let player = app.world_mut().spawn(Player::new(200.0)).id();

            collect_speed_pickup(&mut app, player, 1.5);
            {
                let mut boosts = app.world_mut().resource_mut::<ActiveBoosts>();
                boosts.rebase(BoostKind::Speed, player, 1.15);
            }
            app.world_mut()
                .get_mut::<Player>(player)
                .unwrap()
                .movement_speed *= 1.15;

            advance(&mut app, 5.0);
            app.update();
            assert!((speed(&app, player) - 230.0).abs() < 1e-3);
        }
    }
}

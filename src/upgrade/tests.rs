use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

use super::components::{UpgradeDefinition, UpgradeEffect};
use super::resources::{PendingLevelUps, UpgradeCatalog};
use super::systems::*;
use crate::combat::components::Health;
use crate::config::GameConfig;
use crate::game::events::UpgradeChosenEvent;
use crate::player::components::Player;
use crate::powerup::components::{ActiveBoosts, BoostKind};
use crate::states::GameState;
use crate::weapon::components::{Weapon, WeaponConfig};

fn single_upgrade_catalog(effect: UpgradeEffect) -> UpgradeCatalog {
    UpgradeCatalog::new(vec![UpgradeDefinition::new("only", "Only", "The only one", effect)])
}

mod loadout_tests {
    use super::*;

    fn with_loadout(
        player: &mut Player,
        health: &mut Health,
        weapon: &mut Weapon,
        boosts: &mut ActiveBoosts,
        effect: UpgradeEffect,
    ) {
        let mut world = World::new();
        let player_entity = world.spawn_empty().id();
        let weapon_entity = world.spawn_empty().id();
        let mut loadout = PlayerLoadout {
            entity: player_entity,
            player,
            health,
            weapons: vec![(weapon_entity, weapon)],
            boosts,
        };
        effect.apply(&mut loadout);
    }

    #[test]
    fn test_max_health_upgrade_heals_the_gain() {
        let mut player = Player::new(200.0);
        let mut health = Health::new(100.0);
        health.take_damage(30.0);
        let mut weapon = Weapon::from_config(&WeaponConfig::default());
        let mut boosts = ActiveBoosts::default();

        with_loadout(
            &mut player,
            &mut health,
            &mut weapon,
            &mut boosts,
            UpgradeEffect::MaxHealth { multiplier: 1.2 },
        );

        assert!((health.max - 120.0).abs() < 1e-4);
        assert!((health.current - 90.0).abs() < 1e-4);
    }

    #[test]
    fn test_weapon_upgrades_compound() {
        let mut player = Player::new(200.0);
        let mut health = Health::new(100.0);
        let mut weapon = Weapon::from_config(&WeaponConfig::default());
        let mut boosts = ActiveBoosts::default();

        for _ in 0..2 {
            with_loadout(
                &mut player,
                &mut health,
                &mut weapon,
                &mut boosts,
                UpgradeEffect::WeaponDamage { multiplier: 1.25 },
            );
        }
        with_loadout(
            &mut player,
            &mut health,
            &mut weapon,
            &mut boosts,
            UpgradeEffect::AttackSpeed { multiplier: 1.2 },
        );

        assert!((weapon.damage - 15.625).abs() < 1e-4);
        assert!((weapon.attack_speed - 3.6).abs() < 1e-4);
    }

    #[test]
    fn test_regeneration_upgrade_enables_regen() {
        let mut player = Player::new(200.0);
        let mut health = Health::new(100.0);
        let mut weapon = Weapon::from_config(&WeaponConfig::default());
        let mut boosts = ActiveBoosts::default();

        with_loadout(
            &mut player,
            &mut health,
            &mut weapon,
            &mut boosts,
            UpgradeEffect::Regeneration {
                fraction: 0.01,
                interval_secs: 5.0,
            },
        );

        assert!(player.regeneration.is_some());
    }
}

mod selection_tests {
    use super::*;

    fn selection_app(levels: u32) -> (App, Entity) {
        let mut app = App::new();
        app.add_plugins(StatesPlugin);
        app.insert_state(GameState::InGame);
        app.init_resource::<GameConfig>();
        app.insert_resource(UpgradeCatalog::new(GameConfig::default().upgrades.catalog));
        app.insert_resource(PendingLevelUps {
            levels,
            choices: Vec::new(),
        });
        app.add_systems(
            Update,
            begin_upgrade_selection_system.run_if(in_state(GameState::InGame)),
        );
        let player = app
            .world_mut()
            .spawn((Player::new(200.0), Health::new(100.0)))
            .id();
        (app, player)
    }

    #[test]
    fn test_pending_level_halts_run_with_distinct_choices() {
        let (mut app, _) = selection_app(1);

        app.update();
        app.update();

        assert_eq!(
            *app.world().resource::<State<GameState>>().get(),
            GameState::LevelUp
        );
        let pending = app.world().resource::<PendingLevelUps>();
        assert_eq!(pending.choices.len(), 3);
        for (i, a) in pending.choices.iter().enumerate() {
            for b in pending.choices.iter().skip(i + 1) {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_no_pending_levels_keeps_running() {
        let (mut app, _) = selection_app(0);

        app.update();
        app.update();

        assert_eq!(
            *app.world().resource::<State<GameState>>().get(),
            GameState::InGame
        );
        assert!(!app.world().resource::<PendingLevelUps>().is_choosing());
    }

    #[test]
    fn test_dead_player_is_not_offered_upgrades() {
        let (mut app, player) = selection_app(2);
        app.world_mut()
            .get_mut::<Health>(player)
            .unwrap()
            .take_damage(500.0);

        app.update();
        app.update();

        assert_eq!(
            *app.world().resource::<State<GameState>>().get(),
            GameState::InGame
        );
        assert!(app.world().resource::<PendingLevelUps>().choices.is_empty());
    }
}

mod choice_tests {
    use super::*;

    fn choice_app(levels: u32, effect: UpgradeEffect) -> (App, Entity, Entity) {
        let mut app = App::new();
        app.add_plugins(StatesPlugin);
        app.insert_state(GameState::LevelUp);
        app.init_resource::<GameConfig>().init_resource::<ActiveBoosts>();
        let catalog = single_upgrade_catalog(effect);
        let choices = catalog.random_upgrades(1, &mut rand::thread_rng());
        app.insert_resource(catalog);
        app.insert_resource(PendingLevelUps { levels, choices });
        app.add_message::<UpgradeChosenEvent>();
        app.add_systems(
            Update,
            apply_upgrade_choice_system.run_if(in_state(GameState::LevelUp)),
        );
        let player = app
            .world_mut()
            .spawn((Player::new(200.0), Health::new(100.0)))
            .id();
        let weapon = app
            .world_mut()
            .spawn(Weapon::from_config(&WeaponConfig::default()))
            .id();
        (app, player, weapon)
    }

    fn choose(app: &mut App, index: usize) {
        app.world_mut().write_message(UpgradeChosenEvent { index });
        app.update();
    }

    fn state(app: &App) -> GameState {
        *app.world().resource::<State<GameState>>().get()
    }

    #[test]
    fn test_choice_applies_and_resumes() {
        let (mut app, player, _) = choice_app(1, UpgradeEffect::MoveSpeed { multiplier: 1.15 });

        choose(&mut app, 0);

        let speed = app.world().get::<Player>(player).unwrap().movement_speed;
        assert!((speed - 230.0).abs() < 1e-3);
        assert_eq!(app.world().resource::<PendingLevelUps>().levels, 0);

        app.update();
        assert_eq!(state(&app), GameState::InGame);
    }

    #[test]
    fn test_multiple_pending_levels_offer_one_choice_each() {
        let (mut app, _, weapon) =
            choice_app(2, UpgradeEffect::WeaponDamage { multiplier: 2.0 });

        choose(&mut app, 0);
        {
            let pending = app.world().resource::<PendingLevelUps>();
            assert_eq!(pending.levels, 1);
            assert!(pending.is_choosing());
        }
        app.update();
        assert_eq!(state(&app), GameState::LevelUp);

        choose(&mut app, 0);
        app.update();

        assert_eq!(app.world().get::<Weapon>(weapon).unwrap().damage, 40.0);
        assert_eq!(state(&app), GameState::InGame);
    }

    #[test]
    fn test_invalid_choice_is_ignored() {
        let (mut app, player, _) = choice_app(1, UpgradeEffect::MoveSpeed { multiplier: 1.15 });

        choose(&mut app, 7);
        app.update();

        assert_eq!(app.world().get::<Player>(player).unwrap().movement_speed, 200.0);
        assert_eq!(app.world().resource::<PendingLevelUps>().levels, 1);
        assert_eq!(state(&app), GameState::LevelUp);
    }

    #[test]
    fn test_speed_upgrade_during_boost_survives_expiry() {
        let (mut app, player, _) = choice_app(1, UpgradeEffect::MoveSpeed { multiplier: 1.15 });
        {
            let world = app.world_mut();
            let mut boosted = world.get_mut::<Player>(player).unwrap();
            boosted.movement_speed = 300.0;
            world.resource_mut::<ActiveBoosts>().activate(
                BoostKind::Speed,
                1.5,
                5.0,
                [(player, 200.0)],
            );
        }

        choose(&mut app, 0);

        let boosts = app.world().resource::<ActiveBoosts>();
        let baseline = boosts.baseline(BoostKind::Speed, player).unwrap();
        assert!((baseline - 230.0).abs() < 1e-3);
    }
}

use bevy::prelude::*;

use crate::combat::components::Health;
use crate::config::GameConfig;
use crate::experience::components::PlayerExperience;
use crate::game::events::{ExperienceGainEvent, PlayerLevelUpEvent};
use crate::game::resources::RunStats;
use crate::player::components::{LevelGrowth, Player};
use crate::powerup::components::{ActiveBoosts, BoostKind};
use crate::upgrade::resources::PendingLevelUps;

/// Baseline growth for one level: max health up with a full heal, speed up.
/// A running speed boost is rebased so its revert keeps the growth.
pub fn apply_level_growth(
    growth: &LevelGrowth,
    player_entity: Entity,
    player: &mut Player,
    health: &mut Health,
    boosts: &mut ActiveBoosts,
) {
    health.set_max(health.max * growth.max_health_multiplier);
    health.restore_full();

    player.movement_speed *= growth.movement_speed_multiplier;
    boosts.rebase(BoostKind::Speed, player_entity, growth.movement_speed_multiplier);
}

/// Feed experience grants through the level curve.
/// Every level gained applies baseline growth, is announced in ascending order,
/// and queues one upgrade choice.
pub fn experience_gain_system(
    mut gains: MessageReader<ExperienceGainEvent>,
    config: Res<GameConfig>,
    mut stats: ResMut<RunStats>,
    mut boosts: ResMut<ActiveBoosts>,
    mut pending: ResMut<PendingLevelUps>,
    mut player_query: Query<(Entity, &mut PlayerExperience, &mut Player, &mut Health)>,
    mut level_ups: MessageWriter<PlayerLevelUpEvent>,
) {
    let Ok((player_entity, mut experience, mut player, mut health)) = player_query.single_mut()
    else {
        return;
    };

    for gain in gains.read() {
        stats.xp_gained = stats.xp_gained.saturating_add(gain.amount);

        for new_level in experience.add_xp(gain.amount, &config.experience) {
            apply_level_growth(
                &config.level_growth,
                player_entity,
                &mut player,
                &mut health,
                &mut boosts,
            );
            pending.levels += 1;
            info!("Player reached level {}", new_level);
            level_ups.write(PlayerLevelUpEvent {
                new_level,
                previous_level: new_level - 1,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Resource, Default)]
    struct LevelLog(Vec<PlayerLevelUpEvent>);

    fn record_levels(mut events: MessageReader<PlayerLevelUpEvent>, mut log: ResMut<LevelLog>) {
        log.0.extend(events.read().copied());
    }

    fn experience_app() -> (App, Entity) {
        let mut app = App::new();
        app.init_resource::<GameConfig>()
            .init_resource::<RunStats>()
            .init_resource::<ActiveBoosts>()
            .init_resource::<PendingLevelUps>()
            .init_resource::<LevelLog>();
        app.add_message::<ExperienceGainEvent>()
            .add_message::<PlayerLevelUpEvent>();
        app.add_systems(Update, (experience_gain_system, record_levels).chain());

        let player = app
            .world_mut()
            .spawn((
                Player::new(200.0),
                Health::new(100.0),
                PlayerExperience::default(),
            ))
            .id();
        (app, player)
    }

    #[test]
    fn test_gain_below_threshold_only_accumulates() {
        let (mut app, player) = experience_app();
        app.world_mut()
            .write_message(ExperienceGainEvent { amount: 40 });
        app.update();

        let experience = app.world().get::<PlayerExperience>(player).unwrap();
        assert_eq!(experience.current, 40);
        assert_eq!(experience.level, 1);
        assert_eq!(app.world().resource::<RunStats>().xp_gained, 40);
        assert!(app.world().resource::<LevelLog>().0.is_empty());
    }

    #[test]
    fn test_cascade_announces_each_level_in_order() {
        let (mut app, player) = experience_app();
        app.world_mut()
            .write_message(ExperienceGainEvent { amount: 500 });
        app.update();

        let log = &app.world().resource::<LevelLog>().0;
        assert_eq!(
            log,
            &vec![
                PlayerLevelUpEvent {
                    new_level: 2,
                    previous_level: 1
                },
                PlayerLevelUpEvent {
                    new_level: 3,
                    previous_level: 2
                },
                PlayerLevelUpEvent {
                    new_level: 4,
                    previous_level: 3
                },
            ]
        );
        assert_eq!(app.world().resource::<PendingLevelUps>().levels, 3);
        assert_eq!(app.world().get::<PlayerExperience>(player).unwrap().level, 4);
    }

    #[test]
    fn test_level_up_grows_and_heals_player() {
        let (mut app, player) = experience_app();
        app.world_mut()
            .get_mut::<Health>(player)
            .unwrap()
            .take_damage(60.0);
        app.world_mut()
            .write_message(ExperienceGainEvent { amount: 100 });
        app.update();

        let health = app.world().get::<Health>(player).unwrap();
        assert!((health.max - 110.0).abs() < 1e-3);
        assert_eq!(health.current, health.max);
        let speed = app.world().get::<Player>(player).unwrap().movement_speed;
        assert!((speed - 210.0).abs() < 1e-3);
    }

    #[test]
    fn test_level_growth_rebases_running_speed_boost() {
        let mut world = World::new();
        let entity = world.spawn_empty().id();
        let mut boosts = ActiveBoosts::default();
        let mut player = Player::new(200.0);
        let mut health = Health::new(100.0);

        let boosted = boosts.activate(BoostKind::Speed, 1.5, 5.0, [(entity, 200.0)]);
        player.movement_speed = boosted[0].1;

        apply_level_growth(
            &LevelGrowth::default(),
            entity,
            &mut player,
            &mut health,
            &mut boosts,
        );

        assert!((player.movement_speed - 315.0).abs() < 1e-3);
        assert!((boosts.baseline(BoostKind::Speed, entity).unwrap() - 210.0).abs() < 1e-3);
    }
}

use bevy::prelude::*;

use crate::combat::components::{ContactImmunity, Health, Hitbox};
use crate::combat::events::{DeathEvent, EntityType};
use crate::config::GameConfig;
use crate::experience::components::PlayerExperience;
use crate::game::components::RunEntity;
use crate::game::events::PlayerDiedEvent;
use crate::game::resources::{LastRunSummary, MoveInput, PlayerPosition, RunStats, ViewBounds};
use crate::loot::resources::{CollectedPickups, PendingPickupEffects};
use crate::movement::components::Velocity;
use crate::player::components::{Player, PlayerConfig};
use crate::powerup::components::ActiveBoosts;
use crate::states::GameState;
use crate::upgrade::resources::{PendingLevelUps, UpgradeCatalog};
use crate::waves::resources::WaveDirector;
use crate::weapon::components::Weapon;

pub fn player_bundle(config: &PlayerConfig, position: Vec2) -> impl Bundle {
    (
        Player::new(config.movement_speed),
        Health::new(config.max_health),
        Hitbox::new(config.radius),
        ContactImmunity::new(config.contact_immunity_secs),
        PlayerExperience::default(),
        Velocity::default(),
        Transform::from_translation(position.extend(2.0)),
        RunEntity,
        Name::new("Player"),
    )
}

/// Start a fresh run: counters reset, player and weapon spawned, wave director installed.
/// Only runs when no player exists, so resuming from a halt does not restart.
pub fn setup_run(
    mut commands: Commands,
    config: Res<GameConfig>,
    mut stats: ResMut<RunStats>,
    mut view: ResMut<ViewBounds>,
    mut position: ResMut<PlayerPosition>,
) {
    let center = config.world.center();
    *stats = RunStats::default();
    position.0 = center;
    *view = ViewBounds::centered_on(center, config.world.view_size(), config.world.bounds());

    commands.spawn(player_bundle(&config.player, center));
    commands.spawn((
        Weapon::from_config(&config.weapon),
        RunEntity,
        Name::new("Weapon"),
    ));
    commands.insert_resource(WaveDirector::new(&config.waves));
    commands.insert_resource(UpgradeCatalog::new(config.upgrades.catalog.clone()));
    commands.insert_resource(PendingLevelUps::default());

    info!("Run started");
}

/// Dispose of everything the run owns: entities, wave timers, boosts and queued effects
#[allow(clippy::too_many_arguments)]
pub fn teardown_run(
    mut commands: Commands,
    query: Query<Entity, With<RunEntity>>,
    mut boosts: ResMut<ActiveBoosts>,
    mut collected: ResMut<CollectedPickups>,
    mut pending_effects: ResMut<PendingPickupEffects>,
    mut pending_levels: ResMut<PendingLevelUps>,
    mut input: ResMut<MoveInput>,
) {
    for entity in query.iter() {
        commands.entity(entity).try_despawn();
    }
    commands.remove_resource::<WaveDirector>();
    commands.remove_resource::<UpgradeCatalog>();
    boosts.clear();
    collected.0.clear();
    pending_effects.0.clear();
    *pending_levels = PendingLevelUps::default();
    input.0 = Vec2::ZERO;
}

/// Player death ends the run with the accumulated counters
pub fn handle_player_death_system(
    mut deaths: MessageReader<DeathEvent>,
    stats: Res<RunStats>,
    player_query: Query<&PlayerExperience, With<Player>>,
    mut last_run: ResMut<LastRunSummary>,
    mut died_events: MessageWriter<PlayerDiedEvent>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let Some(death) = deaths
        .read()
        .filter(|event| event.entity_type == EntityType::Player)
        .last()
    else {
        return;
    };
    let level = player_query
        .get(death.entity)
        .map(|experience| experience.level)
        .unwrap_or(1);

    let summary = stats.summary(level);
    info!(
        "Player died: level {}, {} kills, {} xp, {:.1}s",
        summary.level_reached, summary.enemies_killed, summary.xp_gained, summary.play_time_secs
    );
    last_run.0 = Some(summary);
    died_events.write(PlayerDiedEvent { summary });
    next_state.set(GameState::GameOver);
}

/// Counted at the start of the tick so a death summary includes the fatal tick
pub fn tick_play_time_system(time: Res<Time>, mut stats: ResMut<RunStats>) {
    stats.play_time_secs += time.delta_secs();
}

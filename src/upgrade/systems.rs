use bevy::prelude::*;

use super::components::UpgradeTarget;
use super::resources::{PendingLevelUps, UpgradeCatalog};
use crate::combat::components::Health;
use crate::config::GameConfig;
use crate::game::events::UpgradeChosenEvent;
use crate::player::components::Player;
use crate::powerup::components::{ActiveBoosts, BoostKind};
use crate::states::GameState;
use crate::weapon::components::Weapon;

/// Everything a permanent upgrade may touch.
/// Stat changes made while a boost is running are folded into its baseline,
/// so the boost's revert keeps them.
pub struct PlayerLoadout<'a> {
    pub entity: Entity,
    pub player: &'a mut Player,
    pub health: &'a mut Health,
    pub weapons: Vec<(Entity, &'a mut Weapon)>,
    pub boosts: &'a mut ActiveBoosts,
}

impl UpgradeTarget for PlayerLoadout<'_> {
    fn scale_max_health(&mut self, multiplier: f32) {
        let previous = self.health.max;
        self.health.set_max(previous * multiplier);
        self.health.heal(self.health.max - previous);
    }

    fn scale_movement_speed(&mut self, multiplier: f32) {
        self.player.movement_speed *= multiplier;
        self.boosts.rebase(BoostKind::Speed, self.entity, multiplier);
    }

    fn scale_weapon_damage(&mut self, multiplier: f32) {
        for (entity, weapon) in self.weapons.iter_mut() {
            weapon.upgrade_damage(multiplier);
            self.boosts.rebase(BoostKind::Damage, *entity, multiplier);
        }
    }

    fn scale_attack_speed(&mut self, multiplier: f32) {
        for (_, weapon) in self.weapons.iter_mut() {
            weapon.upgrade_speed(multiplier);
        }
    }

    fn scale_projectile_speed(&mut self, multiplier: f32) {
        for (_, weapon) in self.weapons.iter_mut() {
            weapon.upgrade_projectile_speed(multiplier);
        }
    }

    fn enable_regeneration(&mut self, fraction: f32, interval_secs: f32) {
        self.player.enable_regeneration(fraction, interval_secs);
    }
}

/// Halt the run and offer choices once level-ups are pending.
/// Runs last in `Resolve`, so a player killed this tick goes to game over instead.
pub fn begin_upgrade_selection_system(
    catalog: Option<Res<UpgradeCatalog>>,
    config: Res<GameConfig>,
    mut pending: ResMut<PendingLevelUps>,
    player_query: Query<&Health, With<Player>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if pending.levels == 0 || pending.is_choosing() {
        return;
    }
    if !player_query.single().is_ok_and(|health| health.is_alive()) {
        return;
    }
    let Some(catalog) = catalog else {
        return;
    };

    let mut rng = rand::thread_rng();
    pending.choices = catalog.random_upgrades(config.upgrades.choices_per_level, &mut rng);
    if pending.choices.is_empty() {
        warn!("Upgrade catalog is empty, skipping {} level-up choices", pending.levels);
        pending.levels = 0;
        return;
    }

    debug!(
        "Offering upgrades: {:?}",
        pending.choices.iter().map(|c| c.id.as_str()).collect::<Vec<_>>()
    );
    next_state.set(GameState::LevelUp);
}

/// Apply the chosen upgrade, then either offer the next pending level or resume
#[allow(clippy::too_many_arguments)]
pub fn apply_upgrade_choice_system(
    mut chosen: MessageReader<UpgradeChosenEvent>,
    mut pending: ResMut<PendingLevelUps>,
    catalog: Option<Res<UpgradeCatalog>>,
    config: Res<GameConfig>,
    mut boosts: ResMut<ActiveBoosts>,
    mut player_query: Query<(Entity, &mut Player, &mut Health)>,
    mut weapon_query: Query<(Entity, &mut Weapon)>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let requested: Vec<usize> = chosen.read().map(|event| event.index).collect();
    let Some(index) = requested.into_iter().find(|index| {
        let valid = *index < pending.choices.len();
        if !valid {
            warn!(
                "Ignoring upgrade choice {} ({} on offer)",
                index,
                pending.choices.len()
            );
        }
        valid
    }) else {
        return;
    };
    let Ok((entity, mut player, mut health)) = player_query.single_mut() else {
        return;
    };

    let upgrade = pending.choices[index].clone();
    let mut loadout = PlayerLoadout {
        entity,
        player: &mut *player,
        health: &mut *health,
        weapons: weapon_query
            .iter_mut()
            .map(|(entity, weapon)| (entity, weapon.into_inner()))
            .collect(),
        boosts: &mut *boosts,
    };
    upgrade.effect.apply(&mut loadout);
    info!("Applied upgrade {}", upgrade.name);

    pending.levels = pending.levels.saturating_sub(1);
    pending.choices.clear();

    if pending.levels > 0 {
        if let Some(catalog) = catalog {
            let mut rng = rand::thread_rng();
            pending.choices =
                catalog.random_upgrades(config.upgrades.choices_per_level, &mut rng);
        }
    }
    if pending.choices.is_empty() {
        pending.levels = 0;
        next_state.set(GameState::InGame);
    }
}

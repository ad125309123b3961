use bevy::prelude::*;

use crate::combat::components::Health;
use crate::player::components::Player;

/// Heal `fraction × max health` for every regeneration tick that elapsed
pub fn player_regeneration_system(
    time: Res<Time>,
    mut player_query: Query<(&mut Player, &mut Health)>,
) {
    for (mut player, mut health) in player_query.iter_mut() {
        let Some(regeneration) = player.regeneration.as_mut() else {
            continue;
        };
        let ticks = regeneration.tick(time.delta());
        if ticks > 0 {
            let amount = regeneration.fraction * health.max * ticks as f32;
            health.heal(amount);
        }
    }
}

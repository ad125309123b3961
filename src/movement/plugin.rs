use bevy::prelude::*;

use crate::game::resources::{MoveInput, PlayerPosition, ViewBounds};
use crate::game::sets::GameSet;
use crate::movement::systems::{
    apply_knockback, apply_velocity, confine_player_to_world, enemy_movement_system,
    player_movement, update_player_position,
};
use crate::states::GameState;

/// Plugin that adds the movement module's systems to the app.
/// Input is consumed in GameSet::Input, everything else runs in GameSet::Movement.
pub fn plugin(app: &mut App) {
    app.init_resource::<MoveInput>()
        .init_resource::<PlayerPosition>()
        .init_resource::<ViewBounds>()
        .add_systems(
            Update,
            player_movement
                .in_set(GameSet::Input)
                .run_if(in_state(GameState::InGame)),
        )
        .add_systems(
            Update,
            (
                enemy_movement_system,
                apply_velocity,
                apply_knockback,
                confine_player_to_world,
                update_player_position,
            )
                .chain()
                .in_set(GameSet::Movement)
                .run_if(in_state(GameState::InGame)),
        );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::movement::components::Velocity;
    use std::time::Duration;

    fn movement_app() -> App {
        let mut app = App::new();
        app.add_plugins(bevy::state::app::StatesPlugin);
        app.init_state::<GameState>();
        app.init_resource::<Time>();
        app.init_resource::<GameConfig>();
        app.configure_sets(
            Update,
            (GameSet::Input, GameSet::Movement)
                .chain()
                .run_if(in_state(GameState::InGame)),
        );
        plugin(&mut app);
        app
    }

    #[test]
    fn test_plugin_system_runs_only_in_game_state() {
        let mut app = movement_app();
        let entity = app
            .world_mut()
            .spawn((Transform::default(), Velocity::new(Vec2::new(100.0, 0.0))))
            .id();
        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_secs(1));

        app.update();
        assert_eq!(app.world().get::<Transform>(entity).unwrap().translation.x, 0.0);

        app.world_mut()
            .resource_mut::<NextState<GameState>>()
            .set(GameState::InGame);
        app.update();

        assert!(app.world().get::<Transform>(entity).unwrap().translation.x > 0.0);
    }

    #[test]
    fn test_plugin_halts_during_level_up() {
        let mut app = movement_app();
        let entity = app
            .world_mut()
            .spawn((Transform::default(), Velocity::new(Vec2::new(100.0, 0.0))))
            .id();
        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_secs(1));
        app.world_mut()
            .resource_mut::<NextState<GameState>>()
            .set(GameState::LevelUp);

        app.update();
        app.update();

        assert_eq!(app.world().get::<Transform>(entity).unwrap().translation.x, 0.0);
    }
}

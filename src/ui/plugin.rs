use bevy::prelude::*;

use crate::game::events::{ExplosionEvent, UpgradeChosenEvent, WaveStateChangedEvent};
use crate::game::GameSet;
use crate::states::GameState;
use crate::ui::components::*;
use crate::ui::hud::*;
use crate::ui::screens::*;
use crate::ui::systems::*;
use crate::upgrade::systems::apply_upgrade_choice_system;

fn run_active(state: Option<Res<State<GameState>>>) -> bool {
    state.is_some_and(|state| state.is_run_active())
}

pub fn plugin(app: &mut App) {
    app.add_message::<ExplosionEvent>()
        .add_message::<WaveStateChangedEvent>()
        .add_message::<UpgradeChosenEvent>();

    // Intro
    app.add_systems(OnEnter(GameState::Intro), (despawn_screen::<HudRoot>, setup_intro))
        .add_systems(
            Update,
            (button_interactions, intro_input).run_if(in_state(GameState::Intro)),
        )
        .add_systems(OnExit(GameState::Intro), despawn_screen::<IntroScreen>);

    // In-run HUD and input
    app.add_systems(OnEnter(GameState::InGame), setup_hud)
        .add_systems(
            Update,
            keyboard_move_input
                .before(GameSet::Input)
                .run_if(in_state(GameState::InGame)),
        )
        .add_systems(
            Update,
            toggle_pause.run_if(in_state(GameState::InGame).or(in_state(GameState::Paused))),
        )
        .add_systems(
            Update,
            (
                update_health_display,
                update_experience_display,
                update_kill_count,
                update_boost_display,
                show_wave_banner,
                fade_wave_banner,
            )
                .run_if(run_active),
        );

    // Pause and level-up overlays
    app.add_systems(OnEnter(GameState::Paused), setup_pause_screen)
        .add_systems(OnExit(GameState::Paused), despawn_screen::<PauseScreen>)
        .add_systems(
            Update,
            (
                refresh_level_up_panel,
                (level_up_input, upgrade_button_interactions).before(apply_upgrade_choice_system),
            )
                .run_if(in_state(GameState::LevelUp)),
        )
        .add_systems(OnExit(GameState::LevelUp), despawn_screen::<LevelUpPanel>);

    // Game over
    app.add_systems(
        OnEnter(GameState::GameOver),
        (despawn_screen::<HudRoot>, setup_game_over_screen),
    )
    .add_systems(
        Update,
        game_over_input.run_if(in_state(GameState::GameOver)),
    )
    .add_systems(OnExit(GameState::GameOver), despawn_screen::<GameOverScreen>);

    // World visuals
    app.add_systems(
        Update,
        (attach_sprites, spawn_explosion_flash, animate_explosion_flash),
    );
}

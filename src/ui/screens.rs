use bevy::prelude::*;

use crate::game::events::UpgradeChosenEvent;
use crate::game::resources::{LastRunSummary, RunSummary};
use crate::states::GameState;
use crate::ui::components::*;
use crate::upgrade::PendingLevelUps;

const START_COLOR: Color = Color::srgb(0.2, 0.6, 0.2);
const EXIT_COLOR: Color = Color::srgb(0.6, 0.2, 0.2);
const UPGRADE_COLOR: Color = Color::srgb(0.15, 0.2, 0.35);
const HOVER_COLOR: Color = Color::srgb(0.4, 0.4, 0.4);

fn overlay(background: Color) -> (Node, BackgroundColor) {
    (
        Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            flex_direction: FlexDirection::Column,
            ..default()
        },
        BackgroundColor(background),
    )
}

fn heading(text: impl Into<String>, size: f32, margin_bottom: f32) -> impl Bundle {
    (
        Text::new(text),
        TextFont {
            font_size: size,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            margin: UiRect::bottom(Val::Px(margin_bottom)),
            ..default()
        },
    )
}

fn hint(text: impl Into<String>) -> impl Bundle {
    (
        Text::new(text),
        TextFont {
            font_size: 22.0,
            ..default()
        },
        TextColor(Color::srgb(0.7, 0.7, 0.7)),
    )
}

pub fn despawn_screen<T: Component>(mut commands: Commands, query: Query<Entity, With<T>>) {
    for entity in query.iter() {
        commands.entity(entity).try_despawn();
    }
}

pub fn setup_intro(mut commands: Commands) {
    commands
        .spawn((overlay(Color::srgb(0.1, 0.1, 0.1)), IntroScreen))
        .with_children(|parent| {
            parent.spawn(heading("Horde Survivor", 60.0, 0.0));

            parent
                .spawn(Node {
                    flex_direction: FlexDirection::Column,
                    align_items: AlignItems::Center,
                    margin: UiRect::top(Val::Px(50.0)),
                    ..default()
                })
                .with_children(|menu| {
                    for (label, color, start) in
                        [("Start Game", START_COLOR, true), ("Exit Game", EXIT_COLOR, false)]
                    {
                        let mut button = menu.spawn((
                            Button,
                            Node {
                                width: Val::Px(200.0),
                                height: Val::Px(50.0),
                                justify_content: JustifyContent::Center,
                                align_items: AlignItems::Center,
                                margin: UiRect::bottom(Val::Px(20.0)),
                                ..default()
                            },
                            BackgroundColor(color),
                            MenuButton,
                        ));
                        if start {
                            button.insert(StartGameButton);
                        } else {
                            button.insert(ExitGameButton);
                        }
                        button.with_children(|button| {
                            button.spawn((
                                Text::new(label),
                                TextFont {
                                    font_size: 24.0,
                                    ..default()
                                },
                                TextColor(Color::WHITE),
                            ));
                        });
                    }
                    menu.spawn(hint("WASD / arrows to move, Esc to pause"));
                });
        });
}

#[allow(clippy::type_complexity)]
pub fn button_interactions(
    mut interaction_query: Query<
        (
            &Interaction,
            &mut BackgroundColor,
            Option<&StartGameButton>,
            Option<&ExitGameButton>,
        ),
        (Changed<Interaction>, With<MenuButton>),
    >,
    mut next_state: ResMut<NextState<GameState>>,
    mut app_exit: MessageWriter<AppExit>,
) {
    for (interaction, mut background_color, start_button, exit_button) in &mut interaction_query {
        match *interaction {
            Interaction::Pressed => {
                if start_button.is_some() {
                    next_state.set(GameState::InGame);
                } else if exit_button.is_some() {
                    app_exit.write(AppExit::Success);
                }
            }
            Interaction::Hovered => {
                *background_color = BackgroundColor(HOVER_COLOR);
            }
            Interaction::None => {
                if start_button.is_some() {
                    *background_color = BackgroundColor(START_COLOR);
                } else if exit_button.is_some() {
                    *background_color = BackgroundColor(EXIT_COLOR);
                }
            }
        }
    }
}

pub fn intro_input(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if keyboard_input.any_just_pressed([KeyCode::Enter, KeyCode::Space]) {
        next_state.set(GameState::InGame);
    }
}

pub fn setup_pause_screen(mut commands: Commands) {
    commands
        .spawn((overlay(Color::srgba(0.0, 0.0, 0.0, 0.6)), PauseScreen))
        .with_children(|parent| {
            parent.spawn(heading("Paused", 60.0, 30.0));
            parent.spawn(hint("Press Esc or P to resume"));
        });
}

/// Number keys 1-9 pick the matching upgrade
pub fn upgrade_index_for_key(key: KeyCode) -> Option<usize> {
    const DIGITS: [KeyCode; 9] = [
        KeyCode::Digit1,
        KeyCode::Digit2,
        KeyCode::Digit3,
        KeyCode::Digit4,
        KeyCode::Digit5,
        KeyCode::Digit6,
        KeyCode::Digit7,
        KeyCode::Digit8,
        KeyCode::Digit9,
    ];
    DIGITS.iter().position(|digit| *digit == key)
}

/// Rebuild the choice panel whenever the offered upgrades change
pub fn refresh_level_up_panel(
    mut commands: Commands,
    pending: Res<PendingLevelUps>,
    panels: Query<Entity, With<LevelUpPanel>>,
) {
    if !pending.is_changed() && !panels.is_empty() {
        return;
    }
    for entity in panels.iter() {
        commands.entity(entity).try_despawn();
    }
    if pending.choices.is_empty() {
        return;
    }

    commands
        .spawn((overlay(Color::srgba(0.0, 0.0, 0.0, 0.75)), LevelUpPanel))
        .with_children(|parent| {
            parent.spawn(heading("Level Up!", 48.0, 10.0));
            if pending.levels > 1 {
                parent.spawn(hint(format!("{} upgrades to pick", pending.levels)));
            }

            for (index, upgrade) in pending.choices.iter().enumerate() {
                parent
                    .spawn((
                        Button,
                        Node {
                            width: Val::Px(420.0),
                            padding: UiRect::all(Val::Px(12.0)),
                            margin: UiRect::top(Val::Px(14.0)),
                            flex_direction: FlexDirection::Column,
                            ..default()
                        },
                        BackgroundColor(UPGRADE_COLOR),
                        UpgradeButton { index },
                    ))
                    .with_children(|button| {
                        button.spawn((
                            Text::new(format!("{}. {}", index + 1, upgrade.name)),
                            TextFont {
                                font_size: 26.0,
                                ..default()
                            },
                            TextColor(Color::srgb(1.0, 0.85, 0.3)),
                        ));
                        button.spawn(hint(upgrade.description.clone()));
                    });
            }
        });
}

pub fn level_up_input(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut chosen: MessageWriter<UpgradeChosenEvent>,
) {
    if let Some(index) = keyboard_input
        .get_just_pressed()
        .find_map(|key| upgrade_index_for_key(*key))
    {
        chosen.write(UpgradeChosenEvent { index });
    }
}

pub fn upgrade_button_interactions(
    mut interaction_query: Query<
        (&Interaction, &mut BackgroundColor, &UpgradeButton),
        Changed<Interaction>,
    >,
    mut chosen: MessageWriter<UpgradeChosenEvent>,
) {
    for (interaction, mut background_color, button) in &mut interaction_query {
        match *interaction {
            Interaction::Pressed => {
                chosen.write(UpgradeChosenEvent {
                    index: button.index,
                });
            }
            Interaction::Hovered => *background_color = BackgroundColor(HOVER_COLOR),
            Interaction::None => *background_color = BackgroundColor(UPGRADE_COLOR),
        }
    }
}

/// `m:ss` for the game over screen
pub fn format_play_time(secs: f32) -> String {
    let total = secs.max(0.0).round() as u32;
    format!("{}:{:02}", total / 60, total % 60)
}

fn summary_lines(summary: &RunSummary) -> [String; 4] {
    [
        format!("Time survived: {}", format_play_time(summary.play_time_secs)),
        format!("Level reached: {}", summary.level_reached),
        format!("Enemies killed: {}", summary.enemies_killed),
        format!("Experience gained: {}", summary.xp_gained),
    ]
}

pub fn setup_game_over_screen(mut commands: Commands, last_run: Res<LastRunSummary>) {
    commands
        .spawn((overlay(Color::srgba(0.0, 0.0, 0.0, 0.8)), GameOverScreen))
        .with_children(|parent| {
            parent.spawn(heading("Game Over", 60.0, 30.0));

            if let Some(summary) = last_run.0.as_ref() {
                for line in summary_lines(summary) {
                    parent.spawn(heading(line, 28.0, 8.0));
                }
            }

            parent
                .spawn(Node {
                    margin: UiRect::top(Val::Px(40.0)),
                    ..default()
                })
                .with_children(|row| {
                    row.spawn(hint("Press R to restart or ESC for menu"));
                });
        });
}

pub fn game_over_input(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if keyboard_input.just_pressed(KeyCode::KeyR) {
        next_state.set(GameState::InGame);
    } else if keyboard_input.just_pressed(KeyCode::Escape) {
        next_state.set(GameState::Intro);
    }
}

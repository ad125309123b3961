use bevy::prelude::*;

use crate::combat::components::Health;
use crate::config::GameConfig;
use crate::experience::components::PlayerExperience;
use crate::game::events::WaveStateChangedEvent;
use crate::game::resources::RunStats;
use crate::player::components::Player;
use crate::powerup::components::{ActiveBoosts, BoostKind};
use crate::ui::components::*;

fn label(text: impl Into<String>, size: f32, color: Color) -> (Text, TextFont, TextColor) {
    (
        Text::new(text),
        TextFont {
            font_size: size,
            ..default()
        },
        TextColor(color),
    )
}

pub fn setup_hud(mut commands: Commands, existing: Query<(), With<HudRoot>>) {
    if !existing.is_empty() {
        return;
    }

    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                ..default()
            },
            HudRoot,
        ))
        .with_children(|parent| {
            // Top left: health, level, xp
            parent
                .spawn(Node {
                    position_type: PositionType::Absolute,
                    top: Val::Px(20.0),
                    left: Val::Px(20.0),
                    flex_direction: FlexDirection::Column,
                    ..default()
                })
                .with_children(|column| {
                    column.spawn((label("Health: 100", 24.0, Color::WHITE), HealthDisplay));
                    column
                        .spawn((
                            Node {
                                width: Val::Px(200.0),
                                height: Val::Px(20.0),
                                margin: UiRect::top(Val::Px(5.0)),
                                ..default()
                            },
                            BackgroundColor(Color::srgb(0.3, 0.3, 0.3)),
                        ))
                        .with_children(|bar| {
                            bar.spawn((
                                Node {
                                    width: Val::Percent(100.0),
                                    height: Val::Percent(100.0),
                                    ..default()
                                },
                                BackgroundColor(Color::srgb(0.0, 1.0, 0.0)),
                                HealthBar,
                            ));
                        });
                    column.spawn((
                        label("Lv. 1", 24.0, Color::srgb(1.0, 1.0, 0.0)),
                        Node {
                            margin: UiRect::top(Val::Px(10.0)),
                            ..default()
                        },
                        LevelDisplay,
                    ));
                    column
                        .spawn((
                            Node {
                                width: Val::Px(150.0),
                                height: Val::Px(8.0),
                                margin: UiRect::top(Val::Px(5.0)),
                                ..default()
                            },
                            BackgroundColor(Color::srgba(0.2, 0.2, 0.2, 0.8)),
                        ))
                        .with_children(|bar| {
                            bar.spawn((
                                Node {
                                    width: Val::Percent(0.0),
                                    height: Val::Percent(100.0),
                                    ..default()
                                },
                                BackgroundColor(Color::srgb(0.4, 0.8, 1.0)),
                                XpProgressBarFill,
                            ));
                        });
                });

            // Top right: kills and active boosts
            parent
                .spawn(Node {
                    position_type: PositionType::Absolute,
                    top: Val::Px(20.0),
                    right: Val::Px(20.0),
                    flex_direction: FlexDirection::Column,
                    align_items: AlignItems::FlexEnd,
                    ..default()
                })
                .with_children(|column| {
                    column.spawn((label("Kills: 0", 24.0, Color::WHITE), KillCountDisplay));
                    column.spawn((
                        label("", 20.0, Color::srgb(0.6, 0.9, 1.0)),
                        BoostDisplay,
                    ));
                });

            // Centre top: wave announcements
            parent
                .spawn(Node {
                    position_type: PositionType::Absolute,
                    top: Val::Px(80.0),
                    width: Val::Percent(100.0),
                    justify_content: JustifyContent::Center,
                    ..default()
                })
                .with_children(|row| {
                    row.spawn((label("", 34.0, Color::NONE), WaveBanner::default()));
                });
        });
}

pub fn update_health_display(
    player_query: Query<&Health, With<Player>>,
    mut health_text_query: Query<&mut Text, With<HealthDisplay>>,
    mut health_bar_query: Query<(&mut Node, &mut BackgroundColor), With<HealthBar>>,
) {
    let Ok(health) = player_query.single() else {
        return;
    };
    for mut text in &mut health_text_query {
        **text = format!("Health: {:.0}/{:.0}", health.current, health.max);
    }

    let percentage = health.percentage();
    let bar_color = if percentage > 0.6 {
        Color::srgb(0.0, 1.0, 0.0)
    } else if percentage > 0.3 {
        Color::srgb(1.0, 1.0, 0.0)
    } else {
        Color::srgb(1.0, 0.0, 0.0)
    };
    for (mut node, mut background_color) in &mut health_bar_query {
        node.width = Val::Percent(percentage * 100.0);
        *background_color = BackgroundColor(bar_color);
    }
}

pub fn update_experience_display(
    config: Res<GameConfig>,
    player_query: Query<&PlayerExperience, With<Player>>,
    mut level_query: Query<&mut Text, With<LevelDisplay>>,
    mut bar_query: Query<&mut Node, With<XpProgressBarFill>>,
) {
    let Ok(experience) = player_query.single() else {
        return;
    };
    for mut text in level_query.iter_mut() {
        **text = format!("Lv. {}", experience.level);
    }
    for mut node in bar_query.iter_mut() {
        node.width = Val::Percent(experience.progress(&config.experience) * 100.0);
    }
}

pub fn update_kill_count(stats: Res<RunStats>, mut query: Query<&mut Text, With<KillCountDisplay>>) {
    if !stats.is_changed() {
        return;
    }
    for mut text in query.iter_mut() {
        **text = format!("Kills: {}", stats.enemies_killed);
    }
}

pub fn boost_summary(boosts: &ActiveBoosts) -> String {
    [BoostKind::Speed, BoostKind::Damage]
        .into_iter()
        .filter_map(|kind| {
            boosts
                .remaining(kind)
                .map(|secs| format!("{} {:.1}s", kind.display_name(), secs))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn update_boost_display(
    boosts: Res<ActiveBoosts>,
    mut query: Query<&mut Text, With<BoostDisplay>>,
) {
    for mut text in query.iter_mut() {
        **text = boost_summary(&boosts);
    }
}

pub fn show_wave_banner(
    mut waves: MessageReader<WaveStateChangedEvent>,
    mut query: Query<(&mut Text, &mut TextColor, &mut WaveBanner)>,
) {
    let Some(latest) = waves.read().last() else {
        return;
    };
    for (mut text, mut color, mut banner) in query.iter_mut() {
        **text = latest.formatted_text();
        *color = TextColor(latest.display.bevy_color());
        banner.timer.reset();
    }
}

pub fn fade_wave_banner(time: Res<Time>, mut query: Query<(&mut TextColor, &mut WaveBanner)>) {
    for (mut color, mut banner) in query.iter_mut() {
        if banner.timer.is_finished() {
            continue;
        }
        banner.timer.tick(time.delta());
        let alpha = 1.0 - banner.timer.fraction();
        color.0.set_alpha(alpha);
    }
}

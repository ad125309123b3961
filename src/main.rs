use std::path::PathBuf;
use std::process::ExitCode;

use bevy::prelude::*;
use clap::Parser;
use horde_survivor::analytics::{self, Analytics, LogSink};
use horde_survivor::config::GameConfig;
use horde_survivor::states::GameState;
use horde_survivor::{audio, camera, game_plugin, ui_plugin};

#[derive(Parser, Debug)]
#[command(name = "horde-survivor", about = "Top-down horde survival game")]
struct Args {
    /// RON file overriding the built-in balance values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Skip the title screen and start a run immediately
    #[arg(long)]
    autostart: bool,

    /// Run without sound
    #[arg(long)]
    mute: bool,
}

fn load_config(args: &Args) -> Result<GameConfig, horde_survivor::config::ConfigError> {
    match &args.config {
        Some(path) => GameConfig::load(path),
        None => Ok(GameConfig::default()),
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    let config = match load_config(&args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let mut app = App::new();
    app.add_plugins(DefaultPlugins.build().disable::<bevy::audio::AudioPlugin>());
    if args.autostart {
        app.insert_state(GameState::InGame);
    } else {
        app.init_state::<GameState>();
    }
    app.insert_resource(config)
        .insert_resource(Analytics::new(LogSink))
        .add_plugins((game_plugin, camera::plugin, ui_plugin, analytics::plugin));
    if !args.mute {
        app.add_plugins(audio::plugin);
    }
    app.run();

    ExitCode::SUCCESS
}

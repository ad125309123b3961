pub mod analytics;
pub mod audio;
pub mod bullets;
pub mod camera;
pub mod combat;
pub mod config;
pub mod enemies;
pub mod experience;
pub mod game;
pub mod loot;
pub mod movement;
pub mod player;
pub mod powerup;
pub mod prelude;
pub mod states;
pub mod ui;
pub mod upgrade;
pub mod waves;
pub mod weapon;

pub use game::plugin as game_plugin;
pub use ui::plugin as ui_plugin;

pub mod components;
pub mod hud;
pub mod plugin;
pub mod screens;
pub mod systems;

pub use plugin::plugin;

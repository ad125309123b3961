pub mod components;
pub mod plugin;
pub mod systems;

pub use components::Bullet;
pub use plugin::plugin;

pub mod components;
pub mod events;
pub mod plugin;
pub mod resources;
pub mod sets;
pub mod systems;


pub use components::RunEntity;
pub use plugin::plugin;
pub use sets::GameSet;

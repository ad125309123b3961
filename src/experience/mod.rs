pub mod components;
pub mod plugin;
pub mod resources;
pub mod systems;

pub use components::PlayerExperience;
pub use plugin::plugin;
pub use resources::ExperienceCurve;

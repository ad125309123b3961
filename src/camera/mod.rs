pub mod plugin;
pub mod systems;

pub use plugin::plugin;

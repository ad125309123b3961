pub mod components;
pub mod plugin;
pub mod resources;
pub mod systems;


pub use components::{WaveConfig, WavePhase};
pub use plugin::plugin;
pub use resources::WaveDirector;

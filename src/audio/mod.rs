pub mod plugin;
pub mod resources;
pub mod systems;

pub use plugin::plugin;
pub use resources::{SoundCue, SoundLimiter};

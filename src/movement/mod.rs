pub mod components;
pub mod plugin;
pub mod systems;

pub use components::{Knockback, Velocity};
pub use plugin::plugin;

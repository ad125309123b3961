pub mod components;
pub mod plugin;
pub mod systems;

pub use components::{Weapon, WeaponConfig};
pub use plugin::plugin;

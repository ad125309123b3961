pub mod components;
pub mod explosion;
pub mod plugin;
pub mod resources;
pub mod systems;


pub use components::{Pickup, PickupKind};
pub use plugin::plugin;

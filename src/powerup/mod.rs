pub mod components;
pub mod plugin;
pub mod systems;
#[cfg(test)]
mod tests;

pub use components::*;
pub use plugin::*;
pub use systems::*;

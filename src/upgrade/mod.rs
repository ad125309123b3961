pub mod components;
pub mod plugin;
pub mod resources;
pub mod systems;

#[cfg(test)]
mod tests;

pub use components::{UpgradeDefinition, UpgradeEffect, UpgradeTarget};
pub use plugin::plugin;
pub use resources::{PendingLevelUps, UpgradeCatalog};

pub use bevy::prelude::*;
pub use crate::config::GameConfig;
pub use crate::states::*;

// Re-export components
pub use crate::combat::components::*;
pub use crate::enemies::components::*;
pub use crate::experience::components::*;
pub use crate::game::components::*;
pub use crate::loot::components::*;
pub use crate::player::components::*;
pub use crate::weapon::components::*;

pub use crate::game::events::*;
pub use crate::game::resources::*;
pub use crate::game::GameSet;

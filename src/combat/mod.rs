pub mod components;
pub mod events;
pub mod plugin;
pub mod resources;
pub mod systems;

pub use components::{ContactImmunity, Health, Hitbox};
pub use events::{CollisionEvent, CollisionKind, DamageEvent, DeathEvent, EntityType};
pub use plugin::{plugin, CombatSets};
pub use resources::PendingHealth;

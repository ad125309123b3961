pub mod components;

pub use components::{enemy_bundle, Enemy, EnemyConfig, EnemyKind, EnemyStats};

use bevy::prelude::*;

/// Tags every entity that belongs to a single run.
/// Run teardown despawns everything carrying it.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct RunEntity;

use bevy::prelude::*;
use rand::Rng;

use super::components::{ClusterStrategy, EnemyChances, WavePhaseConfig};
use super::resources::WaveDirector;
use crate::config::GameConfig;
use crate::enemies::components::{enemy_bundle, EnemyKind};
use crate::game::events::WaveStateChangedEvent;
use crate::game::resources::ViewBounds;

/// Cumulative thresholds: tank first, then tank + fast, everything above is Basic
pub fn pick_enemy_kind(roll: f32, chances: &EnemyChances) -> EnemyKind {
    if roll < chances.tank {
        EnemyKind::Tank
    } else if roll < chances.tank + chances.fast {
        EnemyKind::Fast
    } else {
        EnemyKind::Basic
    }
}

/// Edges of the view rectangle, clockwise from the top
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];

    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    pub fn opposite(&self) -> Self {
        match self {
            Edge::Top => Edge::Bottom,
            Edge::Right => Edge::Left,
            Edge::Bottom => Edge::Top,
            Edge::Left => Edge::Right,
        }
    }

    /// Uniform random point along this edge of `view`
    pub fn random_point(&self, view: Rect, rng: &mut impl Rng) -> Vec2 {
        match self {
            Edge::Top => Vec2::new(rng.gen_range(view.min.x..=view.max.x), view.max.y),
            Edge::Right => Vec2::new(view.max.x, rng.gen_range(view.min.y..=view.max.y)),
            Edge::Bottom => Vec2::new(rng.gen_range(view.min.x..=view.max.x), view.min.y),
            Edge::Left => Vec2::new(view.min.x, rng.gen_range(view.min.y..=view.max.y)),
        }
    }
}

/// Spawn positions for one batch
pub fn spawn_positions(
    strategy: ClusterStrategy,
    count: u32,
    view: Rect,
    jitter: f32,
    rng: &mut impl Rng,
) -> Vec<Vec2> {
    match strategy {
        ClusterStrategy::Random => (0..count)
            .map(|_| Edge::random(rng).random_point(view, rng))
            .collect(),
        ClusterStrategy::SameEdge => {
            let edge = Edge::random(rng);
            let jitter = jitter.abs();
            (0..count)
                .map(|_| {
                    let offset = Vec2::new(
                        rng.gen_range(-jitter..=jitter),
                        rng.gen_range(-jitter..=jitter),
                    );
                    edge.random_point(view, rng) + offset
                })
                .collect()
        }
        ClusterStrategy::Pincer => {
            let first = Edge::random(rng);
            let second = first.opposite();
            let half = count / 2;
            (0..count)
                .map(|i| {
                    let edge = if i < half { first } else { second };
                    edge.random_point(view, rng)
                })
                .collect()
        }
    }
}

/// Spawn one batch for the given phase and return how many enemies were created
pub fn spawn_batch(
    commands: &mut Commands,
    phase: &WavePhaseConfig,
    config: &GameConfig,
    view: Rect,
    rng: &mut impl Rng,
) -> usize {
    let positions = spawn_positions(
        phase.cluster,
        phase.spawn_count,
        view,
        config.waves.same_edge_jitter,
        rng,
    );
    for position in positions.iter() {
        let kind = pick_enemy_kind(rng.gen::<f32>(), &phase.enemy_chances);
        commands.spawn(enemy_bundle(kind, &config.enemies, *position));
        debug!("Spawned {} enemy at {:?}", kind.name(), position);
    }
    positions.len()
}

/// Drive the wave state machine: spawn due batches, then handle phase expiry
pub fn wave_director_system(
    mut commands: Commands,
    time: Res<Time>,
    director: Option<ResMut<WaveDirector>>,
    config: Res<GameConfig>,
    view: Res<ViewBounds>,
    mut wave_events: MessageWriter<WaveStateChangedEvent>,
) {
    let Some(mut director) = director else {
        return;
    };
    let mut rng = rand::thread_rng();

    let batches = director.tick_spawn(time.delta());
    let phase_config = config.waves.phase(director.phase());
    for _ in 0..batches {
        spawn_batch(&mut commands, phase_config, &config, view.0, &mut rng);
    }

    if let Some(phase) = director.tick_phase(time.delta(), &config.waves, &mut rng) {
        let display = config.waves.phase(phase).display.clone();
        info!("Wave phase -> {}", phase.name());
        wave_events.write(WaveStateChangedEvent { phase, display });
    }
}

use bevy::prelude::*;
use rand::Rng;
use std::time::Duration;

use super::components::{WaveConfig, WavePhase};

/// Wave state machine for the current run.
/// Owns exactly one spawn-cadence timer and one phase-duration timer; both are
/// rebuilt together on every phase change.
#[derive(Resource, Debug, Clone)]
pub struct WaveDirector {
    phase: WavePhase,
    spawn_timer: Timer,
    phase_timer: Timer,
    transitions: u32,
}

impl WaveDirector {
    pub fn new(config: &WaveConfig) -> Self {
        let mut director = Self {
            phase: WavePhase::Normal,
            spawn_timer: Timer::default(),
            phase_timer: Timer::default(),
            transitions: 0,
        };
        director.install_timers(config);
        director
    }

    pub fn phase(&self) -> WavePhase {
        self.phase
    }

    /// Number of phase changes since the run started
    pub fn transitions(&self) -> u32 {
        self.transitions
    }

    pub fn spawn_timer(&self) -> &Timer {
        &self.spawn_timer
    }

    pub fn phase_timer(&self) -> &Timer {
        &self.phase_timer
    }

    fn install_timers(&mut self, config: &WaveConfig) {
        let phase = config.phase(self.phase);
        self.spawn_timer = Timer::from_seconds(phase.spawn_interval_secs, TimerMode::Repeating);
        self.phase_timer = Timer::from_seconds(phase.duration_secs, TimerMode::Once);
    }

    /// Baseline moves to a random non-baseline phase, anything else returns to baseline
    pub fn next_phase(current: WavePhase, rng: &mut impl Rng) -> WavePhase {
        if current.is_baseline() {
            let candidates: Vec<WavePhase> = WavePhase::ALL
                .into_iter()
                .filter(|phase| !phase.is_baseline())
                .collect();
            candidates[rng.gen_range(0..candidates.len())]
        } else {
            WavePhase::Normal
        }
    }

    /// Advance the spawn cadence and return how many batches are due
    pub fn tick_spawn(&mut self, delta: Duration) -> u32 {
        self.spawn_timer.tick(delta);
        self.spawn_timer.times_finished_this_tick()
    }

    /// Advance the phase duration. On expiry switch phase, rebuild both timers
    /// and return the new phase.
    pub fn tick_phase(
        &mut self,
        delta: Duration,
        config: &WaveConfig,
        rng: &mut impl Rng,
    ) -> Option<WavePhase> {
        self.phase_timer.tick(delta);
        if !self.phase_timer.is_finished() {
            return None;
        }
        self.phase = Self::next_phase(self.phase, rng);
        self.transitions += 1;
        self.install_timers(config);
        Some(self.phase)
    }
}

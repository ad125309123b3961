use bevy::prelude::*;
use std::collections::HashMap;
use std::time::Duration;

/// Kira channel for weapon fire
#[derive(Resource)]
pub struct WeaponSoundChannel;

/// Kira channel for enemy deaths
#[derive(Resource)]
pub struct EnemySoundChannel;

/// Kira channel for pickups, level-ups and explosions
#[derive(Resource)]
pub struct EffectsSoundChannel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    Shot,
    EnemyDeath,
    Pickup,
    LevelUp,
    Explosion,
    WaveChange,
}

impl SoundCue {
    pub fn path(&self) -> &'static str {
        match self {
            SoundCue::Shot => "sounds/shot.ogg",
            SoundCue::EnemyDeath => "sounds/enemy_death.ogg",
            SoundCue::Pickup => "sounds/pickup.ogg",
            SoundCue::LevelUp => "sounds/level_up.ogg",
            SoundCue::Explosion => "sounds/explosion.ogg",
            SoundCue::WaveChange => "sounds/wave_change.ogg",
        }
    }

    /// Shortest gap between two plays of the same cue
    pub fn min_interval(&self) -> Duration {
        match self {
            SoundCue::Shot => Duration::from_millis(60),
            SoundCue::EnemyDeath => Duration::from_millis(80),
            SoundCue::Pickup => Duration::from_millis(100),
            SoundCue::LevelUp | SoundCue::Explosion | SoundCue::WaveChange => Duration::ZERO,
        }
    }
}

/// Debounces cues so a burst of identical events plays one sound
#[derive(Resource, Debug, Default)]
pub struct SoundLimiter {
    cooldowns: HashMap<SoundCue, Timer>,
}

impl SoundLimiter {
    /// Returns true and starts the cue's cooldown when it may play now
    pub fn try_play(&mut self, cue: SoundCue) -> bool {
        if self.cooldowns.contains_key(&cue) {
            return false;
        }
        let interval = cue.min_interval();
        if !interval.is_zero() {
            self.cooldowns
                .insert(cue, Timer::new(interval, TimerMode::Once));
        }
        true
    }

    pub fn tick(&mut self, delta: Duration) {
        self.cooldowns.retain(|_, timer| {
            timer.tick(delta);
            !timer.is_finished()
        });
    }
}

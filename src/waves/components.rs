use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Named spawn phases. `Normal` is the baseline the director always returns to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WavePhase {
    Normal,
    Peak,
    Cooldown,
}

impl WavePhase {
    pub const ALL: [WavePhase; 3] = [WavePhase::Normal, WavePhase::Peak, WavePhase::Cooldown];

    pub fn is_baseline(&self) -> bool {
        matches!(self, WavePhase::Normal)
    }

    pub fn name(&self) -> &'static str {
        match self {
            WavePhase::Normal => "normal",
            WavePhase::Peak => "peak",
            WavePhase::Cooldown => "cooldown",
        }
    }
}

/// Where a batch of enemies appears relative to the view edges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClusterStrategy {
    /// Every enemy on its own random edge
    Random,
    /// One random edge for the whole batch, with jitter
    SameEdge,
    /// Two opposite edges, batch split in half
    Pincer,
}

/// How the presentation layer announces a phase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaveDisplay {
    pub text: String,
    /// Hex colour, e.g. `#ff6600`
    pub color: String,
    pub emoji: Option<String>,
}

impl WaveDisplay {
    /// Banner text with the emoji on both sides when one is set
    pub fn formatted_text(&self) -> String {
        match &self.emoji {
            Some(emoji) => format!("{emoji} {} {emoji}", self.text),
            None => self.text.clone(),
        }
    }

    pub fn bevy_color(&self) -> Color {
        Srgba::hex(&self.color)
            .map(Color::from)
            .unwrap_or(Color::WHITE)
    }
}

/// Spawn chances for the non-baseline kinds; the remainder spawns Basic
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemyChances {
    pub fast: f32,
    pub tank: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WavePhaseConfig {
    pub spawn_interval_secs: f32,
    pub spawn_count: u32,
    pub enemy_chances: EnemyChances,
    pub cluster: ClusterStrategy,
    pub duration_secs: f32,
    pub display: WaveDisplay,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaveConfig {
    pub normal: WavePhaseConfig,
    pub peak: WavePhaseConfig,
    pub cooldown: WavePhaseConfig,
    /// Max offset on each axis for same-edge clusters
    pub same_edge_jitter: f32,
}

impl WaveConfig {
    pub fn phase(&self, phase: WavePhase) -> &WavePhaseConfig {
        match phase {
            WavePhase::Normal => &self.normal,
            WavePhase::Peak => &self.peak,
            WavePhase::Cooldown => &self.cooldown,
        }
    }
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            normal: WavePhaseConfig {
                spawn_interval_secs: 2.0,
                spawn_count: 1,
                enemy_chances: EnemyChances {
                    fast: 0.4,
                    tank: 0.2,
                },
                cluster: ClusterStrategy::Random,
                duration_secs: 10.0,
                display: WaveDisplay {
                    text: "zombies incoming".into(),
                    color: "#00ffff".into(),
                    emoji: None,
                },
            },
            peak: WavePhaseConfig {
                spawn_interval_secs: 0.5,
                spawn_count: 3,
                enemy_chances: EnemyChances {
                    fast: 0.7,
                    tank: 0.5,
                },
                cluster: ClusterStrategy::Pincer,
                duration_secs: 6.0,
                display: WaveDisplay {
                    text: "HORDE SPOTTED!!".into(),
                    color: "#ff6600".into(),
                    emoji: Some("💀".into()),
                },
            },
            cooldown: WavePhaseConfig {
                spawn_interval_secs: 4.0,
                spawn_count: 2,
                enemy_chances: EnemyChances {
                    fast: 0.5,
                    tank: 0.4,
                },
                cluster: ClusterStrategy::SameEdge,
                duration_secs: 8.0,
                display: WaveDisplay {
                    text: "Its quiet...".into(),
                    color: "#00ff00".into(),
                    emoji: None,
                },
            },
            same_edge_jitter: 50.0,
        }
    }
}

use bevy::prelude::*;

#[derive(Component)]
pub struct MenuButton;

#[derive(Component)]
pub struct StartGameButton;

#[derive(Component)]
pub struct ExitGameButton;

/// Root of the intro menu
#[derive(Component)]
pub struct IntroScreen;

/// Root of the in-run HUD
#[derive(Component)]
pub struct HudRoot;

#[derive(Component)]
pub struct HealthDisplay;

#[derive(Component)]
pub struct HealthBar;

#[derive(Component)]
pub struct LevelDisplay;

#[derive(Component)]
pub struct XpProgressBarFill;

#[derive(Component)]
pub struct KillCountDisplay;

#[derive(Component)]
pub struct BoostDisplay;

/// Wave phase announcement, faded out by its timer
#[derive(Component)]
pub struct WaveBanner {
    pub timer: Timer,
}

impl Default for WaveBanner {
    fn default() -> Self {
        let mut timer = Timer::from_seconds(2.5, TimerMode::Once);
        timer.tick(timer.duration());
        Self { timer }
    }
}

#[derive(Component)]
pub struct LevelUpPanel;

/// Clickable upgrade option on the level-up panel
#[derive(Component)]
pub struct UpgradeButton {
    pub index: usize,
}

#[derive(Component)]
pub struct PauseScreen;

#[derive(Component)]
pub struct GameOverScreen;

/// Expanding, fading circle drawn where a bomb went off
#[derive(Component)]
pub struct ExplosionFlash {
    pub timer: Timer,
    pub radius: f32,
}

impl ExplosionFlash {
    pub fn new(radius: f32) -> Self {
        Self {
            timer: Timer::from_seconds(0.3, TimerMode::Once),
            radius,
        }
    }

    /// Scale grows from 1.0 to 1.5 while alpha drops to zero
    pub fn scale_and_alpha(&self) -> (f32, f32) {
        let t = self.timer.fraction();
        (1.0 + 0.5 * t, 0.7 * (1.0 - t))
    }
}

use bevy::prelude::*;

/// Player position mirrored every tick for systems that only need the point
#[derive(Resource, Default)]
pub struct PlayerPosition(pub Vec2);

/// Coarse input direction forwarded by the presentation layer.
/// Not required to be normalized; movement normalizes it.
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct MoveInput(pub Vec2);

/// Camera view rectangle in world space, used for edge spawning
#[derive(Resource, Debug, Clone, Copy)]
pub struct ViewBounds(pub Rect);

impl ViewBounds {
    /// A `size` rectangle centred on `focus`, shifted to stay inside `world`.
    /// When the view is larger than the world on an axis it is centred on the world instead.
    pub fn centered_on(focus: Vec2, size: Vec2, world: Rect) -> Self {
        let half = size / 2.0;
        let clamp_axis = |value: f32, half: f32, min: f32, max: f32| {
            if max - min <= half * 2.0 {
                (min + max) / 2.0
            } else {
                value.clamp(min + half, max - half)
            }
        };
        let center = Vec2::new(
            clamp_axis(focus.x, half.x, world.min.x, world.max.x),
            clamp_axis(focus.y, half.y, world.min.y, world.max.y),
        );
        Self(Rect::from_center_half_size(center, half))
    }
}

impl Default for ViewBounds {
    fn default() -> Self {
        Self(Rect::from_center_size(Vec2::ZERO, Vec2::new(1024.0, 768.0)))
    }
}

/// Cumulative counters for end-of-run reporting
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct RunStats {
    pub enemies_killed: u32,
    pub xp_gained: u32,
    pub play_time_secs: f32,
}

impl RunStats {
    pub fn summary(&self, level_reached: u32) -> RunSummary {
        RunSummary {
            enemies_killed: self.enemies_killed,
            xp_gained: self.xp_gained,
            level_reached,
            play_time_secs: self.play_time_secs,
        }
    }
}

/// Summary of the most recently finished run, kept for the game-over screen
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct LastRunSummary(pub Option<RunSummary>);

/// Final stats handed to the game-over screen and analytics
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RunSummary {
    pub enemies_killed: u32,
    pub xp_gained: u32,
    pub level_reached: u32,
    pub play_time_secs: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world_rect() -> Rect {
        Rect::new(0.0, 0.0, 2048.0, 1536.0)
    }

    #[test]
    fn test_view_follows_focus_inside_world() {
        let view = ViewBounds::centered_on(
            Vec2::new(1024.0, 768.0),
            Vec2::new(1024.0, 768.0),
            world_rect(),
        );
        assert_eq!(view.0.min, Vec2::new(512.0, 384.0));
        assert_eq!(view.0.max, Vec2::new(1536.0, 1152.0));
    }

    #[test]
    fn test_view_is_clamped_at_world_corner() {
        let view = ViewBounds::centered_on(Vec2::new(10.0, 1530.0), Vec2::new(1024.0, 768.0), world_rect());
        assert_eq!(view.0.min, Vec2::new(0.0, 768.0));
        assert_eq!(view.0.max, Vec2::new(1024.0, 1536.0));
    }

    #[test]
    fn test_view_larger_than_world_is_centred() {
        let world = Rect::new(0.0, 0.0, 500.0, 400.0);
        let view = ViewBounds::centered_on(Vec2::new(0.0, 0.0), Vec2::new(1024.0, 768.0), world);
        assert_eq!(view.0.center(), Vec2::new(250.0, 200.0));
    }

    #[test]
    fn test_run_summary_passes_counters_through() {
        let stats = RunStats {
            enemies_killed: 12,
            xp_gained: 340,
            play_time_secs: 61.5,
        };
        let summary = stats.summary(4);
        assert_eq!(summary.enemies_killed, 12);
        assert_eq!(summary.xp_gained, 340);
        assert_eq!(summary.level_reached, 4);
        assert_eq!(summary.play_time_secs, 61.5);
    }
}

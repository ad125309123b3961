use bevy::prelude::*;

use crate::experience::resources::ExperienceCurve;

#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct PlayerExperience {
    pub current: u32,
    pub level: u32,
}

impl Default for PlayerExperience {
    fn default() -> Self {
        Self {
            current: 0,
            level: 1,
        }
    }
}

impl PlayerExperience {
    /// Add experience and resolve every level threshold it crosses.
    /// Each level-up consumes the requirement of the level being left, so the
    /// remainder carries over. Returns the newly reached levels in ascending order.
    pub fn add_xp(&mut self, amount: u32, curve: &ExperienceCurve) -> Vec<u32> {
        self.current = self.current.saturating_add(amount);

        let mut reached = Vec::new();
        loop {
            let required = curve.required_xp(self.level);
            if self.current < required {
                break;
            }
            self.current -= required;
            self.level += 1;
            reached.push(self.level);
        }
        reached
    }

    pub fn required_for_next(&self, curve: &ExperienceCurve) -> u32 {
        curve.required_xp(self.level)
    }

    /// Fraction of the way to the next level (0.0 to 1.0)
    pub fn progress(&self, curve: &ExperienceCurve) -> f32 {
        self.current as f32 / self.required_for_next(curve) as f32
    }
}

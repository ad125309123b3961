use serde::{Deserialize, Serialize};

/// Exponential level-cost curve: `floor(base · scaling^(level-1))`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceCurve {
    pub base: f32,
    pub scaling: f32,
}

impl Default for ExperienceCurve {
    fn default() -> Self {
        Self {
            base: 100.0,
            scaling: 1.5,
        }
    }
}

impl ExperienceCurve {
    /// XP needed to leave `level`. Never below 1, so a level-up always consumes something.
    pub fn required_xp(&self, level: u32) -> u32 {
        let exponent = level.saturating_sub(1) as i32;
        (self.base * self.scaling.powi(exponent)).floor().max(1.0) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_xp_follows_curve() {
        let curve = ExperienceCurve::default();
        assert_eq!(curve.required_xp(1), 100);
        assert_eq!(curve.required_xp(2), 150);
        assert_eq!(curve.required_xp(3), 225);
        assert_eq!(curve.required_xp(4), 337);
    }

    #[test]
    fn test_required_xp_is_monotonic() {
        for scaling in [1.0_f32, 1.1, 1.5, 2.0] {
            let curve = ExperienceCurve {
                base: 100.0,
                scaling,
            };
            for level in 1..40 {
                assert!(
                    curve.required_xp(level) <= curve.required_xp(level + 1),
                    "scaling {scaling} level {level}"
                );
            }
        }
    }

    #[test]
    fn test_required_xp_never_zero() {
        let curve = ExperienceCurve {
            base: 0.0,
            scaling: 1.0,
        };
        assert_eq!(curve.required_xp(1), 1);
    }
}

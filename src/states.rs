use bevy::prelude::*;

#[derive(Clone, Copy, Default, Eq, PartialEq, Debug, Hash, States)]
pub enum GameState {
    #[default]
    Intro,
    /// The simulation is ticking
    InGame,
    /// Simulation halted while the player picks an upgrade
    LevelUp,
    Paused,
    GameOver,
}

impl GameState {
    /// A run is in progress (possibly halted for an upgrade choice or pause)
    pub fn is_run_active(&self) -> bool {
        matches!(self, GameState::InGame | GameState::LevelUp | GameState::Paused)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_state_default_is_intro() {
        assert_eq!(GameState::default(), GameState::Intro);
    }

    #[test]
    fn level_up_is_distinct_from_in_game() {
        assert_ne!(GameState::LevelUp, GameState::InGame);
        assert_ne!(GameState::LevelUp, GameState::Paused);
    }

    #[test]
    fn run_is_active_while_halted() {
        assert!(GameState::InGame.is_run_active());
        assert!(GameState::LevelUp.is_run_active());
        assert!(GameState::Paused.is_run_active());
        assert!(!GameState::Intro.is_run_active());
        assert!(!GameState::GameOver.is_run_active());
    }

    #[test]
    fn game_state_all_states_are_distinct() {
        let states = [
            GameState::Intro,
            GameState::InGame,
            GameState::LevelUp,
            GameState::Paused,
            GameState::GameOver,
        ];
        for (i, s1) in states.iter().enumerate() {
            for (j, s2) in states.iter().enumerate() {
                if i != j {
                    assert_ne!(s1, s2, "States at indices {} and {} should be distinct", i, j);
                }
            }
        }
    }
}

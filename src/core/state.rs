//! Game state for one game (one or more rounds until reset).
//!
//! A `GameState` is built fresh by `GameState::new` on startup, reset and
//! difficulty change. Only the engine mutates it afterwards.

use serde::{Deserialize, Serialize};

use super::config::{Difficulty, DifficultyProfile};

/// Where the game is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Accepting guesses. The countdown may not have started yet.
    Active,
    /// Target guessed; the next guess starts a new round.
    Won,
    /// Out of score or time. Only a reset leaves this state.
    Over,
}

/// Complete state of the current game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Secret number, always in `1..=profile.max_number`.
    pub target: u32,

    /// Current score. Never negative; zero only once the game is over.
    pub score: u32,

    pub status: Status,

    /// Seconds left on the countdown.
    pub time_remaining: u32,

    /// Whether the countdown is ticking.
    pub timer_running: bool,

    /// Last incorrect guess this game, if any.
    pub previous_guess: Option<i64>,

    pub difficulty: Difficulty,

    pub profile: DifficultyProfile,
}

impl GameState {
    /// Create a fresh, active game.
    #[must_use]
    pub fn new(difficulty: Difficulty, profile: DifficultyProfile, target: u32, score: u32) -> Self {
        debug_assert!(profile.contains(target));
        Self {
            target,
            score,
            status: Status::Active,
            time_remaining: profile.timer_seconds,
            timer_running: false,
            previous_guess: None,
            difficulty,
            profile,
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == Status::Active
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status == Status::Over
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.status == Status::Won
    }
}

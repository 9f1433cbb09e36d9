//! # number-guess
//!
//! A guess-the-number game engine with difficulty tiers, a score, a session
//! high score and a countdown.
//!
//! ## Design Principles
//!
//! 1. **Engine owns the state**: `GuessEngine` holds the only `GameState`.
//!    Nothing outside the engine writes to it.
//!
//! 2. **Events in, commands out**: the engine consumes `InputEvent`s and
//!    returns `Commands`. Rendering, sound and timers are the caller's job.
//!
//! 3. **Deterministic targets**: targets come from a `NumberSource`. The
//!    default `GameRng` is seedable; tests script exact targets.
//!
//! ## Modules
//!
//! - `core`: Configuration, state, events, commands, guess parsing, RNG
//! - `rules`: The state machine (`GuessEngine`)
//! - `shell`: Event loop, countdown ticker, presenters, terminal input

pub mod core;
pub mod rules;
pub mod shell;

// Re-export commonly used types
pub use crate::core::{
    parse_guess, ColorToken, Command, Commands, ConfigError, Difficulty, DifficultyProfile, DifficultyTable,
    GameConfig, GameRng, GameRngState, GameState, GuessError, InputEvent, Key, Message, NumberDisplay,
    NumberSource, NumberWidth, ScriptedNumbers, Sound, Status, STARTING_SCORE,
};

pub use crate::rules::GuessEngine;

pub use crate::shell::{Countdown, Presenter, RecordingPresenter, Screen, Shell, ShellError, ShellInput};

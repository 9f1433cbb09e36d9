//! Core engine types: configuration, state, events, commands, RNG.
//!
//! Nothing in here makes decisions; the rules live in `rules`.

pub mod config;
pub mod rng;
pub mod guess;
pub mod event;
pub mod command;
pub mod state;

pub use config::{ConfigError, Difficulty, DifficultyProfile, DifficultyTable, GameConfig, STARTING_SCORE};
pub use rng::{GameRng, GameRngState, NumberSource, ScriptedNumbers};
pub use guess::{parse_guess, GuessError};
pub use event::{InputEvent, Key};
pub use command::{ColorToken, Command, Commands, Message, NumberDisplay, NumberWidth, Sound};
pub use state::{GameState, Status};

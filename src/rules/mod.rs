//! Game rules.
//!
//! `GuessEngine` is the only place game state changes. It consumes
//! `InputEvent`s and answers with `Commands`; it never renders, plays
//! sounds or schedules anything itself.

pub mod engine;

pub use engine::GuessEngine;

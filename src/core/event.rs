//! Input events delivered to the engine.

use serde::{Deserialize, Serialize};

use super::config::Difficulty;

/// Keys the input field reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Enter,
    Escape,
    Other,
}

/// A discrete event from the input source or the countdown.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// The guess button was pressed with the given input text.
    SubmitGuess(String),
    /// A key went down in the input field holding the given text.
    KeyPress(Key, String),
    /// The difficulty selector changed.
    ChangeDifficulty(Difficulty),
    /// The "again" button was pressed.
    Reset,
    /// One timer interval elapsed.
    TimerTick,
}

impl InputEvent {
    /// Shorthand for `SubmitGuess`.
    pub fn guess(text: impl Into<String>) -> Self {
        InputEvent::SubmitGuess(text.into())
    }

    /// Guess text this event submits, if it submits one.
    ///
    /// Enter in the input field is equivalent to pressing the guess button.
    #[must_use]
    pub fn submitted_text(&self) -> Option<&str> {
        match self {
            InputEvent::SubmitGuess(text) | InputEvent::KeyPress(Key::Enter, text) => Some(text),
            _ => None,
        }
    }
}

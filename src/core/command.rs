//! Output commands for the presentation layer.
//!
//! The engine never renders anything itself. Every visible or audible
//! change, plus starting and stopping the countdown, leaves the engine as a
//! `Command` in a `Commands` batch, applied in order.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Batch of commands produced by one event.
///
/// SmallVec optimizes for a full re-initialize (the largest batch) without
/// heap allocation.
pub type Commands = SmallVec<[Command; 12]>;

/// Feedback line shown to the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Message {
    StartGuessing,
    NotANumber,
    Correct,
    TooHigh,
    TooLow,
    GameOver,
    TimeUp,
}

impl Message {
    /// Text shown for this message.
    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            Message::StartGuessing => "Start guessing...",
            Message::NotANumber => "⛔ Not a Number!",
            Message::Correct => "🎉 Correct Number!",
            Message::TooHigh => "📈 Too High Number!",
            Message::TooLow => "📉 Too Low Number!",
            Message::GameOver => "☠ Game Over!",
            Message::TimeUp => "☠ Time is up!",
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Background color token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorToken {
    Neutral,
    Success,
}

impl ColorToken {
    /// CSS-style hex value.
    #[must_use]
    pub const fn hex(self) -> &'static str {
        match self {
            ColorToken::Neutral => "#222",
            ColorToken::Success => "#60b347",
        }
    }
}

/// Sound cues.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sound {
    GameOver,
    Click,
    Correct,
    Wrong,
}

/// What the big number box shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NumberDisplay {
    /// The "?" placeholder.
    Hidden,
    /// The revealed target.
    Revealed(u32),
}

impl fmt::Display for NumberDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberDisplay::Hidden => f.write_str("?"),
            NumberDisplay::Revealed(n) => write!(f, "{}", n),
        }
    }
}

/// Width of the number box; widened on a correct guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NumberWidth {
    Normal,
    Wide,
}

/// A single instruction for the presentation layer or the effect shell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    SetMessage(Message),
    SetScore(u32),
    SetHighScore(u32),
    SetNumber(NumberDisplay),
    SetNumberWidth(NumberWidth),
    SetTime(u32),
    SetPreviousGuess { value: Option<i64>, visible: bool },
    SetBackground(ColorToken),
    /// Update the "(Between 1 and N)" hint.
    SetRange(u32),
    PlaySound(Sound),
    ClearInput,
    FocusInput,
    /// Begin ticking once per interval. Any running countdown is replaced.
    StartTimer,
    /// Cancel the pending countdown, if any.
    StopTimer,
}

impl Command {
    /// Check if this command is for the effect shell rather than the display.
    #[must_use]
    pub fn is_timer(&self) -> bool {
        matches!(self, Command::StartTimer | Command::StopTimer)
    }
}

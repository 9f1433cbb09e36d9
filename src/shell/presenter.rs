//! Presentation layer.
//!
//! `Screen` is the view model every presenter keeps: it folds display
//! commands into the values currently on screen. `TerminalPresenter` draws
//! it to a writer after each batch; `RecordingPresenter` keeps every command
//! for inspection.

use std::io::Write;

use log::debug;

use super::ShellError;
use crate::core::{ColorToken, Command, Message, NumberDisplay, NumberWidth, Sound};

/// Applies display commands.
///
/// Timer commands never reach a presenter; the shell consumes them.
pub trait Presenter {
    /// Apply one display command.
    fn apply(&mut self, command: &Command) -> Result<(), ShellError>;

    /// Called once after every batch.
    fn flush(&mut self) -> Result<(), ShellError> {
        Ok(())
    }

    /// Show a shell-level notice that is not part of the game display.
    fn notice(&mut self, _text: &str) -> Result<(), ShellError> {
        Ok(())
    }
}

/// Everything currently displayed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Screen {
    pub message: Message,
    pub score: u32,
    pub high_score: u32,
    pub number: NumberDisplay,
    pub number_width: NumberWidth,
    pub time: u32,
    pub previous_guess: Option<i64>,
    pub previous_guess_visible: bool,
    pub background: ColorToken,
    pub range_max: u32,
    pub last_sound: Option<Sound>,
}

impl Default for Screen {
    fn default() -> Self {
        Self {
            message: Message::StartGuessing,
            score: 0,
            high_score: 0,
            number: NumberDisplay::Hidden,
            number_width: NumberWidth::Normal,
            time: 0,
            previous_guess: None,
            previous_guess_visible: false,
            background: ColorToken::Neutral,
            range_max: 0,
            last_sound: None,
        }
    }
}

impl Screen {
    /// Fold one command into the view.
    pub fn apply(&mut self, command: &Command) {
        match *command {
            Command::SetMessage(message) => self.message = message,
            Command::SetScore(score) => self.score = score,
            Command::SetHighScore(score) => self.high_score = score,
            Command::SetNumber(number) => self.number = number,
            Command::SetNumberWidth(width) => self.number_width = width,
            Command::SetTime(time) => self.time = time,
            Command::SetPreviousGuess { value, visible } => {
                self.previous_guess = value;
                self.previous_guess_visible = visible;
            }
            Command::SetBackground(color) => self.background = color,
            Command::SetRange(max) => self.range_max = max,
            Command::PlaySound(sound) => self.last_sound = Some(sound),
            // Input field and timer commands do not change what is shown.
            Command::ClearInput | Command::FocusInput | Command::StartTimer | Command::StopTimer => {}
        }
    }

    /// Render as a two-line status block.
    #[must_use]
    pub fn render(&self) -> String {
        let number = match self.number_width {
            NumberWidth::Normal => format!("[ {} ]", self.number),
            NumberWidth::Wide => format!("[     {}     ]", self.number),
        };
        let previous = match (self.previous_guess_visible, self.previous_guess) {
            (true, Some(guess)) => format!("  previous: {}", guess),
            _ => String::new(),
        };
        format!(
            "(Between 1 and {})  time: {}s  score: {}  highscore: {}{}\n{} {}",
            self.range_max, self.time, self.score, self.high_score, previous, number, self.message
        )
    }
}

/// Draws the screen to a terminal-like writer.
pub struct TerminalPresenter<W: Write> {
    out: W,
    screen: Screen,
    bell: bool,
    pending_bell: bool,
    /// Set when the batch cleared or focused the input field.
    prompt: bool,
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            screen: Screen::default(),
            bell: false,
            pending_bell: false,
            prompt: false,
        }
    }

    /// Ring the terminal bell for sound cues.
    #[must_use]
    pub fn with_bell(mut self, bell: bool) -> Self {
        self.bell = bell;
        self
    }

    #[must_use]
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Consume the presenter and return its writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn apply(&mut self, command: &Command) -> Result<(), ShellError> {
        match command {
            Command::PlaySound(sound) => {
                debug!("sound: {:?}", sound);
                self.pending_bell |= self.bell;
            }
            Command::ClearInput | Command::FocusInput => self.prompt = true,
            _ => {}
        }
        self.screen.apply(command);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), ShellError> {
        if std::mem::take(&mut self.pending_bell) {
            write!(self.out, "\x07")?;
        }
        if self.screen.background == ColorToken::Success {
            writeln!(self.out, "\x1b[42m{}\x1b[0m", self.screen.render())?;
        } else {
            writeln!(self.out, "{}", self.screen.render())?;
        }
        if std::mem::take(&mut self.prompt) {
            write!(self.out, "guess> ")?;
        }
        self.out.flush()?;
        Ok(())
    }

    fn notice(&mut self, text: &str) -> Result<(), ShellError> {
        writeln!(self.out, "{}", text)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Keeps every command it receives.
#[derive(Clone, Debug, Default)]
pub struct RecordingPresenter {
    pub commands: Vec<Command>,
    pub notices: Vec<String>,
    pub screen: Screen,
    pub flushes: usize,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sounds played so far, in order.
    #[must_use]
    pub fn sounds(&self) -> Vec<Sound> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                Command::PlaySound(sound) => Some(*sound),
                _ => None,
            })
            .collect()
    }
}

impl Presenter for RecordingPresenter {
    fn apply(&mut self, command: &Command) -> Result<(), ShellError> {
        self.screen.apply(command);
        self.commands.push(command.clone());
        Ok(())
    }

    fn flush(&mut self) -> Result<(), ShellError> {
        self.flushes += 1;
        Ok(())
    }

    fn notice(&mut self, text: &str) -> Result<(), ShellError> {
        self.notices.push(text.to_string());
        Ok(())
    }
}

//! Effect shell: runs the engine against real input and a real clock.
//!
//! ```text
//!   stdin thread ──ShellInput──┐
//!                              ├─ select! ─> GuessEngine::dispatch ─> Commands
//!   Countdown ticker ──Instant─┘                                        │
//!                    ^                                                  │
//!                    └──── StartTimer / StopTimer ──── Shell ───────────┤
//!                                                                       v
//!                                                                  Presenter
//! ```
//!
//! Everything runs on the thread calling `Shell::run`; events are handled
//! one at a time and each batch is applied completely before the next
//! event is received.

pub mod args;
pub mod input;
pub mod presenter;
pub mod timer;

pub use args::CliArgs;
pub use input::{parse_line, spawn_reader, ShellInput};
pub use presenter::{Presenter, RecordingPresenter, Screen, TerminalPresenter};
pub use timer::Countdown;

use crossbeam_channel::{select, Receiver};
use log::{info, warn};
use thiserror::Error;

use crate::core::{Command, ConfigError, InputEvent, NumberSource};
use crate::rules::GuessEngine;

/// Errors that stop the shell.
#[derive(Error, Debug)]
pub enum ShellError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Usage(String),
}

/// The event loop tying an engine to a presenter and a countdown.
pub struct Shell<R, P> {
    engine: GuessEngine<R>,
    presenter: P,
    countdown: Countdown,
    input: Receiver<ShellInput>,
}

impl<R: NumberSource, P: Presenter> Shell<R, P> {
    /// Build a shell. The tick interval comes from the engine's config.
    pub fn new(engine: GuessEngine<R>, presenter: P, input: Receiver<ShellInput>) -> Self {
        let countdown = Countdown::new(engine.config().tick_interval());
        Self {
            engine,
            presenter,
            countdown,
            input,
        }
    }

    #[must_use]
    pub fn engine(&self) -> &GuessEngine<R> {
        &self.engine
    }

    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    #[must_use]
    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    /// Paint the initial screen, then handle input until `Quit` or until
    /// every input sender is gone.
    pub fn run(&mut self) -> Result<(), ShellError> {
        info!(
            "starting at difficulty {}",
            self.engine.state().difficulty
        );
        let initial = self.engine.initial_commands();
        self.execute(&initial)?;

        loop {
            // Rebuilt every turn so a cancelled ticker is never selected.
            let ticks = self.countdown.receiver();
            let event = select! {
                recv(self.input) -> msg => match msg {
                    Ok(ShellInput::Event(event)) => event,
                    Ok(ShellInput::Unknown(line)) => {
                        warn!("unrecognised input: {}", line);
                        self.presenter.notice(&format!(
                            "unknown command `{}` (try :reset, :easy, :medium, :hard, :quit)",
                            line
                        ))?;
                        continue;
                    }
                    Ok(ShellInput::Quit) | Err(_) => break,
                },
                recv(ticks) -> _ => InputEvent::TimerTick,
            };
            self.handle(&event)?;
        }

        info!("shutting down, high score {}", self.engine.high_score());
        self.countdown.stop();
        Ok(())
    }

    /// Dispatch one event and execute the resulting commands.
    pub fn handle(&mut self, event: &InputEvent) -> Result<(), ShellError> {
        let commands = self.engine.dispatch(event);
        if commands.is_empty() {
            return Ok(());
        }
        self.execute(&commands)
    }

    fn execute(&mut self, commands: &[Command]) -> Result<(), ShellError> {
        for command in commands {
            match command {
                Command::StartTimer => self.countdown.start(),
                Command::StopTimer => self.countdown.stop(),
                _ => self.presenter.apply(command)?,
            }
        }
        self.presenter.flush()
    }

    /// Consume the shell and return its parts.
    pub fn into_parts(self) -> (GuessEngine<R>, P) {
        (self.engine, self.presenter)
    }
}

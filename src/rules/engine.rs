//! The guess-the-number state machine.
//!
//! `GuessEngine::dispatch` takes one `InputEvent`, updates the owned
//! `GameState` and returns the `Commands` the presentation layer and the
//! effect shell must apply, in order. The engine never blocks, sleeps or
//! touches I/O; the countdown is driven from outside by `TimerTick` events.
//!
//! ## Transitions
//!
//! ```text
//!             guess == target              valid guess
//!   Active ───────────────────> Won ───────────────────> Active (new round)
//!     │  \                       │
//!     │   \ score hits 0         │ invalid input
//!     │    \ or time runs out    v
//!     │     `──────────> Over   re-initialize
//!     │
//!     └── Reset / ChangeDifficulty from any state: re-initialize
//! ```

use log::{debug, info, trace};

use crate::core::{
    parse_guess, ColorToken, Command, Commands, ConfigError, Difficulty, GameConfig, GameRng, GameState, GuessError,
    InputEvent, Message, NumberDisplay, NumberSource, NumberWidth, Sound, Status,
};

/// Owns the game state, the session high score and the target source.
#[derive(Clone, Debug)]
pub struct GuessEngine<R = GameRng> {
    config: GameConfig,
    rng: R,
    state: GameState,
    high_score: u32,
}

impl GuessEngine<GameRng> {
    /// Validate `config` and build an engine seeded from `config.seed`, or
    /// from OS entropy.
    pub fn from_config(config: GameConfig) -> Result<Self, ConfigError> {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        info!("seeding targets with {}", rng.seed());
        Self::try_new(config, rng)
    }
}

impl<R: NumberSource> GuessEngine<R> {
    /// Validate `config`, then build the engine as `new` does.
    pub fn try_new(config: GameConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config, rng))
    }

    /// Build an engine and draw the first target at `config.difficulty`.
    ///
    /// `config` must pass `GameConfig::validate`; a zero `max_number` or
    /// starting score breaks the state invariants. Use `try_new` for
    /// configs that were not loaded through `GameConfig::from_json_*`.
    pub fn new(config: GameConfig, mut rng: R) -> Self {
        let state = fresh_state(&config, config.difficulty, &mut rng);
        Self {
            config,
            rng,
            state,
            high_score: 0,
        }
    }

    /// Current game state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Best score reached since the engine was built.
    #[must_use]
    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The target source.
    #[must_use]
    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Commands that paint the current game from scratch.
    ///
    /// The shell applies these once at startup, before any event.
    #[must_use]
    pub fn initial_commands(&self) -> Commands {
        let mut out = Commands::new();
        self.render_fresh(&mut out);
        out.push(Command::SetHighScore(self.high_score));
        out
    }

    /// Apply one event and return the resulting commands.
    pub fn dispatch(&mut self, event: &InputEvent) -> Commands {
        let mut out = Commands::new();
        trace!("{:?} in {:?}", event, self.state.status);

        match event {
            InputEvent::SubmitGuess(_) | InputEvent::KeyPress(..) => {
                // Keys other than Enter do nothing.
                if let Some(text) = event.submitted_text() {
                    self.submit(text, &mut out);
                }
            }
            InputEvent::ChangeDifficulty(difficulty) => {
                out.push(Command::PlaySound(Sound::Click));
                self.initialize(*difficulty, &mut out);
            }
            InputEvent::Reset => {
                out.push(Command::PlaySound(Sound::Click));
                self.initialize(self.state.difficulty, &mut out);
                out.push(Command::ClearInput);
            }
            InputEvent::TimerTick => self.tick(&mut out),
        }
        out
    }

    fn initialize(&mut self, difficulty: Difficulty, out: &mut Commands) {
        self.state = fresh_state(&self.config, difficulty, &mut self.rng);
        debug!(
            "new game: difficulty {}, range 1..={}",
            difficulty, self.state.profile.max_number
        );
        self.render_fresh(out);
    }

    fn render_fresh(&self, out: &mut Commands) {
        let state = &self.state;
        out.extend([
            Command::StopTimer,
            Command::SetMessage(Message::StartGuessing),
            Command::SetScore(state.score),
            Command::SetNumber(NumberDisplay::Hidden),
            Command::SetNumberWidth(NumberWidth::Normal),
            Command::SetPreviousGuess {
                value: None,
                visible: false,
            },
            Command::SetBackground(ColorToken::Neutral),
            Command::SetTime(state.time_remaining),
            Command::SetRange(state.profile.max_number),
            Command::FocusInput,
        ]);
    }

    fn submit(&mut self, text: &str, out: &mut Commands) {
        let parsed = parse_guess(text);

        match self.state.status {
            Status::Over => return,
            Status::Won => {
                if parsed.is_err() {
                    // Non-numeric input after a win starts over completely.
                    self.initialize(self.state.difficulty, out);
                    return;
                }
                self.start_next_round(out);
            }
            Status::Active => {}
        }

        if !self.state.timer_running {
            self.state.timer_running = true;
            out.push(Command::StartTimer);
        }

        match parsed {
            Err(err) => self.reject(&err, out),
            Ok(guess) if guess == i64::from(self.state.target) => self.correct(out),
            Ok(guess) => self.incorrect(guess, out),
        }
        out.push(Command::ClearInput);
    }

    fn start_next_round(&mut self, out: &mut Commands) {
        self.state.status = Status::Active;
        self.state.time_remaining = self.state.profile.timer_seconds;
        debug!("next round, score carried over: {}", self.state.score);
        out.extend([
            Command::SetNumber(NumberDisplay::Hidden),
            Command::SetNumberWidth(NumberWidth::Normal),
            Command::SetTime(self.state.time_remaining),
        ]);
    }

    fn reject(&self, err: &GuessError, out: &mut Commands) {
        debug!("rejected guess: {}", err);
        out.push(Command::SetMessage(Message::NotANumber));
    }

    fn correct(&mut self, out: &mut Commands) {
        let state = &mut self.state;
        let revealed = state.target;
        state.score = state.score.saturating_add(1);
        state.status = Status::Won;
        state.timer_running = false;
        state.target = self.rng.draw(state.profile.max_number);
        debug!("correct guess {}, score {}", revealed, state.score);

        out.extend([
            Command::StopTimer,
            Command::SetMessage(Message::Correct),
            Command::SetBackground(ColorToken::Success),
            Command::SetNumberWidth(NumberWidth::Wide),
            Command::SetScore(state.score),
            Command::SetNumber(NumberDisplay::Revealed(revealed)),
        ]);

        if state.score > self.high_score {
            self.high_score = state.score;
            info!("new high score: {}", self.high_score);
            out.push(Command::SetHighScore(self.high_score));
        }
        out.push(Command::PlaySound(Sound::Correct));
    }

    fn incorrect(&mut self, guess: i64, out: &mut Commands) {
        let state = &mut self.state;

        if state.score > 1 {
            let hint = if guess > i64::from(state.target) {
                Message::TooHigh
            } else {
                Message::TooLow
            };
            state.score -= 1;
            state.previous_guess = Some(guess);
            debug!("wrong guess {}, score {}", guess, state.score);

            out.extend([
                Command::SetMessage(hint),
                Command::SetScore(state.score),
                Command::SetBackground(ColorToken::Neutral),
                Command::SetPreviousGuess {
                    value: Some(guess),
                    visible: true,
                },
            ]);
        } else {
            state.score = 0;
            state.status = Status::Over;
            state.timer_running = false;
            info!("game over: out of guesses");

            out.extend([
                Command::SetScore(0),
                Command::SetMessage(Message::GameOver),
                Command::PlaySound(Sound::GameOver),
                Command::StopTimer,
            ]);
        }
        out.push(Command::PlaySound(Sound::Wrong));
    }

    fn tick(&mut self, out: &mut Commands) {
        let state = &mut self.state;
        if !state.is_active() || !state.timer_running {
            debug!("ignoring stale tick in {:?}", state.status);
            return;
        }

        state.time_remaining = state.time_remaining.saturating_sub(1);
        out.push(Command::SetTime(state.time_remaining));

        if state.time_remaining == 0 {
            state.status = Status::Over;
            state.timer_running = false;
            info!("game over: time is up");

            out.extend([
                Command::StopTimer,
                Command::SetMessage(Message::TimeUp),
                Command::PlaySound(Sound::GameOver),
                Command::SetBackground(ColorToken::Neutral),
            ]);
        }
    }
}

fn fresh_state<R: NumberSource>(config: &GameConfig, difficulty: Difficulty, rng: &mut R) -> GameState {
    let profile = config.profile(difficulty);
    let target = rng.draw(profile.max_number);
    GameState::new(difficulty, profile, target, config.starting_score)
}

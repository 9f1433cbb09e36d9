//! Random target generation.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical target sequence
//! - **Serializable**: O(1) state capture and restore
//! - **Pluggable**: The engine draws through `NumberSource`, so tests can
//!   script exact targets with `ScriptedNumbers`
//!
//! ```
//! use number_guess::core::{GameRng, NumberSource};
//!
//! let mut rng = GameRng::new(42);
//! let target = rng.draw(20);
//! assert!((1..=20).contains(&target));
//!
//! // Same seed, same targets
//! let mut again = GameRng::new(42);
//! assert_eq!(again.draw(20), target);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Source of secret targets.
///
/// `draw(max)` must return a value in `1..=max`. `max` is never zero.
pub trait NumberSource {
    /// Draw a target uniformly from `1..=max`.
    fn draw(&mut self, max: u32) -> u32;
}

/// Seeded RNG backing the default `NumberSource`.
///
/// Uses ChaCha8 for speed while keeping the sequence reproducible per seed.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// Seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl NumberSource for GameRng {
    fn draw(&mut self, max: u32) -> u32 {
        self.inner.gen_range(1..=max.max(1))
    }
}

/// Serializable RNG state for checkpointing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// Replays a fixed list of targets, cycling when exhausted.
///
/// Values are folded into `1..=max`, so a script written for one difficulty
/// stays valid under another.
#[derive(Clone, Debug)]
pub struct ScriptedNumbers {
    values: Vec<u32>,
    next: usize,
}

impl ScriptedNumbers {
    /// Script the given targets. An empty script always draws 1.
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        Self {
            values: values.into(),
            next: 0,
        }
    }

    /// Number of draws made so far.
    #[must_use]
    pub fn draws(&self) -> usize {
        self.next
    }
}

impl NumberSource for ScriptedNumbers {
    fn draw(&mut self, max: u32) -> u32 {
        let max = max.max(1);
        let raw = if self.values.is_empty() {
            1
        } else {
            self.values[self.next % self.values.len()]
        };
        self.next += 1;
        (raw.max(1) - 1) % max + 1
    }
}

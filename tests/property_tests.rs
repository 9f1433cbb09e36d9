//! Property tests over random event sequences.

use proptest::prelude::*;

use number_guess::core::{Difficulty, GameConfig, GameRng, InputEvent, Status, STARTING_SCORE};
use number_guess::rules::GuessEngine;

fn difficulty_strategy() -> impl Strategy<Value = Difficulty> {
    prop::sample::select(Difficulty::ALL.to_vec())
}

fn event_strategy() -> impl Strategy<Value = InputEvent> {
    prop_oneof![
        4 => (-5i64..120).prop_map(|n| InputEvent::guess(n.to_string())),
        1 => "[a-z ]{0,4}".prop_map(InputEvent::guess),
        4 => Just(InputEvent::TimerTick),
        1 => Just(InputEvent::Reset),
        1 => difficulty_strategy().prop_map(InputEvent::ChangeDifficulty),
    ]
}

fn engine(difficulty: Difficulty, seed: u64) -> GuessEngine {
    GuessEngine::new(GameConfig::default().with_difficulty(difficulty), GameRng::new(seed))
}

/// Drive an engine through a random history.
fn played(difficulty: Difficulty, seed: u64, history: &[InputEvent]) -> GuessEngine {
    let mut engine = engine(difficulty, seed);
    for event in history {
        engine.dispatch(event);
    }
    engine
}

proptest! {
    #[test]
    fn prop_initial_target_in_range(difficulty in difficulty_strategy(), seed in any::<u64>()) {
        let engine = engine(difficulty, seed);
        let state = engine.state();
        prop_assert!(state.profile.contains(state.target));
        prop_assert_eq!(state.score, STARTING_SCORE);
        prop_assert_eq!(state.status, Status::Active);
        prop_assert!(!state.timer_running);
    }

    #[test]
    fn prop_invariants_hold_after_every_event(
        difficulty in difficulty_strategy(),
        seed in any::<u64>(),
        events in prop::collection::vec(event_strategy(), 0..120),
    ) {
        let mut engine = engine(difficulty, seed);
        let mut high_score = engine.high_score();

        for event in &events {
            engine.dispatch(event);
            let state = engine.state();

            prop_assert!(state.profile.contains(state.target));
            prop_assert!(state.time_remaining <= state.profile.timer_seconds);
            if state.score == 0 {
                prop_assert_eq!(state.status, Status::Over);
            }
            if state.status != Status::Active {
                prop_assert!(!state.timer_running);
            }
            prop_assert!(engine.high_score() >= high_score);
            high_score = engine.high_score();
        }
    }

    #[test]
    fn prop_guessing_target_wins(
        difficulty in difficulty_strategy(),
        seed in any::<u64>(),
        history in prop::collection::vec(event_strategy(), 0..40),
    ) {
        let mut engine = played(difficulty, seed, &history);
        prop_assume!(engine.state().status == Status::Active);

        let before = engine.state().score;
        let target = engine.state().target;
        engine.dispatch(&InputEvent::guess(target.to_string()));

        prop_assert_eq!(engine.state().status, Status::Won);
        prop_assert_eq!(engine.state().score, before + 1);
        prop_assert!(!engine.state().timer_running);
        prop_assert!(engine.high_score() >= engine.state().score);
    }

    #[test]
    fn prop_wrong_guess_costs_one_point(
        difficulty in difficulty_strategy(),
        seed in any::<u64>(),
        history in prop::collection::vec(event_strategy(), 0..40),
        guess in 1i64..=100,
    ) {
        let mut engine = played(difficulty, seed, &history);
        prop_assume!(engine.state().status == Status::Active);
        prop_assume!(engine.state().score > 1);
        prop_assume!(guess != i64::from(engine.state().target));

        let before = engine.state().score;
        engine.dispatch(&InputEvent::guess(guess.to_string()));

        prop_assert_eq!(engine.state().status, Status::Active);
        prop_assert_eq!(engine.state().score, before - 1);
        prop_assert_eq!(engine.state().previous_guess, Some(guess));
    }

    #[test]
    fn prop_change_difficulty_starts_fresh(
        start in difficulty_strategy(),
        next in difficulty_strategy(),
        seed in any::<u64>(),
        history in prop::collection::vec(event_strategy(), 0..60),
    ) {
        let mut engine = played(start, seed, &history);
        engine.dispatch(&InputEvent::ChangeDifficulty(next));

        let state = engine.state();
        prop_assert_eq!(state.difficulty, next);
        prop_assert_eq!(state.score, STARTING_SCORE);
        prop_assert_eq!(state.status, Status::Active);
        prop_assert!(state.profile.contains(state.target));
        prop_assert!(!state.timer_running);
        prop_assert_eq!(state.previous_guess, None);
        prop_assert_eq!(state.time_remaining, state.profile.timer_seconds);
    }

    #[test]
    fn prop_timer_expiry_is_over(
        difficulty in difficulty_strategy(),
        seed in any::<u64>(),
        first_guess in 1i64..=100,
    ) {
        let mut engine = engine(difficulty, seed);
        engine.dispatch(&InputEvent::guess(first_guess.to_string()));
        prop_assume!(engine.state().status == Status::Active);

        for _ in 0..engine.state().profile.timer_seconds {
            engine.dispatch(&InputEvent::TimerTick);
        }
        prop_assert_eq!(engine.state().status, Status::Over);
        prop_assert_eq!(engine.state().time_remaining, 0);
        prop_assert!(engine.state().score > 0);
    }
}

//! Shell integration tests: command execution, countdown ownership, and the
//! threaded input loop.

use std::io::Cursor;
use std::thread;
use std::time::Duration;

use crossbeam_channel::{unbounded, Sender};

use number_guess::core::{
    Difficulty, DifficultyProfile, DifficultyTable, GameConfig, InputEvent, Key, Message, NumberDisplay,
    ScriptedNumbers, Sound, Status,
};
use number_guess::rules::GuessEngine;
use number_guess::shell::{spawn_reader, RecordingPresenter, Shell, ShellInput};

type TestShell = Shell<ScriptedNumbers, RecordingPresenter>;

fn shell_with(config: GameConfig, targets: &[u32]) -> (TestShell, Sender<ShellInput>) {
    let (tx, rx) = unbounded();
    let engine = GuessEngine::new(config, ScriptedNumbers::new(targets.to_vec()));
    (Shell::new(engine, RecordingPresenter::new(), rx), tx)
}

fn easy_shell(targets: &[u32]) -> (TestShell, Sender<ShellInput>) {
    shell_with(GameConfig::default().with_difficulty(Difficulty::Easy), targets)
}

fn send(tx: &Sender<ShellInput>, event: InputEvent) {
    tx.send(ShellInput::Event(event)).unwrap();
}

// =============================================================================
// Countdown ownership
// =============================================================================

#[test]
fn test_first_guess_starts_countdown() {
    let (mut shell, _tx) = easy_shell(&[7]);
    assert!(!shell.countdown().is_running());

    shell.handle(&InputEvent::guess("3")).unwrap();
    assert!(shell.countdown().is_running());
    // Timer commands never reach the presenter.
    assert!(!shell.presenter().commands.iter().any(|c| c.is_timer()));
}

#[test]
fn test_transitions_cancel_countdown() {
    let (mut shell, _tx) = easy_shell(&[7, 9, 11, 13]);

    shell.handle(&InputEvent::guess("3")).unwrap();
    shell.handle(&InputEvent::Reset).unwrap();
    assert!(!shell.countdown().is_running());

    shell.handle(&InputEvent::guess("3")).unwrap();
    shell.handle(&InputEvent::ChangeDifficulty(Difficulty::Hard)).unwrap();
    assert!(!shell.countdown().is_running());

    shell.handle(&InputEvent::guess("1")).unwrap();
    let target = shell.engine().state().target;
    shell.handle(&InputEvent::guess(target.to_string())).unwrap();
    assert_eq!(shell.engine().state().status, Status::Won);
    assert!(!shell.countdown().is_running());
}

#[test]
fn test_game_over_cancels_countdown() {
    let config = GameConfig::default().with_starting_score(1);
    let (mut shell, _tx) = shell_with(config, &[7]);

    shell.handle(&InputEvent::guess("2")).unwrap();
    assert_eq!(shell.engine().state().status, Status::Over);
    assert!(!shell.countdown().is_running());
    assert_eq!(shell.presenter().screen.score, 0);
    assert_eq!(shell.presenter().screen.message, Message::GameOver);
}

#[test]
fn test_each_batch_flushes_once() {
    let (mut shell, _tx) = easy_shell(&[7]);
    shell.handle(&InputEvent::guess("3")).unwrap();
    shell.handle(&InputEvent::guess("4")).unwrap();
    // Ignored events produce no batch.
    shell.handle(&InputEvent::KeyPress(Key::Other, "x".into())).unwrap();
    assert_eq!(shell.presenter().flushes, 2);
}

// =============================================================================
// Event loop
// =============================================================================

#[test]
fn test_run_paints_then_plays() {
    let (mut shell, tx) = easy_shell(&[7, 3]);
    send(&tx, InputEvent::KeyPress(Key::Enter, "10".into()));
    send(&tx, InputEvent::KeyPress(Key::Enter, "7".into()));
    tx.send(ShellInput::Quit).unwrap();

    shell.run().unwrap();

    let screen = &shell.presenter().screen;
    assert_eq!(screen.range_max, 20);
    assert_eq!(screen.message, Message::Correct);
    assert_eq!(screen.number, NumberDisplay::Revealed(7));
    assert_eq!(screen.score, 20);
    assert_eq!(screen.high_score, 20);
    assert_eq!(screen.previous_guess, Some(10));
    assert_eq!(shell.presenter().sounds(), vec![Sound::Wrong, Sound::Correct]);
    assert!(!shell.countdown().is_running());
}

#[test]
fn test_run_stops_when_input_closes() {
    let (mut shell, tx) = easy_shell(&[7]);
    send(&tx, InputEvent::guess("5"));
    drop(tx);

    shell.run().unwrap();
    assert_eq!(shell.engine().state().score, 19);
}

#[test]
fn test_unknown_input_is_a_notice() {
    let (mut shell, tx) = easy_shell(&[7]);
    tx.send(ShellInput::Unknown(":dance".into())).unwrap();
    tx.send(ShellInput::Quit).unwrap();

    shell.run().unwrap();
    assert_eq!(shell.presenter().notices.len(), 1);
    assert!(shell.presenter().notices[0].contains(":dance"));
}

#[test]
fn test_countdown_runs_out_in_real_time() {
    let mut config = GameConfig::default()
        .with_difficulty(Difficulty::Easy)
        .with_tick_millis(5);
    config.difficulties = DifficultyTable {
        easy: DifficultyProfile::new(20, 3),
        ..DifficultyTable::default()
    };
    let (mut shell, tx) = shell_with(config, &[7]);

    let handle = thread::spawn(move || {
        shell.run().unwrap();
        shell
    });

    send(&tx, InputEvent::guess("2"));
    thread::sleep(Duration::from_millis(300));
    tx.send(ShellInput::Quit).unwrap();
    let shell = handle.join().unwrap();

    assert_eq!(shell.engine().state().status, Status::Over);
    assert_eq!(shell.engine().state().time_remaining, 0);
    assert_eq!(shell.presenter().screen.message, Message::TimeUp);
    assert_eq!(shell.presenter().screen.time, 0);
    assert!(!shell.countdown().is_running());
}

#[test]
fn test_reset_mid_countdown_restores_clock() {
    let config = GameConfig::default()
        .with_difficulty(Difficulty::Easy)
        .with_tick_millis(5);
    let (mut shell, tx) = shell_with(config, &[7, 8]);

    let handle = thread::spawn(move || {
        shell.run().unwrap();
        shell
    });

    send(&tx, InputEvent::guess("2"));
    thread::sleep(Duration::from_millis(60));
    send(&tx, InputEvent::Reset);
    thread::sleep(Duration::from_millis(60));
    tx.send(ShellInput::Quit).unwrap();
    let shell = handle.join().unwrap();

    let state = shell.engine().state();
    assert_eq!(state.status, Status::Active);
    assert_eq!(state.time_remaining, 45);
    assert_eq!(state.target, 8);
    assert_eq!(shell.presenter().screen.time, 45);
}

#[test]
fn test_garbled_line_is_not_a_number() {
    let (mut shell, tx) = easy_shell(&[7, 3]);
    spawn_reader(Cursor::new(&b"5\n\xff\xfe\n7\n"[..]), tx).join().unwrap();

    shell.run().unwrap();

    let messages: Vec<_> = shell
        .presenter()
        .commands
        .iter()
        .filter_map(|c| match c {
            number_guess::core::Command::SetMessage(m) => Some(*m),
            _ => None,
        })
        .collect();
    assert_eq!(
        messages,
        vec![Message::StartGuessing, Message::TooLow, Message::NotANumber, Message::Correct]
    );
    assert_eq!(shell.engine().state().status, Status::Won);
}

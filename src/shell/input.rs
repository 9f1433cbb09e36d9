//! Line-based input source.
//!
//! Each line typed at the terminal is one event. Plain text is the guess
//! field contents followed by Enter; lines starting with `:` are buttons:
//!
//! | line                          | event                       |
//! |-------------------------------|-----------------------------|
//! | `12`, `abc`, ``               | `KeyPress(Enter, text)`     |
//! | `:reset`, `:again`            | `Reset`                     |
//! | `:easy`, `:medium`, `:hard`   | `ChangeDifficulty`          |
//! | `:difficulty <label>`         | `ChangeDifficulty`          |
//! | `:quit`, `:q`, `:exit`        | stop the shell              |

use std::io::{BufRead, ErrorKind};
use std::thread;

use crossbeam_channel::Sender;
use log::{debug, warn};

use super::ShellError;
use crate::core::{Difficulty, InputEvent, Key};

/// What the input source delivers to the shell loop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShellInput {
    Event(InputEvent),
    /// Input line the shell could not interpret.
    Unknown(String),
    Quit,
}

/// Interpret one input line.
pub fn parse_line(line: &str) -> Result<ShellInput, ShellError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let Some(command) = line.trim().strip_prefix(':') else {
        return Ok(ShellInput::Event(InputEvent::KeyPress(Key::Enter, line.to_string())));
    };

    let mut words = command.split_whitespace();
    let input = match (words.next(), words.next()) {
        (Some("reset" | "again"), None) => ShellInput::Event(InputEvent::Reset),
        (Some("quit" | "q" | "exit"), None) => ShellInput::Quit,
        (Some("difficulty"), Some(label)) => ShellInput::Event(InputEvent::ChangeDifficulty(label.parse()?)),
        (Some(label), None) => match label.parse::<Difficulty>() {
            Ok(difficulty) => ShellInput::Event(InputEvent::ChangeDifficulty(difficulty)),
            Err(_) => ShellInput::Unknown(line.to_string()),
        },
        _ => ShellInput::Unknown(line.to_string()),
    };
    Ok(input)
}

/// Read lines from `reader` on a background thread and forward them.
///
/// Lines are decoded lossily, so bytes that are not UTF-8 reach the engine
/// as an unusable guess instead of ending the session. The thread sends
/// `Quit` at end of input or on an I/O error and exits when the receiving
/// side is gone.
pub fn spawn_reader<B>(mut reader: B, tx: Sender<ShellInput>) -> thread::JoinHandle<()>
where
    B: BufRead + Send + 'static,
{
    thread::spawn(move || {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf) {
                Ok(0) => break,
                Ok(_) => {}
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => {
                    warn!("input closed: {}", err);
                    break;
                }
            }

            let line = String::from_utf8_lossy(&buf);
            let input = parse_line(&line).unwrap_or_else(|err| {
                debug!("bad input line: {}", err);
                ShellInput::Unknown(line.trim_end_matches(['\r', '\n']).to_string())
            });
            if tx.send(input).is_err() {
                return;
            }
        }
        let _ = tx.send(ShellInput::Quit);
    })
}

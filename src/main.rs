//! Terminal front end for the guess-the-number engine.

use std::io;

use crossbeam_channel::unbounded;
use log::info;

use number_guess::core::GameRng;
use number_guess::rules::GuessEngine;
use number_guess::shell::{args::USAGE, spawn_reader, CliArgs, Shell, ShellError, TerminalPresenter};

fn main() -> Result<(), ShellError> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args = CliArgs::parse(std::env::args().skip(1))?;
    if args.help {
        println!("{}", USAGE);
        return Ok(());
    }

    let config = args.to_config()?;
    info!("config: {:?}", config);

    let (tx, rx) = unbounded();
    // Detached: it blocks on stdin and exits with the process.
    let _reader = spawn_reader(io::BufReader::new(io::stdin()), tx);

    let presenter = TerminalPresenter::new(io::stdout()).with_bell(args.bell);
    let mut shell = Shell::new(GuessEngine::<GameRng>::from_config(config)?, presenter, rx);
    shell.run()
}

//! Command-line arguments for the terminal binary.

use std::path::PathBuf;

use super::ShellError;
use crate::core::{Difficulty, GameConfig};

pub const USAGE: &str = "\
usage: number-guess [--config <file.json>] [--difficulty easy|medium|hard] [--seed <n>] [--bell]

Type a number and press Enter to guess.
Commands: :reset  :easy  :medium  :hard  :difficulty <label>  :quit";

/// Parsed command line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub config: Option<PathBuf>,
    pub difficulty: Option<Difficulty>,
    pub seed: Option<u64>,
    pub bell: bool,
    pub help: bool,
}

impl CliArgs {
    /// Parse arguments, excluding the program name.
    pub fn parse<I, S>(args: I) -> Result<Self, ShellError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut parsed = CliArgs::default();
        let mut args = args.into_iter().map(Into::into);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => parsed.help = true,
                "--bell" => parsed.bell = true,
                "-c" | "--config" => parsed.config = Some(PathBuf::from(value(&arg, args.next())?)),
                "-d" | "--difficulty" => parsed.difficulty = Some(value(&arg, args.next())?.parse::<Difficulty>()?),
                "-s" | "--seed" => {
                    let raw = value(&arg, args.next())?;
                    let seed: u64 = raw
                        .parse()
                        .map_err(|_| ShellError::Usage(format!("invalid seed `{}`", raw)))?;
                    parsed.seed = Some(seed);
                }
                other => return Err(ShellError::Usage(format!("unexpected argument `{}`", other))),
            }
        }
        Ok(parsed)
    }

    /// Load the config file, if any, then apply the overrides.
    pub fn to_config(&self) -> Result<GameConfig, ShellError> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_json_file(path)?,
            None => GameConfig::default(),
        };
        if let Some(difficulty) = self.difficulty {
            config = config.with_difficulty(difficulty);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        Ok(config)
    }
}

fn value(flag: &str, next: Option<String>) -> Result<String, ShellError> {
    next.ok_or_else(|| ShellError::Usage(format!("{} needs a value", flag)))
}

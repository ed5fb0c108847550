use std::path::PathBuf;

use crate::error::{Error, Result};

/// Size given by `touch` when the command does not name one.
pub const DEFAULT_FILE_SIZE: u64 = 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub debug: bool,
    pub load_sample: bool,
    pub json: bool,
    pub quiet: bool,
    pub default_size: u64,
    pub script: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            debug: false,
            load_sample: false,
            json: false,
            quiet: false,
            default_size: DEFAULT_FILE_SIZE,
            script: None,
        }
    }
}

impl Config {
    pub fn from_matches(matches: &clap::ArgMatches) -> Result<Config> {
        let default_size = match matches.value_of("default-size") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                Error::CliInputError(format!(
                    "--default-size expects a number of bytes, got '{}'",
                    raw
                ))
            })?,
            None => DEFAULT_FILE_SIZE,
        };

        Ok(Config {
            debug: matches.is_present("debug"),
            load_sample: matches.is_present("sample"),
            json: matches.is_present("json"),
            quiet: matches.is_present("quiet"),
            default_size,
            script: matches.value_of("script").map(PathBuf::from),
        })
    }
}

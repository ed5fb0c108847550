use std::fs::File;
use std::io::{BufReader, Result as IoResult};
use std::path::Path;

use tracing_subscriber::EnvFilter;

use crate::error::{Error, Result};

/// Overrides the log filter, e.g. `FSNAV_LOG=fstree=trace`.
pub const LOG_ENV: &str = "FSNAV_LOG";

pub fn initialize_logging(debug: bool) -> Result<()> {
    let default_level = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|err| Error::LoggingError(err.to_string()))
}

pub fn get_file_reader(filename: &Path) -> IoResult<BufReader<File>> {
    let file = File::open(filename)?;
    Ok(BufReader::new(file))
}

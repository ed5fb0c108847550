extern crate fsnav;

use std::io;

use fsnav::command::Command;
use fsnav::config::Config;
use fsnav::session::Session;

fn main() -> Result<(), fsnav::error::Error> {
    let matches = fsnav::cli::parse_flags();
    let config = Config::from_matches(&matches)?;

    fsnav::utils::initialize_logging(config.debug)?;
    tracing::debug!(?config, "starting");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut session = Session::new(config.clone());

    if config.load_sample {
        session.execute(Command::Sample, &mut out)?;
    }

    match &config.script {
        Some(path) => {
            let reader = fsnav::utils::get_file_reader(path)?;
            session.run(reader, &mut out)?;
        }
        None => {
            let stdin = io::stdin();
            session.run(stdin.lock(), &mut out)?;
        }
    }
    Ok(())
}

use std::io;

use minesweeper_console::{Result, config::Config, session};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // The game owns stdout, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = Config::from_env();
    let outcome = session::run(&config)?;
    info!("Exiting after {:?} game", outcome);

    Ok(())
}

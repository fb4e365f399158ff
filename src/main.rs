mod cli;
mod command;
mod config;
mod logger;

use anyhow::Result;
use tracing::info;

fn main() -> Result<()> {
    let _guard = logger::init();
    info!(args = ?std::env::args().skip(1).collect::<Vec<_>>(), "cli:start");
    cli::run()
}

use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use braille_spinners::SpinnerName;

use crate::command;
use crate::config::Config;

#[derive(Parser)]
#[command(name = "braille-spinners")]
#[command(about = "Animated terminal spinners built from braille dot grids")]
#[command(version)]
struct Cli {
    /// Path to a YAML config file (defaults to the XDG config location)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List every spinner with its first frame, frame count and interval
    #[command(visible_alias = "ls")]
    List,

    /// Animate one spinner, or cycle through all of them
    Play {
        /// Spinner to play (cycles through all when omitted)
        name: Option<SpinnerName>,

        /// Stop after this many full passes
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
        cycles: Option<u32>,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },

    /// Print the frames of one spinner
    Frames {
        name: SpinnerName,

        /// Print the spinner as JSON
        #[arg(long)]
        json: bool,
    },

    /// Short showcase of the classic spinners
    Banner,

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Some(Commands::Completions { shell }) = cli.command {
        clap_complete::generate(
            shell,
            &mut Cli::command(),
            "braille-spinners",
            &mut std::io::stdout(),
        );
        return Ok(());
    }

    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        None => command::play::run(&config, None, None, true),
        Some(Commands::List) => command::list::run(&config),
        Some(Commands::Play {
            name,
            cycles,
            no_color,
        }) => command::play::run(&config, name, cycles, !no_color),
        Some(Commands::Frames { name, json }) => command::frames::run(name, json),
        Some(Commands::Banner) => {
            command::banner::run(&config);
            Ok(())
        }
        Some(Commands::Completions { .. }) => unreachable!(),
    }
}

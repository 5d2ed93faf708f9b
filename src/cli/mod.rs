//! Command line options

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use log::LevelFilter;

/// Settings the binary runs with
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub color: bool,
    pub log_level: LevelFilter,
}

impl Config {
    /// Parse the process arguments
    pub fn from_args() -> Self {
        Cli::parse().into()
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "structure-menu",
    about = "Push, pop and persist a stack, queue or list of characters",
    version
)]
pub struct Cli {
    /// Directory holding stack.txt, queue.txt and list.txt
    #[arg(short = 'd', long = "data-dir", value_name = "DIR", default_value = ".")]
    pub data_dir: PathBuf,

    /// Print the menu without ANSI colours
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Increase logging verbosity (repeat for more detail)
    #[arg(short = 'v', action = ArgAction::Count)]
    pub verbosity: u8,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        let log_level = match cli.verbosity {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        };

        Config {
            data_dir: cli.data_dir,
            color: !cli.no_color,
            log_level,
        }
    }
}

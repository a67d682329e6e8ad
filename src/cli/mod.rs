use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod check;
mod clean;
mod config;
mod sample;
mod template;

pub use config::Config;

/// saf - Prepare DSpace Simple Archive Format imports from CSV metadata
#[derive(Parser)]
#[command(name = "saf")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Load settings from a TOML config file
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a blank CSV metadata template to standard output
    Template,

    /// Generate a sample archive with blank or pre-filled metadata sheets
    Sample {
        /// Archive directory to create (must not exist)
        #[arg(value_name = "DIR")]
        dir: PathBuf,

        /// Use FILE as the metadata sheet of every item
        #[arg(short = 's', long = "source", value_name = "FILE")]
        source: Option<PathBuf>,

        /// Number of item directories to create (default: 3)
        #[arg(short = 'n', long = "number-of-items", value_name = "NUM")]
        number_of_items: Option<usize>,
    },

    /// Convert CSV metadata to XML and write contents manifests
    Clean {
        /// Archive directory to clean
        #[arg(value_name = "DIR")]
        dir: PathBuf,

        /// Report failing items and continue instead of stopping
        #[arg(long)]
        keep_going: bool,
    },

    /// Check an archive's manifests and metadata files
    Check {
        /// Archive directory to check
        #[arg(value_name = "DIR")]
        dir: PathBuf,
    },
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    match cli.command {
        Commands::Template => template::run(),
        Commands::Sample {
            dir,
            source,
            number_of_items,
        } => sample::run(dir, source, number_of_items, &config),
        Commands::Clean { dir, keep_going } => clean::run(dir, keep_going, &config),
        Commands::Check { dir } => check::run(dir),
    }
}

//! # SAF Toolkit
//!
//! A command-line tool for preparing DSpace Simple Archive Format imports
//! from CSV metadata sheets.
//!
//! ## Usage
//!
//! ```bash
//! # Print a blank metadata template
//! saf template > dublin_core.csv
//!
//! # Scaffold an archive with five items, each seeded from a filled sheet
//! saf sample archive -n 5 -s dublin_core.csv
//!
//! # Derive contents manifests and dublin_core.xml files
//! saf clean archive
//!
//! # Check the archive before import
//! saf check archive
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::init_logging(cli.verbosity());
    cli::dispatch(cli)
}

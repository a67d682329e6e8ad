use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

use saf::validator::check_archive;

/// Check an archive and print the report
pub fn run(dir: PathBuf) -> Result<()> {
    info!("Checking archive {}", dir.display());

    let report = check_archive(&dir)
        .with_context(|| format!("Failed to check archive {}", dir.display()))?;

    #[cfg(feature = "colorized_output")]
    {
        println!("{}", report.format_colored());
    }

    #[cfg(not(feature = "colorized_output"))]
    {
        println!("{}", report);
    }

    // Exit with error code if any check failed
    if report.has_failures() {
        std::process::exit(1);
    }

    Ok(())
}

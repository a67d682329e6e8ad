use anyhow::{Context, Result};
use std::path::PathBuf;

use saf::archive::{clean_archive, CleanOptions};

use super::Config;

/// Clean an archive and print a summary
pub fn run(dir: PathBuf, keep_going: bool, config: &Config) -> Result<()> {
    let options = CleanOptions {
        keep_going: keep_going || config.clean.keep_going.unwrap_or(false),
    };

    let report = clean_archive(&dir, &options)
        .with_context(|| format!("Failed to clean archive {}", dir.display()))?;

    println!("Archive: {}", dir.display());
    println!("  Items:               {}", report.items_seen);
    println!("  Manifests written:   {}", report.manifests_written);
    println!("  XML files written:   {}", report.xml_written);

    if !report.failures.is_empty() {
        println!("  Failed items:        {}", report.failures.len());
        for failure in &report.failures {
            eprintln!("    {}: {}", failure.item.display(), failure.error);
        }
        anyhow::bail!("{} item(s) could not be cleaned", report.failures.len());
    }

    Ok(())
}

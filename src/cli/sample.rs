use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

use saf::archive::{generate_sample_archive, DEFAULT_ITEM_COUNT};

use super::Config;

/// Generate a sample archive
pub fn run(
    dir: PathBuf,
    source: Option<PathBuf>,
    number_of_items: Option<usize>,
    config: &Config,
) -> Result<()> {
    let source = source.or_else(|| config.sample.source.clone());
    let item_count = number_of_items
        .or(config.sample.item_count)
        .unwrap_or(DEFAULT_ITEM_COUNT);

    if let Some(src) = &source {
        info!("Seeding items from {}", src.display());
    }

    let items = generate_sample_archive(&dir, source.as_deref(), item_count)
        .with_context(|| format!("Failed to generate sample archive in {}", dir.display()))?;

    println!("Created {} item(s) in {}", items.len(), dir.display());
    Ok(())
}

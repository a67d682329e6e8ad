use anyhow::{Context, Result};
use std::io::{self, Write};

use saf::metadata::default_template;

/// Print the catalog template to standard output
pub fn run() -> Result<()> {
    let template = default_template().context("Failed to generate template")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    out.write_all(template.as_bytes())
        .context("Failed to write template")?;
    out.flush()?;
    Ok(())
}

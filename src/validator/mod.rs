//! # Archive checks
//!
//! Read-only inspection of a Simple Archive Format tree before it is handed
//! to the repository's batch importer. Checks are syntactic: files exist,
//! manifests match the item directory, and metadata parses. Metadata values
//! are not checked against any schema.
//!
//! ## Checklist (per item)
//!
//! 1. **Manifest**: `contents` exists and every listed bitstream is present
//! 2. **Source sheet**: `dublin_core.csv`, if present, loads
//! 3. **Metadata document**: `dublin_core.xml` exists and is well-formed
//!
//! ## Usage
//!
//! ```rust,no_run
//! use saf::validator::check_archive;
//!
//! let report = check_archive("archive")?;
//! println!("{}", report);
//! # Ok::<(), saf::archive::ArchiveError>(())
//! ```

use std::path::Path;

use crate::archive::{item_dirs, ArchiveError};

pub use report::{CheckStatus, ValidationCheck, ValidationReport};

mod metadata;
mod report;
mod structure;


/// Run every check over every item directory under `root`.
///
/// Only a missing or unreadable root is an error; problems inside items are
/// recorded in the report.
pub fn check_archive<P: AsRef<Path>>(root: P) -> Result<ValidationReport, ArchiveError> {
    let root = root.as_ref();
    let items = item_dirs(root)?;
    let mut report = ValidationReport::new(root.display().to_string());

    if items.is_empty() {
        report.add_check(ValidationCheck::warning(
            "Items",
            "no item_NNN directories found",
        ));
    } else {
        report.add_check(ValidationCheck::ok(format!("Items: {}", items.len())));
    }

    for item in &items {
        let label = item
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        structure::check_contents(item, &label, &mut report);
        metadata::check_metadata(item, &label, &mut report);
    }

    Ok(report)
}

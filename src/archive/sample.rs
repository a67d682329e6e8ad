//! Scaffold a new archive with blank (or pre-filled) metadata sheets.

use log::{debug, info};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::layout::{item_dir_name, METADATA_CSV};
use super::ArchiveError;
use crate::metadata::default_template;

/// Default number of items in a generated archive
pub const DEFAULT_ITEM_COUNT: usize = 3;

enum SheetSource<'a> {
    Template(String),
    Copy(&'a Path),
}

/// Create `dir` with `item_count` item directories, each holding a
/// `dublin_core.csv`.
///
/// The sheet is a copy of `source` when given, otherwise the blank catalog
/// template. `dir` must not exist yet. Directories created before a
/// failure are left in place.
pub fn generate_sample_archive<P: AsRef<Path>>(
    dir: P,
    source: Option<&Path>,
    item_count: usize,
) -> Result<Vec<PathBuf>, ArchiveError> {
    let dir = dir.as_ref();
    if dir.exists() {
        return Err(ArchiveError::AlreadyExists(dir.to_path_buf()));
    }

    let sheet_source = match source {
        Some(src) if !src.is_file() => return Err(ArchiveError::NotFound(src.to_path_buf())),
        Some(src) => SheetSource::Copy(src),
        None => SheetSource::Template(default_template()?),
    };

    fs::create_dir(dir).map_err(|e| match e.kind() {
        io::ErrorKind::AlreadyExists => ArchiveError::AlreadyExists(dir.to_path_buf()),
        _ => ArchiveError::IoError {
            path: dir.to_path_buf(),
            source: e,
        },
    })?;
    info!("Creating sample archive {} with {} item(s)", dir.display(), item_count);

    let mut items = Vec::with_capacity(item_count);
    for sequence in 1..=item_count {
        let item_dir = dir.join(item_dir_name(sequence));
        fs::create_dir(&item_dir).map_err(ArchiveError::io(&item_dir))?;

        let sheet = item_dir.join(METADATA_CSV);
        match &sheet_source {
            SheetSource::Template(text) => {
                fs::write(&sheet, text).map_err(ArchiveError::io(&sheet))?;
            }
            SheetSource::Copy(src) => {
                fs::copy(src, &sheet).map_err(ArchiveError::io(&sheet))?;
            }
        }
        debug!("Wrote {}", sheet.display());

        items.push(item_dir);
    }

    Ok(items)
}

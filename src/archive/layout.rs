//! Names and patterns of the Simple Archive Format directory layout.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

use super::ArchiveError;

/// Source metadata sheet inside an item directory
pub const METADATA_CSV: &str = "dublin_core.csv";

/// Derived metadata document inside an item directory
pub const METADATA_XML: &str = "dublin_core.xml";

/// Derived bitstream manifest inside an item directory
pub const CONTENTS_FILE: &str = "contents";

static ITEM_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"item_[0-9]{3}$").expect("item name pattern is valid"));

// Metadata files and the manifest are never bitstreams
static EXCLUDED_FROM_CONTENTS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:(?:dublin_core|metadata_[^.]+)\.(?:csv|xml)|contents)$")
        .expect("exclusion pattern is valid")
});

/// Directory name for the item with the given 1-based sequence number
pub fn item_dir_name(sequence: usize) -> String {
    format!("item_{:03}", sequence)
}

/// Whether a directory name denotes an item (`item_` plus three digits at the end)
pub fn is_item_dir_name(name: &str) -> bool {
    ITEM_NAME.is_match(name)
}

/// Whether a file in an item directory is left out of its `contents` manifest
pub fn is_excluded_from_contents(name: &str) -> bool {
    EXCLUDED_FROM_CONTENTS.is_match(name)
}

/// List the item directories directly under `root`, sorted by name.
///
/// Fails if `root` is missing or not a directory. Non-item entries and
/// anything below the item level are ignored.
pub fn item_dirs(root: &Path) -> Result<Vec<PathBuf>, ArchiveError> {
    if !root.exists() {
        return Err(ArchiveError::NotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(ArchiveError::NotADirectory(root.to_path_buf()));
    }

    let mut items = Vec::new();
    for entry in fs::read_dir(root).map_err(ArchiveError::io(root))? {
        let entry = entry.map_err(ArchiveError::io(root))?;
        let path = entry.path();
        let is_item = entry
            .file_name()
            .to_str()
            .map(is_item_dir_name)
            .unwrap_or(false);

        if is_item && path.is_dir() {
            items.push(path);
        }
    }

    items.sort();
    Ok(items)
}

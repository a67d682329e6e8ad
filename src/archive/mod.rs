//! # Simple Archive Format trees
//!
//! An archive is a directory of numbered item directories:
//!
//! ```text
//! archive/
//! ├── item_001/
//! │   ├── dublin_core.csv   (curator-edited source sheet)
//! │   ├── dublin_core.xml   (derived by cleaning)
//! │   ├── contents          (derived by cleaning)
//! │   └── bitstream.pdf
//! └── item_002/
//!     └── ...
//! ```
//!
//! [`generate_sample_archive`] scaffolds a tree for curators to fill in and
//! [`clean_archive`] derives the files the repository's batch importer
//! needs. Only the first level below the root is ever looked at.

mod clean;
mod error;
pub mod layout;
mod sample;

#[cfg(test)]
mod tests;

pub use clean::{
    bitstream_names, clean_archive, clean_item, CleanOptions, CleanReport, ItemFailure,
    ItemOutcome,
};
pub use error::ArchiveError;
pub use layout::{item_dirs, CONTENTS_FILE, METADATA_CSV, METADATA_XML};
pub use sample::{generate_sample_archive, DEFAULT_ITEM_COUNT};

//! # saf - Dublin Core metadata for DSpace Simple Archive Format
//!
//! `saf` converts bibliographic metadata between spreadsheet-friendly CSV
//! sheets and the `dublin_core.xml` documents read by DSpace's batch
//! importer, and manages the Simple Archive Format (SAF) directory trees
//! those documents live in.
//!
//! ## Key Features
//!
//! - **CSV templates**: Sorted, Excel-compatible sheets listing the common
//!   Dublin Core tags, ready for curators to fill in.
//!
//! - **Forgiving import**: Rows left blank are skipped, so a partially
//!   filled template loads as-is. Unknown tags are passed through.
//!
//! - **Faithful XML**: Element order and repeated tags are preserved, and
//!   every value is escaped so the document parses back to the same text.
//!
//! - **Idempotent cleaning**: Deriving `contents` manifests and XML
//!   metadata never overwrites existing files.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use saf::archive::{clean_archive, generate_sample_archive, CleanOptions};
//!
//! // Scaffold three items with blank metadata sheets
//! generate_sample_archive("archive", None, 3)?;
//!
//! // ... curators fill in archive/item_*/dublin_core.csv and add files ...
//!
//! let report = clean_archive("archive", &CleanOptions::default())?;
//! println!("Wrote {} metadata documents", report.xml_written);
//! # Ok::<(), saf::archive::ArchiveError>(())
//! ```
//!
//! ## Working With Records
//!
//! ```rust
//! use saf::metadata::MetadataRecord;
//!
//! let sheet = "Dublin core element,Metadata value,Language code,Comment\r\n\
//!              dc.title,Sample Title,en,\r\n\
//!              dc.date.issued,,,\r\n";
//!
//! let record = MetadataRecord::from_csv_str(sheet)?;
//! assert_eq!(record.len(), 1);
//!
//! let xml = record.to_xml()?;
//! assert!(xml.contains(r#"<dcvalue element="title" language="en">Sample Title</dcvalue>"#));
//! # Ok::<(), saf::metadata::MetadataError>(())
//! ```
//!
//! ## Architecture
//!
//! - [`metadata`]: Elements, records, the tag catalog, CSV and XML codecs
//! - [`archive`]: Sample archive generation and archive cleaning
//! - [`validator`]: Read-only checks over an archive tree

// Documentation lints - enforce complete documentation for publication
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod archive;
pub mod metadata;
pub mod validator;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::archive::{
        clean_archive, generate_sample_archive, ArchiveError, CleanOptions, CleanReport,
    };
    pub use crate::metadata::{
        default_template, generate_template, MetadataElement, MetadataError, MetadataRecord,
        EXPECTED_TAGS,
    };
    pub use crate::validator::{check_archive, ValidationReport};
}

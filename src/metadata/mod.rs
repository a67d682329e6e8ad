//! # Dublin Core metadata
//!
//! This module handles the metadata side of a Simple Archive Format item:
//! qualified Dublin Core values, the CSV sheets curators fill in, and the
//! `dublin_core.xml` documents the repository ingests.
//!
//! ## Names
//!
//! Every value carries a dotted name, `schema.element[.qualifier]`:
//!
//! | Name | Schema | Element | Qualifier |
//! |------|--------|---------|-----------|
//! | `dc.title` | `dc` | `title` | none |
//! | `dc.contributor.author` | `dc` | `contributor` | `author` |
//!
//! Names are checked when a [`MetadataElement`] is built, so the accessors
//! never fail.
//!
//! ## Sheets
//!
//! CSV sheets use the Excel dialect (CRLF, minimal `"` quoting) with a
//! header row followed by `tag, value, language, comment` rows. Rows left
//! blank in the value column are dropped on import, which lets a partially
//! filled template be loaded directly.

mod catalog;
pub(crate) mod csv_dialect;
mod element;
mod error;
mod record;
mod xml;


pub use catalog::{EXPECTED_TAGS, EXPECTED_TAG_LIST};
pub use element::MetadataElement;
pub use error::MetadataError;
pub use record::{default_template, generate_template, MetadataRecord, TEMPLATE_HEADER};
pub use xml::{DEFAULT_SCHEMA, ROOT_TAG, VALUE_TAG};

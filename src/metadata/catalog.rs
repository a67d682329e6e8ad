//! Dublin Core tags used to seed CSV templates.
//!
//! The catalog only affects template generation. Imported sheets may carry
//! any tag name, recognised or not.

use once_cell::sync::Lazy;
use std::collections::BTreeMap;

/// Recognised tag names, each with an optional comment for the template's
/// `Comment` column.
pub const EXPECTED_TAG_LIST: &[(&str, Option<&str>)] = &[
    ("dc.contributor", None),
    ("dc.contributor.affiliation", None),
    ("dc.contributor.author", None),
    ("dc.contributor.editor", None),
    ("dc.contributor.other", None),
    ("dc.coverage.spatial", None),
    ("dc.date.copyright", None),
    ("dc.date.created", None),
    ("dc.date.issued", None),
    ("dc.description.abstract", None),
    ("dc.description.provenance", None),
    ("dc.description.sponsorship", None),
    ("dc.description.version", None),
    ("dc.format.medium", None),
    ("dc.identifier.citation", None),
    ("dc.identifier.isbn", None),
    ("dc.identifier.issn", None),
    ("dc.language.iso", None),
    ("dc.publisher", None),
    ("dc.relation.ispartofseries", None),
    ("dc.rights", None),
    ("dc.rights.holder", None),
    ("dc.subject", None),
    ("dc.submitter.submitter", None),
    ("dc.title", None),
    ("dc.type", None),
];

/// The tag catalog as a sorted map, built once on first use.
pub static EXPECTED_TAGS: Lazy<BTreeMap<&'static str, Option<&'static str>>> =
    Lazy::new(|| EXPECTED_TAG_LIST.iter().copied().collect());

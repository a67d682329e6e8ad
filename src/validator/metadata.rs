use std::fs;
use std::path::Path;

use crate::archive::{METADATA_CSV, METADATA_XML};
use crate::metadata::MetadataRecord;

use super::{ValidationCheck, ValidationReport};

/// Check that an item's metadata sheet loads and its XML document parses.
pub(crate) fn check_metadata(item: &Path, label: &str, report: &mut ValidationReport) {
    let csv_path = item.join(METADATA_CSV);
    let has_sheet = csv_path.is_file();

    if has_sheet {
        let name = format!("{}: {}", label, METADATA_CSV);
        match MetadataRecord::from_csv_file(&csv_path) {
            Ok(_) => report.add_check(ValidationCheck::ok(name)),
            Err(e) => report.add_check(ValidationCheck::failed(name, e.to_string())),
        }
    }

    let name = format!("{}: {}", label, METADATA_XML);
    let xml_path = item.join(METADATA_XML);
    if !xml_path.exists() {
        let message = if has_sheet {
            "missing (run clean)"
        } else {
            "missing, and no dublin_core.csv to derive it from"
        };
        report.add_check(ValidationCheck::warning(name, message));
        return;
    }

    let parsed = fs::read_to_string(&xml_path)
        .map_err(|e| e.to_string())
        .and_then(|xml| MetadataRecord::from_xml(&xml).map_err(|e| e.to_string()));

    match parsed {
        Ok(record) if record.is_empty() => {
            report.add_check(ValidationCheck::warning(name, "no metadata values"));
        }
        Ok(_) => report.add_check(ValidationCheck::ok(name)),
        Err(message) => report.add_check(ValidationCheck::failed(name, message)),
    }
}

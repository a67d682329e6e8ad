use std::fs;
use std::path::Path;

use crate::archive::{bitstream_names, CONTENTS_FILE};

use super::{ValidationCheck, ValidationReport};

/// Check an item's `contents` manifest against the files in the item.
pub(crate) fn check_contents(item: &Path, label: &str, report: &mut ValidationReport) {
    let name = format!("{}: {}", label, CONTENTS_FILE);
    let path = item.join(CONTENTS_FILE);

    if !path.exists() {
        report.add_check(ValidationCheck::warning(name, "missing (run clean)"));
        return;
    }

    let listed = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(e) => {
            report.add_check(ValidationCheck::failed(name, format!("unreadable: {}", e)));
            return;
        }
    };
    let listed: Vec<&str> = listed.lines().filter(|l| !l.is_empty()).collect();

    let missing: Vec<&str> = listed
        .iter()
        .copied()
        .filter(|file| !item.join(file).is_file())
        .collect();
    if !missing.is_empty() {
        report.add_check(ValidationCheck::failed(
            name,
            format!("listed but missing: {}", missing.join(", ")),
        ));
        return;
    }

    // Files added after the manifest was written
    let unlisted: Vec<String> = match bitstream_names(item) {
        Ok(present) => present
            .into_iter()
            .filter(|file| !listed.contains(&file.as_str()))
            .collect(),
        Err(e) => {
            report.add_check(ValidationCheck::failed(name, e.to_string()));
            return;
        }
    };

    if unlisted.is_empty() {
        report.add_check(ValidationCheck::ok(name));
    } else {
        report.add_check(ValidationCheck::warning(
            name,
            format!("present but not listed: {}", unlisted.join(", ")),
        ));
    }
}

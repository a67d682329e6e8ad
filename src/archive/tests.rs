use super::*;
use crate::metadata::{MetadataError, MetadataRecord, EXPECTED_TAGS};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const TITLE_SHEET: &str = "Dublin core element,Metadata value,Language code,Comment\r\n\
                           dc.title,Sample Title,en,\r\n";

fn make_item(root: &Path, name: &str, sheet: Option<&str>, files: &[&str]) {
    let item = root.join(name);
    fs::create_dir_all(&item).unwrap();
    if let Some(sheet) = sheet {
        fs::write(item.join(METADATA_CSV), sheet).unwrap();
    }
    for file in files {
        fs::write(item.join(file), b"data").unwrap();
    }
}

fn read(path: impl AsRef<Path>) -> String {
    fs::read_to_string(path).unwrap()
}

#[test]
fn test_clean_single_item() {
    let dir = tempdir().unwrap();
    make_item(dir.path(), "item_001", Some(TITLE_SHEET), &["bitstream.pdf"]);

    let report = clean_archive(dir.path(), &CleanOptions::default()).unwrap();
    assert_eq!(report.items_seen, 1);
    assert_eq!(report.manifests_written, 1);
    assert_eq!(report.xml_written, 1);

    let item = dir.path().join("item_001");
    assert_eq!(read(item.join(CONTENTS_FILE)), "bitstream.pdf\n");

    let record = MetadataRecord::from_xml(&read(item.join(METADATA_XML))).unwrap();
    assert_eq!(record.len(), 1);
    assert_eq!(record[0].element(), "title");
    assert_eq!(record[0].language(), Some("en"));
    assert_eq!(record[0].value(), "Sample Title");
}

#[test]
fn test_manifest_is_sorted_and_filtered() {
    let dir = tempdir().unwrap();
    make_item(
        dir.path(),
        "item_001",
        None,
        &[
            "zeta.txt",
            "alpha.pdf",
            "metadata_local.xml",
            "metadata_local.csv",
            "dublin_core.xml",
        ],
    );
    fs::create_dir(dir.path().join("item_001").join("nested")).unwrap();

    clean_archive(dir.path(), &CleanOptions::default()).unwrap();
    assert_eq!(
        read(dir.path().join("item_001").join(CONTENTS_FILE)),
        "alpha.pdf\nzeta.txt\n"
    );
}

#[test]
fn test_clean_is_idempotent() {
    let dir = tempdir().unwrap();
    make_item(dir.path(), "item_001", Some(TITLE_SHEET), &["a.pdf"]);
    make_item(dir.path(), "item_002", Some(TITLE_SHEET), &["b.pdf"]);

    let first = clean_archive(dir.path(), &CleanOptions::default()).unwrap();
    assert!(!first.is_noop());
    let contents = read(dir.path().join("item_002").join(CONTENTS_FILE));
    let xml = read(dir.path().join("item_002").join(METADATA_XML));

    let second = clean_archive(dir.path(), &CleanOptions::default()).unwrap();
    assert!(second.is_noop());
    assert_eq!(second.items_seen, 2);
    assert_eq!(read(dir.path().join("item_002").join(CONTENTS_FILE)), contents);
    assert_eq!(read(dir.path().join("item_002").join(METADATA_XML)), xml);
}

#[test]
fn test_existing_derived_files_are_kept() {
    let dir = tempdir().unwrap();
    make_item(dir.path(), "item_001", Some(TITLE_SHEET), &["a.pdf"]);
    let item = dir.path().join("item_001");
    fs::write(item.join(CONTENTS_FILE), "hand-written\n").unwrap();
    fs::write(item.join(METADATA_XML), "<dublin_core/>").unwrap();

    let report = clean_archive(dir.path(), &CleanOptions::default()).unwrap();
    assert!(report.is_noop());
    assert_eq!(read(item.join(CONTENTS_FILE)), "hand-written\n");
    assert_eq!(read(item.join(METADATA_XML)), "<dublin_core/>");
}

#[test]
fn test_non_item_directories_are_ignored() {
    let dir = tempdir().unwrap();
    make_item(dir.path(), "item_01", Some(TITLE_SHEET), &[]);
    make_item(dir.path(), "notes", Some(TITLE_SHEET), &[]);
    make_item(dir.path(), "item_001/item_002", Some(TITLE_SHEET), &[]);
    fs::write(dir.path().join("item_003"), "a file, not a directory").unwrap();

    let report = clean_archive(dir.path(), &CleanOptions::default()).unwrap();
    assert_eq!(report.items_seen, 1);

    assert!(!dir.path().join("item_01").join(CONTENTS_FILE).exists());
    assert!(!dir.path().join("notes").join(METADATA_XML).exists());
    // No recursion below the item level
    let nested = dir.path().join("item_001").join("item_002");
    assert!(!nested.join(CONTENTS_FILE).exists());
    assert!(!nested.join(METADATA_XML).exists());
    // The nested directory is not a bitstream either
    assert_eq!(read(dir.path().join("item_001").join(CONTENTS_FILE)), "");
}

#[test]
fn test_missing_root() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope");
    let err = clean_archive(&missing, &CleanOptions::default()).unwrap_err();
    assert!(matches!(err, ArchiveError::NotFound(p) if p == missing));
}

#[test]
fn test_root_is_a_file() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("archive");
    fs::write(&file, "").unwrap();
    let err = clean_archive(&file, &CleanOptions::default()).unwrap_err();
    assert!(matches!(err, ArchiveError::NotADirectory(_)));
}

#[test]
fn test_bad_item_aborts_run() {
    let dir = tempdir().unwrap();
    make_item(dir.path(), "item_001", Some("h\ndc.title,\"broken\n"), &[]);
    make_item(dir.path(), "item_002", Some(TITLE_SHEET), &[]);

    let err = clean_archive(dir.path(), &CleanOptions::default()).unwrap_err();
    match err {
        ArchiveError::Item { item, source } => {
            assert!(item.ends_with("item_001"));
            assert!(matches!(source, MetadataError::Parse { .. }));
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(!dir.path().join("item_001").join(METADATA_XML).exists());
}

#[test]
fn test_abort_leaves_failing_and_later_items_untouched() {
    let dir = tempdir().unwrap();
    make_item(dir.path(), "item_001", Some(TITLE_SHEET), &["a.pdf"]);
    make_item(dir.path(), "item_002", Some("h\ndc.title,\"broken\n"), &["b.pdf"]);
    make_item(dir.path(), "item_003", Some(TITLE_SHEET), &["c.pdf"]);

    let err = clean_archive(dir.path(), &CleanOptions::default()).unwrap_err();
    assert!(matches!(err, ArchiveError::Item { ref item, .. } if item.ends_with("item_002")));

    let item = |name: &str| dir.path().join(name);
    assert!(item("item_001").join(CONTENTS_FILE).exists());
    assert!(item("item_001").join(METADATA_XML).exists());
    for name in ["item_002", "item_003"] {
        assert!(!item(name).join(CONTENTS_FILE).exists(), "{} was written", name);
        assert!(!item(name).join(METADATA_XML).exists(), "{} was written", name);
    }
}

#[cfg(feature = "parallel")]
#[test]
fn test_parallel_abort_writes_only_earlier_items() {
    let dir = tempdir().unwrap();
    for seq in 1..=40 {
        let sheet = if seq == 20 { "h\ndc.title,\"broken\n" } else { TITLE_SHEET };
        make_item(dir.path(), &layout::item_dir_name(seq), Some(sheet), &["file.pdf"]);
    }

    let err = clean_archive(dir.path(), &CleanOptions::default()).unwrap_err();
    assert!(matches!(err, ArchiveError::Item { ref item, .. } if item.ends_with("item_020")));

    for seq in 1..=40 {
        let item = dir.path().join(layout::item_dir_name(seq));
        let written = item.join(METADATA_XML).exists();
        assert_eq!(written, seq < 20, "item {} written: {}", seq, written);
        assert_eq!(item.join(CONTENTS_FILE).exists(), seq < 20);
    }

    // Keep-going still cleans every other item
    let report = clean_archive(dir.path(), &CleanOptions { keep_going: true }).unwrap();
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.xml_written, 20);
}

#[test]
fn test_keep_going_collects_failures() {
    let dir = tempdir().unwrap();
    make_item(dir.path(), "item_001", Some("h\nnotatag,value\n"), &[]);
    make_item(dir.path(), "item_002", Some(TITLE_SHEET), &[]);

    let options = CleanOptions { keep_going: true };
    let report = clean_archive(dir.path(), &options).unwrap();

    assert_eq!(report.items_seen, 2);
    assert_eq!(report.xml_written, 1);
    assert_eq!(report.failures.len(), 1);
    assert!(report.failures[0].item.ends_with("item_001"));
    assert!(matches!(
        report.failures[0].error,
        MetadataError::MalformedName { .. }
    ));
    assert!(dir.path().join("item_002").join(METADATA_XML).exists());
}

#[test]
fn test_generate_sample_archive() {
    let dir = tempdir().unwrap();
    let archive = dir.path().join("archive");

    let items = generate_sample_archive(&archive, None, 3).unwrap();
    assert_eq!(items.len(), 3);

    let mut names: Vec<String> = fs::read_dir(&archive)
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    names.sort();
    assert_eq!(names, ["item_001", "item_002", "item_003"]);

    let template = crate::metadata::default_template().unwrap();
    for item in &items {
        let sheet = read(item.join(METADATA_CSV));
        assert_eq!(sheet, template);
        assert_eq!(sheet.split("\r\n").filter(|l| !l.is_empty()).count(), EXPECTED_TAGS.len() + 1);
    }
}

#[test]
fn test_generate_from_source_sheet() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("filled.csv");
    fs::write(&source, TITLE_SHEET).unwrap();
    let archive = dir.path().join("archive");

    let items = generate_sample_archive(&archive, Some(&source), 2).unwrap();
    for item in &items {
        assert_eq!(read(item.join(METADATA_CSV)), TITLE_SHEET);
    }
}

#[test]
fn test_generate_into_existing_dir_fails() {
    let dir = tempdir().unwrap();
    let err = generate_sample_archive(dir.path(), None, 3).unwrap_err();
    assert!(matches!(err, ArchiveError::AlreadyExists(_)));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_generate_with_missing_source_writes_nothing() {
    let dir = tempdir().unwrap();
    let archive = dir.path().join("archive");
    let err = generate_sample_archive(&archive, Some(&dir.path().join("missing.csv")), 3)
        .unwrap_err();
    assert!(matches!(err, ArchiveError::NotFound(_)));
    assert!(!archive.exists());
}

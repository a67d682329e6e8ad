//! End-to-end tests of the `saf` binary

use saf::archive::{CONTENTS_FILE, METADATA_CSV, METADATA_XML};
use saf::metadata::default_template;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

fn saf() -> Command {
    Command::new(env!("CARGO_BIN_EXE_saf"))
}

#[test]
fn test_template_command() {
    let output = saf().arg("template").output().unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), default_template().unwrap());
}

#[test]
fn test_sample_and_clean_commands() {
    let dir = tempdir().unwrap();
    let archive = dir.path().join("archive");

    let status = saf()
        .args(["sample", "-n", "2"])
        .arg(&archive)
        .status()
        .unwrap();
    assert!(status.success());
    assert!(archive.join("item_002").join(METADATA_CSV).is_file());
    assert!(!archive.join("item_003").exists());

    let status = saf().arg("clean").arg(&archive).status().unwrap();
    assert!(status.success());
    assert!(archive.join("item_001").join(CONTENTS_FILE).is_file());
    assert!(archive.join("item_001").join(METADATA_XML).is_file());

    let status = saf().arg("check").arg(&archive).status().unwrap();
    assert!(status.success());
}

#[test]
fn test_sample_into_existing_directory_fails() {
    let dir = tempdir().unwrap();
    let output = saf().arg("sample").arg(dir.path()).output().unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("already exists"), "stderr: {}", stderr);
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_clean_missing_directory_fails() {
    let dir = tempdir().unwrap();
    let output = saf()
        .arg("clean")
        .arg(dir.path().join("missing"))
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("missing"), "stderr: {}", stderr);
}

#[test]
fn test_config_file_sets_item_count() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("saf.toml");
    fs::write(&config, "[sample]\nitem_count = 4\n").unwrap();
    let archive = dir.path().join("archive");

    let status = saf()
        .arg("--config")
        .arg(&config)
        .arg("sample")
        .arg(&archive)
        .status()
        .unwrap();
    assert!(status.success());
    assert!(archive.join("item_004").is_dir());
    assert!(!archive.join("item_005").exists());
}

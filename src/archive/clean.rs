//! Derive `contents` manifests and `dublin_core.xml` for every item.

use log::{debug, info, warn};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use super::layout::{self, CONTENTS_FILE, METADATA_CSV, METADATA_XML};
use super::ArchiveError;
use crate::metadata::{MetadataError, MetadataRecord};

/// Options for [`clean_archive`]
#[derive(Debug, Clone, Default)]
pub struct CleanOptions {
    /// Record failing items in the report and carry on, instead of aborting
    /// the run at the first failure
    pub keep_going: bool,
}

/// What cleaning did to one item directory
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ItemOutcome {
    /// A `contents` manifest was written
    pub wrote_manifest: bool,
    /// A `dublin_core.xml` was written
    pub wrote_xml: bool,
}

/// An item that could not be cleaned (keep-going mode only)
#[derive(Debug)]
pub struct ItemFailure {
    /// The item directory
    pub item: PathBuf,
    /// Why it failed
    pub error: MetadataError,
}

/// Summary of a cleaning run
#[derive(Debug, Default)]
pub struct CleanReport {
    /// Item directories found under the root
    pub items_seen: usize,
    /// `contents` manifests written
    pub manifests_written: usize,
    /// `dublin_core.xml` files written
    pub xml_written: usize,
    /// Items skipped because of an error
    pub failures: Vec<ItemFailure>,
}

impl CleanReport {
    /// True when the run wrote nothing and nothing failed
    pub fn is_noop(&self) -> bool {
        self.manifests_written == 0 && self.xml_written == 0 && self.failures.is_empty()
    }
}

/// Clean an archive: for every `item_NNN` directory directly under `root`,
/// write a `contents` manifest if there is none and convert
/// `dublin_core.csv` to `dublin_core.xml` if the XML is missing.
///
/// Existing derived files are never touched, so running this twice is
/// harmless. By default the first failing item aborts the run with
/// [`ArchiveError::Item`]; see [`CleanOptions::keep_going`].
pub fn clean_archive<P: AsRef<Path>>(
    root: P,
    options: &CleanOptions,
) -> Result<CleanReport, ArchiveError> {
    let root = root.as_ref();
    let items = layout::item_dirs(root)?;
    info!("Cleaning {} item(s) in {}", items.len(), root.display());

    let results = clean_items(&items, options.keep_going);

    let mut report = CleanReport {
        items_seen: items.len(),
        ..Default::default()
    };

    for (item, result) in items.into_iter().zip(results) {
        match result {
            Ok(outcome) => {
                report.manifests_written += usize::from(outcome.wrote_manifest);
                report.xml_written += usize::from(outcome.wrote_xml);
            }
            Err(error) if options.keep_going => {
                warn!("Skipping {}: {}", item.display(), error);
                report.failures.push(ItemFailure { item, error });
            }
            Err(source) => return Err(ArchiveError::Item { item, source }),
        }
    }

    info!(
        "Wrote {} manifest(s) and {} XML file(s), {} item(s) failed",
        report.manifests_written,
        report.xml_written,
        report.failures.len()
    );
    Ok(report)
}

#[cfg(not(feature = "parallel"))]
fn clean_items(items: &[PathBuf], keep_going: bool) -> Vec<Result<ItemOutcome, MetadataError>> {
    let mut results = Vec::with_capacity(items.len());
    for item in items {
        let result = clean_item(item);
        let failed = result.is_err();
        results.push(result);
        // No further writes once the run is going to abort
        if failed && !keep_going {
            break;
        }
    }
    results
}

/// Two phases: every item is read and converted in parallel, then only
/// the items before the first failure (in name order) are written, unless
/// `keep_going` is set. A write error during the second phase does not
/// stop items already being written.
#[cfg(feature = "parallel")]
fn clean_items(items: &[PathBuf], keep_going: bool) -> Vec<Result<ItemOutcome, MetadataError>> {
    use rayon::prelude::*;

    let plans: Vec<Result<ItemPlan, MetadataError>> =
        items.par_iter().map(|item| ItemPlan::read(item)).collect();

    let cutoff = if keep_going {
        plans.len()
    } else {
        plans
            .iter()
            .position(Result::is_err)
            .map_or(plans.len(), |failed| failed + 1)
    };

    plans
        .into_par_iter()
        .take(cutoff)
        .map(|plan| plan.and_then(|plan| plan.write()))
        .collect()
}

/// Run both passes over a single item directory.
///
/// Everything is read and converted before anything is written, so an
/// item whose sheet fails to load is left untouched.
pub fn clean_item(item_dir: &Path) -> Result<ItemOutcome, MetadataError> {
    ItemPlan::read(item_dir)?.write()
}

/// Files to derive for one item, computed without writing anything
struct ItemPlan {
    manifest: Option<(PathBuf, Vec<String>)>,
    xml: Option<(PathBuf, String, usize)>,
}

impl ItemPlan {
    fn read(item_dir: &Path) -> Result<Self, MetadataError> {
        let contents_path = item_dir.join(CONTENTS_FILE);
        let manifest = if contents_path.exists() {
            None
        } else {
            Some((contents_path, bitstream_names(item_dir)?))
        };

        let csv_path = item_dir.join(METADATA_CSV);
        let xml_path = item_dir.join(METADATA_XML);
        let xml = if csv_path.is_file() && !xml_path.exists() {
            let record = MetadataRecord::from_csv_file(&csv_path)?;
            Some((xml_path, record.to_xml()?, record.len()))
        } else {
            None
        };

        Ok(Self { manifest, xml })
    }

    fn write(self) -> Result<ItemOutcome, MetadataError> {
        let mut outcome = ItemOutcome::default();

        if let Some((path, names)) = self.manifest {
            write_manifest(&path, &names)?;
            debug!("Wrote {} ({} bitstream(s))", path.display(), names.len());
            outcome.wrote_manifest = true;
        }

        if let Some((path, xml, values)) = self.xml {
            fs::write(&path, xml)?;
            debug!("Wrote {} ({} value(s))", path.display(), values);
            outcome.wrote_xml = true;
        }

        Ok(outcome)
    }
}

/// Names of the bitstream files in an item directory, sorted.
///
/// Metadata files, the manifest itself and subdirectories are left out.
pub fn bitstream_names(item_dir: &Path) -> Result<Vec<String>, MetadataError> {
    let mut names = Vec::new();
    for entry in fs::read_dir(item_dir)? {
        let entry = entry?;
        if !entry.path().is_file() {
            continue;
        }

        let name = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(raw) => {
                warn!(
                    "Listing non UTF-8 file name {:?} lossily in {}",
                    raw,
                    item_dir.display()
                );
                raw.to_string_lossy().into_owned()
            }
        };

        if !layout::is_excluded_from_contents(&name) {
            names.push(name);
        }
    }

    names.sort();
    Ok(names)
}

fn write_manifest(path: &Path, names: &[String]) -> Result<(), MetadataError> {
    let mut writer = BufWriter::new(File::create(path)?);
    for name in names {
        writeln!(writer, "{}", name)?;
    }
    writer.flush()?;
    Ok(())
}

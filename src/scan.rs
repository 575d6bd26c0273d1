//! Directory tree scanning and per-extension aggregation
//!
//! A scan walks the tree once, counts subdirectories, and tallies every
//! readable file into a bucket keyed by its extension label. Files that
//! cannot be stat'ed (vanished, unreadable, dangling links) are skipped.

use std::collections::BTreeMap;
use std::path::Path;

use ignore::WalkBuilder;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::ScanError;
use crate::extension::extension_label;

/// File count and total size for one extension label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExtensionTally {
    /// Number of files
    pub count: u64,
    /// Sum of file sizes in bytes
    pub bytes: u64,
}

/// Aggregate produced by one full tree traversal.
///
/// Counts and sizes share a single map, so every label that has a count
/// also has a size and vice versa.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanResult {
    directory_count: u64,
    file_count: u64,
    extensions: BTreeMap<String, ExtensionTally>,
}

impl ScanResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one readable file of `bytes` size under `label`.
    pub fn record_file(&mut self, label: impl Into<String>, bytes: u64) {
        self.file_count += 1;
        let entry = self.extensions.entry(label.into()).or_default();
        entry.count += 1;
        entry.bytes += bytes;
    }

    /// Record `n` immediate subdirectories of a visited directory.
    pub fn record_directories(&mut self, n: u64) {
        self.directory_count += n;
    }

    pub fn directory_count(&self) -> u64 {
        self.directory_count
    }

    pub fn file_count(&self) -> u64 {
        self.file_count
    }

    /// Number of files recorded under `label` (0 if absent).
    pub fn count(&self, label: &str) -> u64 {
        self.extensions.get(label).map_or(0, |t| t.count)
    }

    /// Total bytes recorded under `label` (0 if absent).
    pub fn size(&self, label: &str) -> u64 {
        self.extensions.get(label).map_or(0, |t| t.bytes)
    }

    /// Extension label to file count.
    pub fn counts(&self) -> BTreeMap<&str, u64> {
        self.extensions
            .iter()
            .map(|(label, t)| (label.as_str(), t.count))
            .collect()
    }

    /// Extension label to total bytes.
    pub fn sizes(&self) -> BTreeMap<&str, u64> {
        self.extensions
            .iter()
            .map(|(label, t)| (label.as_str(), t.bytes))
            .collect()
    }

    /// Iterate over labels in ascending lexicographic order.
    pub fn extensions(&self) -> impl Iterator<Item = (&str, &ExtensionTally)> {
        self.extensions
            .iter()
            .map(|(label, tally)| (label.as_str(), tally))
    }
}

/// Walk `root` and aggregate file statistics per extension label.
///
/// Symlinks are not followed: a link to a directory counts as a directory
/// but is not descended into, and a link to a file is sized through its
/// target. The root itself is never counted as a directory, and a root
/// that is not a directory has nothing beneath it to tally.
pub fn scan(root: &Path) -> Result<ScanResult, ScanError> {
    if !root.exists() {
        return Err(ScanError::RootNotFound {
            path: root.to_path_buf(),
        });
    }
    if !root.is_dir() {
        debug!("{} is not a directory, nothing to scan", root.display());
        return Ok(ScanResult::new());
    }

    info!("scanning {}", root.display());

    let mut result = ScanResult::new();
    let mut skipped = 0u64;

    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .build();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                debug!("skipping unreadable entry: {}", err);
                continue;
            }
        };

        // Skip the root directory itself
        if entry.depth() == 0 {
            continue;
        }

        let path = entry.path();
        let is_dir = match entry.file_type() {
            Some(ft) if ft.is_symlink() => path.is_dir(),
            Some(ft) => ft.is_dir(),
            None => false,
        };

        if is_dir {
            result.record_directories(1);
            continue;
        }

        match std::fs::metadata(path) {
            Ok(meta) => result.record_file(extension_label(path), meta.len()),
            Err(err) => {
                skipped += 1;
                debug!("skipping {}: {}", path.display(), err);
            }
        }
    }

    info!(
        directories = result.directory_count,
        files = result.file_count,
        extensions = result.extensions.len(),
        skipped,
        "scan complete"
    );

    Ok(result)
}

//! # Scanner Module
//!
//! Walks a directory tree and groups duplicate images and duplicate folders.
//!
//! ## Qualifying Files
//! Files are considered by extension only (case-insensitive). The default
//! set is `jpg`, `cr2`, `png`.
//!
//! ## Example
//! ```rust,ignore
//! use folder_dedup::core::scanner::{DedupScanner, ScanConfig, WalkDirScanner};
//!
//! let scanner = WalkDirScanner::new(ScanConfig::default());
//! let outcome = scanner.scan(Path::new("/Users/photos"))?;
//! ```

mod accumulate;
mod filter;
mod walker;

pub use filter::ImageFilter;
pub use walker::{ScanConfig, WalkDirScanner};

use crate::core::fingerprint::{FolderSignature, Fingerprint};
use crate::error::ScanError;
use crate::events::EventSender;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Duplicate groupings found by a scan.
///
/// Both maps only hold groups with two or more members. When one map is
/// empty and the other is not, the empty map is still present in the
/// serialized report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    /// Fingerprint -> files sharing that content prefix, in traversal order
    pub duplicate_images: BTreeMap<Fingerprint, Vec<PathBuf>>,
    /// Folder signature -> folders with the same direct image content
    pub duplicate_folders: BTreeMap<FolderSignature, Vec<PathBuf>>,
}

impl ScanReport {
    /// Total number of files appearing in a duplicate group
    pub fn duplicate_file_count(&self) -> usize {
        self.duplicate_images.values().map(Vec::len).sum()
    }

    /// Total number of folders appearing in a duplicate group
    pub fn duplicate_folder_count(&self) -> usize {
        self.duplicate_folders.values().map(Vec::len).sum()
    }
}

/// Result of a scan operation.
///
/// Finding nothing is a normal outcome, distinguished from scan failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// At least one duplicate group was found
    Duplicates(ScanReport),
    /// No duplicate images and no duplicate folders anywhere in the tree
    NoDuplicatesFound,
}

impl ScanOutcome {
    /// The report, when duplicates were found
    pub fn report(&self) -> Option<&ScanReport> {
        match self {
            ScanOutcome::Duplicates(report) => Some(report),
            ScanOutcome::NoDuplicatesFound => None,
        }
    }
}

/// Trait for duplicate scanners
///
/// Implement this trait to create custom scanners (e.g., for testing).
pub trait DedupScanner: Send + Sync {
    /// Scan a directory tree and group duplicates
    fn scan(&self, root: &Path) -> Result<ScanOutcome, ScanError>;

    /// Scan with progress reporting via events
    fn scan_with_events(
        &self,
        root: &Path,
        events: &EventSender,
    ) -> Result<ScanOutcome, ScanError>;
}

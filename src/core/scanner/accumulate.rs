//! Accumulation of per-folder partial results into duplicate groupings.
//!
//! Each folder is fingerprinted independently and yields a [`FolderScan`].
//! Partials are merged into a [`ScanAccumulator`] at a single join point,
//! in traversal order, so there is no shared mutable state during the
//! parallel phase.

use super::{ScanOutcome, ScanReport};
use crate::core::fingerprint::{FolderSignature, Fingerprint};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Partial result for one visited folder.
#[derive(Debug)]
pub(crate) struct FolderScan {
    /// The folder itself
    pub dir: PathBuf,
    /// Direct qualifying files in entry order, with their fingerprints
    pub files: Vec<(PathBuf, Fingerprint)>,
    /// Signature of the folder's fingerprint set; `None` when the folder
    /// has no qualifying files
    pub signature: Option<FolderSignature>,
}

/// Merges folder partials into the global image and folder groupings.
#[derive(Debug, Default)]
pub(crate) struct ScanAccumulator {
    images: BTreeMap<Fingerprint, Vec<PathBuf>>,
    folders: BTreeMap<FolderSignature, Vec<PathBuf>>,
}

impl ScanAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one folder's partial result.
    ///
    /// Callers absorb partials in traversal order; path sequences within
    /// each group reflect that order.
    pub fn absorb(&mut self, folder: FolderScan) {
        for (path, fingerprint) in folder.files {
            self.images.entry(fingerprint).or_default().push(path);
        }
        if let Some(signature) = folder.signature {
            self.folders.entry(signature).or_default().push(folder.dir);
        }
    }

    /// Keep only groups with at least two members and classify the result.
    pub fn finish(self) -> ScanOutcome {
        let duplicate_images: BTreeMap<_, _> = self
            .images
            .into_iter()
            .filter(|(_, paths)| paths.len() > 1)
            .collect();
        let duplicate_folders: BTreeMap<_, _> = self
            .folders
            .into_iter()
            .filter(|(_, paths)| paths.len() > 1)
            .collect();

        if duplicate_images.is_empty() && duplicate_folders.is_empty() {
            ScanOutcome::NoDuplicatesFound
        } else {
            ScanOutcome::Duplicates(ScanReport {
                duplicate_images,
                duplicate_folders,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn folder_scan(dir: &str, files: &[(&str, &[u8])]) -> FolderScan {
        let files: Vec<(PathBuf, Fingerprint)> = files
            .iter()
            .map(|(path, content)| (PathBuf::from(path), Fingerprint::from_prefix(content)))
            .collect();
        let signature = FolderSignature::from_fingerprints(files.iter().map(|(_, f)| *f));
        FolderScan {
            dir: PathBuf::from(dir),
            files,
            signature,
        }
    }

    #[test]
    fn no_partials_yields_no_duplicates() {
        let accumulator = ScanAccumulator::new();
        assert_eq!(accumulator.finish(), ScanOutcome::NoDuplicatesFound);
    }

    #[test]
    fn unique_files_yield_no_duplicates() {
        let mut accumulator = ScanAccumulator::new();
        accumulator.absorb(folder_scan("/a", &[("/a/one.jpg", b"one")]));
        accumulator.absorb(folder_scan("/b", &[("/b/two.jpg", b"two")]));

        assert_eq!(accumulator.finish(), ScanOutcome::NoDuplicatesFound);
    }

    #[test]
    fn matching_fingerprints_group_in_absorb_order() {
        let mut accumulator = ScanAccumulator::new();
        accumulator.absorb(folder_scan("/a", &[("/a/img.jpg", b"shared")]));
        accumulator.absorb(folder_scan("/b", &[("/b/img.jpg", b"shared")]));

        let outcome = accumulator.finish();
        let report = outcome.report().unwrap();

        assert_eq!(report.duplicate_images.len(), 1);
        let paths = report.duplicate_images.values().next().unwrap();
        assert_eq!(
            paths,
            &vec![PathBuf::from("/a/img.jpg"), PathBuf::from("/b/img.jpg")]
        );

        // Both folders hold exactly one file with the same fingerprint,
        // so their signatures match too
        assert_eq!(report.duplicate_folders.len(), 1);
        let folders = report.duplicate_folders.values().next().unwrap();
        assert_eq!(folders, &vec![PathBuf::from("/a"), PathBuf::from("/b")]);
    }

    #[test]
    fn differing_folder_sets_do_not_group() {
        let mut accumulator = ScanAccumulator::new();
        accumulator.absorb(folder_scan(
            "/a",
            &[("/a/img1.jpg", b"shared"), ("/a/img2.jpg", b"only-a")],
        ));
        accumulator.absorb(folder_scan(
            "/b",
            &[("/b/img1.jpg", b"shared"), ("/b/img3.jpg", b"only-b")],
        ));

        let outcome = accumulator.finish();
        let report = outcome.report().unwrap();

        assert_eq!(report.duplicate_images.len(), 1);
        assert!(report.duplicate_folders.is_empty());
    }

    #[test]
    fn folders_without_qualifying_files_never_group() {
        let mut accumulator = ScanAccumulator::new();
        accumulator.absorb(folder_scan("/a", &[]));
        accumulator.absorb(folder_scan("/b", &[]));

        assert_eq!(accumulator.finish(), ScanOutcome::NoDuplicatesFound);
    }

    #[test]
    fn singleton_groups_are_dropped() {
        let mut accumulator = ScanAccumulator::new();
        accumulator.absorb(folder_scan("/a", &[("/a/img.jpg", b"shared")]));
        accumulator.absorb(folder_scan("/b", &[("/b/img.jpg", b"shared")]));
        accumulator.absorb(folder_scan("/c", &[("/c/other.jpg", b"lonely")]));

        let outcome = accumulator.finish();
        let report = outcome.report().unwrap();

        // The lonely fingerprint and /c's unique signature are filtered out
        assert_eq!(report.duplicate_images.len(), 1);
        assert_eq!(report.duplicate_folders.len(), 1);
    }
}

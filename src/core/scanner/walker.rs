//! Directory walking implementation using walkdir.
//!
//! Folders are enumerated first, then fingerprinted in parallel; each
//! folder depends only on its own direct files, so the only join is the
//! root-level merge before duplicate filtering.
//!
//! Error policy: any unlistable directory or unreadable qualifying file
//! aborts the whole scan. Nothing is silently skipped and no partial
//! report is returned.

use super::accumulate::{FolderScan, ScanAccumulator};
use super::filter::{is_hidden, ImageFilter};
use super::{DedupScanner, ScanOutcome};
use crate::core::fingerprint::{FolderSignature, Fingerprint};
use crate::error::ScanError;
use crate::events::{null_sender, Event, EventSender, ScanEvent, ScanProgress};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::debug;
use walkdir::WalkDir;

/// Configuration for the directory scanner
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Whether to follow symbolic links
    pub follow_symlinks: bool,
    /// Whether to include hidden files and directories.
    ///
    /// Defaults to true: a file qualifies by extension alone, and a
    /// leading dot does not change its content. Opt out to skip dotfiles
    /// and dot-directories.
    pub include_hidden: bool,
    /// Maximum directory depth (None = unlimited)
    pub max_depth: Option<usize>,
    /// Custom extensions to include (None = use defaults)
    pub extensions: Option<Vec<String>>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            follow_symlinks: false,
            include_hidden: true,
            max_depth: None,
            extensions: None,
        }
    }
}

/// Scanner implementation using the walkdir crate
pub struct WalkDirScanner {
    config: ScanConfig,
    filter: ImageFilter,
}

impl WalkDirScanner {
    /// Create a new scanner with the given configuration
    pub fn new(config: ScanConfig) -> Self {
        let mut filter = ImageFilter::new().with_hidden(config.include_hidden);

        if let Some(ref extensions) = config.extensions {
            filter = filter.with_extensions(extensions.clone());
        }

        Self { config, filter }
    }

    /// Enumerate every folder under the root, root included.
    ///
    /// The walk is sorted by file name so group ordering is deterministic
    /// within a run.
    fn collect_folders(&self, root: &Path) -> Result<Vec<PathBuf>, ScanError> {
        if !root.is_dir() {
            return Err(ScanError::DirectoryNotFound {
                path: root.to_path_buf(),
            });
        }

        let mut walker = WalkDir::new(root)
            .follow_links(self.config.follow_symlinks)
            .sort_by_file_name();

        if let Some(depth) = self.config.max_depth {
            walker = walker.max_depth(depth);
        }

        let include_hidden = self.config.include_hidden;
        let root_buf = root.to_path_buf();
        let mut folders = Vec::new();

        let entries = walker.into_iter().filter_entry(move |entry| {
            // Prune hidden directories; files are filtered per folder later
            if !entry.file_type().is_dir() || entry.path() == root_buf {
                return true;
            }
            include_hidden || !is_hidden(entry.path())
        });

        for entry in entries {
            let entry = entry.map_err(|e| {
                let path = e.path().map(Path::to_path_buf).unwrap_or_default();
                ScanError::ReadDirectory {
                    path,
                    source: e.into_io_error().unwrap_or_else(|| {
                        std::io::Error::new(std::io::ErrorKind::Other, "directory walk failed")
                    }),
                }
            })?;

            if entry.file_type().is_dir() {
                folders.push(entry.into_path());
            }
        }

        Ok(folders)
    }

    /// Fingerprint the direct qualifying files of one folder.
    fn scan_folder(&self, dir: &Path) -> Result<FolderScan, ScanError> {
        let read_dir = fs::read_dir(dir).map_err(|source| ScanError::ReadDirectory {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut file_paths = Vec::new();
        for entry in read_dir {
            let entry = entry.map_err(|source| ScanError::ReadDirectory {
                path: dir.to_path_buf(),
                source,
            })?;
            let file_type = entry.file_type().map_err(|source| ScanError::ReadDirectory {
                path: entry.path(),
                source,
            })?;

            let is_file = if self.config.follow_symlinks {
                entry.path().is_file()
            } else {
                file_type.is_file()
            };
            if is_file {
                file_paths.push(entry.path());
            }
        }

        // read_dir order is platform-dependent
        file_paths.sort();

        let mut files = Vec::new();
        for path in file_paths {
            if !self.filter.should_include(&path) {
                continue;
            }
            let fingerprint =
                Fingerprint::of_file(&path).map_err(|source| ScanError::ReadFile {
                    path: path.clone(),
                    source,
                })?;
            files.push((path, fingerprint));
        }

        // Same-folder duplicates collapse inside the signature set
        let signature = FolderSignature::from_fingerprints(files.iter().map(|(_, f)| *f));

        debug!(folder = %dir.display(), files = files.len(), "folder fingerprinted");

        Ok(FolderScan {
            dir: dir.to_path_buf(),
            files,
            signature,
        })
    }
}

impl DedupScanner for WalkDirScanner {
    fn scan(&self, root: &Path) -> Result<ScanOutcome, ScanError> {
        self.scan_with_events(root, &null_sender())
    }

    fn scan_with_events(
        &self,
        root: &Path,
        events: &EventSender,
    ) -> Result<ScanOutcome, ScanError> {
        events.send(Event::Scan(ScanEvent::Started {
            root: root.to_path_buf(),
        }));

        let folders = self.collect_folders(root)?;

        let folders_scanned = AtomicUsize::new(0);
        let files_fingerprinted = AtomicUsize::new(0);

        // Fingerprint folders in parallel; rayon's collect keeps the
        // partials in traversal order for the merge below
        let partials: Vec<FolderScan> = folders
            .par_iter()
            .map(|dir| {
                let partial = self.scan_folder(dir)?;

                let folders_done = folders_scanned.fetch_add(1, Ordering::Relaxed) + 1;
                let files_done = files_fingerprinted
                    .fetch_add(partial.files.len(), Ordering::Relaxed)
                    + partial.files.len();

                events.send(Event::Scan(ScanEvent::FolderScanned {
                    path: dir.clone(),
                    files_fingerprinted: partial.files.len(),
                }));
                events.send(Event::Scan(ScanEvent::Progress(ScanProgress {
                    folders_scanned: folders_done,
                    files_fingerprinted: files_done,
                    current_path: dir.clone(),
                })));

                Ok(partial)
            })
            .collect::<Result<_, ScanError>>()?;

        events.send(Event::Scan(ScanEvent::Completed {
            total_folders: partials.len(),
            total_files: files_fingerprinted.load(Ordering::Relaxed),
        }));

        let mut accumulator = ScanAccumulator::new();
        for partial in partials {
            accumulator.absorb(partial);
        }
        Ok(accumulator.finish())
    }
}

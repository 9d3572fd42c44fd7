//! Event type definitions for progress reporting.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// All events emitted by the scanner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    /// Scanning phase events
    Scan(ScanEvent),
}

/// Events during the scanning phase
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ScanEvent {
    /// Scanning has started
    Started { root: PathBuf },
    /// Progress update during scanning
    Progress(ScanProgress),
    /// A folder's direct files were fingerprinted
    FolderScanned {
        path: PathBuf,
        files_fingerprinted: usize,
    },
    /// Scanning completed
    Completed {
        total_folders: usize,
        total_files: usize,
    },
}

/// Progress information during scanning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanProgress {
    /// Number of folders scanned so far
    pub folders_scanned: usize,
    /// Number of files fingerprinted so far
    pub files_fingerprinted: usize,
    /// Folder most recently scanned
    pub current_path: PathBuf,
}

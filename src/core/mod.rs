//! # Core Module
//!
//! The UI-agnostic duplicate scanning engine.
//!
//! ## Modules
//! - `fingerprint` - Content fingerprints and folder signatures
//! - `scanner` - Walks a tree and groups duplicate images and folders

pub mod fingerprint;
pub mod scanner;

// Re-export commonly used types
pub use fingerprint::{FolderSignature, Fingerprint, PREFIX_LEN};
pub use scanner::{DedupScanner, ScanConfig, ScanOutcome, ScanReport, WalkDirScanner};

//! # Folder Dedup
//!
//! Reports duplicate images and duplicate folders by partial-content hashing.
//!
//! ## Core Philosophy
//! - **Report only** - Never delete, move, or modify anything on disk
//! - **Shallow folder equality** - Folders are duplicates when their direct
//!   image fingerprints match; subfolder contents are not inherited
//! - **Fast approximation** - Only the first 1 KiB of each file is hashed,
//!   a documented tradeoff that treats files differing later as duplicates
//!
//! ## Architecture
//! The library holds the UI-agnostic engine; the command-line interface
//! lives in the binary (`src/main.rs`):
//! - `core` - The duplicate scanning engine
//! - `events` - Event-driven progress reporting
//! - `error` - Error types with path context

pub mod core;
pub mod error;
pub mod events;

// Re-export commonly used types at the crate root
pub use error::{DedupError, Result};

/// Initialize tracing for the library
///
/// This should be called by the application entry point.
pub fn init_tracing() {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set global default tracing subscriber");
}

//! File filtering logic for the scanner.

use std::collections::HashSet;
use std::path::Path;

/// Default qualifying extensions
const DEFAULT_EXTENSIONS: &[&str] = &["jpg", "cr2", "png"];

/// Whether a path's file name starts with a dot.
///
/// Single source of the hidden policy, shared by the file filter and the
/// directory walk.
pub(crate) fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|name| name.starts_with('.'))
}

/// Filters files to determine whether they qualify for fingerprinting
pub struct ImageFilter {
    /// File extensions to include, lowercase
    extensions: HashSet<String>,
    /// Whether to include hidden files
    include_hidden: bool,
}

impl ImageFilter {
    /// Create a new filter with the default qualifying extensions.
    ///
    /// Qualification is by extension alone; hidden files are included
    /// unless explicitly excluded via [`with_hidden`](Self::with_hidden).
    pub fn new() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            include_hidden: true,
        }
    }

    /// Include or exclude hidden files (starting with .)
    pub fn with_hidden(mut self, include: bool) -> Self {
        self.include_hidden = include;
        self
    }

    /// Override the list of extensions to accept
    pub fn with_extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = extensions.into_iter().map(|e| e.to_lowercase()).collect();
        self
    }

    /// Check if a file should be fingerprinted
    pub fn should_include(&self, path: &Path) -> bool {
        if !self.include_hidden && is_hidden(path) {
            return false;
        }

        if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
            self.extensions.contains(&ext.to_lowercase())
        } else {
            false
        }
    }
}

impl Default for ImageFilter {
    fn default() -> Self {
        Self::new()
    }
}

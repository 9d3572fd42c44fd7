//! Content fingerprints and folder signatures.
//!
//! A [`Fingerprint`] identifies a file by the hash of its first
//! [`PREFIX_LEN`] bytes. Files that differ only after the prefix are
//! treated as duplicates; that false-positive risk is the accepted cost
//! of never reading more than 1 KiB per file.
//!
//! A [`FolderSignature`] identifies a folder by the *set* of fingerprints
//! of its direct qualifying files. The set is canonicalized (sorted,
//! deduplicated) before hashing so the signature does not depend on
//! traversal order.

use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use xxhash_rust::xxh3::{xxh3_128, Xxh3};

/// Number of leading bytes hashed per file.
pub const PREFIX_LEN: usize = 1024;

/// Content fingerprint of a single file.
///
/// 128-bit xxh3 digest of the file's first [`PREFIX_LEN`] bytes.
/// Serialized as 32 lowercase hex characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fingerprint(u128);

impl Fingerprint {
    /// Fingerprint a content prefix that has already been read.
    pub fn from_prefix(prefix: &[u8]) -> Self {
        Fingerprint(xxh3_128(prefix))
    }

    /// Fingerprint a file by reading up to [`PREFIX_LEN`] bytes.
    ///
    /// The file handle is released as soon as the prefix is read,
    /// on every exit path.
    pub fn of_file(path: &Path) -> io::Result<Self> {
        let mut file = File::open(path)?;
        let mut buffer = [0u8; PREFIX_LEN];
        let mut filled = 0;

        // read() may return short counts; keep going until the buffer
        // is full or the file ends
        loop {
            let n = file.read(&mut buffer[filled..])?;
            if n == 0 {
                break;
            }
            filled += n;
            if filled == PREFIX_LEN {
                break;
            }
        }

        Ok(Self::from_prefix(&buffer[..filled]))
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", self.0)
    }
}

impl Serialize for Fingerprint {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Signature of a folder's direct qualifying-file contents.
///
/// Derived from the canonicalized set of the folder's fingerprints.
/// Two folders with equal signatures contain the same image content,
/// shallowly: subfolders do not contribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FolderSignature(u128);

impl FolderSignature {
    /// Combine a folder's fingerprints into a signature.
    ///
    /// Duplicate fingerprints within the folder collapse to one set
    /// member, and the set is sorted before hashing, so the result is
    /// deterministic for a given set regardless of input order.
    ///
    /// Returns `None` for an empty set: folders without qualifying files
    /// carry no signature and are never reported as duplicates of each
    /// other.
    pub fn from_fingerprints<I>(fingerprints: I) -> Option<Self>
    where
        I: IntoIterator<Item = Fingerprint>,
    {
        let set: BTreeSet<Fingerprint> = fingerprints.into_iter().collect();
        if set.is_empty() {
            return None;
        }

        let mut hasher = Xxh3::new();
        for fingerprint in &set {
            hasher.update(&fingerprint.0.to_be_bytes());
        }
        Some(FolderSignature(hasher.digest128()))
    }
}

impl fmt::Display for FolderSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", self.0)
    }
}

impl Serialize for FolderSignature {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

//! SHA-1 content digests
//!
//! Provides the canonical digest format (lowercase hex SHA-1) used throughout
//! the workspace. The directory digest walks the manifest tree in lexical
//! depth-first order, concatenates each file's digest, and hashes the
//! concatenation once — so two directories with identical file contents in
//! the same traversal order produce the same digest regardless of file names
//! or timestamps.

use sha1::{Digest, Sha1};
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Compute the lowercase hex SHA-1 digest of a byte string.
pub fn hash_bytes(content: &[u8]) -> String {
    let mut hasher = Sha1::new();
    hasher.update(content);
    format!("{:x}", hasher.finalize())
}

/// Compute the SHA-1 digest of a file's contents.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn hash_file(path: &Path) -> Result<String> {
    let content = fs::read(path).map_err(|e| Error::io(path, e))?;
    Ok(hash_bytes(&content))
}

/// Compute the SHA-1 digest of a whole directory's file contents.
///
/// The walk visits each directory's entries in lexical order and descends
/// into subdirectories at their sort position. Directory entries themselves
/// contribute nothing; only file contents feed the digest. The root entry is
/// skipped.
///
/// # Errors
///
/// Returns an error if any entry cannot be listed or any file cannot be
/// read. A failure anywhere aborts the whole digest — no partial result.
pub fn hash_directory(path: &Path) -> Result<String> {
    let mut file_hashes = String::new();
    append_file_hashes(path, &mut file_hashes)?;
    Ok(hash_bytes(file_hashes.as_bytes()))
}

fn append_file_hashes(dir: &Path, acc: &mut String) -> Result<()> {
    let mut entries = fs::read_dir(dir)
        .map_err(|e| Error::io(dir, e))?
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(|e| Error::io(dir, e))?;

    // Sort for a stable traversal; digest concatenation is order-sensitive.
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let path = entry.path();
        let file_type = entry.file_type().map_err(|e| Error::io(&path, e))?;
        if file_type.is_dir() {
            append_file_hashes(&path, acc)?;
        } else {
            acc.push_str(&hash_file(&path)?);
        }
    }

    Ok(())
}

//! C1 Hasher: content hashing used by change detection.
//!
//! `hash_files` parallelizes with `rayon` across a batch of paths, matching
//! the teacher's reliance on `rayon` for batch file operations. Per spec
//! §4.1, a file that cannot be read is skipped silently (reported to the
//! caller as absent from the result map) rather than failing the batch.

use rayon::prelude::*;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub fn hash_string(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    format!("{:x}", hasher.finalize())
}

pub fn hash_bytes(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    format!("{:x}", hasher.finalize())
}

/// Hash a single file's contents. Fails with `std::io::ErrorKind::NotFound`
/// when the file does not exist; any other I/O error (permission denied,
/// a directory given in place of a file, and so on) surfaces unchanged
/// rather than collapsing into the same "missing" outcome.
pub fn hash_file(path: &Path) -> Result<String, std::io::Error> {
    std::fs::read(path).map(|bytes| hash_bytes(&bytes))
}

/// Hash a batch of files in parallel. Per spec §4.1, a file that cannot be
/// read is skipped silently and absent from the returned map, regardless of
/// which I/O error caused the skip; callers needing to distinguish error
/// kinds should call [`hash_file`] directly.
pub fn hash_files(paths: &[PathBuf]) -> HashMap<PathBuf, String> {
    paths
        .par_iter()
        .filter_map(|path| hash_file(path).ok().map(|digest| (path.clone(), digest)))
        .collect()
}

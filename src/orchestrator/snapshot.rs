//! Hash-snapshot bookkeeping used between full and incremental passes.

use crate::model::FileHashSnapshot;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Builds the `HashMap<path, hash>` shape `change::detect_changes` expects
/// from a freshly hashed batch, keyed by the path as it will be persisted.
pub fn to_current_map(hashes: &HashMap<PathBuf, String>, workspace_root: &Path) -> HashMap<String, String> {
    hashes
        .iter()
        .map(|(path, hash)| (display_relative(path, workspace_root), hash.clone()))
        .collect()
}

pub fn display_relative(path: &Path, workspace_root: &Path) -> String {
    path.strip_prefix(workspace_root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

pub fn snapshot_for(path: &str, hash: &str, now: i64) -> FileHashSnapshot {
    FileHashSnapshot {
        file_path: path.to_string(),
        content_hash: hash.to_string(),
        last_scanned: now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_relative_strips_workspace_root() {
        let root = Path::new("/project");
        let path = Path::new("/project/src/a.ts");
        assert_eq!(display_relative(path, root), "src/a.ts");
    }

    #[test]
    fn display_relative_falls_back_to_full_path_outside_root() {
        let root = Path::new("/project");
        let path = Path::new("/other/a.ts");
        assert_eq!(display_relative(path, root), "/other/a.ts");
    }
}

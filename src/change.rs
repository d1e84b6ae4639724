//! C3 Change Detector: pure functions over hash snapshots.
//!
//! No I/O, no state — takes the previous and current hash snapshots and
//! reports what changed. Grounded in the same pure-function style as the
//! teacher's `types/mod.rs` small value types: deterministic, side-effect
//! free, easy to unit test in isolation from the watcher and stores.

use crate::model::FileHashSnapshot;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    Added(String),
    Modified(String),
    Removed(String),
}

impl Change {
    pub fn path(&self) -> &str {
        match self {
            Change::Added(p) | Change::Modified(p) | Change::Removed(p) => p,
        }
    }
}

/// Compare a previous snapshot set against a freshly hashed current set and
/// return the changes, in no particular order.
pub fn detect_changes(
    previous: &[FileHashSnapshot],
    current: &HashMap<String, String>,
) -> Vec<Change> {
    let prev_by_path: HashMap<&str, &str> = previous
        .iter()
        .map(|s| (s.file_path.as_str(), s.content_hash.as_str()))
        .collect();

    let mut changes = Vec::new();

    for (path, hash) in current {
        match prev_by_path.get(path.as_str()) {
            None => changes.push(Change::Added(path.clone())),
            Some(prev_hash) if *prev_hash != hash.as_str() => {
                changes.push(Change::Modified(path.clone()))
            }
            _ => {}
        }
    }

    for path in prev_by_path.keys() {
        if !current.contains_key(*path) {
            changes.push(Change::Removed(path.to_string()));
        }
    }

    changes
}

/// Whether a rescan is warranted at all, i.e. whether `detect_changes` would
/// report anything, without allocating the full change list.
pub fn needs_rescan(previous: &[FileHashSnapshot], current: &HashMap<String, String>) -> bool {
    if previous.len() != current.len() {
        return true;
    }
    previous
        .iter()
        .any(|s| current.get(&s.file_path) != Some(&s.content_hash))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap(path: &str, hash: &str) -> FileHashSnapshot {
        FileHashSnapshot {
            file_path: path.to_string(),
            content_hash: hash.to_string(),
            last_scanned: 0,
        }
    }

    #[test]
    fn detects_added_modified_removed() {
        let previous = vec![snap("a.ts", "h1"), snap("b.ts", "h2")];
        let mut current = HashMap::new();
        current.insert("a.ts".to_string(), "h1".to_string()); // unchanged
        current.insert("b.ts".to_string(), "h2-new".to_string()); // modified
        current.insert("c.ts".to_string(), "h3".to_string()); // added
        // b.ts stays, a.ts unchanged, d.ts from previous removed implicitly (none here)

        let changes = detect_changes(&previous, &current);
        assert_eq!(changes.len(), 2);
        assert!(changes.contains(&Change::Modified("b.ts".to_string())));
        assert!(changes.contains(&Change::Added("c.ts".to_string())));
    }

    #[test]
    fn detects_removal() {
        let previous = vec![snap("a.ts", "h1")];
        let current = HashMap::new();
        let changes = detect_changes(&previous, &current);
        assert_eq!(changes, vec![Change::Removed("a.ts".to_string())]);
    }

    #[test]
    fn no_changes_means_empty() {
        let previous = vec![snap("a.ts", "h1")];
        let mut current = HashMap::new();
        current.insert("a.ts".to_string(), "h1".to_string());
        assert!(detect_changes(&previous, &current).is_empty());
        assert!(!needs_rescan(&previous, &current));
    }

    #[test]
    fn needs_rescan_true_on_count_mismatch() {
        let previous = vec![snap("a.ts", "h1")];
        let current = HashMap::new();
        assert!(needs_rescan(&previous, &current));
    }
}

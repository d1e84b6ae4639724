//! Path registry with interning and watch-directory computation.
//!
//! Adapted from the teacher's `watcher/path_registry.rs`: tracked files are
//! interned once, and the set of directories that actually need a `notify`
//! subscription is derived from them, so the watcher never subscribes to
//! directories with nothing tracked in them.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Debug, Default)]
pub struct PathRegistry {
    paths: HashSet<Arc<PathBuf>>,
    watch_dirs: HashSet<PathBuf>,
}

impl PathRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add paths, returning directories newly required to be watched.
    pub fn add_paths(&mut self, paths: impl IntoIterator<Item = PathBuf>) -> Vec<PathBuf> {
        let mut new_dirs = Vec::new();

        for path in paths {
            let arc_path = Arc::new(path);
            if self.paths.insert(arc_path.clone()) {
                let parent_path = parent_dir(&arc_path);
                if self.watch_dirs.insert(parent_path.clone()) {
                    new_dirs.push(parent_path);
                }
            }
        }

        new_dirs
    }

    pub fn remove_path(&mut self, path: &Path) {
        self.paths.retain(|p| p.as_ref() != path);
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.paths.iter().any(|p| p.as_ref() == path)
    }

    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.paths.iter().map(|p| p.as_ref().as_path())
    }

    pub fn watch_dirs(&self) -> &HashSet<PathBuf> {
        &self.watch_dirs
    }

    pub fn path_count(&self) -> usize {
        self.paths.len()
    }

    pub fn rebuild(&mut self, paths: impl IntoIterator<Item = PathBuf>) {
        self.paths.clear();
        self.watch_dirs.clear();
        self.add_paths(paths);
    }

    pub fn compute_watch_dirs(paths: &[PathBuf]) -> HashSet<PathBuf> {
        paths.iter().map(|p| parent_dir(p)).collect()
    }
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_paths_returns_new_directories_only() {
        let mut registry = PathRegistry::new();
        let paths = vec![
            PathBuf::from("/project/src/main.ts"),
            PathBuf::from("/project/src/lib.ts"),
            PathBuf::from("/project/tests/test.ts"),
        ];
        let new_dirs = registry.add_paths(paths);
        assert_eq!(new_dirs.len(), 2);
        assert_eq!(registry.path_count(), 3);
    }

    #[test]
    fn interning_avoids_duplicate_dirs() {
        let mut registry = PathRegistry::new();
        let path = PathBuf::from("/project/src/main.ts");
        let first = registry.add_paths(vec![path.clone()]);
        let second = registry.add_paths(vec![path]);
        assert_eq!(first.len(), 1);
        assert!(second.is_empty());
        assert_eq!(registry.path_count(), 1);
    }

    #[test]
    fn remove_path_clears_membership_not_dirs() {
        let mut registry = PathRegistry::new();
        let path = PathBuf::from("/project/src/main.ts");
        registry.add_paths(vec![path.clone()]);
        registry.remove_path(&path);
        assert!(!registry.contains(&path));
        assert_eq!(registry.path_count(), 0);
        assert!(registry.watch_dirs().contains(Path::new("/project/src")));
    }

    #[test]
    fn root_level_file_watches_current_dir() {
        let dirs = PathRegistry::compute_watch_dirs(&[PathBuf::from("package.json")]);
        assert!(dirs.contains(&PathBuf::from(".")));
    }
}

//! C4 File Watcher.

pub mod ignore;
pub mod path_registry;
pub mod watcher;

pub use watcher::{FileWatcher, LifecycleState, WatchBatch};

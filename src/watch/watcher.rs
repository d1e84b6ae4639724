//! C4 File Watcher.
//!
//! Built on `notify`'s `RecommendedWatcher`, with a `tokio::select!` event
//! loop modeled directly on the teacher's `watcher/unified.rs`: a notify
//! channel drained alongside a periodic debounce-flush tick. Unlike the
//! generic single-slot [`crate::debounce::Debouncer`] used elsewhere, the
//! watcher needs multi-key batching (many paths can change within one
//! debounce window), so it keeps its own `HashMap<PathBuf, Instant>`
//! accumulator in the spirit of the teacher's `watcher/debouncer.rs`.

use crate::config::WatchConfig;
use crate::error::WatchError;
use crate::watch::ignore::GlobSet;
use crate::watch::path_registry::PathRegistry;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    Idle,
    Running,
    Stopping,
}

impl LifecycleState {
    fn from_u8(v: u8) -> Self {
        match v {
            1 => LifecycleState::Running,
            2 => LifecycleState::Stopping,
            _ => LifecycleState::Idle,
        }
    }

    fn as_u8(self) -> u8 {
        match self {
            LifecycleState::Idle => 0,
            LifecycleState::Running => 1,
            LifecycleState::Stopping => 2,
        }
    }
}

#[derive(Debug, Clone)]
pub struct WatchBatch {
    pub modified: Vec<PathBuf>,
    pub removed: Vec<PathBuf>,
}

enum PendingKind {
    Modified,
    Removed,
}

pub struct FileWatcher {
    config: WatchConfig,
    include: GlobSet,
    ignore: GlobSet,
    registry: PathRegistry,
    state: Arc<AtomicU8>,
}

impl FileWatcher {
    pub fn new(config: WatchConfig) -> Self {
        let include = GlobSet::compile(&config.include);
        let ignore = GlobSet::compile(&config.ignore);
        Self {
            config,
            include,
            ignore,
            registry: PathRegistry::new(),
            state: Arc::new(AtomicU8::new(LifecycleState::Idle.as_u8())),
        }
    }

    pub fn state(&self) -> LifecycleState {
        LifecycleState::from_u8(self.state.load(Ordering::SeqCst))
    }

    fn accepts(&self, path: &PathBuf) -> bool {
        if self.ignore.is_match(path) {
            return false;
        }
        self.include.is_match(path)
    }

    /// Run the watch loop, emitting a [`WatchBatch`] on `out` each time the
    /// debounce window elapses with pending changes. Returns when `stop` is
    /// signalled.
    pub async fn run(
        &mut self,
        out: mpsc::Sender<WatchBatch>,
        mut stop: mpsc::Receiver<()>,
    ) -> Result<(), WatchError> {
        self.state.store(LifecycleState::Running.as_u8(), Ordering::SeqCst);

        self.registry.add_paths(self.config.roots.clone());

        let (tx, mut rx) = mpsc::channel::<notify::Result<Event>>(256);
        let mut watcher: RecommendedWatcher =
            notify::recommended_watcher(move |res| {
                let _ = tx.blocking_send(res);
            })?;

        for root in &self.config.roots {
            watcher
                .watch(root, RecursiveMode::Recursive)
                .map_err(|e| WatchError::PathWatchFailed {
                    path: root.clone(),
                    reason: e.to_string(),
                })?;
        }

        let mut pending: HashMap<PathBuf, (PendingKind, Instant)> = HashMap::new();
        let debounce = Duration::from_millis(self.config.debounce_ms);
        let mut ticker = tokio::time::interval(Duration::from_millis(
            (self.config.debounce_ms / 3).max(10),
        ));

        loop {
            tokio::select! {
                _ = stop.recv() => {
                    self.state.store(LifecycleState::Stopping.as_u8(), Ordering::SeqCst);
                    flush_ready(&mut pending, Duration::from_secs(0), &out).await;
                    break;
                }
                Some(event) = rx.recv() => {
                    match event {
                        Ok(ev) => self.record_event(ev, &mut pending),
                        Err(e) => {
                            tracing::warn!("watch event error: {e}");
                        }
                    }
                }
                _ = ticker.tick() => {
                    flush_ready(&mut pending, debounce, &out).await;
                }
            }
        }

        self.state.store(LifecycleState::Idle.as_u8(), Ordering::SeqCst);
        Ok(())
    }

    fn record_event(&self, event: Event, pending: &mut HashMap<PathBuf, (PendingKind, Instant)>) {
        let kind = match event.kind {
            EventKind::Remove(_) => PendingKind::Removed,
            EventKind::Create(_) | EventKind::Modify(_) => PendingKind::Modified,
            _ => return,
        };
        for path in event.paths {
            if self.accepts(&path) {
                pending.insert(path, (kind_clone(&kind), Instant::now()));
            }
        }
    }
}

fn kind_clone(kind: &PendingKind) -> PendingKind {
    match kind {
        PendingKind::Modified => PendingKind::Modified,
        PendingKind::Removed => PendingKind::Removed,
    }
}

async fn flush_ready(
    pending: &mut HashMap<PathBuf, (PendingKind, Instant)>,
    min_age: Duration,
    out: &mpsc::Sender<WatchBatch>,
) {
    let now = Instant::now();
    let ready: Vec<PathBuf> = pending
        .iter()
        .filter(|(_, (_, at))| now.duration_since(*at) >= min_age)
        .map(|(p, _)| p.clone())
        .collect();

    if ready.is_empty() {
        return;
    }

    let mut modified = Vec::new();
    let mut removed = Vec::new();
    for path in ready {
        if let Some((kind, _)) = pending.remove(&path) {
            match kind {
                PendingKind::Modified => modified.push(path),
                PendingKind::Removed => removed.push(path),
            }
        }
    }

    let _ = out.send(WatchBatch { modified, removed }).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_respects_include_and_ignore() {
        let mut config = WatchConfig {
            roots: vec![PathBuf::from(".")],
            include: vec!["**/*.ts".into()],
            ignore: vec!["**/node_modules/**".into()],
            debounce_ms: 50,
            cache_ttl_secs: 60,
            cache_max_entries: 10,
        };
        let watcher = FileWatcher::new(std::mem::take(&mut config));
        assert!(watcher.accepts(&PathBuf::from("src/a.ts")));
        assert!(!watcher.accepts(&PathBuf::from("src/a.js")));
        assert!(!watcher.accepts(&PathBuf::from("node_modules/pkg/a.ts")));
    }

    #[test]
    fn lifecycle_defaults_to_idle() {
        let config = WatchConfig {
            roots: vec![PathBuf::from(".")],
            include: vec![],
            ignore: vec![],
            debounce_ms: 50,
            cache_ttl_secs: 60,
            cache_max_entries: 10,
        };
        let watcher = FileWatcher::new(config);
        assert_eq!(watcher.state(), LifecycleState::Idle);
    }
}

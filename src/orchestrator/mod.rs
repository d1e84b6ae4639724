//! C9 Indexing Orchestrator: ties the hasher, change detector, extractor,
//! and both writers into a full-index pass and an incremental watch loop.
//!
//! Directory discovery follows the teacher's `indexing::walker` (a plain
//! `walkdir::WalkDir` traversal filtered by glob include/ignore rules before
//! any file is opened); the staged full-index pass borrows the teacher's
//! `indexing::pipeline` idea of hashing a batch up front with `rayon`
//! before doing the expensive per-file parse.

pub mod snapshot;

use crate::change::{self, Change};
use crate::config::{Settings, WatchConfig};
use crate::error::CoreError;
use crate::extract::TypeScriptExtractor;
use crate::extract::metrics as extract_metrics;
use crate::hash;
use crate::store::{GraphStore, MetricsStore};
use crate::utils::get_utc_timestamp;
use crate::watch::ignore::GlobSet;
use crate::watch::{FileWatcher, WatchBatch};
use crate::writer::{GraphWriter, MetricsWriter};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::mpsc;
use walkdir::WalkDir;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IndexSummary {
    pub files_indexed: u32,
    pub files_skipped: u32,
    pub files_removed: u32,
}

impl IndexSummary {
    fn merge(&mut self, other: IndexSummary) {
        self.files_indexed += other.files_indexed;
        self.files_skipped += other.files_skipped;
        self.files_removed += other.files_removed;
    }
}

pub struct Orchestrator {
    workspace_root: PathBuf,
    watch_config: WatchConfig,
    graph: Arc<dyn GraphStore>,
    metrics: Arc<dyn MetricsStore>,
    graph_writer: GraphWriter,
    metrics_writer: MetricsWriter,
    extractor: TypeScriptExtractor,
}

impl Orchestrator {
    pub fn new(
        workspace_root: PathBuf,
        settings: &Settings,
        graph: Arc<dyn GraphStore>,
        metrics: Arc<dyn MetricsStore>,
    ) -> Self {
        Self {
            workspace_root,
            watch_config: settings.watch.clone(),
            graph_writer: GraphWriter::new(graph.clone()),
            metrics_writer: MetricsWriter::new(metrics.clone()),
            graph,
            metrics,
            extractor: TypeScriptExtractor::new(),
        }
    }

    /// Discover every file under the configured roots matching the
    /// include/ignore globs. Per spec §4.9, discovery never opens a file it
    /// will not also index.
    fn discover_files(&self) -> Vec<PathBuf> {
        let include = GlobSet::compile(&self.watch_config.include);
        let ignore = GlobSet::compile(&self.watch_config.ignore);

        let mut files = Vec::new();
        for root in &self.watch_config.roots {
            let base = self.workspace_root.join(root);
            for entry in WalkDir::new(&base)
                .into_iter()
                .filter_entry(|e| !ignore.is_match(&e.path().to_path_buf()))
                .filter_map(Result::ok)
            {
                let path = entry.path().to_path_buf();
                if entry.file_type().is_file() && include.is_match(&path) && !ignore.is_match(&path) {
                    files.push(path);
                }
            }
        }
        files
    }

    /// Cold full-index pass: discover, hash in parallel, extract and write
    /// every file, then persist the resulting hash snapshot wholesale.
    pub async fn full_index(&self) -> Result<IndexSummary, CoreError> {
        let files = self.discover_files();
        let hashes = hash::hash_files(&files);
        let mut summary = IndexSummary::default();

        for path in &files {
            let relative = snapshot::display_relative(path, &self.workspace_root);
            let Some(content_hash) = hashes.get(path) else {
                summary.files_skipped += 1;
                tracing::warn!(path = %relative, "skipped unreadable file during full index");
                continue;
            };

            match self.index_one_file(path, &relative, content_hash).await {
                Ok(()) => summary.files_indexed += 1,
                Err(err) if !err.is_fatal() => {
                    summary.files_skipped += 1;
                    tracing::warn!(path = %relative, error = %err, "skipped file");
                }
                Err(err) => return Err(err),
            }
        }

        Ok(summary)
    }

    async fn index_one_file(&self, path: &Path, relative: &str, content_hash: &str) -> Result<(), CoreError> {
        let code = std::fs::read_to_string(path).map_err(|e| CoreError::IoSkipped {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let file_id = crate::types::FileId::new(fnv1a(relative));
        let result = self.extractor.extract(path, &code, file_id)?;
        let now = get_utc_timestamp();
        let metrics = extract_metrics::compute(file_id, relative, &result, now);
        let snap = snapshot::snapshot_for(relative, content_hash, now);

        self.graph_writer.apply(relative, file_id, &result).await?;
        self.metrics_writer.record_file(&metrics, &snap).await?;
        Ok(())
    }

    async fn remove_one_file(&self, relative: &str) -> Result<(), CoreError> {
        let file_id = crate::types::FileId::new(fnv1a(relative));
        self.graph_writer.remove_file(relative, file_id).await?;
        self.metrics_writer.remove_file(relative).await?;
        Ok(())
    }

    /// Apply a [`WatchBatch`] (or an equivalent manually-built change set)
    /// incrementally: re-extract modified files, remove deleted ones, and
    /// persist an updated hash snapshot. A file whose content hash did not
    /// actually change (a metadata-only touch) is skipped, per spec §4.3.
    pub async fn apply_batch(&self, batch: WatchBatch) -> Result<IndexSummary, CoreError> {
        let previous = self.metrics_writer.load_snapshot().await?;

        let modified_hashes = hash::hash_files(&batch.modified);
        let mut current: HashMap<String, String> = previous
            .iter()
            .map(|s| (s.file_path.clone(), s.content_hash.clone()))
            .collect();
        for (path, hash) in &modified_hashes {
            current.insert(snapshot::display_relative(path, &self.workspace_root), hash.clone());
        }
        for path in &batch.removed {
            current.remove(&snapshot::display_relative(path, &self.workspace_root));
        }

        let changes = change::detect_changes(&previous, &current);
        let mut summary = IndexSummary::default();

        for change in changes {
            match change {
                Change::Added(relative) | Change::Modified(relative) => {
                    let Some(path) = batch
                        .modified
                        .iter()
                        .find(|p| snapshot::display_relative(p, &self.workspace_root) == relative)
                    else {
                        continue;
                    };
                    let Some(content_hash) = modified_hashes.get(path) else {
                        summary.files_skipped += 1;
                        continue;
                    };
                    match self.index_one_file(path, &relative, content_hash).await {
                        Ok(()) => summary.files_indexed += 1,
                        Err(err) if !err.is_fatal() => {
                            summary.files_skipped += 1;
                            tracing::warn!(path = %relative, error = %err, "skipped file");
                        }
                        Err(err) => return Err(err),
                    }
                }
                Change::Removed(relative) => {
                    self.remove_one_file(&relative).await?;
                    summary.files_removed += 1;
                }
            }
        }

        Ok(summary)
    }

    /// Run the watcher and feed every batch it emits through `apply_batch`
    /// until `stop` resolves. Fatal errors abort the loop; non-fatal ones
    /// are logged and the loop keeps running per spec §7.
    pub async fn run_watch(&self, mut stop: mpsc::Receiver<()>) -> Result<IndexSummary, CoreError> {
        let mut watcher = FileWatcher::new(self.watch_config.clone());
        let (batch_tx, mut batch_rx) = mpsc::channel::<WatchBatch>(32);
        let (watcher_stop_tx, watcher_stop_rx) = mpsc::channel::<()>(1);

        let watch_task = tokio::spawn(async move { watcher.run(batch_tx, watcher_stop_rx).await });

        let mut summary = IndexSummary::default();
        loop {
            tokio::select! {
                _ = stop.recv() => {
                    let _ = watcher_stop_tx.send(()).await;
                    break;
                }
                Some(batch) = batch_rx.recv() => {
                    match self.apply_batch(batch).await {
                        Ok(partial) => summary.merge(partial),
                        Err(err) if !err.is_fatal() => {
                            tracing::warn!(error = %err, "batch application failed");
                        }
                        Err(err) => {
                            let _ = watcher_stop_tx.send(()).await;
                            let _ = watch_task.await;
                            return Err(err);
                        }
                    }
                }
                else => break,
            }
        }

        if let Ok(Err(e)) = watch_task.await {
            return Err(CoreError::Watch(e));
        }
        Ok(summary)
    }

    pub fn graph(&self) -> &Arc<dyn GraphStore> {
        &self.graph
    }

    pub fn metrics(&self) -> &Arc<dyn MetricsStore> {
        &self.metrics
    }
}

/// Small deterministic hash used to derive a stable [`crate::types::FileId`]
/// from a relative path, so re-indexing the same file across runs produces
/// the same id without a persisted path-to-id table.
fn fnv1a(s: &str) -> u64 {
    let mut hash: u64 = 0xcbf29ce484222325;
    for byte in s.as_bytes() {
        hash ^= *byte as u64;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    hash
}

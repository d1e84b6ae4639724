//! End-to-end scenarios over the full orchestrator pipeline, using the
//! in-memory store fakes so the tests never depend on `kuzu`/`duckdb`
//! being installed.

use semindex::config::Settings;
use semindex::orchestrator::Orchestrator;
use semindex::store::memory::{InMemoryGraphStore, InMemoryMetricsStore};
use semindex::watch::{FileWatcher, WatchBatch};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

fn workspace_settings() -> Settings {
    let mut settings = Settings::default();
    settings.watch.roots = vec![std::path::PathBuf::from(".")];
    settings.watch.include = vec!["**/*.ts".into()];
    settings.watch.ignore = vec!["**/node_modules/**".into()];
    settings
}

fn build(
    dir: &tempfile::TempDir,
) -> (Orchestrator, Arc<InMemoryGraphStore>, Arc<InMemoryMetricsStore>) {
    let graph = Arc::new(InMemoryGraphStore::new());
    let metrics = Arc::new(InMemoryMetricsStore::new());
    let settings = workspace_settings();
    let orchestrator = Orchestrator::new(dir.path().to_path_buf(), &settings, graph.clone(), metrics.clone());
    (orchestrator, graph, metrics)
}

#[tokio::test]
async fn cold_index_discovers_and_writes_all_symbols() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("a.ts"), "export function a() {}\nexport function b() {}\n").unwrap();
    std::fs::write(dir.path().join("c.ts"), "export class Widget {}\n").unwrap();

    let (orchestrator, graph, _metrics) = build(&dir);
    let summary = orchestrator.full_index().await.unwrap();

    assert_eq!(summary.files_indexed, 2);
    assert_eq!(graph.symbol_count(), 3);
}

#[tokio::test]
async fn editing_a_file_reindexes_only_that_file() {
    let dir = tempfile::tempdir().unwrap();
    let edited = dir.path().join("a.ts");
    std::fs::write(&edited, "export function a() {}\n").unwrap();
    std::fs::write(dir.path().join("b.ts"), "export function b() {}\n").unwrap();

    let (orchestrator, graph, _metrics) = build(&dir);
    orchestrator.full_index().await.unwrap();
    assert_eq!(graph.symbol_count(), 2);

    std::fs::write(&edited, "export function a() {}\nexport function a2() {}\n").unwrap();
    let batch = WatchBatch { modified: vec![edited], removed: vec![] };
    let summary = orchestrator.apply_batch(batch).await.unwrap();

    assert_eq!(summary.files_indexed, 1);
    assert_eq!(graph.symbol_count(), 3);
}

#[tokio::test]
async fn renaming_a_class_member_updates_membership() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("widget.ts");
    std::fs::write(&file, "export class Widget {\n  oldName() {}\n}\n").unwrap();

    let (orchestrator, graph, _metrics) = build(&dir);
    orchestrator.full_index().await.unwrap();
    assert!(!graph.find_by_name("oldName").is_empty());
    assert!(graph.find_by_name("newName").is_empty());

    std::fs::write(&file, "export class Widget {\n  newName() {}\n}\n").unwrap();
    let batch = WatchBatch { modified: vec![file], removed: vec![] };
    orchestrator.apply_batch(batch).await.unwrap();

    assert!(graph.find_by_name("oldName").is_empty());
    assert!(!graph.find_by_name("newName").is_empty());
}

#[tokio::test]
async fn deleting_a_file_removes_its_symbols() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("a.ts");
    std::fs::write(&file, "export function a() {}\n").unwrap();

    let (orchestrator, graph, metrics) = build(&dir);
    orchestrator.full_index().await.unwrap();
    assert_eq!(graph.symbol_count(), 1);

    std::fs::remove_file(&file).unwrap();
    let batch = WatchBatch { modified: vec![], removed: vec![file] };
    let summary = orchestrator.apply_batch(batch).await.unwrap();

    assert_eq!(summary.files_removed, 1);
    assert_eq!(graph.symbol_count(), 0);
    assert!(metrics.metrics_for("a.ts").is_none());
}

#[tokio::test]
async fn a_burst_of_saves_collapses_into_one_reindex() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("a.ts");
    std::fs::write(&file, "export function a() {}\n").unwrap();

    let (orchestrator, graph, _metrics) = build(&dir);
    orchestrator.full_index().await.unwrap();

    // Several rapid edits land as one debounced batch by the time the
    // watcher flushes; the orchestrator only sees the final content once.
    std::fs::write(&file, "export function a() {}\nexport function b() {}\n").unwrap();
    std::fs::write(&file, "export function a() {}\nexport function b() {}\nexport function c() {}\n").unwrap();

    let batch = WatchBatch { modified: vec![file], removed: vec![] };
    let summary = orchestrator.apply_batch(batch).await.unwrap();

    assert_eq!(summary.files_indexed, 1);
    assert_eq!(graph.symbol_count(), 3);
}

#[tokio::test]
async fn real_filesystem_writes_surface_as_a_watch_batch() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("a.ts");
    std::fs::write(&file, "export function a() {}\n").unwrap();

    let mut config = Settings::default().watch;
    config.roots = vec![dir.path().to_path_buf()];
    config.include = vec!["**/*.ts".into()];
    config.ignore = vec![];
    config.debounce_ms = 50;

    let mut watcher = FileWatcher::new(config);
    let (batch_tx, mut batch_rx) = mpsc::channel(8);
    let (stop_tx, stop_rx) = mpsc::channel(1);

    let handle = tokio::spawn(async move { watcher.run(batch_tx, stop_rx).await });

    // Give the watcher a moment to start subscribing before we touch the file.
    tokio::time::sleep(Duration::from_millis(50)).await;
    std::fs::write(&file, "export function a() {}\nexport function b() {}\n").unwrap();

    let batch = tokio::time::timeout(Duration::from_secs(5), batch_rx.recv())
        .await
        .expect("watcher should emit a batch before the timeout")
        .expect("channel should not close before emitting a batch");

    assert!(batch.modified.iter().any(|p| p == &file));

    let _ = stop_tx.send(()).await;
    let _ = handle.await;
}

#[tokio::test]
async fn a_file_with_broken_syntax_records_parse_errors_without_aborting_the_batch() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("good.ts"), "export function ok() {}\n").unwrap();
    std::fs::write(dir.path().join("broken.ts"), "export function broken( {\n").unwrap();

    let (orchestrator, graph, metrics) = build(&dir);
    let summary = orchestrator.full_index().await.unwrap();

    assert_eq!(summary.files_indexed, 2);
    assert_eq!(summary.files_skipped, 0);
    assert!(graph.symbols_in_file("good.ts").len() >= 1);
    assert!(metrics.metrics_for("broken.ts").unwrap().parse_errors > 0);
}

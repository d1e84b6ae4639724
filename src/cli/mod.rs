//! Thin CLI shell over the indexing core.

pub mod args;

use crate::config::Settings;
use crate::error::CoreError;
use crate::orchestrator::Orchestrator;
use crate::query::{translate, QueryInput, ResolveResult};
use crate::store::graph_cli::KuzuCliStore;
use crate::store::metrics_cli::DuckDbCliStore;
use args::Command;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc;

pub async fn dispatch(command: Command) -> Result<(), CoreError> {
    match command {
        Command::Init { dir, force } => run_init(&dir, force),
        Command::Index { workspace } => run_index(workspace).await,
        Command::Watch { workspace } => run_watch(workspace).await,
        Command::Query { input, workspace } => run_query(input, workspace).await,
    }
}

fn run_init(dir: &PathBuf, force: bool) -> Result<(), CoreError> {
    std::fs::create_dir_all(dir).map_err(|e| CoreError::IoSkipped {
        path: dir.clone(),
        reason: e.to_string(),
    })?;

    if force {
        let path = dir.join("semindex.toml");
        if path.exists() {
            std::fs::remove_file(&path).map_err(|e| CoreError::IoSkipped {
                path: path.clone(),
                reason: e.to_string(),
            })?;
        }
    }

    let path = Settings::init_config_file(dir)?;
    println!("wrote {}", path.display());
    Ok(())
}

fn build_orchestrator(workspace: PathBuf, settings: &Settings) -> Orchestrator {
    let graph = Arc::new(KuzuCliStore::new(
        settings.store.graph_path.clone(),
        settings.store.kuzu_bin.clone(),
    ));
    let metrics = Arc::new(DuckDbCliStore::new(
        settings.store.metrics_path.clone(),
        settings.store.duckdb_bin.clone(),
    ));
    Orchestrator::new(workspace, settings, graph, metrics)
}

async fn run_index(workspace: PathBuf) -> Result<(), CoreError> {
    let settings = Settings::load()?;
    crate::logging::init_with_config(&settings.logging);
    let orchestrator = build_orchestrator(workspace, &settings);
    let summary = orchestrator.full_index().await?;
    println!(
        "indexed {} files, skipped {}",
        summary.files_indexed, summary.files_skipped
    );
    Ok(())
}

async fn run_watch(workspace: PathBuf) -> Result<(), CoreError> {
    let settings = Settings::load()?;
    crate::logging::init_with_config(&settings.logging);
    let orchestrator = build_orchestrator(workspace, &settings);

    let summary = orchestrator.full_index().await?;
    println!("initial index: {} files", summary.files_indexed);

    let (stop_tx, stop_rx) = mpsc::channel::<()>(1);
    tokio::spawn(async move {
        let _ = tokio::signal::ctrl_c().await;
        let _ = stop_tx.send(()).await;
    });

    let summary = orchestrator.run_watch(stop_rx).await?;
    println!(
        "watch ended: {} reindexed, {} removed",
        summary.files_indexed, summary.files_removed
    );
    Ok(())
}

async fn run_query(input: String, workspace: PathBuf) -> Result<(), CoreError> {
    let settings = Settings::load()?;
    crate::logging::init_with_config(&settings.logging);
    let orchestrator = build_orchestrator(workspace, &settings);

    let resolved = translate(QueryInput::Named(input));
    let pattern = match resolved {
        ResolveResult::Resolved { pattern, .. } => pattern,
        ResolveResult::NotFound => {
            return Err(CoreError::QueryError("no pattern matched the given input".into()));
        }
        ResolveResult::Ambiguous { candidates } => {
            return Err(CoreError::QueryError(format!(
                "ambiguous query, {} candidate patterns matched",
                candidates.len()
            )));
        }
    };

    let cypher = pattern.to_cypher();
    let table = orchestrator
        .graph()
        .run_cypher(&cypher)
        .await
        .map_err(CoreError::StoreUnavailable)?;

    println!("{}", serde_json::to_string_pretty(&table.rows).unwrap_or_default());
    Ok(())
}

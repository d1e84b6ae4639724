//! Graph and metrics store abstractions.
//!
//! Per spec §6, the graph and analytics stores are external engines
//! addressed through a command-line interface rather than an in-process
//! library. `GraphStore`/`MetricsStore` are the capability abstraction
//! spec §9's own design notes invite ("abstract the store behind a
//! capability... supply two implementations"), grounded in the teacher's
//! one subprocess call site (`mcp/client.rs`, driving a child process with
//! `tokio::process::Command`). `KuzuCliStore`/`DuckDbCliStore` are the
//! shipped adapters; `memory` provides in-memory fakes for tests so the
//! rest of the crate never depends on `kuzu`/`duckdb` being installed.

pub mod cypher;
pub mod graph_cli;
pub mod memory;
pub mod metrics_cli;
pub mod table;

use crate::error::StoreError;
use crate::model::{FileHashSnapshot, FileMetrics, Import, Relationship, Symbol, Type};
use async_trait::async_trait;

#[async_trait]
pub trait GraphStore: Send + Sync {
    async fn upsert_symbol(&self, symbol: &Symbol) -> Result<(), StoreError>;
    async fn remove_symbols_for_file(&self, file_path: &str) -> Result<(), StoreError>;
    async fn upsert_type(&self, ty: &Type) -> Result<(), StoreError>;
    async fn remove_types_for_file(&self, file_id: crate::types::FileId) -> Result<(), StoreError>;
    async fn upsert_import(&self, import: &Import) -> Result<(), StoreError>;
    async fn remove_imports_for_file(&self, file_id: crate::types::FileId) -> Result<(), StoreError>;
    async fn upsert_relationship(&self, rel: &Relationship) -> Result<(), StoreError>;
    async fn run_cypher(&self, query: &str) -> Result<table::Table, StoreError>;
}

#[async_trait]
pub trait MetricsStore: Send + Sync {
    async fn upsert_file_metrics(&self, metrics: &FileMetrics) -> Result<(), StoreError>;
    async fn remove_file_metrics(&self, file_path: &str) -> Result<(), StoreError>;
    async fn get_hash_snapshot(&self) -> Result<Vec<FileHashSnapshot>, StoreError>;
    async fn put_hash_snapshot(&self, snapshot: &FileHashSnapshot) -> Result<(), StoreError>;
    async fn remove_hash_snapshot(&self, file_path: &str) -> Result<(), StoreError>;
    async fn run_sql(&self, query: &str) -> Result<Vec<serde_json::Value>, StoreError>;
}

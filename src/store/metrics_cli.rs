//! Metrics store backed by the `duckdb` CLI.
//!
//! Invokes `duckdb <db_path> -json -c "<sql>"` and parses the resulting
//! JSON array directly — no table-parsing needed, which is why spec §6
//! specifies JSON for this store and box-drawing text for the graph store.

use crate::error::StoreError;
use crate::model::{FileHashSnapshot, FileMetrics};
use crate::store::MetricsStore;
use async_trait::async_trait;
use serde_json::Value;
use std::path::PathBuf;
use tokio::process::Command;

pub struct DuckDbCliStore {
    db_path: PathBuf,
    binary: String,
}

impl DuckDbCliStore {
    pub fn new(db_path: PathBuf, binary: impl Into<String>) -> Self {
        Self {
            db_path,
            binary: binary.into(),
        }
    }

    async fn exec(&self, sql: &str) -> Result<Vec<Value>, StoreError> {
        let output = Command::new(&self.binary)
            .arg(&self.db_path)
            .arg("-json")
            .arg("-c")
            .arg(sql)
            .output()
            .await?;

        if !output.status.success() {
            return Err(StoreError::QueryFailed {
                query: sql.to_string(),
                reason: String::from_utf8_lossy(&output.stderr).to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let trimmed = stdout.trim();
        if trimmed.is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(trimmed).map_err(|e| StoreError::MalformedOutput {
            reason: e.to_string(),
        })
    }

    fn escape(value: &str) -> String {
        value.replace('\'', "''")
    }
}

fn ensure_file_hashes_table() -> &'static str {
    "CREATE TABLE IF NOT EXISTS file_hashes (file_path VARCHAR PRIMARY KEY, content_hash VARCHAR, last_scanned BIGINT);"
}

fn ensure_file_metrics_table() -> &'static str {
    "CREATE TABLE IF NOT EXISTS file_metrics (file_id VARCHAR, file_path VARCHAR PRIMARY KEY, symbol_count INTEGER, import_count INTEGER, line_count INTEGER, parse_errors INTEGER, indexed_at BIGINT);"
}

#[async_trait]
impl MetricsStore for DuckDbCliStore {
    async fn upsert_file_metrics(&self, metrics: &FileMetrics) -> Result<(), StoreError> {
        self.exec(ensure_file_metrics_table()).await?;
        let sql = format!(
            "INSERT OR REPLACE INTO file_metrics VALUES ('{}', '{}', {}, {}, {}, {}, {});",
            Self::escape(&metrics.file_id.to_string()),
            Self::escape(&metrics.file_path),
            metrics.symbol_count,
            metrics.import_count,
            metrics.line_count,
            metrics.parse_errors,
            metrics.indexed_at,
        );
        self.exec(&sql).await?;
        Ok(())
    }

    async fn remove_file_metrics(&self, file_path: &str) -> Result<(), StoreError> {
        self.exec(ensure_file_metrics_table()).await?;
        let sql = format!(
            "DELETE FROM file_metrics WHERE file_path = '{}';",
            Self::escape(file_path)
        );
        self.exec(&sql).await?;
        Ok(())
    }

    async fn get_hash_snapshot(&self) -> Result<Vec<FileHashSnapshot>, StoreError> {
        self.exec(ensure_file_hashes_table()).await?;
        let rows = self.exec("SELECT file_path, content_hash, last_scanned FROM file_hashes;").await?;
        rows.into_iter()
            .map(|row| {
                serde_json::from_value(row).map_err(|e| StoreError::MalformedOutput {
                    reason: e.to_string(),
                })
            })
            .collect()
    }

    async fn put_hash_snapshot(&self, snapshot: &FileHashSnapshot) -> Result<(), StoreError> {
        self.exec(ensure_file_hashes_table()).await?;
        let sql = format!(
            "INSERT OR REPLACE INTO file_hashes VALUES ('{}', '{}', {});",
            Self::escape(&snapshot.file_path),
            Self::escape(&snapshot.content_hash),
            snapshot.last_scanned,
        );
        self.exec(&sql).await?;
        Ok(())
    }

    async fn remove_hash_snapshot(&self, file_path: &str) -> Result<(), StoreError> {
        self.exec(ensure_file_hashes_table()).await?;
        let sql = format!(
            "DELETE FROM file_hashes WHERE file_path = '{}';",
            Self::escape(file_path)
        );
        self.exec(&sql).await?;
        Ok(())
    }

    async fn run_sql(&self, query: &str) -> Result<Vec<Value>, StoreError> {
        self.exec(query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_doubles_single_quotes() {
        assert_eq!(DuckDbCliStore::escape("it's"), "it''s");
    }
}

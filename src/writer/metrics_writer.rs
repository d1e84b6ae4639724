//! C7 Metrics Writer: applies per-file analytics and the hash snapshot.

use crate::error::CoreError;
use crate::model::FileHashSnapshot;
use crate::store::MetricsStore;
use std::sync::Arc;

pub struct MetricsWriter {
    store: Arc<dyn MetricsStore>,
}

impl MetricsWriter {
    pub fn new(store: Arc<dyn MetricsStore>) -> Self {
        Self { store }
    }

    pub async fn record_file(
        &self,
        metrics: &crate::model::FileMetrics,
        snapshot: &FileHashSnapshot,
    ) -> Result<(), CoreError> {
        self.store
            .upsert_file_metrics(metrics)
            .await
            .map_err(|e| CoreError::WriteRejection {
                reason: format!("metrics for {}: {e}", metrics.file_path),
            })?;
        self.store
            .put_hash_snapshot(snapshot)
            .await
            .map_err(|e| CoreError::WriteRejection {
                reason: format!("hash snapshot for {}: {e}", snapshot.file_path),
            })
    }

    pub async fn remove_file(&self, file_path: &str) -> Result<(), CoreError> {
        self.store
            .remove_file_metrics(file_path)
            .await
            .map_err(CoreError::StoreUnavailable)?;
        self.store
            .remove_hash_snapshot(file_path)
            .await
            .map_err(CoreError::StoreUnavailable)
    }

    pub async fn load_snapshot(&self) -> Result<Vec<FileHashSnapshot>, CoreError> {
        self.store
            .get_hash_snapshot()
            .await
            .map_err(CoreError::StoreUnavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FileMetrics;
    use crate::store::memory::InMemoryMetricsStore;
    use crate::types::FileId;

    #[tokio::test]
    async fn record_and_remove_round_trip() {
        let store = Arc::new(InMemoryMetricsStore::new());
        let writer = MetricsWriter::new(store.clone());
        let metrics = FileMetrics {
            file_id: FileId::new(1),
            file_path: "a.ts".into(),
            symbol_count: 1,
            import_count: 0,
            line_count: 5,
            parse_errors: 0,
            indexed_at: 10,
        };
        let snapshot = FileHashSnapshot {
            file_path: "a.ts".into(),
            content_hash: "h1".into(),
            last_scanned: 10,
        };
        writer.record_file(&metrics, &snapshot).await.unwrap();
        let loaded = writer.load_snapshot().await.unwrap();
        assert_eq!(loaded.len(), 1);

        writer.remove_file("a.ts").await.unwrap();
        let loaded = writer.load_snapshot().await.unwrap();
        assert!(loaded.is_empty());
    }
}

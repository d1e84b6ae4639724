//! C6 Graph Writer: applies an extraction result to the graph store.

use crate::error::CoreError;
use crate::extract::ExtractionResult;
use crate::store::GraphStore;
use crate::types::FileId;
use std::sync::Arc;

pub struct GraphWriter {
    store: Arc<dyn GraphStore>,
}

impl GraphWriter {
    pub fn new(store: Arc<dyn GraphStore>) -> Self {
        Self { store }
    }

    /// Replace everything known about `file_path` with `result`'s symbols,
    /// types, imports, and relationships. Per spec §4.6/§7, a failed write
    /// for one file is reported but must not abort indexing of the rest of
    /// the batch. Per invariant I1, purging a file must remove every node
    /// kind derived from it, not just symbols.
    pub async fn apply(&self, file_path: &str, file_id: FileId, result: &ExtractionResult) -> Result<(), CoreError> {
        self.store
            .remove_symbols_for_file(file_path)
            .await
            .map_err(CoreError::StoreUnavailable)?;
        self.store
            .remove_types_for_file(file_id)
            .await
            .map_err(CoreError::StoreUnavailable)?;
        self.store
            .remove_imports_for_file(file_id)
            .await
            .map_err(CoreError::StoreUnavailable)?;

        for symbol in &result.symbols {
            self.store
                .upsert_symbol(symbol)
                .await
                .map_err(|e| CoreError::WriteRejection {
                    reason: format!("symbol {}: {e}", symbol.name),
                })?;
        }

        for ty in &result.types {
            self.store
                .upsert_type(ty)
                .await
                .map_err(|e| CoreError::WriteRejection {
                    reason: format!("type {}: {e}", ty.name),
                })?;
        }

        for import in &result.imports {
            self.store
                .upsert_import(import)
                .await
                .map_err(|e| CoreError::WriteRejection {
                    reason: format!("import {}: {e}", import.source_path),
                })?;
        }

        for rel in &result.relationships {
            self.store
                .upsert_relationship(rel)
                .await
                .map_err(|e| CoreError::WriteRejection {
                    reason: format!("relationship {:?}->{:?}: {e}", rel.from, rel.to),
                })?;
        }

        Ok(())
    }

    pub async fn remove_file(&self, file_path: &str, file_id: FileId) -> Result<(), CoreError> {
        self.store
            .remove_symbols_for_file(file_path)
            .await
            .map_err(CoreError::StoreUnavailable)?;
        self.store
            .remove_types_for_file(file_id)
            .await
            .map_err(CoreError::StoreUnavailable)?;
        self.store
            .remove_imports_for_file(file_id)
            .await
            .map_err(CoreError::StoreUnavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::TypeScriptExtractor;
    use crate::store::memory::InMemoryGraphStore;
    use crate::types::FileId;
    use std::path::PathBuf;

    #[tokio::test]
    async fn apply_writes_symbols_and_relationships() {
        let store = Arc::new(InMemoryGraphStore::new());
        let writer = GraphWriter::new(store.clone());
        let extractor = TypeScriptExtractor::new();
        let result = extractor
            .extract(&PathBuf::from("a.ts"), "function a() { b(); }\nfunction b() {}\n", FileId::new(1))
            .unwrap();

        writer.apply("a.ts", FileId::new(1), &result).await.unwrap();
        assert_eq!(store.symbol_count(), 2);
        assert!(store.relationship_count() >= 1);
    }

    #[tokio::test]
    async fn apply_replaces_prior_symbols_for_file() {
        let store = Arc::new(InMemoryGraphStore::new());
        let writer = GraphWriter::new(store.clone());
        let extractor = TypeScriptExtractor::new();

        let first = extractor
            .extract(&PathBuf::from("a.ts"), "function a() {}\nfunction b() {}\n", FileId::new(1))
            .unwrap();
        writer.apply("a.ts", FileId::new(1), &first).await.unwrap();
        assert_eq!(store.symbol_count(), 2);

        let second = extractor
            .extract(&PathBuf::from("a.ts"), "function a() {}\n", FileId::new(1))
            .unwrap();
        writer.apply("a.ts", FileId::new(1), &second).await.unwrap();
        assert_eq!(store.symbol_count(), 1);
    }
}

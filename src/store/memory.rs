//! In-memory `GraphStore`/`MetricsStore` fakes.
//!
//! Used by component and end-to-end tests so they never need a real
//! `kuzu`/`duckdb` binary on the test machine (spec §1 places those
//! engines out of scope; SPEC_FULL.md's test tooling section calls for
//! fakes rather than spawning real subprocesses in tests).

use crate::error::StoreError;
use crate::model::{FileHashSnapshot, FileMetrics, Import, Relationship, Symbol, Type};
use crate::store::table::Table;
use crate::store::{GraphStore, MetricsStore};
use crate::types::{FileId, ImportId, TypeId};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;

#[derive(Default)]
pub struct InMemoryGraphStore {
    symbols: Mutex<HashMap<crate::types::SymbolId, Symbol>>,
    relationships: Mutex<Vec<Relationship>>,
    types: Mutex<HashMap<TypeId, Type>>,
    imports: Mutex<HashMap<ImportId, Import>>,
}

impl InMemoryGraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn symbol_count(&self) -> usize {
        self.symbols.lock().len()
    }

    pub fn relationship_count(&self) -> usize {
        self.relationships.lock().len()
    }

    pub fn symbols_in_file(&self, file_path: &str) -> Vec<Symbol> {
        self.symbols
            .lock()
            .values()
            .filter(|s| s.file_path == file_path)
            .cloned()
            .collect()
    }

    pub fn find_by_name(&self, name: &str) -> Vec<Symbol> {
        self.symbols
            .lock()
            .values()
            .filter(|s| s.name == name)
            .cloned()
            .collect()
    }

    pub fn relationships_from(&self, from: crate::types::SymbolId) -> Vec<Relationship> {
        self.relationships
            .lock()
            .iter()
            .filter(|r| r.from == from)
            .cloned()
            .collect()
    }

    pub fn type_count(&self) -> usize {
        self.types.lock().len()
    }

    pub fn import_count(&self) -> usize {
        self.imports.lock().len()
    }
}

#[async_trait]
impl GraphStore for InMemoryGraphStore {
    async fn upsert_symbol(&self, symbol: &Symbol) -> Result<(), StoreError> {
        self.symbols.lock().insert(symbol.id, symbol.clone());
        Ok(())
    }

    async fn remove_symbols_for_file(&self, file_path: &str) -> Result<(), StoreError> {
        let mut symbols = self.symbols.lock();
        let removed: Vec<_> = symbols
            .iter()
            .filter(|(_, s)| s.file_path == file_path)
            .map(|(id, _)| *id)
            .collect();
        for id in &removed {
            symbols.remove(id);
        }
        drop(symbols);
        self.relationships
            .lock()
            .retain(|r| !removed.contains(&r.from) && !removed.contains(&r.to));
        Ok(())
    }

    async fn upsert_type(&self, ty: &Type) -> Result<(), StoreError> {
        self.types.lock().insert(ty.id, ty.clone());
        Ok(())
    }

    async fn remove_types_for_file(&self, file_id: FileId) -> Result<(), StoreError> {
        self.types.lock().retain(|_, t| t.file_id != file_id);
        Ok(())
    }

    async fn upsert_import(&self, import: &Import) -> Result<(), StoreError> {
        self.imports.lock().insert(import.id, import.clone());
        Ok(())
    }

    async fn remove_imports_for_file(&self, file_id: FileId) -> Result<(), StoreError> {
        self.imports.lock().retain(|_, i| i.file_id != file_id);
        Ok(())
    }

    async fn upsert_relationship(&self, rel: &Relationship) -> Result<(), StoreError> {
        self.relationships.lock().push(rel.clone());
        Ok(())
    }

    async fn run_cypher(&self, _query: &str) -> Result<Table, StoreError> {
        Ok(Table {
            columns: Vec::new(),
            rows: Vec::new(),
        })
    }
}

#[derive(Default)]
pub struct InMemoryMetricsStore {
    metrics: Mutex<HashMap<String, FileMetrics>>,
    hashes: Mutex<HashMap<String, FileHashSnapshot>>,
}

impl InMemoryMetricsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn metrics_for(&self, file_path: &str) -> Option<FileMetrics> {
        self.metrics.lock().get(file_path).cloned()
    }
}

#[async_trait]
impl MetricsStore for InMemoryMetricsStore {
    async fn upsert_file_metrics(&self, metrics: &FileMetrics) -> Result<(), StoreError> {
        self.metrics
            .lock()
            .insert(metrics.file_path.clone(), metrics.clone());
        Ok(())
    }

    async fn remove_file_metrics(&self, file_path: &str) -> Result<(), StoreError> {
        self.metrics.lock().remove(file_path);
        Ok(())
    }

    async fn get_hash_snapshot(&self) -> Result<Vec<FileHashSnapshot>, StoreError> {
        Ok(self.hashes.lock().values().cloned().collect())
    }

    async fn put_hash_snapshot(&self, snapshot: &FileHashSnapshot) -> Result<(), StoreError> {
        self.hashes
            .lock()
            .insert(snapshot.file_path.clone(), snapshot.clone());
        Ok(())
    }

    async fn remove_hash_snapshot(&self, file_path: &str) -> Result<(), StoreError> {
        self.hashes.lock().remove(file_path);
        Ok(())
    }

    async fn run_sql(&self, _query: &str) -> Result<Vec<serde_json::Value>, StoreError> {
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FileId, Range, RelationKind, SymbolId, SymbolKind};

    #[tokio::test]
    async fn upsert_and_remove_symbols_for_file() {
        let store = InMemoryGraphStore::new();
        let sym = Symbol::new(SymbolId::new(1), "f", SymbolKind::Function, FileId::new(1), "a.ts", Range::new(0, 0, 1, 0));
        store.upsert_symbol(&sym).await.unwrap();
        assert_eq!(store.symbol_count(), 1);
        store.remove_symbols_for_file("a.ts").await.unwrap();
        assert_eq!(store.symbol_count(), 0);
    }

    #[tokio::test]
    async fn relationships_removed_when_endpoint_file_removed() {
        let store = InMemoryGraphStore::new();
        let a = Symbol::new(SymbolId::new(1), "a", SymbolKind::Function, FileId::new(1), "a.ts", Range::new(0, 0, 1, 0));
        let b = Symbol::new(SymbolId::new(2), "b", SymbolKind::Function, FileId::new(2), "b.ts", Range::new(0, 0, 1, 0));
        store.upsert_symbol(&a).await.unwrap();
        store.upsert_symbol(&b).await.unwrap();
        store
            .upsert_relationship(&Relationship::new(a.id, b.id, RelationKind::Calls))
            .await
            .unwrap();
        assert_eq!(store.relationship_count(), 1);
        store.remove_symbols_for_file("a.ts").await.unwrap();
        assert_eq!(store.relationship_count(), 0);
    }

    #[tokio::test]
    async fn metrics_round_trip() {
        let store = InMemoryMetricsStore::new();
        let metrics = FileMetrics {
            file_id: FileId::new(1),
            file_path: "a.ts".to_string(),
            symbol_count: 3,
            import_count: 1,
            line_count: 10,
            parse_errors: 0,
            indexed_at: 123,
        };
        store.upsert_file_metrics(&metrics).await.unwrap();
        assert_eq!(store.metrics_for("a.ts").unwrap().symbol_count, 3);
        store.remove_file_metrics("a.ts").await.unwrap();
        assert!(store.metrics_for("a.ts").is_none());
    }
}

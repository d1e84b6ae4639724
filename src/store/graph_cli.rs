//! Graph store backed by the `kuzu` CLI.
//!
//! Writes Cypher statements to a temp file and pipes it into `kuzu
//! <db_path> < query_file`, capturing stdout and parsing the box-drawing
//! table it prints. Spawning a subprocess and driving it with
//! `tokio::process::Command` follows the teacher's `mcp/client.rs`, the
//! only subprocess call site in the teacher crate.

use crate::error::StoreError;
use crate::model::{Import, Relationship, Symbol, Type};
use crate::store::{cypher, table::Table, GraphStore};
use crate::types::FileId;
use async_trait::async_trait;
use std::io::Write;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::process::Command;

pub struct KuzuCliStore {
    db_path: PathBuf,
    binary: String,
}

impl KuzuCliStore {
    pub fn new(db_path: PathBuf, binary: impl Into<String>) -> Self {
        Self {
            db_path,
            binary: binary.into(),
        }
    }

    async fn exec(&self, cypher: &str) -> Result<String, StoreError> {
        let mut file = tempfile::NamedTempFile::new()?;
        writeln!(file, "{cypher}")?;
        let path = file.path().to_path_buf();

        let stdin_file = std::fs::File::open(&path)?;
        let output = Command::new(&self.binary)
            .arg(&self.db_path)
            .stdin(Stdio::from(stdin_file))
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await?;

        if !output.status.success() {
            return Err(StoreError::QueryFailed {
                query: cypher.to_string(),
                reason: String::from_utf8_lossy(&output.stderr).to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

#[async_trait]
impl GraphStore for KuzuCliStore {
    async fn upsert_symbol(&self, symbol: &Symbol) -> Result<(), StoreError> {
        let props = vec![
            ("id", cypher::quote(&symbol.id.to_string())),
            ("name", cypher::quote(&symbol.name)),
            ("kind", cypher::quote(&format!("{:?}", symbol.kind))),
            ("file_path", cypher::quote(&symbol.file_path)),
        ];
        let stmt = cypher::merge_node("Symbol", &props);
        self.exec(&stmt).await?;
        Ok(())
    }

    async fn remove_symbols_for_file(&self, file_path: &str) -> Result<(), StoreError> {
        let stmt = format!(
            "MATCH (n:Symbol {{file_path: {}}}) DETACH DELETE n;",
            cypher::quote(file_path)
        );
        self.exec(&stmt).await?;
        Ok(())
    }

    async fn upsert_type(&self, ty: &Type) -> Result<(), StoreError> {
        let props = vec![
            ("id", cypher::quote(&ty.id.to_string())),
            ("name", cypher::quote(&ty.name)),
            ("file_id", cypher::quote(&ty.file_id.to_string())),
            ("is_builtin", ty.is_builtin.to_string()),
        ];
        let stmt = cypher::merge_node("Type", &props);
        self.exec(&stmt).await?;
        Ok(())
    }

    async fn remove_types_for_file(&self, file_id: FileId) -> Result<(), StoreError> {
        let stmt = format!(
            "MATCH (n:Type {{file_id: {}}}) DETACH DELETE n;",
            cypher::quote(&file_id.to_string())
        );
        self.exec(&stmt).await?;
        Ok(())
    }

    async fn upsert_import(&self, import: &Import) -> Result<(), StoreError> {
        let props = vec![
            ("id", cypher::quote(&import.id.to_string())),
            ("file_id", cypher::quote(&import.file_id.to_string())),
            ("source_path", cypher::quote(&import.source_path)),
            ("alias", cypher::quote(import.alias.as_deref().unwrap_or(""))),
            ("is_glob", import.is_glob.to_string()),
            ("is_type_only", import.is_type_only.to_string()),
        ];
        let stmt = cypher::merge_node("Import", &props);
        self.exec(&stmt).await?;
        Ok(())
    }

    async fn remove_imports_for_file(&self, file_id: FileId) -> Result<(), StoreError> {
        let stmt = format!(
            "MATCH (n:Import {{file_id: {}}}) DETACH DELETE n;",
            cypher::quote(&file_id.to_string())
        );
        self.exec(&stmt).await?;
        Ok(())
    }

    async fn upsert_relationship(&self, rel: &Relationship) -> Result<(), StoreError> {
        let stmt = cypher::merge_edge(
            "Symbol",
            &rel.from.to_string(),
            rel.kind.as_cypher_label(),
            "Symbol",
            &rel.to.to_string(),
        );
        self.exec(&stmt).await?;
        Ok(())
    }

    async fn run_cypher(&self, query: &str) -> Result<Table, StoreError> {
        let out = self.exec(query).await?;
        Ok(crate::store::table::parse(&out))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_db_path_and_binary() {
        let store = KuzuCliStore::new(PathBuf::from("./.kuzu/semantic.db"), "kuzu");
        assert_eq!(store.binary, "kuzu");
        assert_eq!(store.db_path, PathBuf::from("./.kuzu/semantic.db"));
    }
}

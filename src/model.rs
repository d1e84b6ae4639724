//! Entity types persisted to the graph and analytics stores.
//!
//! Follows the teacher's `symbol/mod.rs` shape (a plain data struct plus
//! builder-style `with_*` methods) but without the packed `CompactSymbol`
//! binary representation, which optimizes for an in-process index far
//! larger than this crate targets.

use crate::types::{FileId, ImportId, Range, RelationKind, SymbolId, SymbolKind, TypeId, Visibility};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Symbol {
    pub id: SymbolId,
    pub name: String,
    pub kind: SymbolKind,
    pub file_id: FileId,
    pub file_path: String,
    pub range: Range,
    pub visibility: Visibility,
    pub signature: Option<String>,
    pub doc_comment: Option<String>,
    pub module_path: Option<String>,
    pub parent: Option<SymbolId>,
}

impl Symbol {
    pub fn new(
        id: SymbolId,
        name: impl Into<String>,
        kind: SymbolKind,
        file_id: FileId,
        file_path: impl Into<String>,
        range: Range,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            file_id,
            file_path: file_path.into(),
            range,
            visibility: Visibility::Private,
            signature: None,
            doc_comment: None,
            module_path: None,
            parent: None,
        }
    }

    pub fn with_signature(mut self, sig: impl Into<String>) -> Self {
        self.signature = Some(sig.into());
        self
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc_comment = Some(doc.into());
        self
    }

    pub fn with_visibility(mut self, vis: Visibility) -> Self {
        self.visibility = vis;
        self
    }

    pub fn with_module_path(mut self, path: impl Into<String>) -> Self {
        self.module_path = Some(path.into());
        self
    }

    pub fn with_parent(mut self, parent: SymbolId) -> Self {
        self.parent = Some(parent);
        self
    }
}

/// A type annotation encountered on a symbol (parameter, return, field).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Type {
    pub id: TypeId,
    pub name: String,
    pub file_id: FileId,
    pub is_builtin: bool,
}

impl Type {
    pub fn new(id: TypeId, name: impl Into<String>, file_id: FileId) -> Self {
        let name = name.into();
        let is_builtin = matches!(
            name.as_str(),
            "string" | "number" | "boolean" | "void" | "any" | "unknown" | "never" | "object" | "null" | "undefined"
        );
        Self {
            id,
            name,
            file_id,
            is_builtin,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Import {
    pub id: ImportId,
    pub file_id: FileId,
    pub source_path: String,
    pub alias: Option<String>,
    pub is_glob: bool,
    pub is_type_only: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Relationship {
    pub from: SymbolId,
    pub to: SymbolId,
    pub kind: RelationKind,
    pub range: Option<Range>,
}

impl Relationship {
    pub fn new(from: SymbolId, to: SymbolId, kind: RelationKind) -> Self {
        Self {
            from,
            to,
            kind,
            range: None,
        }
    }

    pub fn with_range(mut self, range: Range) -> Self {
        self.range = Some(range);
        self
    }
}

/// Per-file analytics row written to the metrics store (spec §3).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileMetrics {
    pub file_id: FileId,
    pub file_path: String,
    pub symbol_count: u32,
    pub import_count: u32,
    pub line_count: u32,
    pub parse_errors: u32,
    pub indexed_at: i64,
}

/// Content-hash snapshot row, the input to change detection (spec §3/§4.3).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileHashSnapshot {
    pub file_path: String,
    pub content_hash: String,
    pub last_scanned: i64,
}

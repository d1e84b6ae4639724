//! Newtype identifiers and small enums shared across the crate.
//!
//! Mirrors the teacher's `types/mod.rs` split: tiny `Copy` ID types and
//! enums live here, larger entity structs live in `model.rs`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

macro_rules! entity_id {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(pub u64);

        impl $name {
            pub fn new(n: u64) -> Self {
                Self(n)
            }

            pub fn get(self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}_{}", $prefix, self.0)
            }
        }
    };
}

entity_id!(SymbolId, "sym");
entity_id!(TypeId, "type");
entity_id!(ImportId, "import");
entity_id!(RelationshipId, "rel");
entity_id!(FileId, "file");

/// Monotonic per-process ID generator producing `"<prefix>_<monotonic>_<counter>"`.
///
/// Per spec §4.5: IDs must be unique within a process lifetime and stable
/// enough to compare for equality, but carry no cross-process meaning.
pub struct IdGenerator {
    prefix: &'static str,
    counter: AtomicU64,
}

impl IdGenerator {
    pub fn new(prefix: &'static str) -> Self {
        Self {
            prefix,
            counter: AtomicU64::new(0),
        }
    }

    pub fn next(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed);
        let monotonic = now_monotonic_millis();
        format!("{}_{}_{}", self.prefix, monotonic, n)
    }
}

fn now_monotonic_millis() -> u128 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}

/// Kind of a symbol extracted from source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolKind {
    Function,
    Method,
    Class,
    Interface,
    TypeAlias,
    Enum,
    Variable,
    Constant,
    Field,
    Parameter,
    Module,
}

/// Declared or inferred visibility of a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Public,
    Private,
    Protected,
}

/// Typed edge kind between two symbols, per spec §3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RelationKind {
    MemberOf,
    Calls,
    HasType,
    Extends,
    Implements,
    DependsOn,
    Imports,
}

impl RelationKind {
    pub fn as_cypher_label(self) -> &'static str {
        match self {
            RelationKind::MemberOf => "MEMBER_OF",
            RelationKind::Calls => "CALLS",
            RelationKind::HasType => "HAS_TYPE",
            RelationKind::Extends => "EXTENDS",
            RelationKind::Implements => "IMPLEMENTS",
            RelationKind::DependsOn => "DEPENDS_ON",
            RelationKind::Imports => "IMPORTS",
        }
    }
}

/// Zero-indexed half-open source range, byte-free (row/column only) like the
/// teacher's `Range`, since the extractor never needs byte offsets downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    pub start_line: u32,
    pub start_column: u32,
    pub end_line: u32,
    pub end_column: u32,
}

impl Range {
    pub fn new(start_line: u32, start_column: u32, end_line: u32, end_column: u32) -> Self {
        Self {
            start_line,
            start_column,
            end_line,
            end_column,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_display_has_prefix() {
        let id = SymbolId::new(7);
        assert_eq!(id.to_string(), "sym_7");
    }

    #[test]
    fn id_generator_produces_unique_increasing_counters() {
        let r#gen = IdGenerator::new("sym");
        let a = r#gen.next();
        let b = r#gen.next();
        assert_ne!(a, b);
        assert!(a.starts_with("sym_"));
        assert!(b.ends_with("_1"));
    }

    #[test]
    fn relation_kind_cypher_labels() {
        assert_eq!(RelationKind::MemberOf.as_cypher_label(), "MEMBER_OF");
        assert_eq!(RelationKind::DependsOn.as_cypher_label(), "DEPENDS_ON");
    }
}

//! Per-extraction-run ID counters.
//!
//! Mirrors the teacher's `SymbolCounter`: a plain incrementing counter
//! scoped to one extraction run, producing [`crate::types::SymbolId`] values
//! that are unique within the run. Cross-run/global uniqueness for string
//! IDs exposed at the API boundary is handled by
//! [`crate::types::IdGenerator`].

use crate::types::{ImportId, SymbolId, TypeId};

#[derive(Debug, Default)]
pub struct SymbolCounter {
    next: u64,
}

impl SymbolCounter {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    pub fn next_id(&mut self) -> SymbolId {
        let id = SymbolId::new(self.next);
        self.next += 1;
        id
    }
}

#[derive(Debug, Default)]
pub struct TypeCounter {
    next: u64,
}

impl TypeCounter {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    pub fn next_id(&mut self) -> TypeId {
        let id = TypeId::new(self.next);
        self.next += 1;
        id
    }
}

#[derive(Debug, Default)]
pub struct ImportCounter {
    next: u64,
}

impl ImportCounter {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    pub fn next_id(&mut self) -> ImportId {
        let id = ImportId::new(self.next);
        self.next += 1;
        id
    }
}

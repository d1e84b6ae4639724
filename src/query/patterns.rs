//! The fixed query pattern catalogue (spec §4.8).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pattern {
    FindCallers { symbol: String },
    FindCallees { symbol: String },
    FindExports { file_path: String },
    FindImports { file_path: String },
    FindDependencies { file_path: String },
    FindDependents { file_path: String },
    FindClasses,
    FindClassMembers { class_name: String },
    FindExtends { symbol: String },
    FindImplementations { interface_name: String },
    FindCallGraph { symbol: String, depth: u32 },
    FindUnusedExports,
    FindSymbolsInFile { file_path: String },
}

impl Pattern {
    pub fn template_name(&self) -> &'static str {
        match self {
            Pattern::FindCallers { .. } => "findCallers",
            Pattern::FindCallees { .. } => "findCallees",
            Pattern::FindExports { .. } => "findExports",
            Pattern::FindImports { .. } => "findImports",
            Pattern::FindDependencies { .. } => "findDependencies",
            Pattern::FindDependents { .. } => "findDependents",
            Pattern::FindClasses => "findClasses",
            Pattern::FindClassMembers { .. } => "findClassMembers",
            Pattern::FindExtends { .. } => "findExtends",
            Pattern::FindImplementations { .. } => "findImplementations",
            Pattern::FindCallGraph { .. } => "findCallGraph",
            Pattern::FindUnusedExports => "findUnusedExports",
            Pattern::FindSymbolsInFile { .. } => "findSymbolsInFile",
        }
    }

    /// Renders this pattern to the Cypher text the graph store executes.
    pub fn to_cypher(&self) -> String {
        use crate::store::cypher::quote;
        match self {
            Pattern::FindCallers { symbol } => format!(
                "MATCH (caller:Symbol)-[:CALLS]->(callee:Symbol {{name: {}}}) RETURN caller.name, caller.file_path;",
                quote(symbol)
            ),
            Pattern::FindCallees { symbol } => format!(
                "MATCH (caller:Symbol {{name: {}}})-[:CALLS]->(callee:Symbol) RETURN callee.name, callee.file_path;",
                quote(symbol)
            ),
            Pattern::FindExports { file_path } => format!(
                "MATCH (s:Symbol {{file_path: {}, visibility: 'Public'}}) RETURN s.name, s.kind;",
                quote(file_path)
            ),
            Pattern::FindImports { file_path } => format!(
                "MATCH (s:Symbol {{file_path: {}}}) RETURN s.name;",
                quote(file_path)
            ),
            Pattern::FindDependencies { file_path } => format!(
                "MATCH (s:Symbol {{file_path: {}}})-[:DEPENDS_ON]->(d:Symbol) RETURN DISTINCT d.file_path;",
                quote(file_path)
            ),
            Pattern::FindDependents { file_path } => format!(
                "MATCH (d:Symbol)-[:DEPENDS_ON]->(s:Symbol {{file_path: {}}}) RETURN DISTINCT d.file_path;",
                quote(file_path)
            ),
            Pattern::FindClasses => "MATCH (s:Symbol {kind: 'Class'}) RETURN s.name, s.file_path;".to_string(),
            Pattern::FindClassMembers { class_name } => format!(
                "MATCH (c:Symbol {{name: {}, kind: 'Class'}})<-[:MEMBER_OF]-(m:Symbol) RETURN m.name, m.kind;",
                quote(class_name)
            ),
            Pattern::FindExtends { symbol } => format!(
                "MATCH (s:Symbol {{name: {}}})-[:EXTENDS]->(p:Symbol) RETURN p.name;",
                quote(symbol)
            ),
            Pattern::FindImplementations { interface_name } => format!(
                "MATCH (s:Symbol)-[:IMPLEMENTS]->(i:Symbol {{name: {}}}) RETURN s.name, s.file_path;",
                quote(interface_name)
            ),
            Pattern::FindCallGraph { symbol, depth } => format!(
                "MATCH p=(s:Symbol {{name: {}}})-[:CALLS*1..{}]->(d:Symbol) RETURN p;",
                quote(symbol),
                depth
            ),
            Pattern::FindUnusedExports => {
                "MATCH (s:Symbol {visibility: 'Public'}) WHERE NOT (()-[:CALLS|DEPENDS_ON]->(s)) RETURN s.name, s.file_path;".to_string()
            }
            Pattern::FindSymbolsInFile { file_path } => format!(
                "MATCH (s:Symbol {{file_path: {}}}) RETURN s.name, s.kind;",
                quote(file_path)
            ),
        }
    }
}

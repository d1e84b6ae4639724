//! Tier (a): fluent `QueryBuilder`, the highest-precedence construction path.

use crate::query::patterns::Pattern;

#[derive(Default)]
pub struct QueryBuilder;

impl QueryBuilder {
    pub fn find_callers(symbol: impl Into<String>) -> Pattern {
        Pattern::FindCallers { symbol: symbol.into() }
    }

    pub fn find_callees(symbol: impl Into<String>) -> Pattern {
        Pattern::FindCallees { symbol: symbol.into() }
    }

    pub fn find_exports(file_path: impl Into<String>) -> Pattern {
        Pattern::FindExports { file_path: file_path.into() }
    }

    pub fn find_imports(file_path: impl Into<String>) -> Pattern {
        Pattern::FindImports { file_path: file_path.into() }
    }

    pub fn find_dependencies(file_path: impl Into<String>) -> Pattern {
        Pattern::FindDependencies { file_path: file_path.into() }
    }

    pub fn find_dependents(file_path: impl Into<String>) -> Pattern {
        Pattern::FindDependents { file_path: file_path.into() }
    }

    pub fn find_classes() -> Pattern {
        Pattern::FindClasses
    }

    pub fn find_class_members(class_name: impl Into<String>) -> Pattern {
        Pattern::FindClassMembers { class_name: class_name.into() }
    }

    pub fn find_extends(symbol: impl Into<String>) -> Pattern {
        Pattern::FindExtends { symbol: symbol.into() }
    }

    pub fn find_implementations(interface_name: impl Into<String>) -> Pattern {
        Pattern::FindImplementations { interface_name: interface_name.into() }
    }

    pub fn find_call_graph(symbol: impl Into<String>, depth: u32) -> Pattern {
        Pattern::FindCallGraph { symbol: symbol.into(), depth }
    }

    pub fn find_unused_exports() -> Pattern {
        Pattern::FindUnusedExports
    }

    pub fn find_symbols_in_file(file_path: impl Into<String>) -> Pattern {
        Pattern::FindSymbolsInFile { file_path: file_path.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_produces_expected_pattern() {
        let pattern = QueryBuilder::find_callers("foo");
        assert_eq!(pattern, Pattern::FindCallers { symbol: "foo".into() });
    }

    #[test]
    fn find_call_graph_carries_depth() {
        let pattern = QueryBuilder::find_call_graph("foo", 3);
        assert_eq!(
            pattern,
            Pattern::FindCallGraph { symbol: "foo".into(), depth: 3 }
        );
    }
}

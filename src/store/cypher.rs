//! Cypher fragment building and escaping for the graph store.

/// Escapes a string for embedding inside a single-quoted Cypher literal.
pub fn escape_str(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'").replace('"', "\\\"")
}

pub fn quote(value: &str) -> String {
    format!("'{}'", escape_str(value))
}

/// Builds a `MERGE (n:Label {key: value, ...})` statement.
pub fn merge_node(label: &str, props: &[(&str, String)]) -> String {
    let body = props
        .iter()
        .map(|(k, v)| format!("{k}: {v}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!("MERGE (n:{label} {{{body}}});")
}

/// Builds a `MATCH (a), (b) ... MERGE (a)-[:KIND]->(b)` edge statement
/// matched by `id` property on both endpoints.
pub fn merge_edge(from_label: &str, from_id: &str, kind: &str, to_label: &str, to_id: &str) -> String {
    format!(
        "MATCH (a:{from_label} {{id: {from}}}), (b:{to_label} {{id: {to}}}) MERGE (a)-[:{kind}]->(b);",
        from = quote(from_id),
        to = quote(to_id),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_quotes_and_backslashes() {
        assert_eq!(escape_str("it's"), "it\\'s");
        assert_eq!(escape_str("a\\b"), "a\\\\b");
        assert_eq!(escape_str("say \"hi\""), "say \\\"hi\\\"");
    }

    #[test]
    fn merge_node_renders_properties() {
        let stmt = merge_node("Symbol", &[("id", quote("sym_1")), ("name", quote("foo"))]);
        assert_eq!(stmt, "MERGE (n:Symbol {id: 'sym_1', name: 'foo'});");
    }

    #[test]
    fn merge_edge_matches_both_endpoints() {
        let stmt = merge_edge("Symbol", "sym_1", "CALLS", "Symbol", "sym_2");
        assert!(stmt.contains("MERGE (a)-[:CALLS]->(b)"));
        assert!(stmt.contains("'sym_1'"));
    }
}

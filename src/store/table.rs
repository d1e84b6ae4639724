//! Parses the Unicode box-drawing tables the `kuzu` CLI prints to stdout.
//!
//! The shell renders query results as a table bounded by `┌─┬─┐` /
//! `├─┼─┤` / `└─┴─┘` border rows, with `│`-delimited data rows in between.
//! This parser strips ANSI escapes first, then splits the remaining text
//! into header and data rows.

use std::collections::HashMap;

const ANSI_PATTERN: &str = r"\x1b\[[0-9;]*[a-zA-Z]";

pub fn strip_ansi(input: &str) -> String {
    let re = regex::Regex::new(ANSI_PATTERN).expect("static pattern is valid");
    re.replace_all(input, "").to_string()
}

/// A parsed table: column names in order, and rows as column->value maps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<HashMap<String, String>>,
}

pub fn parse(raw: &str) -> Table {
    let clean = strip_ansi(raw);
    let lines: Vec<&str> = clean
        .lines()
        .filter(|l| l.contains('│'))
        .collect();

    if lines.is_empty() {
        return Table {
            columns: Vec::new(),
            rows: Vec::new(),
        };
    }

    let columns = split_row(lines[0]);
    let mut rows = Vec::new();

    for line in lines.iter().skip(1) {
        let cells = split_row(line);
        if cells.len() != columns.len() {
            continue;
        }
        let row: HashMap<String, String> = columns
            .iter()
            .cloned()
            .zip(cells.into_iter())
            .collect();
        rows.push(row);
    }

    Table { columns, rows }
}

fn split_row(line: &str) -> Vec<String> {
    line.trim()
        .trim_matches('│')
        .split('│')
        .map(|cell| cell.trim().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_ansi_escapes() {
        let input = "\x1b[1mname\x1b[0m";
        assert_eq!(strip_ansi(input), "name");
    }

    #[test]
    fn parses_simple_table() {
        let raw = "\
┌────────┬──────┐
│ name   │ kind │
├────────┼──────┤
│ foo    │ func │
│ bar    │ func │
└────────┴──────┘
";
        let table = parse(raw);
        assert_eq!(table.columns, vec!["name", "kind"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].get("name"), Some(&"foo".to_string()));
    }

    #[test]
    fn empty_input_yields_empty_table() {
        let table = parse("");
        assert!(table.columns.is_empty());
        assert!(table.rows.is_empty());
    }
}

//! Derives a [`FileMetrics`] row from an extraction result.

use crate::extract::typescript::ExtractionResult;
use crate::model::FileMetrics;
use crate::types::FileId;

pub fn compute(file_id: FileId, file_path: &str, result: &ExtractionResult, now: i64) -> FileMetrics {
    FileMetrics {
        file_id,
        file_path: file_path.to_string(),
        symbol_count: result.symbols.len() as u32,
        import_count: result.imports.len() as u32,
        line_count: result.line_count,
        parse_errors: result.parse_errors,
        indexed_at: now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::typescript::TypeScriptExtractor;
    use std::path::PathBuf;

    #[test]
    fn counts_match_extraction_result() {
        let extractor = TypeScriptExtractor::new();
        let result = extractor
            .extract(&PathBuf::from("a.ts"), "export function f() {}\n", FileId::new(1))
            .unwrap();
        let metrics = compute(FileId::new(1), "a.ts", &result, 1000);
        assert_eq!(metrics.symbol_count, 1);
        assert_eq!(metrics.indexed_at, 1000);
    }
}

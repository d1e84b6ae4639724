//! C5 AST Extractor.

pub mod ids;
pub mod metrics;
pub mod typescript;

pub use typescript::{ExtractionResult, TypeScriptExtractor};

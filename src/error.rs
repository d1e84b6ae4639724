//! Error taxonomy for the indexing core.
//!
//! Split into per-domain enums the way the teacher's `error.rs` splits
//! `IndexError`/`ParseError`/`StorageError`/`McpError`; composed into a
//! single `CoreError` at the orchestrator boundary.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("tree-sitter failed to parse {path}")]
    ParseFailed { path: PathBuf },

    #[error("unsupported file extension: {path}")]
    UnsupportedFileType { path: PathBuf },
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("query execution failed: {query}: {reason}")]
    QueryFailed { query: String, reason: String },

    #[error("failed to parse store output: {reason}")]
    MalformedOutput { reason: String },

    #[error("io error talking to store subprocess: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum WatchError {
    #[error("failed to initialize watcher: {reason}")]
    InitFailed { reason: String },

    #[error("cannot watch path {path}: {reason}")]
    PathWatchFailed { path: PathBuf, reason: String },

    #[error("filesystem event error: {details}")]
    EventError { details: String },

    #[error("watch channel closed unexpectedly")]
    ChannelClosed,
}

impl From<notify::Error> for WatchError {
    fn from(e: notify::Error) -> Self {
        WatchError::InitFailed {
            reason: e.to_string(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to load configuration: {reason}")]
    LoadFailed { reason: String },

    #[error("failed to write configuration: {reason}")]
    WriteFailed { reason: String },

    #[error("invalid configuration value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

/// Top-level error surfaced at the orchestrator boundary (spec §7).
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigError),

    #[error("store unavailable: {0}")]
    StoreUnavailable(#[from] StoreError),

    #[error("extractor failed: {0}")]
    ExtractorFailure(#[from] ExtractError),

    #[error("write rejected: {reason}")]
    WriteRejection { reason: String },

    #[error("skipped unreadable file {path}: {reason}")]
    IoSkipped { path: PathBuf, reason: String },

    #[error("query error: {0}")]
    QueryError(String),

    #[error("watcher error: {0}")]
    Watch(#[from] WatchError),

    #[error("operation cancelled")]
    Cancelled,
}

impl CoreError {
    /// Per spec §7: whether this error should abort the process (`true`)
    /// or be logged and skipped so the orchestrator keeps running (`false`).
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            CoreError::Configuration(_) | CoreError::StoreUnavailable(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_skipped_is_not_fatal() {
        let e = CoreError::IoSkipped {
            path: PathBuf::from("a.ts"),
            reason: "permission denied".into(),
        };
        assert!(!e.is_fatal());
    }

    #[test]
    fn store_unavailable_is_fatal() {
        let e = CoreError::StoreUnavailable(StoreError::Unavailable {
            reason: "kuzu not found".into(),
        });
        assert!(e.is_fatal());
    }
}

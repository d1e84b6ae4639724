//! Common utilities shared across modules.

use chrono::Utc;

/// Get current UTC timestamp in seconds since UNIX_EPOCH.
///
/// Uses chrono for accurate cross-platform timestamp.
pub fn get_utc_timestamp() -> i64 {
    Utc::now().timestamp()
}

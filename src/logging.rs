//! Structured logging.
//!
//! Compact timestamped text logging by default, switching to
//! `tracing-subscriber`'s JSON formatter when `logging.json` is set
//! (config §6), satisfying the `{timestamp, level, message, data?}`
//! structured-log shape.
//!
//! # Environment Variable
//!
//! `RUST_LOG` takes precedence over the configured level:
//! ```bash
//! RUST_LOG=debug semindex watch
//! ```

use std::sync::Once;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::config::LoggingConfig;

static INIT: Once = Once::new();

/// Compact time format: HH:MM:SS.mmm
struct CompactTime;

impl FormatTime for CompactTime {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%H:%M:%S%.3f"))
    }
}

fn build_filter(level: &str) -> EnvFilter {
    if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(level)
    }
}

/// Initialize logging with configuration. Safe to call multiple times
/// (only the first call takes effect).
pub fn init_with_config(config: &LoggingConfig) {
    INIT.call_once(|| {
        if config.json {
            let layer = tracing_subscriber::fmt::layer()
                .json()
                .with_target(true)
                .with_filter(build_filter(&config.level));
            tracing_subscriber::registry().with(layer).init();
        } else {
            let layer = tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_timer(CompactTime)
                .with_level(true)
                .with_filter(build_filter(&config.level));
            tracing_subscriber::registry().with(layer).init();
        }
    });
}

/// Initialize logging with default configuration.
pub fn init() {
    init_with_config(&LoggingConfig::default());
}

/// Log an event with handler context.
#[macro_export]
macro_rules! log_event {
    ($handler:expr, $event:expr) => {
        tracing::info!("[{}] {}", $handler, $event)
    };
    ($handler:expr, $event:expr, $($arg:tt)*) => {
        tracing::info!("[{}] {}: {}", $handler, $event, format!($($arg)*))
    };
}

/// Debug-only event logging.
#[macro_export]
macro_rules! debug_event {
    ($handler:expr, $event:expr) => {
        tracing::debug!("[{}] {}", $handler, $event)
    };
    ($handler:expr, $event:expr, $($arg:tt)*) => {
        tracing::debug!("[{}] {}: {}", $handler, $event, format!($($arg)*))
    };
}

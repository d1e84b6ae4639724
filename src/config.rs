//! Layered configuration.
//!
//! Follows the teacher's `config.rs` pattern: defaults, then a TOML file,
//! then environment variables, merged with `figment`.
//!
//! # Environment variables
//!
//! Prefixed with `SEMINDEX_` and using double underscores to separate
//! nested levels, e.g. `SEMINDEX_WATCH__DEBOUNCE_MS=250`.

use crate::error::ConfigError;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub watch: WatchConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: default_version(),
            store: StoreConfig::default(),
            watch: WatchConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

fn default_version() -> u32 {
    1
}

/// Graph and metrics store locations (spec §6).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    #[serde(default = "default_graph_path")]
    pub graph_path: PathBuf,

    #[serde(default = "default_metrics_path")]
    pub metrics_path: PathBuf,

    #[serde(default = "default_kuzu_bin")]
    pub kuzu_bin: String,

    #[serde(default = "default_duckdb_bin")]
    pub duckdb_bin: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            graph_path: default_graph_path(),
            metrics_path: default_metrics_path(),
            kuzu_bin: default_kuzu_bin(),
            duckdb_bin: default_duckdb_bin(),
        }
    }
}

fn default_graph_path() -> PathBuf {
    PathBuf::from("./.kuzu/semantic.db")
}

fn default_metrics_path() -> PathBuf {
    PathBuf::from("./.duckdb/metrics.db")
}

fn default_kuzu_bin() -> String {
    "kuzu".to_string()
}

fn default_duckdb_bin() -> String {
    "duckdb".to_string()
}

/// File watcher tuning (spec §4.2/§4.4).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WatchConfig {
    #[serde(default = "default_roots")]
    pub roots: Vec<PathBuf>,

    #[serde(default = "default_include")]
    pub include: Vec<String>,

    #[serde(default = "default_ignore")]
    pub ignore: Vec<String>,

    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,

    #[serde(default = "default_cache_max_entries")]
    pub cache_max_entries: usize,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            roots: default_roots(),
            include: default_include(),
            ignore: default_ignore(),
            debounce_ms: default_debounce_ms(),
            cache_ttl_secs: default_cache_ttl_secs(),
            cache_max_entries: default_cache_max_entries(),
        }
    }
}

fn default_roots() -> Vec<PathBuf> {
    vec![PathBuf::from(".")]
}

fn default_include() -> Vec<String> {
    vec!["**/*.ts".into(), "**/*.tsx".into(), "**/*.js".into(), "**/*.jsx".into()]
}

fn default_ignore() -> Vec<String> {
    vec![
        "**/node_modules/**".into(),
        "**/.git/**".into(),
        "**/dist/**".into(),
        "**/build/**".into(),
    ]
}

fn default_debounce_ms() -> u64 {
    300
}

fn default_cache_ttl_secs() -> u64 {
    3600
}

fn default_cache_max_entries() -> usize {
    10_000
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

const CONFIG_FILE_NAME: &str = "semindex.toml";
const ENV_PREFIX: &str = "SEMINDEX_";

impl Settings {
    /// Load from the workspace config file (if present) layered over
    /// defaults, then environment variable overrides.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::find_workspace_config() {
            Some(path) => Self::load_from(&path),
            None => Self::load_from_defaults_and_env(),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Figment::from(Serialized::defaults(Settings::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(|e| ConfigError::LoadFailed {
                reason: e.to_string(),
            })
    }

    fn load_from_defaults_and_env() -> Result<Self, ConfigError> {
        Figment::from(Serialized::defaults(Settings::default()))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(|e| ConfigError::LoadFailed {
                reason: e.to_string(),
            })
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let toml_str = toml::to_string_pretty(self).map_err(|e| ConfigError::WriteFailed {
            reason: e.to_string(),
        })?;
        std::fs::write(path, toml_str).map_err(|e| ConfigError::WriteFailed {
            reason: e.to_string(),
        })
    }

    pub fn init_config_file(dir: &Path) -> Result<PathBuf, ConfigError> {
        let path = dir.join(CONFIG_FILE_NAME);
        if path.exists() {
            return Err(ConfigError::WriteFailed {
                reason: format!("{} already exists", path.display()),
            });
        }
        Settings::default().save(&path)?;
        Ok(path)
    }

    pub fn find_workspace_config() -> Option<PathBuf> {
        let mut dir = std::env::current_dir().ok()?;
        loop {
            let candidate = dir.join(CONFIG_FILE_NAME);
            if candidate.is_file() {
                return Some(candidate);
            }
            if !dir.pop() {
                return None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    struct EnvGuard {
        key: &'static str,
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            unsafe { std::env::remove_var(self.key) };
        }
    }

    fn set_env(key: &'static str, value: impl AsRef<OsStr>) -> EnvGuard {
        unsafe { std::env::set_var(key, value) };
        EnvGuard { key }
    }

    #[test]
    fn defaults_round_trip_through_figment() {
        let settings = Settings::load_from_defaults_and_env().unwrap();
        assert_eq!(settings.version, 1);
        assert_eq!(settings.watch.debounce_ms, 300);
        assert_eq!(settings.store.kuzu_bin, "kuzu");
    }

    #[test]
    fn env_override_takes_precedence() {
        let _g = set_env("SEMINDEX_WATCH__DEBOUNCE_MS", "750");
        let settings = Settings::load_from_defaults_and_env().unwrap();
        assert_eq!(settings.watch.debounce_ms, 750);
    }

    #[test]
    fn toml_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[watch]\ndebounce_ms = 123\n").unwrap();
        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings.watch.debounce_ms, 123);
    }

    #[test]
    fn init_config_file_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        Settings::init_config_file(dir.path()).unwrap();
        let err = Settings::init_config_file(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::WriteFailed { .. }));
    }
}

use crate::index::{DEFAULT_BUCKETS, IndexKind};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Runtime settings for a recipe service.
///
/// Read from an optional JSON file, then overridden by `KONDATE_*` environment variables:
///
/// | Variable                   | Field             |
/// |----------------------------|-------------------|
/// | `KONDATE_DATA_PATH`        | `data_path`       |
/// | `KONDATE_SNAPSHOT_PATH`    | `snapshot_path`   |
/// | `KONDATE_BIND_ADDR`        | `bind_addr`       |
/// | `KONDATE_HASH_BUCKETS`     | `hash_buckets`    |
/// | `KONDATE_DEFAULT_BACKEND`  | `default_backend` |
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub data_path: PathBuf,
    pub snapshot_path: Option<PathBuf>,
    pub bind_addr: String,
    pub hash_buckets: usize,
    pub default_backend: IndexKind,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("RAW_recipes.csv"),
            snapshot_path: None,
            bind_addr: "127.0.0.1:5000".to_string(),
            hash_buckets: DEFAULT_BUCKETS,
            default_backend: IndexKind::HashMap,
        }
    }
}

impl ServiceConfig {
    /// Load a config from a JSON file. Missing fields take their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config.sanitized())
    }

    /// Defaults overridden by the environment.
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Applies `KONDATE_*` variables on top of this config. Unparseable values are
    /// logged and ignored.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides from an arbitrary key lookup.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup("KONDATE_DATA_PATH") {
            self.data_path = PathBuf::from(path);
        }
        if let Some(path) = lookup("KONDATE_SNAPSHOT_PATH") {
            self.snapshot_path = (!path.trim().is_empty()).then(|| PathBuf::from(path));
        }
        if let Some(addr) = lookup("KONDATE_BIND_ADDR") {
            self.bind_addr = addr;
        }
        if let Some(buckets) = lookup("KONDATE_HASH_BUCKETS") {
            match buckets.trim().parse() {
                Ok(value) => self.hash_buckets = value,
                Err(e) => warn!(value = %buckets, error = %e, "Ignoring KONDATE_HASH_BUCKETS"),
            }
        }
        if let Some(backend) = lookup("KONDATE_DEFAULT_BACKEND") {
            match backend.parse() {
                Ok(kind) => self.default_backend = kind,
                Err(e) => warn!(value = %backend, error = %e, "Ignoring KONDATE_DEFAULT_BACKEND"),
            }
        }
        self.sanitized()
    }

    fn sanitized(mut self) -> Self {
        self.hash_buckets = self.hash_buckets.max(1);
        self
    }
}

// src/config.rs
// Runtime settings for the field builder, read from YAML

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{FieldBuilderError, Result};

pub const DEFAULT_ENDPOINT: &str = "http://www.mocky.io/v2/566061f21200008e3aabd919";
pub const DEFAULT_CONFIG_FILE: &str = "./field_builder.yml";
pub const CONFIG_ENV: &str = "FIELD_BUILDER_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where saved field definitions are POSTed
    pub endpoint: String,
    /// File backing the draft store
    pub draft_path: PathBuf,
    pub log_dir: String,
    /// No timeout when unset
    pub request_timeout_secs: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            draft_path: PathBuf::from("./field_builder_storage.json"),
            log_dir: "./logs".to_string(),
            request_timeout_secs: None,
        }
    }
}

impl AppConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: AppConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml(&yaml)
    }

    /// Resolve settings: explicit path, then `FIELD_BUILDER_CONFIG`, then
    /// `./field_builder.yml` if present, then defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Self::from_file(Path::new(&path));
        }

        let fallback = Path::new(DEFAULT_CONFIG_FILE);
        if fallback.exists() {
            return Self::from_file(fallback);
        }

        Ok(Self::default())
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    fn validate(&self) -> Result<()> {
        if self.endpoint.trim().is_empty() {
            return Err(FieldBuilderError::ConfigError("endpoint cannot be empty".to_string()));
        }
        if self.request_timeout_secs == Some(0) {
            return Err(FieldBuilderError::ConfigError(
                "request_timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

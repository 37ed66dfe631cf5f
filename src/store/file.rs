// src/store/file.rs

use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

use super::DraftStore;
use crate::error::Result;
use crate::log_debug;

/// Draft store backed by a single JSON object file, one string value per key.
#[derive(Debug, Clone)]
pub struct FileDraftStore {
    path: PathBuf,
}

impl FileDraftStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<Map<String, Value>> {
        if !self.path.exists() {
            return Ok(Map::new());
        }

        let raw = fs::read_to_string(&self.path)?;
        if raw.trim().is_empty() {
            return Ok(Map::new());
        }

        Ok(serde_json::from_str(&raw)?)
    }
}

impl DraftStore for FileDraftStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        match self.read_all()?.remove(key) {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut items = self.read_all()?;
        items.insert(key.to_string(), Value::String(value.to_string()));

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&self.path, serde_json::to_string_pretty(&items)?)?;
        log_debug!("Stored {} ({} bytes) in {}", key, value.len(), self.path.display());
        Ok(())
    }
}

// src/store/memory.rs

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::DraftStore;
use crate::error::{FieldBuilderError, Result};

/// In-memory draft store. Clones share the same storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryDraftStore {
    items: Arc<Mutex<HashMap<String, String>>>,
    writes: Arc<Mutex<usize>>,
}

impl MemoryDraftStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `set_item` calls made through any clone
    pub fn write_count(&self) -> usize {
        self.writes.lock().map(|w| *w).unwrap_or(0)
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.items.lock().ok().and_then(|items| items.get(key).cloned())
    }
}

impl DraftStore for MemoryDraftStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let items = self
            .items
            .lock()
            .map_err(|_| FieldBuilderError::StoreError("storage lock poisoned".to_string()))?;
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut items = self
            .items
            .lock()
            .map_err(|_| FieldBuilderError::StoreError("storage lock poisoned".to_string()))?;
        items.insert(key.to_string(), value.to_string());

        if let Ok(mut writes) = self.writes.lock() {
            *writes += 1;
        }
        Ok(())
    }
}

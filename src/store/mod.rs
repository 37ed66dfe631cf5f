// src/store/mod.rs

//! Draft persistence.
//!
//! [`DraftStore`] is a small key/value port shaped like browser local
//! storage: string keys, string values. The form keeps its draft under
//! [`DRAFT_KEY`] as a JSON-encoded [`Draft`].

mod file;
mod memory;

pub use file::FileDraftStore;
pub use memory::MemoryDraftStore;

use crate::error::Result;
use crate::field::Draft;

pub const DRAFT_KEY: &str = "formData";

pub trait DraftStore {
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Read the stored draft. A stored value that is not a valid draft is an error.
    fn load(&self) -> Result<Option<Draft>> {
        match self.get_item(DRAFT_KEY)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    fn store(&self, draft: &Draft) -> Result<()> {
        let raw = serde_json::to_string(draft)?;
        self.set_item(DRAFT_KEY, &raw)
    }
}

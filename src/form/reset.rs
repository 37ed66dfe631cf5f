use crate::error::Result;
use crate::field::FormFields;
use crate::service::FieldService;
use crate::store::DraftStore;
use crate::log_debug;

use super::FormController;

impl<S: FieldService, D: DraftStore> FormController<S, D> {
    /// Empty every field. The cancel snapshot is left alone.
    pub fn clear(&mut self) -> Result<()> {
        self.fields = FormFields::default();
        self.validation_errors.clear();
        log_debug!("Form cleared");
        self.persist()
    }

    /// Throw away edits and go back to the definition loaded at initialize.
    pub fn cancel(&mut self) -> Result<()> {
        self.fields = self.initial.clone();
        self.validation_errors.clear();
        log_debug!("Form reset to '{}'", self.fields.label);
        self.persist()
    }
}

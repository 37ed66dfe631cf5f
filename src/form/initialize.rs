use crate::error::Result;
use crate::field::FormFields;
use crate::service::FieldService;
use crate::store::DraftStore;
use crate::{log_error, log_info};

use super::FormController;

impl<S: FieldService, D: DraftStore> FormController<S, D> {
    /// Load the definition to edit.
    ///
    /// The service's definition is the base and becomes the cancel snapshot.
    /// A stored draft, when present, overrides it. The merged state is then
    /// written back as the current draft. A draft that cannot be parsed is
    /// returned as an error.
    pub fn initialize(&mut self) -> Result<()> {
        let definition = self.service.get_field(None);
        let fetched = FormFields::from(&definition);
        self.initial = fetched.clone();
        self.required = definition.required;

        let draft = self.store.load().map_err(|e| {
            log_error!("Failed to read stored draft: {}", e);
            e
        })?;

        self.fields = match draft {
            Some(draft) => {
                log_info!("Restored draft for field '{}'", draft.label);
                draft.into()
            }
            None => {
                log_info!("Loaded field '{}' with {} choices", definition.label, definition.choices.len());
                fetched
            }
        };

        self.validation_errors.clear();
        self.persist()
    }
}

use crate::error::Result;
use crate::field::SaveRequest;
use crate::service::{FieldService, SaveOutcome};
use crate::store::DraftStore;
use crate::{log_info, log_warn};

use super::{FormController, SubmitState};

impl<S: FieldService, D: DraftStore> FormController<S, D> {
    /// Validate and prepare a save.
    ///
    /// Returns `None` when validation fails; the messages are then in
    /// [`FormController::validation_errors`] and the form is idle again.
    /// On success the form is left in [`SubmitState::Saving`] until
    /// [`FormController::finish_submit`] is called.
    ///
    /// A default value that does not occur anywhere in the choices text is
    /// appended to it as a new line before the request is built.
    pub fn begin_submit(&mut self) -> Result<Option<SaveRequest>> {
        self.submit_state = SubmitState::Saving;

        if !self.validate() {
            log_warn!(
                "Submit blocked by {} validation error(s)",
                self.validation_errors.len()
            );
            self.submit_state = SubmitState::Idle;
            return Ok(None);
        }

        if !self.fields.choices.contains(self.fields.default_value.as_str()) {
            self.fields.choices = format!("{}\n{}", self.fields.choices, self.fields.default_value);
            if let Err(e) = self.persist() {
                self.submit_state = SubmitState::Idle;
                return Err(e);
            }
        }

        Ok(Some(self.fields.to_save_request()))
    }

    pub fn finish_submit(&mut self, outcome: SaveOutcome) {
        log_info!("Save finished: {}", outcome.describe());
        self.submit_state = SubmitState::Idle;
        self.last_outcome = Some(outcome);
    }

    /// Validate, save through the service and record the outcome.
    /// `Ok(None)` means validation failed and nothing was sent.
    pub async fn submit(&mut self) -> Result<Option<SaveOutcome>> {
        let Some(request) = self.begin_submit()? else {
            return Ok(None);
        };

        let outcome = self.service.save(&request).await;
        self.finish_submit(outcome.clone());
        Ok(Some(outcome))
    }
}

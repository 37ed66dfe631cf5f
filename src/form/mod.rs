// src/form/mod.rs

//! The field builder form controller.
//!
//! Owns the four editable fields, the validation messages from the last
//! pass, the submit state and the snapshot used by cancel. Every change to
//! the editable fields is written through to the [`DraftStore`].

mod edit;
mod initialize;
mod reset;
mod submit;

pub use edit::TextField;

use std::sync::Arc;

use crate::error::Result;
use crate::field::{Draft, FormFields, ValidationMessage};
use crate::service::{FieldService, SaveOutcome};
use crate::store::DraftStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Saving,
}

pub struct FormController<S: FieldService, D: DraftStore> {
    service: Arc<S>,
    store: D,
    fields: FormFields,
    initial: FormFields,
    required: bool,
    validation_errors: Vec<ValidationMessage>,
    submit_state: SubmitState,
    last_outcome: Option<SaveOutcome>,
}

impl<S: FieldService, D: DraftStore> FormController<S, D> {
    /// An empty, uninitialized controller. See [`FormController::mount`].
    pub fn new(service: Arc<S>, store: D) -> Self {
        Self {
            service,
            store,
            fields: FormFields::default(),
            initial: FormFields::default(),
            required: false,
            validation_errors: Vec::new(),
            submit_state: SubmitState::Idle,
            last_outcome: None,
        }
    }

    /// Create and initialize in one step.
    pub fn mount(service: Arc<S>, store: D) -> Result<Self> {
        let mut controller = Self::new(service, store);
        controller.initialize()?;
        Ok(controller)
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn initial(&self) -> &FormFields {
        &self.initial
    }

    pub fn validation_errors(&self) -> &[ValidationMessage] {
        &self.validation_errors
    }

    pub fn submit_state(&self) -> SubmitState {
        self.submit_state
    }

    pub fn is_loading(&self) -> bool {
        self.submit_state == SubmitState::Saving
    }

    pub fn last_outcome(&self) -> Option<&SaveOutcome> {
        self.last_outcome.as_ref()
    }

    pub fn service(&self) -> Arc<S> {
        Arc::clone(&self.service)
    }

    /// Whether the loaded definition requires a value. Not editable.
    pub fn required(&self) -> bool {
        self.required
    }

    /// Choices split into lines and arranged in the selected display order.
    pub fn display_choices(&self) -> Vec<&str> {
        self.fields.order().arrange(&self.fields.choice_list())
    }

    /// Recompute every validation message from the current fields.
    pub fn validate(&mut self) -> bool {
        self.validation_errors = crate::field::validate(&self.fields);
        self.validation_errors.is_empty()
    }

    fn persist(&self) -> Result<()> {
        self.store.store(&Draft::from(&self.fields))
    }
}

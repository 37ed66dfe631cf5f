pub mod app;
pub mod config;
pub mod error;
pub mod event;
pub mod field;
pub mod form;
pub mod service;
pub mod store;
pub mod ui;
pub mod util;

pub use config::AppConfig;
pub use error::{FieldBuilderError, Result};
pub use field::{ChoiceOrder, Draft, FieldDefinition, FormFields, SaveRequest, ValidationMessage};
pub use form::{FormController, SubmitState};
pub use service::{FieldService, MockFieldService, SaveOutcome};
pub use store::{DraftStore, FileDraftStore, MemoryDraftStore};

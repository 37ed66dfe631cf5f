use crate::error::Result;
use crate::field::ChoiceOrder;
use crate::service::FieldService;
use crate::store::DraftStore;

use super::FormController;

/// The text-valued editable fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Label,
    DefaultValue,
    Choices,
}

impl<S: FieldService, D: DraftStore> FormController<S, D> {
    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::Label => &self.fields.label,
            TextField::DefaultValue => &self.fields.default_value,
            TextField::Choices => &self.fields.choices,
        }
    }

    /// Apply `edit` to one text field and persist the draft.
    pub fn update_text(&mut self, field: TextField, edit: impl FnOnce(&mut String)) -> Result<()> {
        let target = match field {
            TextField::Label => &mut self.fields.label,
            TextField::DefaultValue => &mut self.fields.default_value,
            TextField::Choices => &mut self.fields.choices,
        };
        edit(target);
        self.persist()
    }

    pub fn set_label(&mut self, label: impl Into<String>) -> Result<()> {
        let label = label.into();
        self.update_text(TextField::Label, |value| *value = label)
    }

    pub fn set_choices(&mut self, choices: impl Into<String>) -> Result<()> {
        let choices = choices.into();
        self.update_text(TextField::Choices, |value| *value = choices)
    }

    pub fn set_default_value(&mut self, default_value: impl Into<String>) -> Result<()> {
        let default_value = default_value.into();
        self.update_text(TextField::DefaultValue, |value| *value = default_value)
    }

    pub fn set_display_alpha(&mut self, display_alpha: bool) -> Result<()> {
        self.fields.display_alpha = display_alpha;
        self.persist()
    }

    pub fn set_order(&mut self, order: ChoiceOrder) -> Result<()> {
        self.set_display_alpha(order.is_alphabetical())
    }

    pub fn push_char(&mut self, field: TextField, c: char) -> Result<()> {
        self.update_text(field, |value| value.push(c))
    }

    pub fn pop_char(&mut self, field: TextField) -> Result<()> {
        self.update_text(field, |value| {
            value.pop();
        })
    }
}

// src/field/mod.rs

//! Field definition data model.
//!
//! [`FieldDefinition`] is the server-shaped record with an array of choices.
//! [`FormFields`] is what the form edits: the same data with the choices kept
//! as raw newline-delimited text. [`Draft`] and [`SaveRequest`] are the two
//! wire shapes derived from it.

pub mod order;
pub mod validate;

pub use order::ChoiceOrder;
pub use validate::{validate, ValidationMessage, MAX_CHOICES};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefinition {
    pub label: String,
    pub required: bool,
    pub choices: Vec<String>,
    pub display_alpha: bool,
    pub default: String,
}

/// The four editable fields of the form.
#[derive(Debug, Clone, PartialEq)]
pub struct FormFields {
    pub label: String,
    /// One choice per line
    pub choices: String,
    pub default_value: String,
    pub display_alpha: bool,
}

impl Default for FormFields {
    fn default() -> Self {
        Self {
            label: String::new(),
            choices: String::new(),
            default_value: String::new(),
            display_alpha: true,
        }
    }
}

impl FormFields {
    /// Split the choices text on newlines. Empty lines are kept.
    pub fn choice_list(&self) -> Vec<&str> {
        split_choices(&self.choices)
    }

    pub fn order(&self) -> ChoiceOrder {
        ChoiceOrder::from_display_alpha(self.display_alpha)
    }

    pub fn to_save_request(&self) -> SaveRequest {
        SaveRequest {
            label: self.label.clone(),
            choices: self.choice_list().into_iter().map(str::to_string).collect(),
            default_value: self.default_value.clone(),
            display_alpha: self.display_alpha,
        }
    }
}

impl From<&FieldDefinition> for FormFields {
    fn from(definition: &FieldDefinition) -> Self {
        Self {
            label: definition.label.clone(),
            choices: definition.choices.join("\n"),
            default_value: definition.default.clone(),
            display_alpha: definition.display_alpha,
        }
    }
}

pub fn split_choices(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

/// In-progress edits as persisted in the draft store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
    pub label: String,
    pub choices: String,
    pub default_value: String,
    pub display_alpha: bool,
}

impl From<&FormFields> for Draft {
    fn from(fields: &FormFields) -> Self {
        Self {
            label: fields.label.clone(),
            choices: fields.choices.clone(),
            default_value: fields.default_value.clone(),
            display_alpha: fields.display_alpha,
        }
    }
}

impl From<Draft> for FormFields {
    fn from(draft: Draft) -> Self {
        Self {
            label: draft.label,
            choices: draft.choices,
            default_value: draft.default_value,
            display_alpha: draft.display_alpha,
        }
    }
}

/// JSON body POSTed by the save operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveRequest {
    pub label: String,
    pub choices: Vec<String>,
    pub default_value: String,
    pub display_alpha: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn region() -> FieldDefinition {
        FieldDefinition {
            label: "Region".to_string(),
            required: false,
            choices: vec!["Asia".to_string(), "Europe".to_string()],
            display_alpha: false,
            default: "Europe".to_string(),
        }
    }

    #[test]
    fn definition_choices_become_lines() {
        let fields = FormFields::from(&region());
        assert_eq!(fields.choices, "Asia\nEurope");
        assert_eq!(fields.default_value, "Europe");
        assert!(!fields.display_alpha);
    }

    #[test]
    fn empty_lines_are_choices() {
        let fields = FormFields {
            choices: "Asia\n\nEurope\n".to_string(),
            ..FormFields::default()
        };
        assert_eq!(fields.choice_list(), vec!["Asia", "", "Europe", ""]);
        assert_eq!(FormFields::default().choice_list(), vec![""]);
    }

    #[test]
    fn draft_uses_storage_key_names() {
        let draft = Draft::from(&FormFields::from(&region()));
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(
            value,
            json!({
                "label": "Region",
                "choices": "Asia\nEurope",
                "defaultValue": "Europe",
                "displayAlpha": false
            })
        );
    }

    #[test]
    fn definition_reads_server_shape() {
        let definition: FieldDefinition = serde_json::from_value(json!({
            "label": "Region",
            "required": true,
            "choices": ["Asia"],
            "displayAlpha": true,
            "default": "Asia"
        }))
        .unwrap();
        assert!(definition.required);
        assert_eq!(definition.default, "Asia");
    }

    #[test]
    fn save_request_splits_choices() {
        let request = FormFields::from(&region()).to_save_request();
        assert_eq!(request.choices, vec!["Asia", "Europe"]);
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["defaultValue"], "Europe");
        assert_eq!(value["displayAlpha"], false);
    }
}

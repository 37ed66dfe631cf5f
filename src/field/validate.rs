// src/field/validate.rs
// Form-level validation of the editable fields

use std::collections::HashSet;
use std::fmt;

use super::FormFields;

pub const MAX_CHOICES: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationMessage {
    LabelRequired,
    DuplicateChoices,
    TooManyChoices,
}

impl ValidationMessage {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationMessage::LabelRequired => "Label is required.",
            ValidationMessage::DuplicateChoices => "Duplicate choices are not allowed.",
            ValidationMessage::TooManyChoices => "There cannot be more than 50 choices.",
        }
    }

    /// True for the messages shown under the choices editor
    pub fn concerns_choices(&self) -> bool {
        matches!(
            self,
            ValidationMessage::DuplicateChoices | ValidationMessage::TooManyChoices
        )
    }
}

impl fmt::Display for ValidationMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Run every rule against `fields`. An empty result means the form is valid.
pub fn validate(fields: &FormFields) -> Vec<ValidationMessage> {
    let mut errors = Vec::new();

    if fields.label.is_empty() {
        errors.push(ValidationMessage::LabelRequired);
    }

    let choices = fields.choice_list();
    let unique: HashSet<&str> = choices.iter().copied().collect();
    if unique.len() != choices.len() {
        errors.push(ValidationMessage::DuplicateChoices);
    }

    if choices.len() > MAX_CHOICES {
        errors.push(ValidationMessage::TooManyChoices);
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(label: &str, choices: &str) -> FormFields {
        FormFields {
            label: label.to_string(),
            choices: choices.to_string(),
            default_value: String::new(),
            display_alpha: true,
        }
    }

    #[test]
    fn valid_form_has_no_errors() {
        assert!(validate(&fields("Region", "Asia\nEurope")).is_empty());
    }

    #[test]
    fn empty_label_is_required() {
        assert_eq!(validate(&fields("", "Asia")), vec![ValidationMessage::LabelRequired]);
        // whitespace is not empty
        assert!(validate(&fields(" ", "Asia")).is_empty());
    }

    #[test]
    fn duplicates_are_exact_and_case_sensitive() {
        assert_eq!(
            validate(&fields("Region", "Asia\nEurope\nAsia")),
            vec![ValidationMessage::DuplicateChoices]
        );
        assert!(validate(&fields("Region", "Asia\nasia")).is_empty());
        assert!(validate(&fields("Region", "Asia\nAsia ")).is_empty());
    }

    #[test]
    fn two_blank_lines_are_duplicates() {
        assert_eq!(
            validate(&fields("Region", "Asia\n\n\nEurope")),
            vec![ValidationMessage::DuplicateChoices]
        );
    }

    #[test]
    fn fifty_choices_is_the_limit() {
        let fifty: Vec<String> = (0..50).map(|i| format!("choice {}", i)).collect();
        assert!(validate(&fields("Region", &fifty.join("\n"))).is_empty());

        let fifty_one: Vec<String> = (0..51).map(|i| format!("choice {}", i)).collect();
        assert_eq!(
            validate(&fields("Region", &fifty_one.join("\n"))),
            vec![ValidationMessage::TooManyChoices]
        );
    }

    #[test]
    fn rules_are_not_short_circuited() {
        let mut lines: Vec<String> = (0..51).map(|i| format!("choice {}", i)).collect();
        lines.push("choice 0".to_string());
        assert_eq!(
            validate(&fields("", &lines.join("\n"))),
            vec![
                ValidationMessage::LabelRequired,
                ValidationMessage::DuplicateChoices,
                ValidationMessage::TooManyChoices,
            ]
        );
    }

    #[test]
    fn messages_render_verbatim() {
        assert_eq!(ValidationMessage::LabelRequired.to_string(), "Label is required.");
        assert_eq!(
            ValidationMessage::DuplicateChoices.to_string(),
            "Duplicate choices are not allowed."
        );
        assert_eq!(
            ValidationMessage::TooManyChoices.to_string(),
            "There cannot be more than 50 choices."
        );
    }
}

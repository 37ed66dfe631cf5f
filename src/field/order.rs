// src/field/order.rs

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceOrder {
    Alphabetical,
    Original,
}

impl ChoiceOrder {
    pub fn from_display_alpha(display_alpha: bool) -> Self {
        if display_alpha {
            ChoiceOrder::Alphabetical
        } else {
            ChoiceOrder::Original
        }
    }

    pub fn is_alphabetical(&self) -> bool {
        matches!(self, ChoiceOrder::Alphabetical)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChoiceOrder::Alphabetical => "Display choices in Alphabetical",
            ChoiceOrder::Original => "Display choices in Original order",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ChoiceOrder::Alphabetical => ChoiceOrder::Original,
            ChoiceOrder::Original => ChoiceOrder::Alphabetical,
        }
    }

    pub fn all() -> [ChoiceOrder; 2] {
        [ChoiceOrder::Alphabetical, ChoiceOrder::Original]
    }

    /// Order `choices` for display. Alphabetical ignores case and keeps
    /// entry order between equal keys.
    pub fn arrange<'a>(&self, choices: &[&'a str]) -> Vec<&'a str> {
        let mut arranged = choices.to_vec();
        if self.is_alphabetical() {
            arranged.sort_by_key(|choice| choice.to_lowercase());
        }
        arranged
    }
}

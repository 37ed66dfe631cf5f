// src/ui/mod.rs

mod actions;
mod inputs;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::app::App;
use crate::service::FieldService;
use crate::store::DraftStore;

/// Border style for an element, highlighted when it has focus
pub(crate) fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    }
}

pub(crate) fn error_style() -> Style {
    Style::default().fg(Color::Red)
}

impl<S: FieldService, D: DraftStore> Widget for &App<S, D> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let outer = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Field Builder ")
            .title_alignment(Alignment::Center);
        let inner = outer.inner(area);
        outer.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Type + required
                Constraint::Length(3), // Label
                Constraint::Length(1), // Label error
                Constraint::Length(3), // Default value
                Constraint::Min(6),    // Choices + preview
                Constraint::Length(2), // Choice errors
                Constraint::Length(3), // Order
                Constraint::Length(3), // Buttons
                Constraint::Length(1), // Status
                Constraint::Length(1), // Help
            ])
            .split(inner);

        inputs::render_type_row(self, chunks[0], buf);
        inputs::render_label(self, chunks[1], chunks[2], buf);
        inputs::render_default_value(self, chunks[3], buf);
        inputs::render_choices(self, chunks[4], chunks[5], buf);
        inputs::render_order(self, chunks[6], buf);
        actions::render_buttons(self, chunks[7], buf);
        actions::render_status(self, chunks[8], buf);

        let help = Paragraph::new("Tab/↑↓ Move  Enter Activate/New line  ←/→ Order  Ctrl-S Save  Esc Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        help.render(chunks[9], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormController;
    use crate::service::MockFieldService;
    use crate::store::MemoryDraftStore;
    use std::sync::Arc;

    fn rendered_text(app: &App<MockFieldService, MemoryDraftStore>) -> String {
        let area = Rect::new(0, 0, 100, 32);
        let mut buf = Buffer::empty(area);
        app.render(area, &mut buf);

        let mut text = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                text.push_str(buf[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn app() -> App<MockFieldService, MemoryDraftStore> {
        let service = Arc::new(MockFieldService::new("http://127.0.0.1:1/", None).unwrap());
        let controller = FormController::mount(service, MemoryDraftStore::new()).unwrap();
        App::new(controller)
    }

    #[test]
    fn renders_loaded_definition() {
        let text = rendered_text(&app());
        assert!(text.contains("Sales region"));
        assert!(text.contains("North America"));
        assert!(text.contains("Save changes"));
        assert!(text.contains("Clear Form"));
        assert!(text.contains("Cancel"));
        assert!(text.contains("Display choices in Alphabetical"));
    }

    #[test]
    fn renders_validation_messages() {
        let mut app = app();
        app.controller.set_label("").unwrap();
        app.controller.set_choices("Asia\nAsia").unwrap();
        app.controller.validate();

        let text = rendered_text(&app);
        assert!(text.contains("Label is required."));
        assert!(text.contains("Duplicate choices are not allowed."));
    }

    #[test]
    fn renders_type_and_required_flag() {
        let text = rendered_text(&app());
        assert!(text.contains("Type Multi Select"));
        assert!(text.contains("[ ] A value is required"));
    }

    #[test]
    fn save_button_shows_progress_while_saving() {
        let mut app = app();
        assert!(app.controller.begin_submit().unwrap().is_some());

        let text = rendered_text(&app);
        assert!(text.contains("Saving..."));
        assert!(!text.contains("Save changes"));

        app.controller.finish_submit(crate::service::SaveOutcome::Rejected { status: 503 });
        let text = rendered_text(&app);
        assert!(text.contains("Save changes"));
    }

    #[test]
    fn choice_scroll_saturates_past_u16() {
        let mut app = app();
        let choices: Vec<String> = (0..70_000).map(|i| format!("c{}", i)).collect();
        app.controller.set_choices(choices.join("\n")).unwrap();

        // Scroll stops at u16::MAX instead of wrapping back to the top
        let text = rendered_text(&app);
        assert!(text.contains("c65535"));
        assert!(!text.contains("c4454"));
    }
}

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::app::{App, Focus};
use crate::service::{FieldService, SaveOutcome};
use crate::store::DraftStore;

fn render_button(label: &str, color: Color, focused: bool, area: Rect, buf: &mut Buffer) {
    let style = if focused {
        Style::default()
            .fg(Color::Black)
            .bg(color)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(color)
    };

    Paragraph::new(label.to_string())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        )
        .style(style)
        .alignment(Alignment::Center)
        .render(area, buf);
}

pub(super) fn render_buttons<S: FieldService, D: DraftStore>(
    app: &App<S, D>,
    area: Rect,
    buf: &mut Buffer,
) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let save_label = if app.controller.is_loading() {
        "Saving..."
    } else {
        "Save changes"
    };

    render_button(save_label, Color::Blue, app.focus == Focus::Save, columns[0], buf);
    render_button("Clear Form", Color::Yellow, app.focus == Focus::Clear, columns[1], buf);
    render_button("Cancel", Color::Gray, app.focus == Focus::Cancel, columns[2], buf);
}

pub(super) fn render_status<S: FieldService, D: DraftStore>(
    app: &App<S, D>,
    area: Rect,
    buf: &mut Buffer,
) {
    let color = match app.controller.last_outcome() {
        _ if !app.controller.validation_errors().is_empty() => Color::Red,
        Some(SaveOutcome::Saved { .. }) => Color::Green,
        Some(_) => Color::Red,
        None => Color::Gray,
    };

    let text = app.status_message.clone().unwrap_or_default();
    Paragraph::new(text)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .render(area, buf);
}

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget, Wrap},
};

use crate::app::{App, Focus};
use crate::field::{ChoiceOrder, ValidationMessage};
use crate::service::FieldService;
use crate::store::DraftStore;

use super::{error_style, focus_style};

const FIELD_TYPE: &str = "Multi Select";

fn input_block(title: Line<'static>, focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(focus_style(focused))
        .title(title)
}

fn with_cursor(value: &str, focused: bool) -> String {
    if focused {
        format!("{}_", value)
    } else {
        value.to_string()
    }
}

/// Read-only field type and the definition's required flag.
pub(super) fn render_type_row<S: FieldService, D: DraftStore>(
    app: &App<S, D>,
    area: Rect,
    buf: &mut Buffer,
) {
    let checkbox = if app.controller.required() { "[x]" } else { "[ ]" };
    let line = Line::from(vec![
        Span::styled(" Type ", Style::default().fg(Color::Cyan)),
        Span::styled(FIELD_TYPE, Style::default().fg(Color::White)),
        Span::raw("     "),
        Span::styled(format!("{} A value is required", checkbox), Style::default().fg(Color::Gray)),
    ]);
    Paragraph::new(line).render(area, buf);
}

pub(super) fn render_label<S: FieldService, D: DraftStore>(
    app: &App<S, D>,
    area: Rect,
    error_area: Rect,
    buf: &mut Buffer,
) {
    let focused = app.focus == Focus::Label;
    let title = Line::from(vec![
        Span::raw(" Label "),
        Span::styled("*", error_style()),
        Span::raw(" "),
    ]);

    Paragraph::new(with_cursor(&app.controller.fields().label, focused))
        .block(input_block(title, focused))
        .style(Style::default().fg(Color::White))
        .render(area, buf);

    if app.controller.validation_errors().contains(&ValidationMessage::LabelRequired) {
        Paragraph::new(ValidationMessage::LabelRequired.as_str())
            .style(error_style())
            .render(error_area, buf);
    }
}

pub(super) fn render_default_value<S: FieldService, D: DraftStore>(
    app: &App<S, D>,
    area: Rect,
    buf: &mut Buffer,
) {
    let focused = app.focus == Focus::DefaultValue;
    Paragraph::new(with_cursor(&app.controller.fields().default_value, focused))
        .block(input_block(Line::from(" Default Value "), focused))
        .style(Style::default().fg(Color::White))
        .render(area, buf);
}

/// Choice editor on the left, display-ordered preview on the right.
pub(super) fn render_choices<S: FieldService, D: DraftStore>(
    app: &App<S, D>,
    area: Rect,
    error_area: Rect,
    buf: &mut Buffer,
) {
    let focused = app.focus == Focus::Choices;
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let choices = &app.controller.fields().choices;

    // Keep the end of the text, where typing happens, in view
    let visible_rows = columns[0].height.saturating_sub(2) as usize;
    let line_count = choices.split('\n').count();
    let scroll = u16::try_from(line_count.saturating_sub(visible_rows)).unwrap_or(u16::MAX);

    Paragraph::new(with_cursor(choices, focused))
        .block(input_block(Line::from(" Choices "), focused))
        .style(Style::default().fg(Color::White))
        .scroll((scroll, 0))
        .render(columns[0], buf);

    let order = app.controller.fields().order();
    let items: Vec<ListItem> = app
        .controller
        .display_choices()
        .into_iter()
        .map(|choice| {
            let style = if choice == app.controller.fields().default_value {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::Gray)
            };
            ListItem::new(format!("• {}", choice)).style(style)
        })
        .collect();

    let preview_title = match order {
        ChoiceOrder::Alphabetical => " Preview (A-Z) ",
        ChoiceOrder::Original => " Preview ",
    };
    List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(preview_title),
        )
        .render(columns[1], buf);

    let messages: Vec<Line> = app
        .controller
        .validation_errors()
        .iter()
        .filter(|message| message.concerns_choices())
        .map(|message| Line::from(message.as_str()))
        .collect();

    Paragraph::new(messages)
        .style(error_style())
        .wrap(Wrap { trim: true })
        .render(error_area, buf);
}

pub(super) fn render_order<S: FieldService, D: DraftStore>(
    app: &App<S, D>,
    area: Rect,
    buf: &mut Buffer,
) {
    let focused = app.focus == Focus::Order;
    let current = app.controller.fields().order();

    let spans: Vec<Span> = ChoiceOrder::all()
        .into_iter()
        .flat_map(|order| {
            let marker = if order == current { "(•) " } else { "( ) " };
            let style = if order == current {
                focus_style(focused)
            } else {
                Style::default().fg(Color::Gray)
            };
            [Span::styled(format!("{}{}", marker, order.label()), style), Span::raw("   ")]
        })
        .collect();

    Paragraph::new(Line::from(spans))
        .block(input_block(Line::from(" Order "), focused))
        .render(area, buf);
}

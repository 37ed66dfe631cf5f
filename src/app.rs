use color_eyre::Result;
use tokio::sync::mpsc::UnboundedSender;
use ratatui::{
    DefaultTerminal,
    crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};

use crate::event::{AppEvent, Event, EventHandler};
use crate::form::{FormController, TextField};
use crate::service::{FieldService, SaveOutcome};
use crate::store::DraftStore;
use crate::{log_debug, log_error};

/// Focusable elements of the form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Label,
    DefaultValue,
    Choices,
    Order,
    Save,
    Clear,
    Cancel,
}

impl Focus {
    const ORDER: [Focus; 7] = [
        Focus::Label,
        Focus::DefaultValue,
        Focus::Choices,
        Focus::Order,
        Focus::Save,
        Focus::Clear,
        Focus::Cancel,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    pub fn text_field(self) -> Option<TextField> {
        match self {
            Focus::Label => Some(TextField::Label),
            Focus::DefaultValue => Some(TextField::DefaultValue),
            Focus::Choices => Some(TextField::Choices),
            _ => None,
        }
    }
}

/// Application.
pub struct App<S: FieldService, D: DraftStore> {
    /// Is the application running?
    pub running: bool,
    pub controller: FormController<S, D>,
    pub focus: Focus,
    /// Last save result or hint, shown under the buttons
    pub status_message: Option<String>,
}

impl<S: FieldService + 'static, D: DraftStore> App<S, D> {
    pub fn new(controller: FormController<S, D>) -> Self {
        Self {
            running: true,
            controller,
            focus: Focus::Label,
            status_message: None,
        }
    }

    /// Run the application's main loop.
    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        let mut events = EventHandler::new();
        let mut needs_redraw = true;

        while self.running {
            if needs_redraw {
                terminal.draw(|frame| frame.render_widget(&self, frame.area()))?;
                needs_redraw = false;
            }

            match events.next().await? {
                Event::Tick => {}
                Event::Crossterm(crossterm::event::Event::Key(key_event)) => {
                    if let Some(app_event) = self.handle_key_event(key_event)? {
                        events.send(app_event);
                    }
                    needs_redraw = true;
                }
                Event::Crossterm(crossterm::event::Event::Resize(_, _)) => needs_redraw = true,
                Event::Crossterm(_) => {}
                Event::App(app_event) => {
                    self.handle_app_event(app_event, &events);
                    needs_redraw = true;
                }
            }
        }

        Ok(())
    }

    fn handle_app_event(&mut self, app_event: AppEvent, events: &EventHandler) {
        match app_event {
            AppEvent::Quit => self.quit(),
            AppEvent::Submit => self.start_save(events.sender()),
            AppEvent::SaveFinished(outcome) => self.on_save_finished(outcome),
        }
    }

    /// Record a settled save and put the form back to idle.
    pub fn on_save_finished(&mut self, outcome: SaveOutcome) {
        self.status_message = Some(outcome.describe());
        self.controller.finish_submit(outcome);
    }

    /// Validate and hand the save to a background task so input stays live.
    /// The outcome comes back through `sender` as [`AppEvent::SaveFinished`].
    pub fn start_save(&mut self, sender: UnboundedSender<Event>) {
        let request = match self.controller.begin_submit() {
            Ok(Some(request)) => request,
            Ok(None) => {
                self.status_message = Some("Please fix the highlighted errors.".to_string());
                return;
            }
            Err(e) => {
                log_error!("Failed to prepare save: {}", e);
                self.status_message = Some(format!("Error: {}", e));
                return;
            }
        };

        self.status_message = None;
        let service = self.controller.service();
        tokio::spawn(async move {
            let outcome = service.save(&request).await;
            let _ = sender.send(Event::App(AppEvent::SaveFinished(outcome)));
        });
    }

    /// Handles the key events and updates the state of [`App`].
    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> Result<Option<AppEvent>> {
        if key_event.kind != KeyEventKind::Press {
            return Ok(None);
        }

        if key_event.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(match key_event.code {
                KeyCode::Char('c') | KeyCode::Char('C') => Some(AppEvent::Quit),
                KeyCode::Char('s') | KeyCode::Char('S') => Some(AppEvent::Submit),
                _ => None,
            });
        }

        match key_event.code {
            KeyCode::Esc => return Ok(Some(AppEvent::Quit)),
            KeyCode::Tab => {
                self.focus = self.focus.next();
                return Ok(None);
            }
            KeyCode::BackTab => {
                self.focus = self.focus.prev();
                return Ok(None);
            }
            // The choices editor keeps Up/Down to itself
            KeyCode::Down if self.focus != Focus::Choices => {
                self.focus = self.focus.next();
                return Ok(None);
            }
            KeyCode::Up if self.focus != Focus::Choices => {
                self.focus = self.focus.prev();
                return Ok(None);
            }
            _ => {}
        }

        if let Some(field) = self.focus.text_field() {
            self.handle_text_key(field, key_event.code)?;
            return Ok(None);
        }

        match (self.focus, key_event.code) {
            (Focus::Order, KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') | KeyCode::Enter) => {
                let order = self.controller.fields().order().toggled();
                self.controller.set_order(order)?;
                Ok(None)
            }
            (Focus::Save, KeyCode::Enter | KeyCode::Char(' ')) => Ok(Some(AppEvent::Submit)),
            (Focus::Clear, KeyCode::Enter | KeyCode::Char(' ')) => {
                self.controller.clear()?;
                self.status_message = None;
                Ok(None)
            }
            (Focus::Cancel, KeyCode::Enter | KeyCode::Char(' ')) => {
                self.controller.cancel()?;
                self.status_message = None;
                Ok(None)
            }
            _ => Ok(None),
        }
    }

    fn handle_text_key(&mut self, field: TextField, key_code: KeyCode) -> Result<()> {
        match key_code {
            KeyCode::Char(c) => self.controller.push_char(field, c)?,
            KeyCode::Backspace => self.controller.pop_char(field)?,
            KeyCode::Enter if field == TextField::Choices => {
                self.controller.push_char(field, '\n')?
            }
            KeyCode::Enter => self.focus = self.focus.next(),
            _ => {}
        }
        log_debug!("{:?} is now {:?}", field, self.controller.text(field));
        Ok(())
    }

    pub fn quit(&mut self) {
        self.running = false;
    }
}

//! Contact panel with name and email fields and a local-only submit.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Position, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::core::contact::ContactNote;
use crate::core::controller::Controller;
use crate::core::store::KeyValueStore;
use crate::tui::events::Focus;
use crate::tui::theme;
use crate::tui::widgets::text_field::TextField;

#[derive(Debug, Default)]
pub struct ContactState {
    pub name: TextField,
    pub email: TextField,
}

impl ContactState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if consumed.
    pub fn handle_input<S: KeyValueStore>(
        &mut self,
        key: &KeyEvent,
        focus: Focus,
        controller: &mut Controller<S>,
    ) -> bool {
        let field = match focus {
            Focus::ContactName => &mut self.name,
            Focus::ContactEmail => &mut self.email,
            _ => return false,
        };

        if key.code == KeyCode::Enter {
            self.submit(controller);
            return true;
        }
        if field.handle_key(key) {
            let form = controller.contact_mut();
            form.name = self.name.text().to_string();
            form.email = self.email.text().to_string();
        }
        !matches!(key.code, KeyCode::Tab | KeyCode::BackTab | KeyCode::Esc)
    }

    /// Submit the form; on success the controller clears it and the fields
    /// follow.
    pub fn submit<S: KeyValueStore>(&mut self, controller: &mut Controller<S>) {
        let form = controller.contact_mut();
        form.name = self.name.text().to_string();
        form.email = self.email.text().to_string();
        controller.on_contact_submit();

        let form = controller.contact();
        self.name.set_text(&form.name);
        self.email.set_text(&form.email);
    }

    pub fn render<S: KeyValueStore>(
        &self,
        frame: &mut Frame,
        area: Rect,
        focus: Focus,
        controller: &Controller<S>,
    ) {
        let focused = matches!(focus, Focus::ContactName | Focus::ContactEmail);
        let block = theme::block("Contact", focused);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let field_line = |label: &'static str, field: &TextField, active: bool| {
            let label_style = if active { theme::highlight() } else { theme::dim() };
            Line::from(vec![
                Span::styled(label, label_style),
                Span::raw(field.text().to_string()),
            ])
        };

        let mut lines = vec![
            field_line("Name:  ", &self.name, focus == Focus::ContactName),
            field_line("Email: ", &self.email, focus == Focus::ContactEmail),
            Line::raw(""),
            Line::styled("Enter: send", theme::dim()),
            Line::raw(""),
        ];
        match controller.contact_note() {
            Some(note @ ContactNote::Warning(_)) => {
                lines.push(Line::styled(note.message().to_string(), theme::warning()));
            }
            Some(note @ ContactNote::Acknowledged(_)) => {
                lines.push(Line::styled(note.message().to_string(), theme::title()));
            }
            None => {}
        }
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);

        let cursor = match focus {
            Focus::ContactName => Some((0, self.name.cursor_column())),
            Focus::ContactEmail => Some((1, self.email.cursor_column())),
            _ => None,
        };
        if let Some((row, col)) = cursor {
            let x = (inner.x + 7 + col as u16).min(inner.right().saturating_sub(1));
            frame.set_cursor_position(Position::new(x, inner.y + row));
        }
    }
}

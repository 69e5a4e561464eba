//! Toolbar with the search box, selectors and the reset button.
//!
//! Selectors cycle with Left/Right. Every change goes straight to the
//! controller, which persists and re-renders.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout, Position, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::core::controller::Controller;
use crate::core::store::KeyValueStore;
use crate::tui::events::Focus;
use crate::tui::theme;
use crate::tui::widgets::text_field::TextField;

const ALL_CATEGORIES: &str = "All categories";

#[derive(Debug, Default)]
pub struct ToolbarState {
    pub search: TextField,
}

impl ToolbarState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pull the visible control values from the controller (startup, reset).
    pub fn sync_from<S: KeyValueStore>(&mut self, controller: &Controller<S>) {
        self.search.set_text(&controller.controls().query);
    }

    /// Returns true if consumed.
    pub fn handle_input<S: KeyValueStore>(
        &mut self,
        key: &KeyEvent,
        focus: Focus,
        controller: &mut Controller<S>,
    ) -> bool {
        match focus {
            Focus::Search => {
                if self.search.handle_key(key) {
                    controller.on_search_input(self.search.text());
                }
                matches!(
                    key.code,
                    KeyCode::Char(_)
                        | KeyCode::Backspace
                        | KeyCode::Delete
                        | KeyCode::Left
                        | KeyCode::Right
                        | KeyCode::Home
                        | KeyCode::End
                )
            }
            Focus::Category => match key.code {
                KeyCode::Right | KeyCode::Char('l') => {
                    let next = cycle_category(controller, true);
                    controller.on_category_change(&next);
                    true
                }
                KeyCode::Left | KeyCode::Char('h') => {
                    let prev = cycle_category(controller, false);
                    controller.on_category_change(&prev);
                    true
                }
                _ => false,
            },
            Focus::Sort => match key.code {
                KeyCode::Right | KeyCode::Char('l') => {
                    let next = controller.controls().sort_mode.next();
                    controller.on_sort_change(next.token());
                    true
                }
                KeyCode::Left | KeyCode::Char('h') => {
                    let prev = controller.controls().sort_mode.prev();
                    controller.on_sort_change(prev.token());
                    true
                }
                _ => false,
            },
            Focus::Reset => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => {
                    controller.on_reset();
                    self.sync_from(controller);
                    true
                }
                _ => false,
            },
            _ => false,
        }
    }

    pub fn render<S: KeyValueStore>(
        &self,
        frame: &mut Frame,
        area: Rect,
        focus: Focus,
        controller: &Controller<S>,
    ) {
        let focused = matches!(
            focus,
            Focus::Search | Focus::Category | Focus::Sort | Focus::Reset
        );
        let outer = theme::block("Browse", focused);
        let inner = outer.inner(area);
        frame.render_widget(outer, area);

        let cols = Layout::horizontal([
            Constraint::Min(20),
            Constraint::Length(28),
            Constraint::Length(30),
            Constraint::Length(9),
        ])
        .split(inner);

        let controls = controller.controls();

        // Search
        let label = "Search: ";
        let search = Paragraph::new(Line::from(vec![
            Span::styled(label, label_style(focus == Focus::Search)),
            Span::raw(self.search.text().to_string()),
        ]));
        frame.render_widget(search, cols[0]);
        if focus == Focus::Search {
            let x = cols[0].x + (label.len() + self.search.cursor_column()) as u16;
            let x = x.min(cols[0].right().saturating_sub(1));
            frame.set_cursor_position(Position::new(x, cols[0].y));
        }

        // Category
        let category = if controls.category.is_empty() {
            ALL_CATEGORIES.to_string()
        } else {
            controls.category.clone()
        };
        frame.render_widget(
            selector("Category", &category, focus == Focus::Category),
            cols[1],
        );

        // Sort
        frame.render_widget(
            selector("Sort", controls.sort_mode.label(), focus == Focus::Sort),
            cols[2],
        );

        // Reset
        let reset_style = if focus == Focus::Reset {
            theme::brand_badge()
        } else {
            theme::muted()
        };
        frame.render_widget(
            Paragraph::new(Span::styled("[Reset]", reset_style)),
            cols[3],
        );
    }
}

fn label_style(focused: bool) -> ratatui::style::Style {
    if focused {
        theme::highlight()
    } else {
        theme::dim()
    }
}

fn selector<'a>(label: &'a str, value: &str, focused: bool) -> Paragraph<'a> {
    let value_style = if focused {
        theme::highlight()
    } else {
        theme::muted()
    };
    Paragraph::new(Line::from(vec![
        Span::styled(format!("{label}: "), label_style(focused)),
        Span::styled("\u{2039} ", theme::dim()),
        Span::styled(value.to_string(), value_style),
        Span::styled(" \u{203a}", theme::dim()),
    ]))
}

/// Next/previous category control value: `""` (all) followed by the
/// catalog's categories. An unrecognised current value restarts the cycle.
pub fn cycle_category<S: KeyValueStore>(controller: &Controller<S>, forward: bool) -> String {
    let mut options = vec![String::new()];
    options.extend(
        controller
            .catalog()
            .categories()
            .into_iter()
            .map(|c| c.as_str().to_string()),
    );
    let current = options
        .iter()
        .position(|o| *o == controller.controls().category)
        .unwrap_or(0);
    let len = options.len();
    let idx = if forward {
        (current + 1) % len
    } else {
        (current + len - 1) % len
    };
    options.swap_remove(idx)
}

//! Catalog grid: one card per visible item.
//!
//! j/k (or arrows) move the selection, Enter/Space/`a` activates the
//! selected card's Add control. The grid is redrawn in full every frame
//! from the controller's current derived list.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::core::add_button::AddButtons;
use crate::core::catalog::Item;
use crate::core::controller::{Controller, Effect};
use crate::core::store::KeyValueStore;
use crate::tui::theme;

/// Lines per card, including the spacer.
pub const CARD_HEIGHT: u16 = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridInput {
    Ignored,
    Consumed,
    /// Consumed, and the front end must carry out this effect.
    Effect(Effect),
}

#[derive(Debug, Default)]
pub struct GridState {
    selected: usize,
}

impl GridState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Keep the selection inside the list after a filter change.
    pub fn clamp(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    pub fn handle_input<S: KeyValueStore>(
        &mut self,
        key: &KeyEvent,
        controller: &mut Controller<S>,
    ) -> GridInput {
        let len = controller.rendered().count;
        self.clamp(len);
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < len {
                    self.selected += 1;
                }
                GridInput::Consumed
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
                GridInput::Consumed
            }
            KeyCode::Home | KeyCode::Char('g') => {
                self.selected = 0;
                GridInput::Consumed
            }
            KeyCode::End | KeyCode::Char('G') => {
                self.selected = len.saturating_sub(1);
                GridInput::Consumed
            }
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('a') => {
                let id = controller.derived().get(self.selected).map(|item| item.id);
                match id.and_then(|id| controller.on_add(id)) {
                    Some(effect) => GridInput::Effect(effect),
                    None => GridInput::Consumed,
                }
            }
            _ => GridInput::Ignored,
        }
    }

    pub fn render<S: KeyValueStore>(
        &self,
        frame: &mut Frame,
        area: Rect,
        focused: bool,
        controller: &Controller<S>,
    ) {
        let block = theme::block("Catalog", focused);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let list = controller.derived();
        if list.is_empty() {
            frame.render_widget(
                Paragraph::new(Line::styled("  No items match your filters.", theme::dim())),
                inner,
            );
            return;
        }

        let visible = (inner.height / CARD_HEIGHT).max(1) as usize;
        let selected = self.selected.min(list.len() - 1);
        let offset = (selected + 1).saturating_sub(visible);

        let mut lines = Vec::with_capacity(visible * CARD_HEIGHT as usize);
        for (idx, item) in list.iter().enumerate().skip(offset).take(visible) {
            let is_selected = focused && idx == selected;
            card_lines(&mut lines, item, controller.add_buttons(), is_selected);
        }
        frame.render_widget(Paragraph::new(lines), inner);
    }
}

fn card_lines(lines: &mut Vec<Line<'static>>, item: &Item, buttons: &AddButtons, selected: bool) {
    let marker = if selected { "\u{25b8} " } else { "  " };
    let name_style = if selected {
        theme::highlight()
    } else {
        Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD)
    };

    lines.push(Line::from(vec![
        Span::styled(marker, theme::highlight()),
        Span::styled("\u{2588}\u{2588} ", Style::default().fg(theme::swatch(&item.image_key))),
        Span::styled(item.name.clone(), name_style),
    ]));
    lines.push(Line::from(vec![
        Span::raw("     "),
        Span::styled(format!("{} \u{2022} {}", item.price, item.category), theme::muted()),
    ]));

    let button_style = if buttons.is_pending(item.id) {
        Style::default().fg(theme::BG_BASE).bg(theme::ACCENT)
    } else if selected {
        theme::brand_badge()
    } else {
        theme::muted()
    };
    lines.push(Line::from(vec![
        Span::raw("     "),
        Span::styled(format!(" {} ", item.category), theme::tag()),
        Span::raw(" "),
        Span::styled(format!(" Popularity {} ", item.rank()), theme::tag()),
        Span::raw("  "),
        Span::styled(format!("[{}]", buttons.label(item.id)), button_style),
    ]));
    lines.push(Line::raw(""));
}

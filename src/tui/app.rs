use std::io;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::{
    backend::CrosstermBackend,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame, Terminal,
};
use tokio::sync::mpsc;

use super::events::{AppEvent, Focus};
use super::layout::AppLayout;
use super::theme;
use super::views::contact::ContactState;
use super::views::grid::{GridInput, GridState};
use super::views::toolbar::ToolbarState;
use crate::core::controller::{Controller, Effect};
use crate::core::store::KeyValueStore;

/// Store type used by the running application.
pub type DynStore = Box<dyn KeyValueStore>;

/// Central application state (Elm architecture).
pub struct AppState<S = DynStore> {
    /// Whether the app is still running.
    pub running: bool,
    /// Control with keyboard focus.
    pub focus: Focus,
    pub controller: Controller<S>,
    pub toolbar: ToolbarState,
    pub grid: GridState,
    pub contact: ContactState,
    /// Receiver for timer and backend events.
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
    /// Sender handed to one-shot timers.
    event_tx: mpsc::UnboundedSender<AppEvent>,
}

impl<S: KeyValueStore> AppState<S> {
    pub fn new(controller: Controller<S>) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let mut toolbar = ToolbarState::new();
        toolbar.sync_from(&controller);
        Self {
            running: true,
            focus: Focus::Search,
            controller,
            toolbar,
            grid: GridState::new(),
            contact: ContactState::new(),
            event_rx,
            event_tx,
        }
    }

    /// One-time startup focus from an address fragment such as `#contact`.
    pub fn focus_fragment(&mut self, fragment: &str) {
        match Focus::from_fragment(fragment) {
            Some(focus) => {
                tracing::debug!(fragment, ?focus, "Focusing fragment target");
                self.focus = focus;
            }
            None => tracing::debug!(fragment, "Fragment names no control"),
        }
    }

    // ── Elm event loop ──────────────────────────────────────────────────

    /// Main event loop: render → select → update → loop.
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        tick_rate: Duration,
    ) -> io::Result<()> {
        let mut tick_interval = tokio::time::interval(tick_rate);
        let mut event_stream = EventStream::new();

        while self.running {
            terminal.draw(|frame| self.render(frame))?;

            tokio::select! {
                _ = tick_interval.tick() => {
                    self.handle_event(AppEvent::Tick);
                }
                Some(event) = self.event_rx.recv() => {
                    self.handle_event(event);
                }
                Some(Ok(crossterm_event)) = event_stream.next() => {
                    self.handle_event(AppEvent::Input(crossterm_event));
                }
            }
        }

        Ok(())
    }

    // ── Event handling ──────────────────────────────────────────────────

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Input(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                self.handle_key(&key);
            }
            AppEvent::Input(_) => {}
            AppEvent::AddWindowElapsed(id) => {
                self.controller.on_add_window_elapsed(id);
            }
            AppEvent::Tick => {
                self.grid.clamp(self.controller.rendered().count);
            }
            AppEvent::Quit => {
                self.running = false;
            }
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) {
        // Global keys first
        match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) | (_, KeyCode::Esc) => {
                self.running = false;
                return;
            }
            (_, KeyCode::Tab) => {
                self.focus = self.focus.next();
                return;
            }
            (_, KeyCode::BackTab) => {
                self.focus = self.focus.prev();
                return;
            }
            (KeyModifiers::CONTROL, KeyCode::Char('r')) => {
                self.controller.on_reset();
                self.toolbar.sync_from(&self.controller);
                return;
            }
            _ => {}
        }

        match self.focus {
            Focus::Search | Focus::Category | Focus::Sort | Focus::Reset => {
                self.toolbar
                    .handle_input(key, self.focus, &mut self.controller);
            }
            Focus::Grid => {
                if let GridInput::Effect(effect) =
                    self.grid.handle_input(key, &mut self.controller)
                {
                    self.schedule(effect);
                }
            }
            Focus::ContactName | Focus::ContactEmail => {
                self.contact
                    .handle_input(key, self.focus, &mut self.controller);
            }
        }

        if !self.focus.is_text_input() && key.code == KeyCode::Char('q') {
            self.running = false;
        }
    }

    /// Carry out a controller effect.
    fn schedule(&self, effect: Effect) {
        match effect {
            Effect::RevertAdd { id, after } => {
                let tx = self.event_tx.clone();
                tokio::spawn(async move {
                    tokio::time::sleep(after).await;
                    let _ = tx.send(AppEvent::AddWindowElapsed(id));
                });
            }
        }
    }

    // ── Rendering ───────────────────────────────────────────────────────

    fn render(&self, frame: &mut Frame) {
        let layout = AppLayout::compute(frame.area());
        self.toolbar
            .render(frame, layout.toolbar, self.focus, &self.controller);
        self.grid.render(
            frame,
            layout.grid,
            self.focus == Focus::Grid,
            &self.controller,
        );
        self.contact
            .render(frame, layout.contact, self.focus, &self.controller);
        self.render_status_bar(frame, layout.status);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled(" CATALOG ", theme::brand_badge()),
            Span::raw(" "),
            Span::styled(self.controller.rendered().count_label.clone(), theme::muted()),
            Span::raw("  "),
            Span::styled(
                format!("[{}]  Tab:next  ^R:reset  Esc:quit", self.focus.label()),
                theme::dim(),
            ),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}

//! Interaction controller.
//!
//! Owns the single [`ViewState`] and everything that reacts to user input.
//! Data flows one way: input → state → persist → derive → render. Every
//! view-state change re-renders the whole grid.

use std::time::Duration;

use super::add_button::{AddButtons, AddOutcome, DEFAULT_PENDING_WINDOW};
use super::catalog::{Catalog, Item, ItemId};
use super::contact::{ContactForm, ContactNote};
use super::query;
use super::render::{self, ControlValues, Rendered};
use super::store::{KeyValueStore, ViewStateStore};
use super::view_state::ViewState;

/// Side effect the front end must carry out on the controller's behalf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Call [`Controller::on_add_window_elapsed`] for `id` after `after`.
    RevertAdd { id: ItemId, after: Duration },
}

pub struct Controller<S> {
    catalog: Catalog,
    state: ViewState,
    controls: ControlValues,
    store: ViewStateStore<S>,
    add_buttons: AddButtons,
    pending_window: Duration,
    contact: ContactForm,
    contact_note: Option<ContactNote>,
    rendered: Rendered,
    /// Number of full redraws so far.
    redraws: u64,
}

impl<S: KeyValueStore> Controller<S> {
    /// Startup: defaults overlaid with whatever the store has, then a first
    /// render.
    pub fn new(catalog: Catalog, store: S) -> Self {
        let store = ViewStateStore::new(store);
        let mut state = ViewState::default();
        let saved = store.load();
        if !saved.is_empty() {
            tracing::debug!(?saved, "Restoring saved view state");
        }
        state.overlay(saved);

        let mut controller = Self {
            catalog,
            controls: controls_for(&state),
            state,
            store,
            add_buttons: AddButtons::default(),
            pending_window: DEFAULT_PENDING_WINDOW,
            contact: ContactForm::default(),
            contact_note: None,
            rendered: Rendered::default(),
            redraws: 0,
        };
        controller.redraw();
        controller
    }

    pub fn with_pending_window(mut self, window: Duration) -> Self {
        self.pending_window = window;
        self
    }

    // ── View state ──────────────────────────────────────────────────────

    /// Search box input: the box keeps the raw text, the state the trimmed one.
    pub fn on_search_input(&mut self, raw: &str) {
        self.controls.query = raw.to_string();
        self.state.set_query(raw);
        self.commit();
    }

    pub fn on_category_change(&mut self, raw: &str) {
        self.state.set_category(raw);
        self.controls.category = self.state.category.clone();
        self.commit();
    }

    pub fn on_sort_change(&mut self, raw: &str) {
        self.state.set_sort(raw);
        self.controls.sort_mode = self.state.sort_mode;
        self.commit();
    }

    pub fn on_reset(&mut self) {
        self.state.reset();
        self.controls = ControlValues::default();
        self.commit();
    }

    fn commit(&mut self) {
        self.store.save(&self.state);
        self.redraw();
    }

    fn redraw(&mut self) {
        let list = query::derive(&self.catalog, &self.state);
        self.rendered = render::render_with(&list, &self.add_buttons);
        self.redraws += 1;
    }

    // ── Add action ──────────────────────────────────────────────────────

    /// Activate an item's Add control. Returns the revert timer to schedule,
    /// or `None` when the id is unknown or the control is already pending.
    pub fn on_add(&mut self, id: ItemId) -> Option<Effect> {
        let Some(item) = self.catalog.find(id) else {
            tracing::debug!(%id, "Add activated for unknown item");
            return None;
        };
        match self.add_buttons.activate(id) {
            AddOutcome::Started => {
                tracing::info!(%id, name = %item.name, "Item added to cart");
                self.redraw();
                Some(Effect::RevertAdd {
                    id,
                    after: self.pending_window,
                })
            }
            AddOutcome::Ignored => None,
        }
    }

    pub fn on_add_window_elapsed(&mut self, id: ItemId) {
        if self.add_buttons.complete(id) {
            self.redraw();
        }
    }

    // ── Contact form ────────────────────────────────────────────────────

    pub fn contact_mut(&mut self) -> &mut ContactForm {
        &mut self.contact
    }

    pub fn on_contact_submit(&mut self) -> &ContactNote {
        self.contact_note.insert(self.contact.submit())
    }

    // ── Accessors ───────────────────────────────────────────────────────

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn controls(&self) -> &ControlValues {
        &self.controls
    }

    pub fn rendered(&self) -> &Rendered {
        &self.rendered
    }

    /// The current filtered and sorted list.
    pub fn derived(&self) -> Vec<&Item> {
        query::derive(&self.catalog, &self.state)
    }

    pub fn add_buttons(&self) -> &AddButtons {
        &self.add_buttons
    }

    pub fn pending_window(&self) -> Duration {
        self.pending_window
    }

    pub fn contact(&self) -> &ContactForm {
        &self.contact
    }

    pub fn contact_note(&self) -> Option<&ContactNote> {
        self.contact_note.as_ref()
    }

    pub fn redraws(&self) -> u64 {
        self.redraws
    }

    pub fn store(&self) -> &ViewStateStore<S> {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store.into_inner()
    }

    /// Full page body markup for the current state.
    pub fn page_markup(&self) -> String {
        render::render_page(
            &self.catalog,
            &self.controls,
            &self.rendered,
            &self.contact,
            self.contact_note.as_ref(),
        )
    }
}

fn controls_for(state: &ViewState) -> ControlValues {
    ControlValues {
        query: state.query.clone(),
        category: state.category.clone(),
        sort_mode: state.sort_mode,
    }
}

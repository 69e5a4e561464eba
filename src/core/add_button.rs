//! "Add to cart" control state, one small state machine per item.
//!
//! ```text
//! Idle --activate--> Pending --window elapsed--> Idle
//! ```
//!
//! A pending control is disabled, so a second activation is ignored. The
//! one-shot timer itself lives in the front end; this type only records
//! which controls are inside their pending window.

use std::collections::HashMap;
use std::time::Duration;

use super::catalog::ItemId;

/// Label of an idle control.
pub const ADD_LABEL: &str = "Add";
/// Label shown while the control is pending.
pub const ADDED_LABEL: &str = "Added \u{2713}";
/// Default length of the pending window.
pub const DEFAULT_PENDING_WINDOW: Duration = Duration::from_millis(1200);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddState {
    #[default]
    Idle,
    Pending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// Idle → Pending; the caller must schedule the revert timer.
    Started,
    /// Control already pending (disabled); nothing happens.
    Ignored,
}

#[derive(Debug, Clone, Default)]
pub struct AddButtons {
    pending: HashMap<ItemId, AddState>,
}

impl AddButtons {
    pub fn state(&self, id: ItemId) -> AddState {
        self.pending.get(&id).copied().unwrap_or_default()
    }

    pub fn is_pending(&self, id: ItemId) -> bool {
        self.state(id) == AddState::Pending
    }

    /// Disabled controls reject activation.
    pub fn is_disabled(&self, id: ItemId) -> bool {
        self.is_pending(id)
    }

    /// `aria-pressed` mark.
    pub fn is_pressed(&self, id: ItemId) -> bool {
        self.is_pending(id)
    }

    pub fn label(&self, id: ItemId) -> &'static str {
        match self.state(id) {
            AddState::Idle => ADD_LABEL,
            AddState::Pending => ADDED_LABEL,
        }
    }

    pub fn activate(&mut self, id: ItemId) -> AddOutcome {
        match self.state(id) {
            AddState::Pending => AddOutcome::Ignored,
            AddState::Idle => {
                self.pending.insert(id, AddState::Pending);
                AddOutcome::Started
            }
        }
    }

    /// Timer fired: Pending → Idle. Returns whether a transition happened.
    pub fn complete(&mut self, id: ItemId) -> bool {
        self.pending.remove(&id).is_some()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

//! Test Fixtures
//!
//! Controllers over in-memory stores and small helpers for reading results.

use crate::core::catalog::{Catalog, Item};
use crate::core::controller::Controller;
use crate::core::store::{MemoryStore, STATE_KEY};

/// Controller over the builtin catalog with an empty store.
pub fn create_test_controller() -> Controller<MemoryStore> {
    Controller::new(Catalog::builtin(), MemoryStore::new())
}

/// Controller whose store already holds `saved` under the state key.
pub fn create_controller_with_saved(saved: &str) -> Controller<MemoryStore> {
    Controller::new(
        Catalog::builtin(),
        MemoryStore::new().with_entry(STATE_KEY, saved),
    )
}

pub fn names<'a>(list: &[&'a Item]) -> Vec<&'a str> {
    list.iter().map(|item| item.name.as_str()).collect()
}

pub fn popularities(list: &[&Item]) -> Vec<u32> {
    list.iter().map(|item| item.rank()).collect()
}

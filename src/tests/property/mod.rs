//! Property-based tests
//!
//! Invariants that must hold for every catalog and view state, checked with
//! proptest.
//!
//! ## Test Modules
//!
//! - `query_engine_props`: filtering and sorting
//!   - The result is exactly the matching subset
//!   - Ties keep catalog order
//!   - Price ascending is price descending reversed when prices are distinct
//!   - Name order agrees with the collation
//!
//! - `view_state_props`: view state edits and lenient loading

mod query_engine_props;
mod view_state_props;

//! Crate-level test suites.
//!
//! - `common`: shared fixtures
//! - `property`: proptest invariants of the query engine and view state
//! - `unit`: end-to-end controller scenarios

mod common;
mod property;
mod unit;

//! Common Test Utilities

pub mod fixtures;

pub use fixtures::*;

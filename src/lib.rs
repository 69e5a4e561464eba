//! Catalog Browser
//!
//! Filter, sort and browse a fixed product catalog. The view state
//! persists across sessions; "add to cart" and the contact form are
//! simulated locally.

pub mod config;
pub mod core;
pub mod tui;

#[cfg(test)]
mod tests;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

//! Terminal front end: the catalog page rendered with ratatui.

pub mod app;
pub mod events;
pub mod layout;
pub mod theme;
pub mod views;
pub mod widgets;

pub mod logging;

// Domain
pub mod catalog;
pub mod view_state;

// Derive + render pipeline
pub mod query;
pub mod render;

// Persistence
pub mod store;

// Interaction
pub mod add_button;
pub mod contact;
pub mod controller;

pub mod contact;
pub mod grid;
pub mod toolbar;

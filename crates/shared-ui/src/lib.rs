//! Presentational building blocks for the trademark search page.
//!
//! Components here hold no search state: they render props and report events.

pub mod components;

pub use components::*;

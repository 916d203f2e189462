//! Reusable view components.

pub mod collection_panel;

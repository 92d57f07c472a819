//! Terminal UI: layout, theme, mouse interaction registry and components.

pub mod components;
pub mod interaction;
pub mod theme;
pub mod ui;

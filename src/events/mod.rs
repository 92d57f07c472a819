//! Event handling module for keyboard and mouse events.
//!
//! Terminal events are translated into `Action`s here; `crate::handlers`
//! applies them to the `App`.

mod action;
mod handler;
mod keyboard;
mod mouse;

pub use action::Action;
pub use handler::EventHandler;

//! Cascading dropdown core.
//!
//! Terminal-independent pieces of the widget:
//! - `model` - options, hierarchy and selection state types
//! - `dropdown` - the `CascadingDropdown` state holder and its change rule
//! - `render` - pure mapping from state to control descriptors
//!
//! The TUI layer in `crate::tui` only ever draws what `render_controls`
//! returns, so everything observable about the widget can be tested here.

mod dropdown;
mod model;
mod render;

pub use dropdown::CascadingDropdown;
pub use model::{DropdownOption, Hierarchy, OptionsByLevel, SelectionState};
pub use render::{ControlDescriptor, ControlEntry, DEFAULT_PLACEHOLDER};

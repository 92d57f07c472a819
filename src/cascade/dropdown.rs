//! The cascading dropdown state holder.

use std::fmt;

use crate::error::{CascadeError, CascadeResult};

use super::model::{DropdownOption, Hierarchy, OptionsByLevel, SelectionState};
use super::render::{ControlDescriptor, render_controls};

/// Callback invoked once per applied change.
pub type ChangeCallback = Box<dyn FnMut(SelectionState) + Send>;

/// Cascading dropdown: one selector per hierarchy level, where changing a
/// level clears every level below it.
///
/// The widget owns its selection state. Hosts read it through
/// [`current_selection`](Self::current_selection) and mutate it only through
/// [`apply_change`](Self::apply_change).
///
/// # Example
///
/// ```ignore
/// let mut dropdown = CascadingDropdown::new(
///     options,
///     vec!["country".into(), "state".into(), "city".into()],
///     SelectionState::new(),
///     Box::new(|previous| println!("{:?}", previous)),
/// );
/// dropdown.apply_change("country", "usa")?;
/// ```
pub struct CascadingDropdown {
    options_by_level: OptionsByLevel,
    hierarchy: Hierarchy,
    selection: SelectionState,
    on_change: ChangeCallback,
}

impl fmt::Debug for CascadingDropdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CascadingDropdown")
            .field("hierarchy", &self.hierarchy)
            .field("selection", &self.selection)
            .field("levels_with_options", &self.options_by_level.len())
            .finish_non_exhaustive()
    }
}

impl CascadingDropdown {
    /// Create a dropdown. An empty `initial_selection` starts with nothing selected.
    pub fn new(
        options_by_level: OptionsByLevel,
        hierarchy: Hierarchy,
        initial_selection: SelectionState,
        on_change: ChangeCallback,
    ) -> Self {
        let selection = if initial_selection.is_empty() {
            SelectionState::new()
        } else {
            initial_selection
        };

        Self {
            options_by_level,
            hierarchy,
            selection,
            on_change,
        }
    }

    /// The selection the controls currently display.
    pub fn current_selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn hierarchy(&self) -> &[String] {
        &self.hierarchy
    }

    /// Options of a level; empty when the level has none configured.
    pub fn options_for(&self, level: &str) -> &[DropdownOption] {
        self.options_by_level
            .get(level)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Position of a level in the hierarchy (first occurrence).
    pub fn level_index(&self, level: &str) -> Option<usize> {
        self.hierarchy.iter().position(|l| l == level)
    }

    /// Selected value of a level, `None` when unset or explicitly reset.
    pub fn selected_value(&self, level: &str) -> Option<&str> {
        self.selection
            .get(level)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Set `level` to `value` and clear every level below it.
    ///
    /// An empty `value` is stored as an explicit empty entry. The callback
    /// receives the selection as it was *before* this change; the widget
    /// itself shows the new one.
    pub fn apply_change(&mut self, level: &str, value: &str) -> CascadeResult<()> {
        let index = self
            .level_index(level)
            .ok_or_else(|| CascadeError::UnknownLevel(level.to_string()))?;

        let mut next = self.selection.clone();
        next.insert(level.to_string(), value.to_string());
        for descendant in &self.hierarchy[index + 1..] {
            next.remove(descendant);
        }

        let previous = std::mem::replace(&mut self.selection, next);
        (self.on_change)(previous);

        Ok(())
    }

    /// Control descriptors for the current state.
    pub fn controls(&self, placeholder: &str) -> Vec<ControlDescriptor> {
        render_controls(
            &self.options_by_level,
            &self.hierarchy,
            &self.selection,
            placeholder,
        )
    }
}

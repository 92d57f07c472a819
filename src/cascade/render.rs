//! Pure rendering of the dropdown into control descriptors.

use super::model::{DropdownOption, OptionsByLevel, SelectionState};

/// Text of the "no selection" entry heading every selector.
pub const DEFAULT_PLACEHOLDER: &str = "-- Select --";

/// One entry of a selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlEntry {
    pub label: String,
    /// Empty for the "no selection" entry
    pub value: String,
}

impl ControlEntry {
    pub fn is_placeholder(&self) -> bool {
        self.value.is_empty()
    }
}

/// Everything needed to draw one level's selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlDescriptor {
    /// Level this selector edits
    pub level: String,
    /// Position of the level in the hierarchy
    pub index: usize,
    /// Element id, `dropdown-{level}`
    pub id: String,
    /// Caption, `Select {level}:`
    pub label: String,
    /// Bound value, empty when nothing is selected
    pub value: String,
    /// Placeholder entry followed by the level's options in display order
    pub entries: Vec<ControlEntry>,
}

impl ControlDescriptor {
    /// Index into `entries` of the bound value.
    ///
    /// Falls back to the placeholder when the value is empty or not among
    /// the options.
    pub fn selected_entry(&self) -> usize {
        self.entries
            .iter()
            .position(|e| e.value == self.value)
            .unwrap_or(0)
    }

    /// Display text for the bound value.
    pub fn display_text(&self) -> &str {
        &self.entries[self.selected_entry()].label
    }
}

/// Build one descriptor per level, in hierarchy order.
///
/// Levels missing from `options_by_level` get only the placeholder entry.
/// Option lists come straight from `options_by_level` and never depend on
/// what ancestors have selected.
pub fn render_controls(
    options_by_level: &OptionsByLevel,
    hierarchy: &[String],
    selection: &SelectionState,
    placeholder: &str,
) -> Vec<ControlDescriptor> {
    hierarchy
        .iter()
        .enumerate()
        .map(|(index, level)| {
            let options: &[DropdownOption] = options_by_level
                .get(level)
                .map(Vec::as_slice)
                .unwrap_or(&[]);

            let mut entries = Vec::with_capacity(options.len() + 1);
            entries.push(ControlEntry {
                label: placeholder.to_string(),
                value: String::new(),
            });
            entries.extend(options.iter().map(|option| ControlEntry {
                label: option.label.clone(),
                value: option.value.clone(),
            }));

            ControlDescriptor {
                level: level.clone(),
                index,
                id: format!("dropdown-{}", level),
                label: format!("Select {}:", level),
                value: selection.get(level).cloned().unwrap_or_default(),
                entries,
            }
        })
        .collect()
}

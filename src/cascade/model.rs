//! Data model for the cascading dropdown.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

/// One selectable entry of a level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownOption {
    /// Display text
    pub label: String,
    /// Identifier reported in the selection state
    pub value: String,
}

impl DropdownOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Options for every level, keyed by level identifier. Vec order is display order.
pub type OptionsByLevel = HashMap<String, Vec<DropdownOption>>;

/// Level identifiers, parent first.
pub type Hierarchy = Vec<String>;

/// Selected value per level.
///
/// A level that was explicitly reset keeps an entry with an empty value,
/// which reads as "no selection" everywhere it is displayed.
pub type SelectionState = BTreeMap<String, String>;

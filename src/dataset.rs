//! Option data for the dropdown.
//!
//! A dataset bundles the hierarchy, the options of every level and an
//! optional starting selection. Files are TOML or JSON, picked by extension:
//!
//! ```toml
//! hierarchy = ["country", "state", "city"]
//!
//! [selection]
//! country = "usa"
//!
//! [[options.country]]
//! label = "USA"
//! value = "usa"
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::cascade::{DropdownOption, Hierarchy, OptionsByLevel, SelectionState};
use crate::error::{DatasetError, DatasetResult};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Dataset {
    pub hierarchy: Hierarchy,
    pub options: OptionsByLevel,
    pub selection: SelectionState,
}

impl Dataset {
    /// Load a dataset from a `.toml` or `.json` file.
    pub fn load(path: &Path) -> DatasetResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| DatasetError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match extension.as_deref() {
            Some("toml") => Self::from_toml(&contents)
                .map_err(|e| DatasetError::Toml(path.to_path_buf(), e)),
            Some("json") => Self::from_json(&contents)
                .map_err(|e| DatasetError::Json(path.to_path_buf(), e)),
            _ => Err(DatasetError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    pub fn from_json(contents: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(contents)
    }

    /// Overlay `level=value` pairs on top of the file's selection.
    pub fn with_selection(mut self, overrides: Vec<(String, String)>) -> Self {
        self.selection.extend(overrides);
        self
    }

    /// Built-in demo data used when no file is configured.
    pub fn demo() -> Self {
        let level = |pairs: &[(&str, &str)]| -> Vec<DropdownOption> {
            pairs
                .iter()
                .map(|(label, value)| DropdownOption::new(*label, *value))
                .collect()
        };

        let mut options = OptionsByLevel::new();
        options.insert(
            "country".to_string(),
            level(&[("USA", "usa"), ("Canada", "canada")]),
        );
        options.insert(
            "state".to_string(),
            level(&[
                ("California", "california"),
                ("Texas", "texas"),
                ("Ontario", "ontario"),
                ("Quebec", "quebec"),
            ]),
        );
        options.insert(
            "city".to_string(),
            level(&[
                ("Los Angeles", "losangeles"),
                ("San Francisco", "sanfrancisco"),
                ("Austin", "austin"),
                ("Toronto", "toronto"),
                ("Montreal", "montreal"),
            ]),
        );

        Self {
            hierarchy: vec!["country".to_string(), "state".to_string(), "city".to_string()],
            options,
            selection: SelectionState::new(),
        }
    }
}

/// Parse a `level=value` argument.
pub fn parse_selection_arg(arg: &str) -> Option<(String, String)> {
    let (level, value) = arg.split_once('=')?;
    let level = level.trim();
    if level.is_empty() {
        return None;
    }
    Some((level.to_string(), value.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOML_DATA: &str = r#"
        hierarchy = ["country", "state"]

        [selection]
        country = "usa"

        [[options.country]]
        label = "USA"
        value = "usa"

        [[options.country]]
        label = "Canada"
        value = "canada"
    "#;

    const JSON_DATA: &str = r#"{
        "hierarchy": ["country", "state"],
        "selection": { "country": "usa" },
        "options": {
            "country": [
                { "label": "USA", "value": "usa" },
                { "label": "Canada", "value": "canada" }
            ]
        }
    }"#;

    #[test]
    fn test_toml_and_json_load_the_same_model() {
        let from_toml = Dataset::from_toml(TOML_DATA).unwrap();
        let from_json = Dataset::from_json(JSON_DATA).unwrap();

        assert_eq!(from_toml.hierarchy, from_json.hierarchy);
        assert_eq!(from_toml.options, from_json.options);
        assert_eq!(from_toml.selection, from_json.selection);
        assert_eq!(from_toml.options["country"][1].label, "Canada");
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let dataset = Dataset::from_toml(r#"hierarchy = ["a"]"#).unwrap();
        assert!(dataset.options.is_empty());
        assert!(dataset.selection.is_empty());
    }

    #[test]
    fn test_demo_has_options_for_every_level() {
        let dataset = Dataset::demo();
        assert_eq!(dataset.hierarchy, ["country", "state", "city"]);
        for level in &dataset.hierarchy {
            assert!(!dataset.options[level].is_empty(), "{} has no options", level);
        }
    }

    #[test]
    fn test_load_rejects_unknown_extension() {
        let path = std::env::temp_dir().join(format!("cascader_test_{}.yaml", std::process::id()));
        std::fs::write(&path, "hierarchy: []").unwrap();

        let result = Dataset::load(&path);
        let _ = std::fs::remove_file(&path);

        assert!(matches!(result, Err(DatasetError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_load_reads_json_file() {
        let path = std::env::temp_dir().join(format!("cascader_test_{}.json", std::process::id()));
        std::fs::write(&path, JSON_DATA).unwrap();

        let result = Dataset::load(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(result.unwrap().hierarchy, ["country", "state"]);
    }

    #[test]
    fn test_bundled_demo_files_load() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos");

        let regions = Dataset::load(&dir.join("regions.toml")).unwrap();
        assert_eq!(regions.hierarchy, ["country", "province", "city"]);
        assert_eq!(regions.options["province"].len(), 3);

        let products = Dataset::load(&dir.join("products.json")).unwrap();
        assert_eq!(products.selection["category"], "laptop");
        assert!(!products.options.contains_key("color"));
    }

    #[test]
    fn test_load_missing_file() {
        let result = Dataset::load(Path::new("/nonexistent/cascader/data.toml"));
        assert!(matches!(result, Err(DatasetError::Read { .. })));
    }

    #[test]
    fn test_selection_overrides() {
        let dataset = Dataset::from_toml(TOML_DATA)
            .unwrap()
            .with_selection(vec![("country".to_string(), "canada".to_string())]);
        assert_eq!(dataset.selection["country"], "canada");
    }

    #[test]
    fn test_parse_selection_arg() {
        assert_eq!(
            parse_selection_arg("country=usa"),
            Some(("country".to_string(), "usa".to_string()))
        );
        assert_eq!(
            parse_selection_arg("city="),
            Some(("city".to_string(), String::new()))
        );
        assert_eq!(parse_selection_arg("=usa"), None);
        assert_eq!(parse_selection_arg("country"), None);
    }
}

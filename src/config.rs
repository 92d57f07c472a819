//! Configuration file support for cascader.
//!
//! Configuration is loaded from `~/.config/cascader/config.toml` with the following precedence:
//! 1. CLI arguments (highest priority)
//! 2. Environment variables
//! 3. Configuration file
//! 4. Default values (lowest priority)
//!
//! # Example Configuration
//!
//! ```toml
//! # ~/.config/cascader/config.toml
//! data_file = "~/data/regions.toml"
//! placeholder = "(none)"
//! show_change_log = false
//! ```

use std::path::PathBuf;

use serde::Deserialize;

use crate::cascade::DEFAULT_PLACEHOLDER;

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Options file loaded when none is given on the command line
    pub data_file: Option<PathBuf>,

    /// Text of the "no selection" entry
    pub placeholder: Option<String>,

    /// Show the panel listing received change notifications
    pub show_change_log: Option<bool>,

    /// Data file given on the command line
    #[serde(skip)]
    pub cli_data_file: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default config file path.
    ///
    /// Returns default configuration if file doesn't exist or can't be parsed.
    pub fn load() -> Self {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&config_path) {
            Ok(contents) => Self::parse(&contents),
            Err(e) => {
                eprintln!("Warning: Failed to read config file: {}", e);
                Self::default()
            }
        }
    }

    /// Parse configuration text, falling back to defaults on error.
    pub fn parse(contents: &str) -> Self {
        match toml::from_str(contents) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Warning: Failed to parse config file: {}", e);
                Self::default()
            }
        }
    }

    /// Get the default configuration file path.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("cascader")
            .join("config.toml")
    }

    /// Merge with CLI overrides.
    ///
    /// CLI arguments take precedence over config file values.
    pub fn with_overrides(mut self, data_file: Option<PathBuf>, placeholder: Option<String>) -> Self {
        if data_file.is_some() {
            self.cli_data_file = data_file;
        }
        if placeholder.is_some() {
            self.placeholder = placeholder;
        }
        self
    }

    /// Get the data file: CLI, then `CASCADER_DATA`, then the config file.
    ///
    /// `None` means the built-in demo data is used.
    pub fn data_file(&self) -> Option<PathBuf> {
        let env = std::env::var_os("CASCADER_DATA")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        self.resolve_data_file(env)
    }

    fn resolve_data_file(&self, env: Option<PathBuf>) -> Option<PathBuf> {
        self.cli_data_file
            .clone()
            .or(env)
            .or_else(|| self.data_file.clone())
            .map(expand_home)
    }

    /// Get the placeholder text.
    pub fn placeholder(&self) -> String {
        self.placeholder
            .clone()
            .unwrap_or_else(|| DEFAULT_PLACEHOLDER.to_string())
    }

    pub fn show_change_log(&self) -> bool {
        self.show_change_log.unwrap_or(true)
    }
}

/// Expand a leading `~/` to the home directory.
fn expand_home(path: PathBuf) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => dirs::home_dir()
            .map(|home| home.join(rest))
            .unwrap_or(path),
        Err(_) => path,
    }
}

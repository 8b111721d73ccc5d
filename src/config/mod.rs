//! Configuration module for papershelf
//!
//! Settings live in `config.toml` under the user's config directory
//! (`~/.config/papershelf/config.toml` on Linux) and can be overridden with
//! `PAPERSHELF_*` environment variables, e.g. `PAPERSHELF_CHIP_REMOVAL=cycle`.

use crate::render::ChipRemoval;
use crate::selection::ExitSelection;
use crate::session::{DEFAULT_BASE_URL, SessionOptions};
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "PAPERSHELF";

/// Keys accepted by `config get` / `config set`
pub const KEYS: [&str; 6] = [
    "exit_selection",
    "chip_removal",
    "search_debounce_ms",
    "base_url",
    "catalog",
    "quiet",
];

const fn default_debounce_ms() -> u64 {
    150
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ShelfConfig {
    /// What leaving selection mode does to the selection
    #[serde(default)]
    pub exit_selection: ExitSelection,

    /// What removing a tag chip does to the tag
    #[serde(default)]
    pub chip_removal: ChipRemoval,

    /// Search box quiet period in milliseconds
    #[serde(default = "default_debounce_ms")]
    pub search_debounce_ms: u64,

    /// Page URL that share links point at
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Catalog used when none is given on the command line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            exit_selection: ExitSelection::default(),
            chip_removal: ChipRemoval::default(),
            search_debounce_ms: default_debounce_ms(),
            base_url: default_base_url(),
            catalog: None,
            quiet: false,
        }
    }
}

impl ShelfConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::Message("Could not determine config directory".to_string())
        })?;

        Ok(config_dir.join("papershelf").join("config.toml"))
    }

    /// Load configuration from the default location, creating it if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::default().save_to(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from a file, layered with environment overrides
    ///
    /// A missing file yields the defaults plus environment overrides.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be parsed or a value has the wrong type.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(
                File::from(path.to_path_buf())
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;

        let config: Self = settings.try_deserialize()?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Save configuration to the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to a file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the parent directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, config_path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(config_path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Current value of a key as text, `None` for unknown or unset keys
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "exit_selection" => Some(
                match self.exit_selection {
                    ExitSelection::Keep => "keep",
                    ExitSelection::Clear => "clear",
                }
                .to_string(),
            ),
            "chip_removal" => Some(
                match self.chip_removal {
                    ChipRemoval::Clear => "clear",
                    ChipRemoval::Cycle => "cycle",
                }
                .to_string(),
            ),
            "search_debounce_ms" => Some(self.search_debounce_ms.to_string()),
            "base_url" => Some(self.base_url.clone()),
            "catalog" => self.catalog.as_ref().map(|p| p.display().to_string()),
            "quiet" => Some(self.quiet.to_string()),
            _ => None,
        }
    }

    /// Set a key from text
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the key is unknown or the value is invalid for it.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = |expected: &str| {
            ConfigError::Message(format!(
                "Invalid value '{value}' for {key}: expected {expected}"
            ))
        };

        match key {
            "exit_selection" => {
                self.exit_selection = match value.to_lowercase().as_str() {
                    "keep" => ExitSelection::Keep,
                    "clear" => ExitSelection::Clear,
                    _ => return Err(invalid("'keep' or 'clear'")),
                };
            }
            "chip_removal" => {
                self.chip_removal = match value.to_lowercase().as_str() {
                    "clear" => ChipRemoval::Clear,
                    "cycle" => ChipRemoval::Cycle,
                    _ => return Err(invalid("'clear' or 'cycle'")),
                };
            }
            "search_debounce_ms" => {
                self.search_debounce_ms = value
                    .parse()
                    .map_err(|_| invalid("a number of milliseconds"))?;
            }
            "base_url" => {
                url::Url::parse(value).map_err(|_| invalid("an absolute URL"))?;
                self.base_url = value.to_string();
            }
            "catalog" => {
                self.catalog = (!value.is_empty()).then(|| PathBuf::from(value));
            }
            "quiet" => {
                self.quiet = match value.to_lowercase().as_str() {
                    "true" | "yes" | "1" => true,
                    "false" | "no" | "0" => false,
                    _ => return Err(invalid("true or false")),
                };
            }
            _ => {
                return Err(ConfigError::Message(format!(
                    "Unknown config key '{key}'. Valid keys: {}",
                    KEYS.join(", ")
                )));
            }
        }
        Ok(())
    }

    /// Session behaviour derived from this configuration
    #[must_use]
    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            exit_selection: self.exit_selection,
            chip_removal: self.chip_removal,
            search_debounce: Duration::from_millis(self.search_debounce_ms),
            base_url: self.base_url.clone(),
        }
    }
}

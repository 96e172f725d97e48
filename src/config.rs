//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/headergrid/headergrid.toml`
//! 3. Explicit config file (`--config <file>`)
//! 4. Environment variables: `HEADERGRID_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;

/// Unified configuration for headergrid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Text printed in place of a padding cell's missing label
    pub placeholder: String,
    /// Colorize terminal output
    pub color: bool,
    /// Print each cell's span next to its label
    pub show_spans: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            placeholder: "·".into(),
            color: true,
            show_spans: true,
        }
    }
}

/// Raw settings for intermediate parsing (`None` means "not specified, inherit").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub placeholder: Option<String>,
    pub color: Option<bool>,
    pub show_spans: Option<bool>,
}

/// Get the XDG config directory for headergrid.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "headergrid").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("headergrid.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Overlay wins where it specifies a value, otherwise keep self.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            placeholder: overlay
                .placeholder
                .clone()
                .unwrap_or_else(|| self.placeholder.clone()),
            color: overlay.color.unwrap_or(self.color),
            show_spans: overlay.show_spans.unwrap_or(self.show_spans),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `explicit` - Optional config file given on the command line; must exist
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. Global config: `$XDG_CONFIG_HOME/headergrid/headergrid.toml`
    /// 3. Explicit config file
    /// 4. Environment variables: `HEADERGRID_*` prefix
    pub fn load(explicit: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("loading global config: {}", global_path.display());
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        if let Some(path) = explicit {
            if !path.exists() {
                return Err(ApplicationError::Config {
                    message: format!("config file not found: {}", path.display()),
                });
            }
            debug!("loading explicit config: {}", path.display());
            let raw = load_raw_settings(path)?;
            current = current.merge_with(&raw);
        }

        Self::apply_env_overrides(current)
    }

    /// Apply HEADERGRID_* environment variables as explicit overrides.
    ///
    /// An unset variable keeps the current value; a value that does not parse
    /// (e.g. `HEADERGRID_COLOR=maybe`) is a config error, not silently dropped.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        // Use config crate just for env var parsing
        let config = Config::builder()
            .add_source(Environment::with_prefix("HEADERGRID").try_parsing(true))
            .build()
            .map_err(config_err)?;

        if let Some(val) = env_value(config.get_string("placeholder"), "placeholder")? {
            settings.placeholder = val;
        }
        if let Some(val) = env_value(config.get_bool("color"), "color")? {
            settings.color = val;
        }
        if let Some(val) = env_value(config.get_bool("show_spans"), "show_spans")? {
            settings.show_spans = val;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# headergrid configuration
#
# Locations (by precedence, lowest to highest):
#   Global:   ~/.config/headergrid/headergrid.toml
#   Explicit: headergrid --config <file>
#   Env:      HEADERGRID_* environment variables (e.g. HEADERGRID_PLACEHOLDER)

# Text shown for padding cells (cells without a group label)
# placeholder = "·"

# Colorize terminal output
# color = true

# Print each cell's span next to its label, e.g. `Name[2]`
# show_spans = true
"#
        .to_string()
    }
}

/// `None` for an unset variable, an error naming the variable for a bad value.
fn env_value<T>(value: Result<T, ConfigError>, key: &str) -> Result<Option<T>, ApplicationError> {
    match value {
        Ok(val) => Ok(Some(val)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(ApplicationError::Config {
            message: format!("HEADERGRID_{}: {}", key.to_uppercase(), e),
        }),
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/exprtree/exprtree.toml`
//! 3. Explicit config: `--config <FILE>` / `EXPRTREE_CONFIG`
//! 4. Environment variables: `EXPRTREE_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;
use crate::domain::Scenario;

/// Largest accepted number of fractional digits.
pub const MAX_PRECISION: usize = 32;

/// Unified configuration for exprtree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Built-in tree evaluated when none is named (default: "nested")
    pub scenario: String,
    /// Print the tree before the result
    pub show_tree: bool,
    /// Fixed number of fractional digits; shortest form when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precision: Option<usize>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            scenario: Scenario::default().name().to_string(),
            show_tree: false,
            precision: None,
        }
    }
}

/// Raw settings for intermediate parsing (`None` means "not specified, inherit").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct RawSettings {
    pub scenario: Option<String>,
    pub show_tree: Option<bool>,
    pub precision: Option<usize>,
}

/// Get the XDG config directory for exprtree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "exprtree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("exprtree.toml"))
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
    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            scenario: overlay
                .scenario
                .clone()
                .unwrap_or_else(|| self.scenario.clone()),
            show_tree: overlay.show_tree.unwrap_or(self.show_tree),
            precision: overlay.precision.or(self.precision),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file; it must exist
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        Self::load_layers(global_config_path().as_deref(), config_file)
    }

    /// Load settings from explicit layer locations.
    ///
    /// A missing `global` file is skipped, a missing `local` file is an error.
    pub fn load_layers(
        global: Option<&Path>,
        local: Option<&Path>,
    ) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config, only if present
        if let Some(global_path) = global {
            if global_path.exists() {
                debug!("loading global config: {}", global_path.display());
                let raw = load_raw_settings(global_path)?;
                current = current.merge_with(&raw);
            }
        }

        // 3. Explicit config file
        if let Some(local_path) = local {
            if !local_path.exists() {
                return Err(ApplicationError::Config {
                    message: format!("config file not found: {}", local_path.display()),
                });
            }
            debug!("loading config: {}", local_path.display());
            let raw = load_raw_settings(local_path)?;
            current = current.merge_with(&raw);
        }

        // 4. Environment variables (explicit override)
        current = Self::apply_env_overrides(current)?;

        current.validate()?;
        Ok(current)
    }

    /// Apply EXPRTREE_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        // Use config crate just for env var parsing
        let builder = Config::builder().add_source(
            Environment::with_prefix("EXPRTREE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(config_err)?;

        if let Some(val) = env_value(config.get_string("scenario"))? {
            settings.scenario = val;
        }
        if let Some(val) = env_value(config.get_bool("show_tree"))? {
            settings.show_tree = val;
        }
        if let Some(val) = env_value(config.get_int("precision"))? {
            settings.precision = Some(usize::try_from(val).map_err(|_| {
                ApplicationError::Config {
                    message: format!("precision must not be negative: {val}"),
                }
            })?);
        }

        Ok(settings)
    }

    /// Reject values that cannot be used.
    pub fn validate(&self) -> Result<(), ApplicationError> {
        if let Some(precision) = self.precision {
            if precision > MAX_PRECISION {
                return Err(ApplicationError::Config {
                    message: format!("precision must be at most {MAX_PRECISION}, got {precision}"),
                });
            }
        }
        Ok(())
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# exprtree configuration
#
# Locations (by precedence, lowest to highest):
#   Global:   ~/.config/exprtree/exprtree.toml
#   Explicit: --config <FILE> or EXPRTREE_CONFIG
#   Env:      EXPRTREE_* environment variables (e.g. EXPRTREE_SHOW_TREE=true)

# Built-in tree evaluated by default (see `exprtree list`)
# scenario = "nested"

# Print the tree before the result
# show_tree = false

# Fixed number of fractional digits (shortest form when unset)
# precision = 2
"#
        .to_string()
    }
}

/// Absent keys are skipped; present but unparsable values are errors.
fn env_value<T>(result: Result<T, ConfigError>) -> Result<Option<T>, ApplicationError> {
    match result {
        Ok(val) => Ok(Some(val)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(config_err(e)),
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

//! Configuration for the Pykelet CLI.
//!
//! Provides the [`PykeletConfig`] struct that loads from TOML files,
//! environment variables, and defaults using the `confyg` crate.
//!
//! # Loading Priority
//!
//! 1. Explicit `--config <path>` flag
//! 2. `PYKELET_CONFIG` environment variable
//! 3. XDG default: `~/.config/pykelet/config.toml`
//! 4. Built-in defaults

use confyg::{Confygery, env};
use pykelet_content::DEFAULT_CONTAINER_CLASS;
use pykelet_core::{ConfigProvider, Error, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::PathBuf;

// ============================================================================
// Configuration structs
// ============================================================================

/// Main configuration for the Pykelet CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PykeletConfig {
    /// Project name, used for env var prefixes and default paths.
    pub project_name: String,

    /// Where metadata blocks are searched for.
    pub scope: ScopeConfig,

    /// Display-target population settings.
    pub populate: PopulateConfig,
}

/// Search scope configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScopeConfig {
    /// Class of a wrapping container to search instead of the document
    /// root when present. Empty disables the preference.
    pub container_class: String,
}

/// Population configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PopulateConfig {
    /// Suppress automatic population (forced population still applies).
    #[serde(deserialize_with = "deserialize_flag")]
    pub disabled: bool,
}

// ============================================================================
// Default implementations
// ============================================================================

impl Default for PykeletConfig {
    fn default() -> Self {
        Self {
            project_name: "pykelet".to_string(),
            scope: ScopeConfig::default(),
            populate: PopulateConfig::default(),
        }
    }
}

impl Default for ScopeConfig {
    fn default() -> Self {
        Self {
            container_class: DEFAULT_CONTAINER_CLASS.to_string(),
        }
    }
}

// ============================================================================
// Config loading
// ============================================================================

impl PykeletConfig {
    /// Load configuration from file, environment, and defaults.
    ///
    /// Loading priority:
    /// 1. Explicit `config_path` (from `--config` flag)
    /// 2. `PYKELET_CONFIG` env var
    /// 3. XDG default: `~/.config/pykelet/config.toml`
    /// 4. Built-in defaults
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let mut builder =
            Confygery::new().map_err(|e| Error::config(format!("config init: {e}")))?;

        if let Some(path) = Self::resolve_config_path(config_path) {
            if path.exists() {
                builder
                    .add_file(&path.to_string_lossy())
                    .map_err(|e| Error::config(format!("config file: {e}")))?;
            }
        }

        let mut env_opts = env::Options::with_top_level("PYKELET");
        env_opts.add_section("scope");
        env_opts.add_section("populate");
        builder
            .add_env(env_opts)
            .map_err(|e| Error::config(format!("config env: {e}")))?;

        let config: Self = builder
            .build()
            .map_err(|e| Error::config(format!("config build: {e}")))?;

        Ok(config)
    }

    /// Resolve the config file path from explicit flag, env var, or XDG default.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(PathBuf::from(path));
        }

        if let Ok(path) = std::env::var("PYKELET_CONFIG") {
            return Some(PathBuf::from(path));
        }

        Self::default_config_path()
    }

    /// Return the XDG default config path.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("pykelet").join("config.toml"))
    }

    /// Serialize this config to a pretty-printed TOML string.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Flatten this config into environment variable pairs with `PYKELET_` prefix.
    pub fn to_env_vars(&self) -> Result<Vec<(String, String)>> {
        let value: toml::Value =
            toml::Value::try_from(self).map_err(|e| Error::config(e.to_string()))?;
        let mut vars = Vec::new();
        flatten_toml_value(&value, "PYKELET", &mut vars);
        Ok(vars)
    }
}

// ============================================================================
// ConfigProvider implementation
// ============================================================================

impl ConfigProvider for PykeletConfig {
    fn project_name(&self) -> &str {
        &self.project_name
    }

    fn container_class(&self) -> Option<&str> {
        let class = self.scope.container_class.trim();
        if class.is_empty() { None } else { Some(class) }
    }

    fn population_disabled(&self) -> bool {
        self.populate.disabled
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Accept a boolean or its string spelling; environment overrides arrive
/// as strings.
fn deserialize_flag<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
    }

    match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => Ok(b),
        Flag::Text(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" | "" => Ok(false),
            other => Err(serde::de::Error::custom(format!(
                "invalid boolean '{other}'"
            ))),
        },
    }
}

/// Recursively flatten a TOML value into `KEY=value` pairs.
fn flatten_toml_value(value: &toml::Value, prefix: &str, out: &mut Vec<(String, String)>) {
    match value {
        toml::Value::Table(table) => {
            for (key, val) in table {
                let env_key = format!("{}_{}", prefix, key.to_uppercase());
                flatten_toml_value(val, &env_key, out);
            }
        }
        toml::Value::Array(arr) => {
            if let Ok(json) = serde_json::to_string(arr) {
                out.push((prefix.to_string(), json));
            }
        }
        toml::Value::String(s) => out.push((prefix.to_string(), s.clone())),
        toml::Value::Integer(i) => out.push((prefix.to_string(), i.to_string())),
        toml::Value::Float(f) => out.push((prefix.to_string(), f.to_string())),
        toml::Value::Boolean(b) => out.push((prefix.to_string(), b.to_string())),
        toml::Value::Datetime(dt) => out.push((prefix.to_string(), dt.to_string())),
    }
}

// ============================================================================
// Tests
// ============================================================================

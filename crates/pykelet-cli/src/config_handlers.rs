//! Handler functions for config CLI commands.
//!
//! Implements `pykelet config {path,get,set,init,export}` subcommands
//! and TOML dotted-key helper functions.

use crate::cli::ConfigAction;
use crate::config::PykeletConfig;
use pykelet_core::{Error, Result};
use std::path::PathBuf;

// ============================================================================
// Command dispatch
// ============================================================================

/// Handle a config subcommand.
///
/// Receives the raw `--config` path (not a loaded config) because some
/// commands (path, init) work before a config file exists.
pub fn handle_config_command(config_path: Option<&str>, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Path => cmd_config_path(config_path),
        ConfigAction::Get { key } => {
            println!("{}", cmd_config_get(config_path, &key)?);
            Ok(())
        }
        ConfigAction::Set { key, value } => cmd_config_set(config_path, &key, &value),
        ConfigAction::Init { file, force } => cmd_config_init(file.as_deref(), force),
        ConfigAction::Export => {
            let config = PykeletConfig::load(config_path)?;
            for (key, value) in config.to_env_vars()? {
                println!("{key}={value}");
            }
            Ok(())
        }
    }
}

// ============================================================================
// Command handlers
// ============================================================================

/// Show the resolved config file path.
fn cmd_config_path(config_path: Option<&str>) -> Result<()> {
    match PykeletConfig::resolve_config_path(config_path) {
        Some(path) => {
            println!("{}", path.display());
            if !path.exists() {
                eprintln!("(file does not exist; run `pykelet config init` to create it)");
            }
            Ok(())
        }
        None => Err(Error::config(
            "Could not determine config directory for this platform",
        )),
    }
}

/// Get a configuration value by dotted key, formatted for display.
fn cmd_config_get(config_path: Option<&str>, key: &str) -> Result<String> {
    let config = PykeletConfig::load(config_path)?;
    let value = toml::Value::try_from(&config).map_err(|e| Error::config(e.to_string()))?;
    get_nested_value(&value, key)
        .map(format_toml_value)
        .ok_or_else(|| Error::config(format!("Key '{key}' not found in configuration")))
}

/// Set a configuration value by dotted key in the config file.
fn cmd_config_set(config_path: Option<&str>, key: &str, value: &str) -> Result<()> {
    let path = PykeletConfig::resolve_config_path(config_path)
        .ok_or_else(|| Error::config("Could not determine config directory"))?;

    if !path.exists() {
        return Err(Error::config(format!(
            "Config file does not exist at {}. Run `pykelet config init` first.",
            path.display()
        )));
    }

    let content = std::fs::read_to_string(&path).map_err(|e| Error::io_with_path(e, &path))?;
    let mut doc: toml::Value = toml::from_str(&content)
        .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))?;

    set_nested_value(&mut doc, key, parse_value(value))?;

    let toml_str = toml::to_string_pretty(&doc).map_err(|e| Error::config(e.to_string()))?;
    std::fs::write(&path, toml_str).map_err(|e| Error::io_with_path(e, &path))?;

    println!("Set {key} = {value} in {}", path.display());
    Ok(())
}

/// Create a default configuration file.
fn cmd_config_init(file: Option<&str>, force: bool) -> Result<()> {
    let path = match file {
        Some(p) => PathBuf::from(p),
        None => PykeletConfig::default_config_path()
            .ok_or_else(|| Error::config("Could not determine config directory"))?,
    };

    if path.exists() && !force {
        return Err(Error::config(format!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        )));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| Error::io_with_path(e, parent))?;
    }

    let toml_str = PykeletConfig::default().to_toml_string()?;
    std::fs::write(&path, &toml_str).map_err(|e| Error::io_with_path(e, &path))?;

    println!("Config file created at {}", path.display());
    Ok(())
}

// ============================================================================
// TOML dotted-key helpers
// ============================================================================

/// Navigate a dotted key path in a TOML value tree.
fn get_nested_value<'a>(value: &'a toml::Value, key: &str) -> Option<&'a toml::Value> {
    let mut current = value;
    for part in key.split('.') {
        current = current.as_table()?.get(part)?;
    }
    Some(current)
}

/// Set a value at a dotted key path, creating intermediate tables as needed.
fn set_nested_value(root: &mut toml::Value, key: &str, value: toml::Value) -> Result<()> {
    let (parents, last) = key.rsplit_once('.').unwrap_or(("", key));
    if last.is_empty() {
        return Err(Error::config("Empty key path"));
    }

    let mut current = root;
    for part in parents.split('.').filter(|p| !p.is_empty()) {
        let table = current
            .as_table_mut()
            .ok_or_else(|| Error::config("Cannot navigate into a non-table value"))?;
        current = table
            .entry(part.to_string())
            .or_insert(toml::Value::Table(toml::map::Map::new()));
    }

    let table = current
        .as_table_mut()
        .ok_or_else(|| Error::config("Cannot set key on a non-table value"))?;
    table.insert(last.to_string(), value);
    Ok(())
}

/// Parse a string value into a TOML value, auto-detecting the type.
///
/// Priority: bool → integer → string.
fn parse_value(s: &str) -> toml::Value {
    match s {
        "true" => toml::Value::Boolean(true),
        "false" => toml::Value::Boolean(false),
        _ => s
            .parse::<i64>()
            .map(toml::Value::Integer)
            .unwrap_or_else(|_| toml::Value::String(s.to_string())),
    }
}

/// Format a TOML value for display on stdout.
fn format_toml_value(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        toml::Value::Integer(i) => i.to_string(),
        toml::Value::Float(f) => f.to_string(),
        toml::Value::Boolean(b) => b.to_string(),
        toml::Value::Datetime(dt) => dt.to_string(),
        toml::Value::Array(_) | toml::Value::Table(_) => {
            toml::to_string_pretty(value).unwrap_or_else(|_| format!("{value:?}"))
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::env_lock;

    fn write_default_config(dir: &tempfile::TempDir) -> PathBuf {
        let path = dir.path().join("config.toml");
        let config = PykeletConfig::default();
        std::fs::write(&path, config.to_toml_string().unwrap()).unwrap();
        path
    }

    // ------------------------------------------------------------------------
    // cmd_config_path tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_cmd_config_path_explicit() {
        assert!(cmd_config_path(Some("/explicit/config.toml")).is_ok());
    }

    // ------------------------------------------------------------------------
    // cmd_config_get tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_cmd_config_get_simple_key() {
        let _env = env_lock();
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_default_config(&dir);
        let value = cmd_config_get(Some(path.to_str().unwrap()), "project_name").unwrap();
        assert_eq!(value, "pykelet");
    }

    #[test]
    fn test_cmd_config_get_nested_key() {
        let _env = env_lock();
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_default_config(&dir);
        let value = cmd_config_get(Some(path.to_str().unwrap()), "populate.disabled").unwrap();
        assert_eq!(value, "false");
    }

    #[test]
    fn test_cmd_config_get_missing_key() {
        let _env = env_lock();
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_default_config(&dir);
        let result = cmd_config_get(Some(path.to_str().unwrap()), "nonexistent.key");
        assert!(result.unwrap_err().to_string().contains("not found"));
    }

    // ------------------------------------------------------------------------
    // cmd_config_set tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_cmd_config_set_nested_key() {
        let _env = env_lock();
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_default_config(&dir);

        cmd_config_set(Some(path.to_str().unwrap()), "populate.disabled", "true").unwrap();

        let config = PykeletConfig::load(Some(path.to_str().unwrap())).unwrap();
        assert!(config.populate.disabled);
    }

    #[test]
    fn test_cmd_config_set_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("absent.toml");
        let result = cmd_config_set(Some(path.to_str().unwrap()), "project_name", "x");
        assert!(result.is_err());
    }

    // ------------------------------------------------------------------------
    // cmd_config_init tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_cmd_config_init_creates_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("sub").join("config.toml");

        cmd_config_init(Some(path.to_str().unwrap()), false).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("[populate]"));
    }

    #[test]
    fn test_cmd_config_init_refuses_overwrite() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_default_config(&dir);

        assert!(cmd_config_init(Some(path.to_str().unwrap()), false).is_err());
        assert!(cmd_config_init(Some(path.to_str().unwrap()), true).is_ok());
    }

    // ------------------------------------------------------------------------
    // Helper tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_set_nested_value_creates_tables() {
        let mut root = toml::Value::Table(toml::map::Map::new());
        set_nested_value(&mut root, "a.b.c", toml::Value::Integer(1)).unwrap();
        assert_eq!(
            get_nested_value(&root, "a.b.c"),
            Some(&toml::Value::Integer(1))
        );
    }

    #[test]
    fn test_set_nested_value_top_level() {
        let mut root = toml::Value::Table(toml::map::Map::new());
        set_nested_value(&mut root, "name", toml::Value::String("x".into())).unwrap();
        assert_eq!(format_toml_value(get_nested_value(&root, "name").unwrap()), "x");
    }

    #[test]
    fn test_set_nested_value_through_scalar_fails() {
        let mut root = toml::Value::Table(toml::map::Map::new());
        set_nested_value(&mut root, "a", toml::Value::Integer(1)).unwrap();
        assert!(set_nested_value(&mut root, "a.b", toml::Value::Integer(2)).is_err());
    }

    #[test]
    fn test_parse_value_types() {
        assert_eq!(parse_value("true"), toml::Value::Boolean(true));
        assert_eq!(parse_value("42"), toml::Value::Integer(42));
        assert_eq!(
            parse_value("markdown-body"),
            toml::Value::String("markdown-body".into())
        );
    }
}

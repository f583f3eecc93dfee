use crate::error::{MarketError, Result};
use crate::types::config::MarketConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "market-report.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".market-report/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/market-report/config.toml";

/// Loads the merged configuration for `root`. An explicit `config_file`
/// replaces the project file and must exist.
pub fn load_config(root: &Path, config_file: Option<&Path>) -> Result<MarketConfig> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, config_file, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    config_file: Option<&Path>,
    global_path: Option<&Path>,
) -> Result<MarketConfig> {
    let project_path = match config_file {
        Some(path) => {
            if !path.exists() {
                return Err(MarketError::ConfigParse(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            path.to_path_buf()
        }
        None => root.join(DEFAULT_CONFIG_FILE),
    };

    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    merge_file_if_exists(&mut merged, &project_path)?;
    merge_file_if_exists(&mut merged, &root.join(DEFAULT_LOCAL_FILE))?;

    let cfg: MarketConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| MarketError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(cfg)
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    debug!(path = %path.display(), "merging config layer");
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| MarketError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}

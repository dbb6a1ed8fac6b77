//! Merchant configuration file handling.
//!
//! The file is TOML holding a single [`MerchantConfig`]. Flags given on the
//! command line override what the file says.

use anyhow::{Context, Result};
use pixkit_lib::MerchantConfig;
use std::path::{Path, PathBuf};

/// Environment variable naming the configuration file.
pub const CONFIG_ENV: &str = "PIXKIT_CONFIG";

/// Default location: `<config dir>/pixkit/config.toml`.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("pixkit")
        .join("config.toml")
}

/// Pick the explicit path if given, else the default one.
pub fn resolve_config_path(explicit: Option<&Path>) -> PathBuf {
    explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(default_config_path)
}

/// Load the configuration, `None` if the file does not exist.
pub fn load(path: &Path) -> Result<Option<MerchantConfig>> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no merchant config file");
        return Ok(None);
    }
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let config: MerchantConfig =
        toml::from_str(&raw).with_context(|| format!("invalid config in {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded merchant config");
    Ok(Some(config))
}

/// Write the configuration, creating parent directories.
pub fn save(path: &Path, config: &MerchantConfig) -> Result<()> {
    config.validate()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let raw = toml::to_string_pretty(config)?;
    std::fs::write(path, raw).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

/// Overrides given on the command line.
#[derive(Debug, Default, Clone)]
pub struct MerchantOverrides {
    pub key: Option<String>,
    pub name: Option<String>,
    pub city: Option<String>,
}

/// Combine file values with command-line overrides.
///
/// Fails when a field is in neither place.
pub fn merge(file: Option<MerchantConfig>, overrides: MerchantOverrides) -> Result<MerchantConfig> {
    let (file_key, file_name, file_city, default_txid) = match file {
        Some(config) => (
            Some(config.key),
            Some(config.name),
            Some(config.city),
            config.default_txid,
        ),
        None => (None, None, None, None),
    };

    let key = overrides.key.or(file_key).ok_or_else(|| missing("key"))?;
    let name = overrides.name.or(file_name).ok_or_else(|| missing("name"))?;
    let city = overrides.city.or(file_city).ok_or_else(|| missing("city"))?;

    let mut config = MerchantConfig::new(key, name, city);
    config.default_txid = default_txid;
    Ok(config)
}

fn missing(field: &str) -> anyhow::Error {
    anyhow::anyhow!(
        "merchant {} not set: pass --{} or run 'pixkit config init'",
        field,
        field
    )
}

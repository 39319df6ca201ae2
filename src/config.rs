use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Optional `snips.toml` settings.
///
/// The database name is fixed per invocation: it comes from this file or the
/// default, never from command-line flags.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SnipsConfig {
    pub database: Option<String>,
    pub log: Option<String>,
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("snips.toml")
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<SnipsConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: SnipsConfig = toml::from_str(&contents)?;
    Ok(Some(config))
}

/// Resolve the database path: config value or `snippets.db`
pub fn database_path(config: Option<&SnipsConfig>) -> PathBuf {
    config
        .and_then(|c| c.database.as_deref())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("snippets.db"))
}

/// Resolve the log-file path: config value or `snippets.log`
pub fn log_path(config: Option<&SnipsConfig>) -> PathBuf {
    config
        .and_then(|c| c.log.as_deref())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("snippets.log"))
}

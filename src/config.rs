//! Configuration primitives for the planner.
//!
//! Stored in a machine-readable TOML file located at
//! `<workspace root>/config/config.toml`. The config tracks per-install
//! behavior knobs: whether the schedule mirror is refreshed automatically
//! after each mutation, and how exports are named and formatted.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::storage::workspace_root;

/// Root configuration persisted per installation.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Schedule mirroring behavior.
    #[serde(default)]
    pub schedule: ScheduleSettings,
    /// Export naming and formatting.
    #[serde(default)]
    pub export: ExportSettings,
}

/// Controls the storage mirror kept alongside the in-memory schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleSettings {
    /// Whether every mutation refreshes the stored mirror. Write failures
    /// are logged and never roll back the in-memory state.
    #[serde(default = "default_autosave")]
    pub autosave: bool,
}

impl Default for ScheduleSettings {
    fn default() -> Self {
        Self {
            autosave: default_autosave(),
        }
    }
}

const fn default_autosave() -> bool {
    true
}

/// Export file naming and formatting preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportSettings {
    /// Prefix of the date-stamped export file name.
    #[serde(default = "default_filename_prefix")]
    pub filename_prefix: String,
    /// Pretty-print exported JSON for human readability.
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            filename_prefix: default_filename_prefix(),
            pretty: default_pretty(),
        }
    }
}

fn default_filename_prefix() -> String {
    "catapult_schedule".to_string()
}

const fn default_pretty() -> bool {
    true
}

/// Standard relative path to the config file (resolved at runtime).
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Returns the config directory under the workspace root.
pub fn config_dir() -> Result<PathBuf> {
    let root = workspace_root()?;
    Ok(root.join("config"))
}

/// Path to the config file.
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Loads the configuration from disk or returns defaults.
pub fn load_or_default() -> Result<AppConfig> {
    let path = config_file_path()?;
    if path.exists() {
        let data = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let cfg: AppConfig = toml::from_str(&data)
            .with_context(|| format!("Failed to parse config file {:?}", path))?;
        Ok(cfg)
    } else {
        Ok(AppConfig::default())
    }
}

/// Persists the configuration to disk.
pub fn save(config: &AppConfig) -> Result<()> {
    let dir = config_dir()?;
    fs::create_dir_all(&dir)?;
    let path = config_file_path()?;
    let data = toml::to_string_pretty(config)?;
    fs::write(&path, data)?;
    Ok(())
}

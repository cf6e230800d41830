//! Durable-storage adapter: workspace layout and the raw schedule mirror.
//!
//! The in-memory schedule is always the source of truth; the file written
//! here is a derived mirror, refreshed after every mutation and re-read on
//! the next startup.

use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use directories::BaseDirs;

/// Environment variable overriding the workspace location (used by tests).
pub const HOME_ENV_VAR: &str = "CATAPULT_HOME";

/// Directory name under the OS data dir when no override is set.
pub const WORKSPACE_DIR_NAME: &str = "Catapult";

/// File name of the schedule mirror inside the workspace root.
pub const SCHEDULE_FILE_NAME: &str = "schedule.json";

/// Returns the root directory where the planner stores data.
///
/// Order of precedence:
/// 1. `CATAPULT_HOME` environment variable.
/// 2. OS-specific data directory via `directories::BaseDirs`.
pub fn workspace_root() -> Result<PathBuf> {
    if let Ok(path) = env::var(HOME_ENV_VAR) {
        return Ok(PathBuf::from(path));
    }
    let base_dirs = BaseDirs::new().context("Unable to determine OS data directory")?;
    Ok(base_dirs.data_dir().join(WORKSPACE_DIR_NAME))
}

/// Ensures the workspace structure exists (root and exports/ directory).
pub fn ensure_workspace_structure() -> Result<WorkspacePaths> {
    let root = workspace_root()?;
    let exports_dir = root.join("exports");
    fs::create_dir_all(&exports_dir)?;
    Ok(WorkspacePaths { root, exports_dir })
}

/// Convenience struct exposing important workspace paths.
#[derive(Debug, Clone)]
pub struct WorkspacePaths {
    pub root: PathBuf,
    pub exports_dir: PathBuf,
}

impl WorkspacePaths {
    pub fn schedule_file(&self) -> PathBuf {
        self.root.join(SCHEDULE_FILE_NAME)
    }

    pub fn export_file(&self, file_name: &str) -> PathBuf {
        self.exports_dir.join(file_name)
    }
}

/// Reads the stored schedule mirror, or `None` when nothing has been
/// saved yet.
pub fn load_raw_schedule(paths: &WorkspacePaths) -> Result<Option<String>> {
    let path = paths.schedule_file();
    if !path.exists() {
        return Ok(None);
    }
    let data = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read schedule file {:?}", path))?;
    Ok(Some(data))
}

/// Writes the schedule mirror.
pub fn save_raw_schedule(paths: &WorkspacePaths, raw: &str) -> Result<()> {
    let path = paths.schedule_file();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, raw).with_context(|| format!("Failed to write schedule file {:?}", path))?;
    Ok(())
}

/// Date-stamped export file name, e.g. `catapult_schedule_2026-08-05.json`.
pub fn export_file_name(prefix: &str, date: NaiveDate) -> String {
    format!("{}_{}.json", prefix, date.format("%Y-%m-%d"))
}

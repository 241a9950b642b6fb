use dirs::home_dir;
use std::{
    env,
    path::{Path, PathBuf},
};

const DEFAULT_DIR_NAME: &str = ".expense_core";
const TRACKER_DIR: &str = "trackers";
const CONFIG_FILE: &str = "config.json";

/// Returns the application-specific data directory, defaulting to `~/.expense_core`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("EXPENSE_CORE_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Absolute path to the managed trackers directory.
pub fn trackers_dir() -> PathBuf {
    trackers_dir_in(&app_data_dir())
}

/// Trackers directory under an explicit base (used by tests and custom setups).
pub fn trackers_dir_in(base: &Path) -> PathBuf {
    base.join(TRACKER_DIR)
}

/// Path to the configuration file under an explicit base.
pub fn config_file_in(base: &Path) -> PathBuf {
    base.join(CONFIG_FILE)
}

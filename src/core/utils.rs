use dirs::home_dir;
use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::core::errors::Result;

const DEFAULT_DIR_NAME: &str = ".dreampilot";
const STATE_FILE: &str = "state.json";
const BACKUP_DIR: &str = "backups";

/// Returns the application data directory, defaulting to `~/.dreampilot`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("DREAMPILOT_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Path to the persisted application snapshot inside `base`.
pub fn state_file_in(base: &Path) -> PathBuf {
    base.join(STATE_FILE)
}

/// Directory holding timestamped snapshot backups inside `base`.
pub fn backups_dir_in(base: &Path) -> PathBuf {
    base.join(BACKUP_DIR)
}

pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

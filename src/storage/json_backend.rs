use chrono::{DateTime, NaiveDateTime, Utc};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};
use tracing::warn;

use crate::{
    core::utils::{app_data_dir, backups_dir_in, ensure_dir, state_file_in},
    domain::AppState,
};

use super::{Result, StateStore};

const BACKUP_EXTENSION: &str = "json";
const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";
const TMP_SUFFIX: &str = "tmp";
const DEFAULT_RETENTION: usize = 5;

/// File-backed snapshot store: one pretty-printed JSON state file, with a
/// timestamped backup of each replaced version kept under a retention cap.
#[derive(Clone)]
pub struct JsonStore {
    root: PathBuf,
    state_file: PathBuf,
    backups_dir: PathBuf,
    retention: usize,
}

impl JsonStore {
    pub fn new(root: Option<PathBuf>, retention: Option<usize>) -> Result<Self> {
        let root = root.unwrap_or_else(app_data_dir);
        ensure_dir(&root)?;
        let backups_dir = backups_dir_in(&root);
        ensure_dir(&backups_dir)?;
        Ok(Self {
            state_file: state_file_in(&root),
            backups_dir,
            root,
            retention: retention.unwrap_or(DEFAULT_RETENTION).max(1),
        })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None, None)
    }

    pub fn state_path(&self) -> &Path {
        &self.state_file
    }

    pub fn base_dir(&self) -> &Path {
        &self.root
    }

    /// Backup file names, newest first.
    pub fn list_backups(&self) -> Result<Vec<String>> {
        if !self.backups_dir.exists() {
            return Ok(Vec::new());
        }
        let mut entries = Vec::new();
        for entry in fs::read_dir(&self.backups_dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(BACKUP_EXTENSION) {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|name| name.to_str()) {
                entries.push(name.to_string());
            }
        }
        entries.sort_by(|a, b| parse_backup_timestamp(b).cmp(&parse_backup_timestamp(a)));
        Ok(entries)
    }

    fn backup_existing_file(&self) -> Result<()> {
        if !self.state_file.exists() {
            return Ok(());
        }
        ensure_dir(&self.backups_dir)?;
        let timestamp = Utc::now().format(BACKUP_TIMESTAMP_FORMAT).to_string();
        let backup_path = self
            .backups_dir
            .join(format!("state_{}.{}", timestamp, BACKUP_EXTENSION));
        fs::copy(&self.state_file, &backup_path)?;
        self.prune_backups()?;
        Ok(())
    }

    fn prune_backups(&self) -> Result<()> {
        let backups = self.list_backups()?;
        if backups.len() <= self.retention {
            return Ok(());
        }
        for name in backups.iter().skip(self.retention) {
            let _ = fs::remove_file(self.backups_dir.join(name));
        }
        Ok(())
    }
}

impl StateStore for JsonStore {
    fn load(&self) -> AppState {
        if !self.state_file.exists() {
            return AppState::default();
        }
        let data = match fs::read_to_string(&self.state_file) {
            Ok(data) => data,
            Err(err) => {
                warn!("failed to read state file, starting from defaults: {err}");
                return AppState::default();
            }
        };
        match serde_json::from_str(&data) {
            Ok(state) => state,
            Err(err) => {
                warn!("state file is unreadable, starting from defaults: {err}");
                AppState::default()
            }
        }
    }

    fn save(&self, state: &AppState) -> Result<()> {
        self.backup_existing_file()?;
        let json = serde_json::to_string_pretty(state)?;
        let tmp = tmp_path(&self.state_file);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.state_file)?;
        Ok(())
    }

    fn reset(&self) -> Result<()> {
        if self.state_file.exists() {
            fs::remove_file(&self.state_file)?;
        }
        Ok(())
    }
}

fn parse_backup_timestamp(name: &str) -> Option<DateTime<Utc>> {
    let raw = name
        .strip_prefix("state_")?
        .strip_suffix(&format!(".{}", BACKUP_EXTENSION))?;
    NaiveDateTime::parse_from_str(raw, BACKUP_TIMESTAMP_FORMAT)
        .ok()
        .map(|naive| DateTime::from_naive_utc_and_offset(naive, Utc))
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

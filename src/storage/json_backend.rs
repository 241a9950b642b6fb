use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::errors::TrackerError;
use crate::tracker::Tracker;
use crate::utils::{ensure_dir, paths};

use super::{Result, StorageBackend};

const TRACKER_EXTENSION: &str = "json";
const TMP_SUFFIX: &str = "tmp";

/// Stores trackers as pretty-printed JSON files, one per tracker, under
/// the application data directory.
///
/// Trackers are addressed by the slug of their name: display names that
/// normalise to the same slug ("My Budget", "my budget") refer to the same
/// file, and [`StorageBackend::list_trackers`] reports slugs rather than
/// the names passed to `save`.
pub struct JsonStorage {
    trackers_dir: PathBuf,
}

impl JsonStorage {
    /// Opens (creating if needed) the storage rooted at `base_dir`, or the
    /// default app data directory when `None`.
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self> {
        let base = base_dir.unwrap_or_else(paths::app_data_dir);
        ensure_dir(&base)?;
        let trackers_dir = paths::trackers_dir_in(&base);
        ensure_dir(&trackers_dir)?;
        Ok(Self { trackers_dir })
    }

    /// Canonical file path for a tracker name.
    pub fn tracker_path(&self, name: &str) -> PathBuf {
        self.trackers_dir
            .join(format!("{}.{}", slugify(name), TRACKER_EXTENSION))
    }
}

impl StorageBackend for JsonStorage {
    fn save(&self, tracker: &Tracker, name: &str) -> Result<()> {
        let path = self.tracker_path(name);
        save_tracker_to_path(tracker, &path)?;
        tracing::info!(tracker = %name, path = %path.display(), "tracker saved");
        Ok(())
    }

    fn load(&self, name: &str) -> Result<Tracker> {
        let path = self.tracker_path(name);
        if !path.exists() {
            return Err(TrackerError::Storage(format!(
                "tracker `{}` not found",
                name
            )));
        }
        load_tracker_from_path(&path)
    }

    fn list_trackers(&self) -> Result<Vec<String>> {
        if !self.trackers_dir.exists() {
            return Ok(Vec::new());
        }
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.trackers_dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(TRACKER_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }
}

/// Writes the tracker to disk atomically by staging to a temporary file.
pub fn save_tracker_to_path(tracker: &Tracker, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let json = serde_json::to_string_pretty(tracker)?;
    let tmp = tmp_path(path);
    write_file(&tmp, &json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

/// Loads a tracker snapshot from disk, returning structured errors on failure.
pub fn load_tracker_from_path(path: &Path) -> Result<Tracker> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

fn write_file(path: &Path, data: &str) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
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

fn slugify(name: &str) -> String {
    let mut slug = String::new();
    let mut last_dash = false;
    for ch in name.trim().chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
            last_dash = false;
        } else if !slug.is_empty() && !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }
    let trimmed = slug.trim_matches('-');
    if trimmed.is_empty() {
        "tracker".to_string()
    } else {
        trimmed.to_string()
    }
}

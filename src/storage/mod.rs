pub mod json_backend;

use std::path::Path;

use crate::{errors::TrackerError, tracker::Tracker};

pub type Result<T> = std::result::Result<T, TrackerError>;

/// Abstraction over persistence backends capable of storing trackers.
pub trait StorageBackend: Send + Sync {
    fn save(&self, tracker: &Tracker, name: &str) -> Result<()>;
    fn load(&self, name: &str) -> Result<Tracker>;
    fn list_trackers(&self) -> Result<Vec<String>>;

    /// Optional helpers for ad-hoc file operations. Default implementations
    /// forward to the JSON codec when not overridden.
    fn save_to_path(&self, tracker: &Tracker, path: &Path) -> Result<()> {
        json_backend::save_tracker_to_path(tracker, path)
    }

    fn load_from_path(&self, path: &Path) -> Result<Tracker> {
        json_backend::load_tracker_from_path(path)
    }
}

pub use json_backend::JsonStorage;

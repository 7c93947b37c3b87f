use crate::libs::data_storage::DataStorage;
use crate::libs::task::Task;
use crate::msg_debug;
use anyhow::Result;
use std::fs::{self, File};
use std::path::PathBuf;

pub const TASKS_FILE_NAME: &str = "tasks.json";

/// Key-value persistence for the task collection.
///
/// One fixed key (the `tasks.json` file); the value is the full
/// collection serialized as JSON. Every save is a full overwrite.
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new() -> Result<Self> {
        Ok(Self::with_path(DataStorage::new().get_path(TASKS_FILE_NAME)?))
    }

    /// Opens a store at an explicit path, bypassing the platform data
    /// directory. Used by the test suite.
    pub fn with_path(path: PathBuf) -> Self {
        JsonStore { path }
    }

    /// Loads the persisted collection.
    ///
    /// An absent file, an unreadable file, and malformed content all load
    /// as an empty collection; none of them is a fatal error.
    pub fn load(&self) -> Vec<Task> {
        if !self.path.exists() {
            return Vec::new();
        }

        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) => {
                msg_debug!(format!("Failed to read {}: {}", self.path.display(), e));
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(tasks) => tasks,
            Err(e) => {
                msg_debug!(format!("Malformed task data, starting empty: {}", e));
                Vec::new()
            }
        }
    }

    /// Overwrites the stored collection with the given one.
    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        let file = File::create(&self.path)?;
        serde_json::to_writer_pretty(&file, tasks)?;
        Ok(())
    }
}

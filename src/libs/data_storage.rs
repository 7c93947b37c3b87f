//! Platform-aware resolution of the application data directory.
//!
//! Taskflow keeps its files (task collection, configuration) in the
//! conventional per-user application data location:
//!
//! - **Windows**: `%LOCALAPPDATA%\taskflow`
//! - **macOS**: `~/Library/Application Support/taskflow`
//! - **Linux**: `~/.local/share/taskflow`
//!
//! The `TASKFLOW_DATA_DIR` environment variable overrides the whole
//! resolution, which is how portable setups and the test suite point the
//! application at an arbitrary directory.

use anyhow::Result;
use std::env::consts::OS;
use std::env::var;
use std::fs;
use std::path::{Path, PathBuf};

pub const APP_NAME: &str = "taskflow";

pub struct DataStorage {
    base_path: PathBuf,
}

impl DataStorage {
    pub fn new() -> Self {
        if let Ok(dir) = var("TASKFLOW_DATA_DIR") {
            return Self { base_path: PathBuf::from(dir) };
        }

        let platform_base = match OS {
            "windows" => var("LOCALAPPDATA").unwrap_or_else(|_| ".".into()),
            "macos" => var("HOME").unwrap_or_else(|_| ".".into()) + "/Library/Application Support",
            _ => var("HOME").unwrap_or_else(|_| ".".into()) + "/.local/share",
        };

        Self {
            base_path: Path::new(&platform_base).join(APP_NAME),
        }
    }

    /// Returns the full path for a file inside the data directory,
    /// creating the directory on first use.
    pub fn get_path(&self, file_name: &str) -> Result<PathBuf> {
        if !self.base_path.exists() {
            fs::create_dir_all(&self.base_path)?;
        }
        Ok(self.base_path.join(file_name))
    }
}

impl Default for DataStorage {
    fn default() -> Self {
        Self::new()
    }
}

//! Configuration management for the taskflow application.
//!
//! Settings are stored as JSON in the platform application-data
//! directory next to the task collection itself. Every module is
//! optional: a missing configuration file, or a file without a given
//! section, falls back to defaults so the application works with zero
//! setup. The interactive `init` wizard fills in the sections the user
//! selects.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskflow::libs::config::Config;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = Config::read()?;
//! println!("due dates rendered as {}", config.date_format());
//! # Ok(())
//! # }
//! ```

use super::data_storage::DataStorage;
use super::due::DEFAULT_DATE_FORMAT;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name inside the application data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Display preferences for the table views.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct DisplayConfig {
    /// strftime pattern used when rendering due dates.
    pub date_format: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

/// Root configuration object.
///
/// Sections absent from the file stay `None` and are omitted on save,
/// keeping the JSON clean and hand-editable.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<DisplayConfig>,
}

impl Config {
    /// Loads the configuration, falling back to defaults when no file
    /// exists yet.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// The effective due date format, configured or default.
    pub fn date_format(&self) -> String {
        self.display
            .as_ref()
            .map(|display| display.date_format.clone())
            .unwrap_or_else(|| DEFAULT_DATE_FORMAT.to_string())
    }

    /// Runs the interactive configuration wizard, pre-filling prompts
    /// with the current values.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();
        let default = config.display.clone().unwrap_or_default();

        msg_print!(Message::ConfigModuleDisplay);
        config.display = Some(DisplayConfig {
            date_format: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptDateFormat.to_string())
                .default(default.date_format)
                .interact_text()?,
        });

        Ok(config)
    }
}

//! Configuration for taskdeck.
//!
//! Settings are stored as pretty-printed JSON in `config.json` inside the
//! data directory (see [`DataStorage`]). A missing file is not an error: every
//! field has a default, so taskdeck runs without any setup.
//!
//! ```rust,no_run
//! use taskdeck::libs::config::Config;
//!
//! let config = Config::read()?;
//! let config = Config::init()?; // interactive wizard, seeded from the current values
//! config.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::highlight::{Highlighter, DEFAULT_SOON_DAYS, MAX_SOON_DAYS};
use super::query::StatusFilter;
use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_error_anyhow};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Default database file name inside the data directory.
pub const DB_FILE_NAME: &str = "tasks.db";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Database file. When unset, `tasks.db` in the data directory is used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<PathBuf>,

    /// Open tasks due within this many days are highlighted as "soon".
    pub soon_days: i64,

    /// Status filter applied when a listing does not ask for one.
    pub default_status: StatusFilter,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database: None,
            soon_days: DEFAULT_SOON_DAYS,
            default_status: StatusFilter::Active,
        }
    }
}

impl Config {
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        Self::read_from(&config_file_path)
    }

    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)
            .map_err(|e| msg_error_anyhow!(format!("{}: {}", Message::ConfigParseError(path.display().to_string()), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values the rest of taskdeck cannot work with.
    pub fn validate(&self) -> Result<()> {
        if !(0..=MAX_SOON_DAYS).contains(&self.soon_days) {
            msg_bail_anyhow!(Message::InvalidSoonDays(self.soon_days, MAX_SOON_DAYS));
        }
        Ok(())
    }

    /// Writes the configuration and returns the file it was written to.
    pub fn save(&self) -> Result<PathBuf> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        self.save_to(&config_file_path)?;
        Ok(config_file_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Resolves the database file, creating the data directory if needed.
    pub fn database_path(&self) -> Result<PathBuf> {
        match &self.database {
            Some(path) => Ok(path.clone()),
            None => DataStorage::new().get_path(DB_FILE_NAME),
        }
    }

    pub fn highlighter(&self) -> Highlighter {
        Highlighter::new(self.soon_days)
    }

    /// Interactive setup. Current values are offered as defaults.
    pub fn init() -> Result<Self> {
        let current = Self::read().unwrap_or_default();
        let theme = ColorfulTheme::default();

        let database: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptDatabasePath.to_string())
            .default(
                current
                    .database
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
            )
            .allow_empty(true)
            .interact_text()?;

        let soon_days: i64 = Input::with_theme(&theme)
            .with_prompt(Message::PromptSoonDays.to_string())
            .default(current.soon_days)
            .validate_with(|days: &i64| {
                if (0..=MAX_SOON_DAYS).contains(days) {
                    Ok(())
                } else {
                    Err(Message::InvalidSoonDays(*days, MAX_SOON_DAYS).to_string())
                }
            })
            .interact_text()?;

        let statuses = StatusFilter::ALL;
        let default_index = statuses.iter().position(|s| *s == current.default_status).unwrap_or(0);
        let selection = Select::with_theme(&theme)
            .with_prompt(Message::SelectDefaultStatus.to_string())
            .items(&statuses.iter().map(|s| s.to_string()).collect::<Vec<_>>())
            .default(default_index)
            .interact()?;

        let database = database.trim();
        Ok(Config {
            database: if database.is_empty() { None } else { Some(PathBuf::from(database)) },
            soon_days,
            default_status: statuses[selection],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_view() {
        let config = Config::default();
        assert_eq!(config.database, None);
        assert_eq!(config.soon_days, 3);
        assert_eq!(config.default_status, StatusFilter::Active);
    }

    #[test]
    fn partial_file_falls_back_to_defaults() {
        let config: Config = serde_json::from_str(r#"{ "soon_days": 5 }"#).unwrap();
        assert_eq!(config.soon_days, 5);
        assert_eq!(config.default_status, StatusFilter::Active);
    }
}

//! Configuration management for the roster application.
//!
//! Settings are stored as pretty-printed JSON in `config.json` inside the
//! platform data directory (see [`DataStorage`]). A missing file is not an
//! error: every section is optional and falls back to defaults.
//!
//! ## Database target
//!
//! The `database.path` value is resolved as follows:
//! - `:memory:` opens a private in-memory database
//! - an absolute path is used as is
//! - a relative path is placed inside the data directory
//!
//! The `ROSTER_DB_PATH` environment variable (also read from a `.env` file)
//! overrides the configured path.
//!
//! ```rust,no_run
//! use roster::libs::config::Config;
//!
//! let config = Config::read()?;
//! let database = config.database_config();
//! println!("Database: {}", database.path);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const DB_FILE_NAME: &str = "roster.db";
pub const DB_PATH_ENV: &str = "ROSTER_DB_PATH";
pub const IN_MEMORY: &str = ":memory:";

/// Where the student database lives and how its connection is reused.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DatabaseConfig {
    /// Database file path, or `:memory:`.
    pub path: String,

    /// Probe a reused connection with `SELECT 1` and reopen it if the probe fails.
    ///
    /// When disabled the connection is only reopened after it was closed.
    #[serde(default = "default_check_liveness")]
    pub check_liveness: bool,
}

fn default_check_liveness() -> bool {
    true
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        DatabaseConfig {
            path: DB_FILE_NAME.to_string(),
            check_liveness: default_check_liveness(),
        }
    }
}

/// Where a connection should be opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DbTarget {
    File(PathBuf),
    InMemory,
}

impl DatabaseConfig {
    /// Resolves the configured path against the data directory.
    pub fn target(&self) -> Result<DbTarget> {
        if self.path == IN_MEMORY {
            return Ok(DbTarget::InMemory);
        }
        let path = Path::new(&self.path);
        if path.is_absolute() {
            Ok(DbTarget::File(path.to_path_buf()))
        } else {
            Ok(DbTarget::File(DataStorage::new().get_path(&self.path)?))
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<DatabaseConfig>,
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        DataStorage::new().get_path(CONFIG_FILE_NAME)
    }

    /// Loads `config.json` from the data directory, or defaults when it does not exist.
    pub fn read() -> Result<Config> {
        Self::read_from(&Self::path()?)
    }

    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file. Missing files are ignored.
    pub fn delete() -> Result<()> {
        let path = Self::path()?;
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    /// Effective database settings: the configured section (or defaults) with
    /// `ROSTER_DB_PATH` applied on top.
    pub fn database_config(&self) -> DatabaseConfig {
        let mut database = self.database.clone().unwrap_or_default();
        if let Ok(path) = env::var(DB_PATH_ENV) {
            if !path.trim().is_empty() {
                database.path = path;
            }
        }
        database
    }

    /// Interactive setup wizard. Current values are offered as defaults.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();
        let default = config.database.clone().unwrap_or_default();

        msg_print!(Message::ConfigModuleDatabase);
        config.database = Some(DatabaseConfig {
            path: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptDbPath.to_string())
                .default(default.path)
                .interact_text()?,
            check_liveness: Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptDbCheckLiveness.to_string())
                .default(default.check_liveness)
                .interact()?,
        });

        Ok(config)
    }
}

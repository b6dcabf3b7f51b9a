use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
        }
    }
}

impl Config {
    /// Standard configuration directory (`~/.worktrack`).
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".worktrack")
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("config.yml")
    }

    pub fn database_file() -> PathBuf {
        Self::config_dir().join("worktrack.sqlite")
    }

    /// Load the config file, falling back to defaults when it is missing
    /// or unreadable.
    pub fn load() -> Self {
        match fs::read_to_string(Self::config_file()) {
            Ok(contents) => serde_yaml::from_str(&contents).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    pub fn save(&self) -> AppResult<()> {
        fs::create_dir_all(Self::config_dir())?;
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        fs::write(Self::config_file(), yaml)?;
        Ok(())
    }

    /// Prepare the configuration for `init`: apply the optional DB
    /// override and persist the file, unless running in test mode (no
    /// config file update).
    pub fn init_all(custom_db: Option<String>, test_mode: bool) -> AppResult<Self> {
        let mut cfg = if test_mode { Self::default() } else { Self::load() };
        if let Some(db) = custom_db {
            cfg.database = db;
        }
        if !test_mode {
            cfg.save()?;
        }
        Ok(cfg)
    }

    pub fn as_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|_| AppError::ConfigLoad)
    }
}

use crate::ui::messages;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_page_size")]
    pub default_page_size: i64,
}

fn default_page_size() -> i64 {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            default_page_size: default_page_size(),
        }
    }
}

impl Config {
    /// Standard configuration directory depending on the platform.
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
            base.join("reqdesk")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".reqdesk")
        }
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("reqdesk.conf")
    }

    pub fn database_file() -> PathBuf {
        Self::config_dir().join("reqdesk.sqlite")
    }

    /// Load configuration from file, or fall back to defaults (with a
    /// warning on a corrupt file rather than aborting).
    pub fn load() -> Self {
        let path = Self::config_file();
        if !path.exists() {
            return Self::default();
        }
        match fs::read_to_string(&path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(cfg) => cfg,
                Err(e) => {
                    messages::warning(format!(
                        "Could not parse {}: {e}. Using defaults.",
                        path.display()
                    ));
                    Self::default()
                }
            },
            Err(e) => {
                messages::warning(format!(
                    "Could not read {}: {e}. Using defaults.",
                    path.display()
                ));
                Self::default()
            }
        }
    }

    /// Create the config directory and (unless running in test mode) write
    /// the default configuration file. Returns the effective database path.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> io::Result<String> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let db_path = match custom_db {
            Some(p) => p,
            None => Self::database_file().to_string_lossy().to_string(),
        };

        if !is_test {
            let cfg = Config {
                database: db_path.clone(),
                default_page_size: default_page_size(),
            };
            let yaml = serde_yaml::to_string(&cfg)
                .map_err(|e| io::Error::other(e.to_string()))?;
            fs::write(Self::config_file(), yaml)?;
        }

        Ok(db_path)
    }
}

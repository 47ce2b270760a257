//! Application configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is honoured for local use.

use std::env;
use std::path::PathBuf;

/// Default name of the single persisted state entry.
pub const DEFAULT_STORAGE_KEY: &str = "fitgod-storage";

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the persisted state blob
    pub data_dir: PathBuf,
    /// Key (file stem) of the persisted state entry
    pub storage_key: String,
    /// Daily water goal assigned at profile setup (ml)
    pub default_water_goal_ml: u32,
    /// Daily step goal assigned at profile setup
    pub default_steps_goal: u32,
    /// Optional directory with catalog JSON files replacing the built-in ones
    pub catalog_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".fitgod"),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            default_water_goal_ml: 3000,
            default_steps_goal: 10000,
            catalog_dir: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let defaults = Self::default();

        Ok(Self {
            data_dir: env::var("FITGOD_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            storage_key: env::var("FITGOD_STORAGE_KEY")
                .map(|v| v.trim().to_string())
                .unwrap_or(defaults.storage_key),
            default_water_goal_ml: parse_var(
                "FITGOD_WATER_GOAL_ML",
                defaults.default_water_goal_ml,
            )?,
            default_steps_goal: parse_var("FITGOD_STEPS_GOAL", defaults.default_steps_goal)?,
            catalog_dir: env::var("FITGOD_CATALOG_DIR").ok().map(PathBuf::from),
        })
    }
}

fn parse_var(name: &'static str, default: u32) -> Result<u32, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value: raw }),
        Err(_) => Ok(default),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

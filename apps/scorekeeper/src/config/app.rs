//! Runtime configuration from environment variables.
//!
//! Command-line flags are applied on top by the binary.

use std::env;
use std::path::PathBuf;

use crate::error::AppError;

pub const DATA_DIR_VAR: &str = "SCOREKEEPER_DATA_DIR";
pub const SOUND_VAR: &str = "SCOREKEEPER_SOUND";
pub const LOG_JSON_VAR: &str = "SCOREKEEPER_LOG_JSON";

pub const DEFAULT_DATA_DIR: &str = ".scorekeeper";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory holding the saved game.
    pub data_dir: PathBuf,
    pub sound: bool,
    pub json_logs: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            sound: true,
            json_logs: false,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = Self::default();
        Ok(Self {
            data_dir: opt_var(DATA_DIR_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            sound: opt_var(SOUND_VAR)
                .map(|v| parse_flag(SOUND_VAR, &v))
                .transpose()?
                .unwrap_or(defaults.sound),
            json_logs: opt_var(LOG_JSON_VAR)
                .map(|v| parse_flag(LOG_JSON_VAR, &v))
                .transpose()?
                .unwrap_or(defaults.json_logs),
        })
    }
}

/// Environment variable, treating blank values as unset.
fn opt_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_flag(name: &str, value: &str) -> Result<bool, AppError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(AppError::config(format!(
            "Environment variable '{name}' must be on/off or true/false, got '{other}'"
        ))),
    }
}

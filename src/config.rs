//! Configuration management for the DropNote search engine.
//!
//! This module handles loading and validating configuration from environment
//! variables. Every setting has a default so the search binary works out of
//! the box against the desktop application's notes file.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Default notes file location relative to the user's home directory.
const DEFAULT_NOTES_RELATIVE_PATH: &str = "Library/Application Support/DropNote/notes.json";

/// Configuration for the DropNote search engine.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the notes.json file
    pub notes_path: PathBuf,

    /// Maximum number of search results to return (default: 10)
    pub search_limit: usize,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `DROPNOTE_NOTES_PATH`: Path to the notes file (default:
    ///   `~/Library/Application Support/DropNote/notes.json`)
    /// - `DROPNOTE_SEARCH_LIMIT`: Max search results (default: 10)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Load .env if present; never fail when it is missing
        let _ = dotenvy::dotenv();

        let notes_path = match env::var("DROPNOTE_NOTES_PATH") {
            Ok(path) if !path.trim().is_empty() => PathBuf::from(path),
            _ => Self::default_notes_path(),
        };

        let search_limit = Self::parse_env_usize("DROPNOTE_SEARCH_LIMIT", 10)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            notes_path,
            search_limit,
            log_level,
        })
    }

    /// Default notes file path under the user's home directory.
    fn default_notes_path() -> PathBuf {
        match env::var("HOME") {
            Ok(home) => PathBuf::from(home).join(DEFAULT_NOTES_RELATIVE_PATH),
            Err(_) => PathBuf::from("notes.json"),
        }
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            notes_path: Self::default_notes_path(),
            search_limit: 10,
            log_level: "error".to_string(),
        }
    }
}

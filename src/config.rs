use std::fs;
use std::io;
use std::path::PathBuf;

use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::monitor::POLL_INTERVAL_SECS;

#[derive(Parser)]
#[command(
    name = "sessionwatch",
    about = "Watches a web application session and warns before it expires"
)]
pub struct Cli {
    /// Base URL of the monitored application (e.g. http://localhost:8080)
    #[arg(long)]
    pub url: Option<String>,
    /// Session cookie to authenticate with, as NAME=VALUE
    #[arg(long)]
    pub cookie: Option<String>,
    /// Seconds between status checks
    #[arg(long, default_value_t = POLL_INTERVAL_SECS)]
    pub interval: u64,
    /// Initial page path for the navigation preview
    #[arg(long)]
    pub path: Option<String>,
    /// Run a single status check and print the result as JSON
    #[arg(long)]
    pub json: bool,
    /// Reset saved configuration
    #[arg(long)]
    pub reset: bool,
    /// Write diagnostics to the debug log file
    #[arg(long)]
    pub debug: bool,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct SavedConfig {
    pub url: String,
    pub cookie: String,
    #[serde(default)]
    pub path: Option<String>,
}

fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("sessionwatch").join("config.json"))
}

pub fn load_config() -> Option<SavedConfig> {
    let path = config_path()?;
    let contents = fs::read_to_string(path).ok()?;
    serde_json::from_str(&contents).ok()
}

pub fn save_config(config: &SavedConfig) -> Result<(), io::Error> {
    let path = config_path()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no config directory"))?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let contents = serde_json::to_string_pretty(config)?;
    fs::write(path, contents)
}

/// Delete the saved configuration. Returns whether one existed.
pub fn reset_config() -> Result<bool, io::Error> {
    let Some(path) = config_path() else {
        return Ok(false);
    };
    if path.exists() {
        fs::remove_file(path)?;
        Ok(true)
    } else {
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saved_config_round_trip() {
        let config = SavedConfig {
            url: "http://localhost:8080".to_string(),
            cookie: "JSESSIONID=abc123".to_string(),
            path: Some("/books".to_string()),
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: SavedConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.url, config.url);
        assert_eq!(back.cookie, config.cookie);
        assert_eq!(back.path, config.path);
    }

    #[test]
    fn test_saved_config_path_is_optional() {
        let back: SavedConfig =
            serde_json::from_str(r#"{"url":"http://x","cookie":"a=b"}"#).unwrap();
        assert_eq!(back.path, None);
    }
}

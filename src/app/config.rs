//! Configuration for the editor
//!
//! Settings come from, in order of precedence: command line arguments, a JSON
//! config file (`--config`, or `~/.config/ctext/config.json`), and built-in
//! defaults. Missing fields in the file fall back to their defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::editor::DEFAULT_QUIT_TIMES;

/// CLI arguments
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "ctext")]
#[command(version)]
#[command(about = "A small terminal text editor", long_about = None)]
pub struct CliArgs {
    /// File to open; it must already exist
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Path to custom config file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Override the terminal height
    #[arg(long, value_name = "ROWS")]
    pub rows: Option<u16>,

    /// Override the terminal width
    #[arg(long, value_name = "COLS")]
    pub cols: Option<u16>,
}

/// Editor configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Extra Ctrl-X presses needed to quit with unsaved changes
    pub quit_times: u32,
    /// Seconds a status message stays visible
    pub message_timeout_secs: u64,
    /// Log file; logging is off when unset
    pub log_file: Option<PathBuf>,
    /// Log filter directive, overridden by `RUST_LOG`
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            quit_times: DEFAULT_QUIT_TIMES,
            message_timeout_secs: 5,
            log_file: None,
            log_filter: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from default location or return default config
    pub fn load_or_default() -> Self {
        if let Some(config_path) = default_config_path() {
            if config_path.exists() {
                match Self::load(&config_path) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!("Ignoring {}: {}", config_path.display(), e);
                    },
                }
            }
        }
        Self::default()
    }

    /// Resolve configuration for the given arguments.
    ///
    /// An explicit `--config` file must load; the default location is
    /// optional.
    pub fn load_with_args(args: &CliArgs) -> Result<Self, ConfigError> {
        let mut config = match &args.config {
            Some(path) => Self::load(path)?,
            None => Self::load_or_default(),
        };

        if let Some(log_file) = &args.log_file {
            config.log_file = Some(log_file.clone());
        }

        Ok(config)
    }

    /// Status message timeout as a duration
    pub fn message_timeout(&self) -> Duration {
        Duration::from_secs(self.message_timeout_secs)
    }
}

/// Get the default configuration file path
fn default_config_path() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(|home| {
        PathBuf::from(home)
            .join(".config")
            .join("ctext")
            .join("config.json")
    })
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

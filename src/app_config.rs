use anyhow::{anyhow, Result};
use log::{warn, LevelFilter};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::path::PathBuf;

use crate::file_utils::FileManager;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and overriding configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Report output settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Report output configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OutputConfig {
    /// Directory the report is written into; the executable's own directory
    /// when unset
    #[serde(default)]
    pub directory: Option<PathBuf>,

    /// Report file name
    #[serde(default = "default_output_filename")]
    pub filename: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: None,
            filename: default_output_filename(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    // @returns: Matching filter for the log crate
    pub fn to_level_filter(&self) -> LevelFilter {
        match self {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn default_output_filename() -> String {
    "band-1300-1500.csv".to_string()
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        // Validate the output file name
        if self.output.filename.trim().is_empty() {
            return Err(anyhow!("Output filename must not be empty"));
        }

        if self.output.filename.contains(['/', '\\']) {
            return Err(anyhow!(
                "Output filename must not contain path separators: {}",
                self.output.filename
            ));
        }

        if !self.output.filename.to_lowercase().ends_with(".csv") {
            warn!(
                "Output filename does not end in .csv: {}",
                self.output.filename
            );
        }

        Ok(())
    }

    /// Resolve the full path the report is written to.
    ///
    /// Joins the configured directory with the configured file name; when no
    /// directory is set the report lands next to the running executable.
    pub fn resolved_output_path(&self) -> Result<PathBuf> {
        let dir = match &self.output.directory {
            Some(dir) => dir.clone(),
            None => FileManager::executable_dir()?,
        };
        Ok(dir.join(&self.output.filename))
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            output: OutputConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}

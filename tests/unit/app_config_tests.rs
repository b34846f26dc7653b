/*!
 * Tests for application configuration functionality
 */

use anyhow::Result;
use log::LevelFilter;
use std::path::PathBuf;

use lexiband::app_config::{Config, LogLevel, OutputConfig};
use crate::common;

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.output.filename, "band-1300-1500.csv");
    assert_eq!(config.output.directory, None);
    assert_eq!(config.log_level, LogLevel::Info);
}

#[test]
fn test_output_config_default_shouldUseBandFilename() {
    let output = OutputConfig::default();
    assert_eq!(output.filename, "band-1300-1500.csv");
    assert!(output.directory.is_none());
}

#[test]
fn test_validate_withDefaultConfig_shouldSucceed() {
    let config = Config::default();
    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_withEmptyFilename_shouldFail() {
    let mut config = Config::default();
    config.output.filename = "  ".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_withPathSeparatorInFilename_shouldFail() {
    let mut config = Config::default();
    config.output.filename = "reports/band.csv".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_withUnusualExtension_shouldStillSucceed() {
    // A non-.csv name only draws a warning, never an error
    let mut config = Config::default();
    config.output.filename = "band-1300-1500.txt".to_string();
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_fromJson_shouldApplyGivenValues() -> Result<()> {
    let json = r#"{
        "output": { "directory": "/tmp/reports", "filename": "custom.csv" },
        "log_level": "debug"
    }"#;

    let config: Config = serde_json::from_str(json)?;
    assert_eq!(config.output.directory, Some(PathBuf::from("/tmp/reports")));
    assert_eq!(config.output.filename, "custom.csv");
    assert_eq!(config.log_level, LogLevel::Debug);
    Ok(())
}

#[test]
fn test_config_fromEmptyJson_shouldFallBackToDefaults() -> Result<()> {
    let config: Config = serde_json::from_str("{}")?;
    assert_eq!(config.output.filename, "band-1300-1500.csv");
    assert_eq!(config.log_level, LogLevel::Info);
    Ok(())
}

#[test]
fn test_config_roundTrip_shouldSerializeAndDeserialize() -> Result<()> {
    let mut config = Config::default();
    config.output.directory = Some(PathBuf::from("out"));
    config.log_level = LogLevel::Trace;

    let json = serde_json::to_string_pretty(&config)?;
    let parsed: Config = serde_json::from_str(&json)?;

    assert_eq!(parsed.output.directory, config.output.directory);
    assert_eq!(parsed.output.filename, config.output.filename);
    assert_eq!(parsed.log_level, LogLevel::Trace);
    Ok(())
}

#[test]
fn test_resolved_output_path_withDirectorySet_shouldJoinDirAndFilename() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let mut config = Config::default();
    config.output.directory = Some(temp_dir.path().to_path_buf());

    let path = config.resolved_output_path()?;
    assert_eq!(path, temp_dir.path().join("band-1300-1500.csv"));
    Ok(())
}

#[test]
fn test_resolved_output_path_withoutDirectory_shouldUseExecutableDir() -> Result<()> {
    let config = Config::default();
    let path = config.resolved_output_path()?;

    assert_eq!(
        path.file_name().and_then(|n| n.to_str()),
        Some("band-1300-1500.csv")
    );
    assert!(path.parent().is_some());
    Ok(())
}

#[test]
fn test_log_level_toLevelFilter_shouldMapAllVariants() {
    assert_eq!(LogLevel::Error.to_level_filter(), LevelFilter::Error);
    assert_eq!(LogLevel::Warn.to_level_filter(), LevelFilter::Warn);
    assert_eq!(LogLevel::Info.to_level_filter(), LevelFilter::Info);
    assert_eq!(LogLevel::Debug.to_level_filter(), LevelFilter::Debug);
    assert_eq!(LogLevel::Trace.to_level_filter(), LevelFilter::Trace);
}

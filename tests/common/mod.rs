/*!
 * Common test utilities for the lexiband test suite
 */

use std::path::PathBuf;
use std::fs;
use anyhow::Result;
use tempfile::TempDir;

use lexiband::passage::{LexileBand, Passage, PassageSet};

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &PathBuf, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Creates a minimal passage with the given id and prose
pub fn sample_passage(text_id: &str, text_body: &str) -> Passage {
    Passage::new(
        text_id.to_string(),
        1400,
        "Expository".to_string(),
        "Test Topic".to_string(),
        "Short".to_string(),
        "대학1".to_string(),
        "C1".to_string(),
        "수업".to_string(),
        text_body.to_string(),
    )
}

/// Creates a single-passage set in the academic band
pub fn sample_set(text_id: &str, text_body: &str) -> PassageSet {
    PassageSet::new(
        LexileBand::academic(),
        vec![sample_passage(text_id, text_body)],
    )
}

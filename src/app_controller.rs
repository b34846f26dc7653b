use anyhow::{Result, Context};
use log::{info, debug};
use std::path::Path;

use crate::app_config::Config;
use crate::file_utils::FileManager;
use crate::passage::PassageSet;
use crate::report::{self, ReportRow};
use crate::text_stats::{PassageStats, SentenceBoundaryDetector, TerminalPunctuationDetector};

// @module: Application controller for report generation

/// Main application controller for the readability report
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let controller = Self {
            config,
        };

        Ok(controller)
    }

    /// Run the main workflow over the built-in academic band dataset
    pub fn run(&self) -> Result<()> {
        self.run_with_detector(&TerminalPunctuationDetector)
    }

    /// Run the main workflow with a custom sentence boundary detector
    pub fn run_with_detector<D: SentenceBoundaryDetector>(&self, detector: &D) -> Result<()> {
        let passages = PassageSet::academic_band();
        let output_path = self.config.resolved_output_path()?;
        self.generate_report(&passages, detector, &output_path)
    }

    /// Generate the CSV report for a passage set.
    ///
    /// Computes statistics for every passage in set order, echoes a per-record
    /// diagnostic line to stdout, renders the report and writes it to
    /// `output_path` in a single operation. The passage set is never modified.
    pub fn generate_report<D: SentenceBoundaryDetector>(
        &self,
        set: &PassageSet,
        detector: &D,
        output_path: &Path,
    ) -> Result<()> {
        info!("Generating readability report for band {} ({} passages)", set.band, set.len());

        let mut rows = Vec::with_capacity(set.len());
        for passage in &set.passages {
            let stats = PassageStats::compute_with(passage, detector)
                .with_context(|| format!("Failed to compute statistics for {}", passage.text_id))?;
            debug!("Computed statistics for {}", passage);

            println!("{} | {}", passage.text_id, stats);
            rows.push(ReportRow::from_passage(passage, &stats, &set.band));
        }

        let content = report::render_report(&rows)?;
        FileManager::write_bytes(output_path, content.as_bytes())
            .with_context(|| format!("Failed to write report: {:?}", output_path))?;

        println!("Output path: {}", output_path.display());
        println!();
        println!("CSV written successfully. Total rows: {}", rows.len());

        info!("Report written to {:?} ({} rows)", output_path, rows.len());
        Ok(())
    }
}

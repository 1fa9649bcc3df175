use anyhow::Result;
use log::{debug, info};
use std::path::{Path, PathBuf};

use crate::csv_report;
use crate::errors::AppError;
use crate::file_utils::FileManager;
use crate::subtitle_processor::SubtitleDocument;
use crate::word_counter::WordCountTable;

// @module: Pipeline controller

/// One-shot pipeline controller: resolve paths, parse, count, write.
/// Each run is a pure pass over one input file; no state survives it.
pub struct Controller;

impl Controller {
    /// Create a new controller
    pub fn new() -> Self {
        Controller
    }

    /// Run the full pipeline and return the path of the written report.
    ///
    /// `output` may be an explicit `.csv` path, a directory, or absent, in
    /// which case the report is auto-named beside the input. Nothing is
    /// written when the input is missing or unsupported.
    pub fn run(&self, input_path: &Path, output: Option<&Path>) -> Result<PathBuf> {
        if !FileManager::file_exists(input_path) {
            return Err(AppError::InputNotFound(input_path.to_path_buf()).into());
        }

        let document = SubtitleDocument::open(input_path)?;
        debug!("Detected format: {}", document.format);

        let output_path = FileManager::resolve_output_path(input_path, output)?;
        debug!("Output target: {}", output_path.display());

        let table = WordCountTable::from_lines(document.dialogue_lines());
        info!(
            "Counted {} distinct words ({} tokens) in {}",
            table.len(),
            table.total_tokens(),
            input_path.display()
        );

        csv_report::write_report(&table, &output_path)?;
        info!("Saved: {}", output_path.display());

        Ok(output_path)
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}

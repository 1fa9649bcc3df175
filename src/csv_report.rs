use anyhow::Result;
use log::debug;
use serde::Serialize;
use std::fs::File;
use std::path::Path;

use crate::errors::AppError;
use crate::word_counter::WordCountTable;

// @module: CSV report serialization

/// One output row; field order matches the `word,count` header.
#[derive(Debug, Serialize)]
struct CountRow<'a> {
    word: &'a str,
    count: u64,
}

/// Write the frequency table to `output_path` as CSV.
///
/// The header row is always written, even for an empty table. Rows follow
/// the table's deterministic sort order; the csv crate quotes fields
/// containing delimiters or quotes.
pub fn write_report(table: &WordCountTable, output_path: &Path) -> Result<()> {
    let file = File::create(output_path).map_err(|e| {
        AppError::OutputWrite(format!("{}: {}", output_path.display(), e))
    })?;

    // Header is written explicitly so it is present for empty tables too.
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);
    writer
        .write_record(["word", "count"])
        .map_err(|e| AppError::OutputWrite(e.to_string()))?;

    let rows = table.sorted_rows();
    for (word, count) in &rows {
        writer
            .serialize(CountRow {
                word: word.as_str(),
                count: *count,
            })
            .map_err(|e| AppError::OutputWrite(e.to_string()))?;
    }

    writer
        .flush()
        .map_err(|e| AppError::OutputWrite(e.to_string()))?;

    debug!("Wrote {} rows to {}", rows.len(), output_path.display());
    Ok(())
}

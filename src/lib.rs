/*!
 * # subfreq - Subtitle word-frequency counter
 *
 * A small desktop utility that reads a subtitle file (`.srt` or `.ass`),
 * extracts the spoken text, counts word frequencies and writes the result
 * as a two-column CSV (`word,count`).
 *
 * ## Features
 *
 * - SRT and ASS dialogue extraction with markup stripping
 * - Deterministic output ordering (descending count, alphabetical ties)
 * - CLI with an interactive file-picker fallback for zero-argument runs
 * - Malformed cues are skipped, never abort the whole file
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `subtitle_processor`: subtitle file handling and dialogue extraction
 * - `word_counter`: tokenization and frequency counting
 * - `csv_report`: CSV serialization of the frequency table
 * - `file_utils`: file system operations and output path resolution
 * - `app_controller`: main pipeline controller
 * - `gui`: interactive file-picker fallback
 * - `logging`: stderr logger behind the `log` facade
 * - `errors`: custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_controller;
pub mod csv_report;
pub mod errors;
pub mod file_utils;
pub mod gui;
pub mod logging;
pub mod subtitle_processor;
pub mod word_counter;

// Re-export main types for easier usage
pub use app_controller::Controller;
pub use errors::AppError;
pub use subtitle_processor::{SubtitleDocument, SubtitleFormat};
pub use word_counter::WordCountTable;

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::AppError;
use crate::subtitle_processor::SubtitleFormat;

// @module: File and path utilities

/// Suffix appended to the input stem for auto-named reports
pub const OUTPUT_SUFFIX: &str = "_word_frequency.csv";

// @const: SRT cue pattern (index line followed by a timestamp line)
static SRT_CUE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\d+\s*\r?\n\d{2}:\d{2}:\d{2},\d{3}\s+-->\s+\d{2}:\d{2}:\d{2},\d{3}").unwrap()
});

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_dir()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.exists() {
            fs::create_dir_all(path)
                .with_context(|| format!("Failed to create directory: {}", path.display()))?;
        }
        Ok(())
    }

    /// Read a file as UTF-8, replacing invalid sequences instead of failing.
    /// Subtitle files in the wild are not always cleanly encoded. A path
    /// that exists but cannot be read (permissions, not a regular file) is
    /// reported the same way as a missing one.
    pub fn read_to_string_lossy<P: AsRef<Path>>(path: P) -> Result<String> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|_| AppError::InputNotFound(path.to_path_buf()))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Detect the subtitle format of a file, checking the extension first
    /// and falling back to content sniffing when the extension is absent
    pub fn detect_file_type<P: AsRef<Path>>(path: P) -> Result<SubtitleFormat> {
        let path = path.as_ref();

        if !Self::file_exists(path) {
            return Err(AppError::InputNotFound(path.to_path_buf()).into());
        }

        if let Some(ext) = path.extension() {
            let ext_str = ext.to_string_lossy().to_lowercase();
            return match ext_str.as_str() {
                "srt" => Ok(SubtitleFormat::Srt),
                "ass" => Ok(SubtitleFormat::Ass),
                _ => Err(AppError::UnsupportedFormat(path.to_path_buf()).into()),
            };
        }

        // No extension: examine the content before rejecting
        let content = Self::read_to_string_lossy(path)?;
        if content.contains("[Script Info]")
            || content
                .lines()
                .any(|line| line.trim_start().starts_with("Dialogue:"))
        {
            return Ok(SubtitleFormat::Ass);
        }
        if SRT_CUE_REGEX.is_match(&content) {
            return Ok(SubtitleFormat::Srt);
        }

        Err(AppError::UnsupportedFormat(path.to_path_buf()).into())
    }

    /// Auto-generated report filename for an input file
    pub fn default_output_name(input_path: &Path) -> String {
        let stem = input_path.file_stem().unwrap_or_default().to_string_lossy();
        format!("{}{}", stem, OUTPUT_SUFFIX)
    }

    /// Resolve the output CSV path from an optional file or directory
    /// argument.
    ///
    /// - No argument: auto-named file beside the input.
    /// - Existing directory: auto-named file inside it.
    /// - Path with a `.csv` extension: used verbatim; its parent must
    ///   already exist.
    /// - Anything else: treated as a directory and created.
    pub fn resolve_output_path(input_path: &Path, output: Option<&Path>) -> Result<PathBuf> {
        let default_name = Self::default_output_name(input_path);

        let Some(output) = output else {
            return Ok(input_path.with_file_name(default_name));
        };

        if Self::dir_exists(output) {
            return Ok(output.join(default_name));
        }

        if output
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
        {
            // Explicit file target: never create missing parents.
            if let Some(parent) = output.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    return Err(AppError::OutputWrite(format!(
                        "missing parent directory: {}",
                        parent.display()
                    ))
                    .into());
                }
            }
            return Ok(output.to_path_buf());
        }

        Self::ensure_dir(output)?;
        Ok(output.join(default_name))
    }
}

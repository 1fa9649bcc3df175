use anyhow::Result;
use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::file_utils::FileManager;

// @module: Subtitle parsing and dialogue extraction

// @const: SRT timestamp line regex
static TIMESTAMP_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{2}:\d{2}:\d{2},\d{3}\s+-->\s+\d{2}:\d{2}:\d{2},\d{3}").unwrap()
});

// @const: ASS override blocks like {\pos(0,0)}, also used for SRT {y:i} tags
static OVERRIDE_TAG_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{[^}]*\}").unwrap());

// @const: Inline HTML-style markup like <i>, <b>, <font color="...">
static MARKUP_TAG_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"</?[A-Za-z][^>]*>").unwrap());

/// Bidi control marks and the BOM occasionally embedded in subtitle text
const BIDI_MARKS: [char; 8] = [
    '\u{200e}', '\u{200f}', '\u{202a}', '\u{202b}', '\u{202c}', '\u{202d}', '\u{202e}',
    '\u{feff}',
];

/// Number of fields in the standard ASS event layout (Text is last)
const ASS_DEFAULT_FIELD_COUNT: usize = 10;

/// Supported subtitle formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubtitleFormat {
    Srt,
    Ass,
}

impl fmt::Display for SubtitleFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Srt => write!(f, "srt"),
            Self::Ass => write!(f, "ass"),
        }
    }
}

/// Raw subtitle content plus its detected format. Immutable once read.
#[derive(Debug)]
pub struct SubtitleDocument {
    /// Source filename
    pub source_file: PathBuf,

    /// Detected subtitle format
    pub format: SubtitleFormat,

    /// Raw file content
    content: String,
}

impl SubtitleDocument {
    /// Read a subtitle file, detecting its format from the path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let format = FileManager::detect_file_type(path)?;
        let content = FileManager::read_to_string_lossy(path)?;

        Ok(SubtitleDocument {
            source_file: path.to_path_buf(),
            format,
            content,
        })
    }

    /// Build a document from in-memory content with a known format.
    pub fn from_string(content: &str, format: SubtitleFormat) -> Self {
        SubtitleDocument {
            source_file: PathBuf::new(),
            format,
            content: content.to_string(),
        }
    }

    /// Extract cleaned dialogue lines, discarding cue indices, timing and
    /// markup. Consumed once by the word counter.
    pub fn dialogue_lines(&self) -> impl Iterator<Item = String> + '_ {
        let lines = match self.format {
            SubtitleFormat::Srt => parse_srt_string(&self.content),
            SubtitleFormat::Ass => parse_ass_string(&self.content),
        };
        lines.into_iter()
    }
}

/// Parse SRT content into cleaned dialogue lines, one per cue.
///
/// Cues are blank-line separated blocks of index line, timestamp line and
/// text lines. A cue with no parsable timestamp line is skipped with a
/// warning; it never aborts the rest of the file.
pub fn parse_srt_string(content: &str) -> Vec<String> {
    let normalized = content.replace("\r\n", "\n");
    let mut dialogue = Vec::new();

    for block in normalized.split("\n\n") {
        let block_lines: Vec<&str> = block
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if block_lines.is_empty() {
            continue;
        }

        let Some(ts_pos) = block_lines
            .iter()
            .position(|line| TIMESTAMP_REGEX.is_match(line))
        else {
            warn!(
                "Skipping malformed SRT cue without timestamp: {:?}",
                block_lines.first().unwrap_or(&"")
            );
            continue;
        };

        let text_lines = &block_lines[ts_pos + 1..];
        if text_lines.is_empty() {
            warn!("Skipping SRT cue with no text");
            continue;
        }

        // Joining wrapped lines with a space preserves word boundaries.
        let cleaned = strip_markup(&text_lines.join(" "));
        if !cleaned.trim().is_empty() {
            dialogue.push(cleaned);
        }
    }

    dialogue
}

/// Parse ASS content into cleaned dialogue lines, one per Dialogue event.
///
/// A `Format:` line in the events section declares the field order; its
/// `Text` index and field count are honored so that commas inside the text
/// payload survive. Without one, the standard ten-field layout is assumed.
/// Events with truncated metadata are skipped with a warning.
pub fn parse_ass_string(content: &str) -> Vec<String> {
    let mut dialogue = Vec::new();
    let mut field_count = ASS_DEFAULT_FIELD_COUNT;
    let mut text_index: Option<usize> = None;

    for raw_line in content.lines() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(rest) = line.strip_prefix("Format:") {
            // Capture column order so the Text field is extracted reliably.
            let fields: Vec<&str> = rest.split(',').map(str::trim).collect();
            field_count = fields.len().max(1);
            text_index = fields.iter().position(|f| f.eq_ignore_ascii_case("Text"));
            continue;
        }

        let Some(rest) = line.strip_prefix("Dialogue:") else {
            continue;
        };
        let payload = rest.trim_start();

        // Split into the declared number of fields; Text may contain commas.
        let parts: Vec<&str> = payload.splitn(field_count, ',').collect();
        if parts.len() < field_count {
            warn!(
                "Skipping ASS event with truncated metadata ({} of {} fields)",
                parts.len(),
                field_count
            );
            continue;
        }

        let text = match text_index {
            Some(idx) if idx < parts.len() => parts[idx],
            _ => parts[parts.len() - 1],
        };

        // ASS hard breaks and hard spaces become word boundaries.
        let text = text
            .replace("\\N", " ")
            .replace("\\n", " ")
            .replace("\\h", " ");

        let cleaned = strip_markup(&text);
        if !cleaned.trim().is_empty() {
            dialogue.push(cleaned);
        }
    }

    dialogue
}

/// Remove override blocks, inline markup tags and bidi control marks.
pub fn strip_markup(text: &str) -> String {
    let without_overrides = OVERRIDE_TAG_REGEX.replace_all(text, "");
    let without_tags = MARKUP_TAG_REGEX.replace_all(&without_overrides, "");
    without_tags
        .chars()
        .filter(|c| !BIDI_MARKS.contains(c))
        .collect()
}

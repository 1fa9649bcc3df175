/*!
 * Tests for subtitle parsing and dialogue extraction
 */

use subfreq::subtitle_processor::{
    parse_ass_string, parse_srt_string, strip_markup, SubtitleDocument, SubtitleFormat,
};

use crate::common;

/// Test that a well-formed SRT file yields one dialogue line per cue
#[test]
fn test_parse_srt_withValidCues_shouldExtractAllText() {
    let lines = parse_srt_string(common::SAMPLE_SRT);

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "This is a test subtitle.");
    assert_eq!(lines[1], "It contains multiple entries.");
    assert_eq!(lines[2], "For testing.");
}

/// Test that wrapped text lines are joined with a word boundary
#[test]
fn test_parse_srt_withWrappedLines_shouldPreserveWordBoundaries() {
    let content = "1\n00:00:01,000 --> 00:00:02,000\nfirst half\nsecond half\n";
    let lines = parse_srt_string(content);

    assert_eq!(lines, vec!["first half second half"]);
}

/// Test that a cue missing its timestamp is skipped without aborting
#[test]
fn test_parse_srt_withMalformedCue_shouldSkipOnlyThatCue() {
    let content = "1
00:00:01,000 --> 00:00:02,000
first cue

2
this cue has no timestamp

3
00:00:05,000 --> 00:00:06,000
third cue

4
00:00:07,000 --> 00:00:08,000
fourth cue
";
    let lines = parse_srt_string(content);

    assert_eq!(lines, vec!["first cue", "third cue", "fourth cue"]);
}

/// Test that inline markup tags are stripped from SRT text
#[test]
fn test_parse_srt_withInlineMarkup_shouldStripTags() {
    let content = "1\n00:00:01,000 --> 00:00:02,000\n<i>italic</i> and <b>bold</b> and {y:i}styled\n";
    let lines = parse_srt_string(content);

    assert_eq!(lines, vec!["italic and bold and styled"]);
}

/// Test CRLF line endings
#[test]
fn test_parse_srt_withCrlfEndings_shouldParseNormally() {
    let content = "1\r\n00:00:01,000 --> 00:00:02,000\r\nwindows line endings\r\n\r\n2\r\n00:00:03,000 --> 00:00:04,000\r\nsecond cue\r\n";
    let lines = parse_srt_string(content);

    assert_eq!(lines, vec!["windows line endings", "second cue"]);
}

/// Test that an empty SRT produces no lines
#[test]
fn test_parse_srt_withEmptyContent_shouldReturnNothing() {
    assert!(parse_srt_string("").is_empty());
    assert!(parse_srt_string("\n\n\n").is_empty());
}

/// Test ASS parsing with a Format line declaring the field order
#[test]
fn test_parse_ass_withFormatLine_shouldExtractTextField() {
    let lines = parse_ass_string(common::SAMPLE_ASS);

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "Hello there, friend");
    assert_eq!(lines[1], "Second line with a break");
}

/// Test that commas inside the text payload survive field splitting
#[test]
fn test_parse_ass_withCommasInText_shouldKeepFullPayload() {
    let content = "Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text
Dialogue: 0,0:00:01.00,0:00:02.00,Default,,0,0,0,,one, two, three
";
    let lines = parse_ass_string(content);

    assert_eq!(lines, vec!["one, two, three"]);
}

/// Test ASS parsing without a Format line (standard ten-field layout)
#[test]
fn test_parse_ass_withoutFormatLine_shouldUseDefaultLayout() {
    let content =
        "Dialogue: 0,0:00:01.00,0:00:02.00,Default,,0,0,0,,default layout text\n";
    let lines = parse_ass_string(content);

    assert_eq!(lines, vec!["default layout text"]);
}

/// Test that events with truncated metadata are skipped
#[test]
fn test_parse_ass_withTruncatedEvent_shouldSkipIt() {
    let content = "Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text
Dialogue: 0,0:00:01.00,truncated
Dialogue: 0,0:00:02.00,0:00:03.00,Default,,0,0,0,,kept event
";
    let lines = parse_ass_string(content);

    assert_eq!(lines, vec!["kept event"]);
}

/// Test that override tags and break codes are removed from ASS text
#[test]
fn test_parse_ass_withOverridesAndBreaks_shouldCleanText() {
    let content = "Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text
Dialogue: 0,0:00:01.00,0:00:02.00,Default,,0,0,0,,{\\an8}top{\\i1} text\\Nnext\\hline
";
    let lines = parse_ass_string(content);

    assert_eq!(lines, vec!["top text next line"]);
}

/// Test that non-Dialogue lines are ignored
#[test]
fn test_parse_ass_withOtherSections_shouldIgnoreThem() {
    let content = "[Script Info]
Title: Something
Style: Default,Arial,20

Comment: 0,0:00:01.00,0:00:02.00,Default,,0,0,0,,a comment
";
    assert!(parse_ass_string(content).is_empty());
}

/// Test bidi mark and BOM stripping
#[test]
fn test_strip_markup_withBidiMarks_shouldRemoveThem() {
    let cleaned = strip_markup("\u{feff}\u{200e}hello\u{200f} world\u{202c}");
    assert_eq!(cleaned, "hello world");
}

/// Test opening a document detects the format from the extension
#[test]
fn test_document_open_withSrtFile_shouldDetectSrtFormat() -> anyhow::Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let srt_path = common::create_test_srt(temp_dir.path(), "episode.srt")?;

    let document = SubtitleDocument::open(&srt_path)?;
    assert_eq!(document.format, SubtitleFormat::Srt);
    assert_eq!(document.dialogue_lines().count(), 3);

    Ok(())
}

/// Test that a document built from in-memory content extracts dialogue
#[test]
fn test_document_from_string_withAssContent_shouldExtractDialogue() {
    let document = SubtitleDocument::from_string(common::SAMPLE_ASS, SubtitleFormat::Ass);
    let lines: Vec<String> = document.dialogue_lines().collect();

    assert_eq!(lines.len(), 2);
}

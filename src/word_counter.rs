use std::collections::HashMap;

// @module: Tokenization and word counting

/// Characters that may appear inside a word. Apostrophes (straight and
/// typographic) and hyphens are word characters only when internal;
/// leading and trailing ones are trimmed per token.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || is_joiner(c)
}

fn is_joiner(c: char) -> bool {
    matches!(c, '\'' | '\u{2019}' | '-')
}

/// Split one line into normalized tokens: lowercase, split on runs of
/// non-word characters, trim edge joiners, drop tokens without a single
/// letter or digit.
///
/// Accented words stay distinct; no folding beyond plain lowercasing.
pub fn tokenize(line: &str) -> Vec<String> {
    line.to_lowercase()
        .split(|c: char| !is_word_char(c))
        .filter_map(normalize_token)
        .collect()
}

fn normalize_token(raw: &str) -> Option<String> {
    let trimmed = raw.trim_matches(is_joiner);
    if trimmed.chars().any(char::is_alphanumeric) {
        Some(trimmed.to_string())
    } else {
        None
    }
}

/// Mapping from normalized word to occurrence count.
///
/// Built incrementally over all dialogue lines; the sum of counts always
/// equals the number of tokens fed in.
#[derive(Debug, Default)]
pub struct WordCountTable {
    counts: HashMap<String, u64>,
    total_tokens: u64,
}

impl WordCountTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from an iterator of dialogue lines.
    pub fn from_lines<I>(lines: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut table = Self::new();
        for line in lines {
            table.add_line(line.as_ref());
        }
        table
    }

    /// Count every token in one dialogue line.
    pub fn add_line(&mut self, line: &str) {
        for token in tokenize(line) {
            *self.counts.entry(token).or_insert(0) += 1;
            self.total_tokens += 1;
        }
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total tokens counted across all lines
    pub fn total_tokens(&self) -> u64 {
        self.total_tokens
    }

    /// Count for a single word, zero when absent
    pub fn get(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Rows in output order: descending by count, ties broken by ascending
    /// lexicographic order of the word.
    pub fn sorted_rows(&self) -> Vec<(String, u64)> {
        let mut rows: Vec<(String, u64)> = self
            .counts
            .iter()
            .map(|(word, count)| (word.clone(), *count))
            .collect();
        rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        rows
    }
}

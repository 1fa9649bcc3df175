/*!
 * Tests for tokenization and word counting.
 *
 * These tests pin down the tokenization policy: words are runs of letters
 * and digits, apostrophes (straight or typographic) and hyphens count as
 * word characters only when internal, and edge punctuation is trimmed.
 */

use subfreq::word_counter::{tokenize, WordCountTable};

/// Test basic lowercasing and punctuation stripping
#[test]
fn test_tokenize_withMixedCaseAndPunctuation_shouldLowercaseAndTrim() {
    let tokens = tokenize("Hello, WORLD!");
    assert_eq!(tokens, vec!["hello", "world"]);
}

/// Test that internal apostrophes are kept
#[test]
fn test_tokenize_withInternalApostrophe_shouldKeepSingleToken() {
    assert_eq!(tokenize("don't"), vec!["don't"]);
    // Typographic apostrophes are word characters too, but are not folded
    // to the straight form.
    assert_eq!(tokenize("don\u{2019}t"), vec!["don\u{2019}t"]);
}

/// Test that internal hyphens are kept
#[test]
fn test_tokenize_withInternalHyphen_shouldKeepSingleToken() {
    assert_eq!(tokenize("a well-known fact"), vec!["a", "well-known", "fact"]);
}

/// Test that leading and trailing apostrophes/hyphens are trimmed
#[test]
fn test_tokenize_withEdgeJoiners_shouldTrimThem() {
    assert_eq!(tokenize("'tis --dashed-- 'quoted'"), vec!["tis", "dashed", "quoted"]);
}

/// Test that pure punctuation yields no tokens
#[test]
fn test_tokenize_withOnlyPunctuation_shouldReturnNothing() {
    assert!(tokenize("... !?! -- '' ---").is_empty());
}

/// Test that digits are word characters
#[test]
fn test_tokenize_withDigits_shouldKeepThem() {
    assert_eq!(tokenize("route 66"), vec!["route", "66"]);
}

/// Test that accented words stay distinct (no accent folding)
#[test]
fn test_tokenize_withAccents_shouldNotFold() {
    let mut table = WordCountTable::new();
    table.add_line("cafe café");
    assert_eq!(table.get("cafe"), 1);
    assert_eq!(table.get("café"), 1);
    assert_eq!(table.len(), 2);
}

/// Test the case-insensitive counting example from the contract
#[test]
fn test_count_withRepeatedWord_shouldFoldCaseAndOrderByCount() {
    let mut table = WordCountTable::new();
    table.add_line("Hello hello HELLO world.");

    let rows = table.sorted_rows();
    assert_eq!(rows, vec![("hello".to_string(), 3), ("world".to_string(), 1)]);
}

/// Test that the sum of counts equals the total token count
#[test]
fn test_count_withSeveralLines_shouldPreserveTokenTotal() {
    let lines = [
        "This is a test subtitle.",
        "It contains multiple entries.",
        "For testing.",
    ];
    let table = WordCountTable::from_lines(lines);

    let sum: u64 = table.sorted_rows().iter().map(|(_, c)| c).sum();
    assert_eq!(sum, table.total_tokens());
    assert_eq!(table.total_tokens(), 11);
}

/// Test that equal counts are ordered alphabetically
#[test]
fn test_sorted_rows_withTiedCounts_shouldOrderAlphabetically() {
    let mut table = WordCountTable::new();
    table.add_line("dog cat dog cat zebra");

    let rows = table.sorted_rows();
    assert_eq!(
        rows,
        vec![
            ("cat".to_string(), 2),
            ("dog".to_string(), 2),
            ("zebra".to_string(), 1),
        ]
    );
}

/// Test the empty table
#[test]
fn test_table_withNoInput_shouldBeEmpty() {
    let table = WordCountTable::new();
    assert!(table.is_empty());
    assert_eq!(table.total_tokens(), 0);
    assert!(table.sorted_rows().is_empty());
}

// Integration tests for the analysis driver and the token listing

use toylang::parser::token::{KEYWORDS, SEPARATORS};
use toylang::{analyze, ErrorKind, TokenKind, Verdict};

const DEMO: &str = include_str!("../demos/demo.txt");

#[test]
fn test_demo_program_is_accepted() {
    let analysis = analyze(DEMO);
    assert!(analysis.is_accepted(), "demo failed: {}", analysis.verdict);
    assert_eq!(analysis.symbols.len(), 12);
    assert!(analysis
        .lexed
        .numbers
        .iter()
        .any(|n| n == "110101100 (1AC)"));
}

#[test]
fn test_listing_codes_match_tables() {
    let analysis = analyze(DEMO);
    let listing = analysis.listing();
    assert!(!listing.is_empty());

    for (entry, token) in listing
        .iter()
        .zip(analysis.lexed.tokens.iter().filter(|t| !t.is_whitespace()))
    {
        assert_eq!(entry.kind_code, token.kind.code());
        let expected = match token.kind {
            TokenKind::Keyword => KEYWORDS[entry.literal_code - 1],
            TokenKind::Separator => SEPARATORS[entry.literal_code - 1],
            TokenKind::Identifier => analysis
                .lexed
                .identifiers
                .iter()
                .nth(entry.literal_code - 1)
                .unwrap(),
            TokenKind::Number => analysis
                .lexed
                .numbers
                .iter()
                .nth(entry.literal_code - 1)
                .unwrap(),
        };
        assert_eq!(expected, token.text);
    }
}

#[test]
fn test_listing_starts_with_comment_separators() {
    let analysis = analyze(DEMO);
    let rows: Vec<String> = analysis
        .listing()
        .iter()
        .take(3)
        .map(|e| e.to_string())
        .collect();
    assert_eq!(
        rows,
        vec![
            "(2, 22) — (* [line 1]",
            "(2, 23) — *) [line 1]",
            "(3, 1) — a [line 2]",
        ]
    );
}

#[test]
fn test_lexical_error_reports_line() {
    let analysis = analyze("a : integer;\na = 12q\nend");
    let err = analysis.error().unwrap();
    assert_eq!(err.kind(), ErrorKind::Lexical);
    assert_eq!(err.line(), 2);
    assert!(analysis.listing().is_empty());
}

#[test]
fn test_whitespace_only_source() {
    let analysis = analyze("\n\n   \n");
    assert!(matches!(analysis.verdict, Verdict::Empty));
    assert!(analysis.trace().is_empty());
}

#[test]
fn test_analysis_is_repeatable() {
    let first = analyze(DEMO);
    let second = analyze(DEMO);
    assert_eq!(first.listing(), second.listing());
    assert_eq!(first.trace(), second.trace());
}

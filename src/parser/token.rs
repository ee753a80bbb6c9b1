//! Token model and the fixed lexical tables
//!
//! Every token carries its kind, the text shown to the user and a
//! [`SourceLocation`]. Number tokens additionally keep the literal as it was
//! scanned in [`Token::raw_numeric`], because their `text` is a derived
//! display string (bit pattern plus cleaned digits).
//!
//! The keyword and separator tables are `const` data; a token's literal code
//! in a listing is its 1-based position in the matching table.

use rustc_hash::FxHashMap;
use std::fmt;

/// Reserved words, in listing order.
pub const KEYWORDS: [&str; 17] = [
    "true", "false", "end", "integer", "real", "boolean", "let", "if", "then", "else",
    "end_else", "for", "do", "while", "loop", "input", "output",
];

/// Separators, in listing order. The first twelve are spelled with letters and
/// are recognised by the identifier scanner.
pub const SEPARATORS: [&str; 25] = [
    "NE", "EQ", "LT", "LE", "GT", "GE", "plus", "min", "or", "mult", "div", "and", "~", "(",
    ")", ":", ",", ";", "{", "}", "=", "(*", "*)", " ", "\n",
];

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Keyword,
    Separator,
    Identifier,
    Number,
}

impl TokenKind {
    /// Numeric class code used in token listings.
    pub fn code(self) -> usize {
        match self {
            TokenKind::Keyword => 1,
            TokenKind::Separator => 2,
            TokenKind::Identifier => 3,
            TokenKind::Number => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Separator => "SEPARATOR",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Number => "NUMBER",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One lexical unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub location: SourceLocation,
    pub raw_numeric: Option<String>,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            kind,
            text: text.into(),
            location,
            raw_numeric: None,
        }
    }

    pub fn number(display: String, raw: String, location: SourceLocation) -> Self {
        Self {
            kind: TokenKind::Number,
            text: display,
            location,
            raw_numeric: Some(raw),
        }
    }

    pub fn line(&self) -> usize {
        self.location.line
    }

    pub fn column(&self) -> usize {
        self.location.column
    }

    /// True for the given kind with exactly this text.
    pub fn is(&self, kind: TokenKind, text: &str) -> bool {
        self.kind == kind && self.text == text
    }

    pub fn is_keyword(&self, text: &str) -> bool {
        self.is(TokenKind::Keyword, text)
    }

    pub fn is_separator(&self, text: &str) -> bool {
        self.is(TokenKind::Separator, text)
    }

    /// Space or newline separator.
    pub fn is_whitespace(&self) -> bool {
        self.is_separator(" ") || self.is_separator("\n")
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}('{}')", self.kind, printable(&self.text))
    }
}

/// Renders layout characters visibly for messages and tables.
pub fn printable(text: &str) -> String {
    match text {
        "\n" => "\\n".to_string(),
        _ => text.to_string(),
    }
}

/// Separators spelled with letters (`plus`, `NE`, ...).
pub fn is_letter_separator(word: &str) -> bool {
    SEPARATORS
        .iter()
        .any(|sep| *sep == word && sep.chars().all(|c| c.is_ascii_alphabetic()))
}

pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(&word)
}

/// Longest symbolic separator the text starts with.
pub fn match_symbol_separator(rest: &[char]) -> Option<&'static str> {
    SEPARATORS
        .iter()
        .filter(|sep| !sep.chars().all(|c| c.is_ascii_alphabetic()))
        .filter(|sep| {
            let len = sep.chars().count();
            rest.len() >= len && sep.chars().zip(rest.iter()).all(|(a, b)| a == *b)
        })
        .max_by_key(|sep| sep.len())
        .copied()
}

/// Insertion-ordered set of strings with stable 1-based ordinals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InternTable {
    entries: Vec<String>,
    index: FxHashMap<String, usize>,
}

impl InternTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `value` if unseen and returns its 1-based ordinal.
    pub fn intern(&mut self, value: &str) -> usize {
        if let Some(&ordinal) = self.index.get(value) {
            return ordinal;
        }
        self.entries.push(value.to_string());
        let ordinal = self.entries.len();
        self.index.insert(value.to_string(), ordinal);
        ordinal
    }

    pub fn ordinal(&self, value: &str) -> Option<usize> {
        self.index.get(value).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_separators_are_the_first_twelve() {
        let letters: Vec<_> = SEPARATORS
            .iter()
            .filter(|s| is_letter_separator(s))
            .collect();
        assert_eq!(letters.len(), 12);
        assert!(is_letter_separator("div"));
        assert!(!is_letter_separator("("));
        assert!(!is_letter_separator("end"));
    }

    #[test]
    fn test_symbol_separator_prefers_longest() {
        let rest: Vec<char> = "(*x".chars().collect();
        assert_eq!(match_symbol_separator(&rest), Some("(*"));
        let rest: Vec<char> = "(x".chars().collect();
        assert_eq!(match_symbol_separator(&rest), Some("("));
        let rest: Vec<char> = "*x".chars().collect();
        assert_eq!(match_symbol_separator(&rest), None);
    }

    #[test]
    fn test_intern_table_keeps_first_seen_order() {
        let mut table = InternTable::new();
        assert_eq!(table.intern("b"), 1);
        assert_eq!(table.intern("a"), 2);
        assert_eq!(table.intern("b"), 1);
        assert_eq!(table.len(), 2);
        assert_eq!(table.iter().collect::<Vec<_>>(), vec!["b", "a"]);
        assert_eq!(table.ordinal("a"), Some(2));
        assert_eq!(table.ordinal("c"), None);
    }
}

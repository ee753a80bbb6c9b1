//! One full analysis run and the token listing built from it
//!
//! [`analyze`] runs the lexer and then the parser/checker over one source
//! text. The resulting [`Analysis`] keeps everything a front end needs to show
//! the run: tokens, the identifier and number tables, declared symbols, the
//! lexer trace and the verdict. A failed run keeps no tokens or tables.

use crate::parser::errors::CompileError;
use crate::parser::lexer::{Lexed, Lexer};
use crate::parser::parse::parse_and_check;
use crate::parser::symbols::SymbolTable;
use crate::parser::token::{printable, Token, TokenKind, KEYWORDS, SEPARATORS};
use std::fmt;

/// Outcome of analysing one source text.
#[derive(Debug, Clone)]
pub enum Verdict {
    /// The source is empty or whitespace only; nothing was run.
    Empty,
    Accepted,
    Rejected(CompileError),
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Empty => write!(f, "source is empty"),
            Verdict::Accepted => write!(f, "no errors found"),
            Verdict::Rejected(err) => write!(f, "{}", err),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Analysis {
    pub lexed: Lexed,
    pub symbols: SymbolTable,
    pub verdict: Verdict,
}

impl Analysis {
    pub fn is_accepted(&self) -> bool {
        matches!(self.verdict, Verdict::Accepted)
    }

    pub fn error(&self) -> Option<&CompileError> {
        match &self.verdict {
            Verdict::Rejected(err) => Some(err),
            _ => None,
        }
    }

    pub fn trace(&self) -> &[String] {
        &self.lexed.trace
    }

    /// Listing entries for every non-whitespace token.
    pub fn listing(&self) -> Vec<ListingEntry> {
        self.lexed
            .tokens
            .iter()
            .filter(|token| !token.is_whitespace())
            .map(|token| ListingEntry {
                kind_code: token.kind.code(),
                literal_code: literal_code(token, &self.lexed),
                text: printable(&token.text),
                line: token.line(),
            })
            .collect()
    }
}

/// Analyse one source text.
pub fn analyze(source: &str) -> Analysis {
    if source.trim().is_empty() {
        return Analysis {
            lexed: Lexed::default(),
            symbols: SymbolTable::new(),
            verdict: Verdict::Empty,
        };
    }

    let lexed = match Lexer::new(source).tokenize_traced() {
        Ok(lexed) => lexed,
        Err((err, trace)) => {
            return Analysis {
                lexed: Lexed {
                    trace,
                    ..Lexed::default()
                },
                symbols: SymbolTable::new(),
                verdict: Verdict::Rejected(err),
            };
        }
    };

    match parse_and_check(&lexed.tokens) {
        Ok(symbols) => Analysis {
            lexed,
            symbols,
            verdict: Verdict::Accepted,
        },
        Err(err) => Analysis {
            lexed: Lexed {
                trace: lexed.trace,
                ..Lexed::default()
            },
            symbols: SymbolTable::new(),
            verdict: Verdict::Rejected(err),
        },
    }
}

/// One row of the token listing: `(kind, code) — text [line N]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEntry {
    pub kind_code: usize,
    pub literal_code: usize,
    pub text: String,
    pub line: usize,
}

impl fmt::Display for ListingEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) — {} [line {}]",
            self.kind_code, self.literal_code, self.text, self.line
        )
    }
}

/// 1-based position of the token's text in the table of its kind; 0 if the
/// text is missing from that table.
pub fn literal_code(token: &Token, lexed: &Lexed) -> usize {
    let text = token.text.as_str();
    let position = match token.kind {
        TokenKind::Keyword => KEYWORDS.iter().position(|k| *k == text).map(|i| i + 1),
        TokenKind::Separator => SEPARATORS.iter().position(|s| *s == text).map(|i| i + 1),
        TokenKind::Identifier => lexed.identifiers.ordinal(text),
        TokenKind::Number => lexed.numbers.ordinal(text),
    };
    position.unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_skips_whitespace_tokens() {
        let analysis = analyze("a : integer;\na = 10 end");
        assert!(analysis.is_accepted());
        let rows: Vec<String> = analysis.listing().iter().map(|e| e.to_string()).collect();
        assert_eq!(
            rows,
            vec![
                "(3, 1) — a [line 1]",
                "(2, 16) — : [line 1]",
                "(1, 4) — integer [line 1]",
                "(2, 18) — ; [line 1]",
                "(3, 1) — a [line 2]",
                "(2, 21) — = [line 2]",
                "(4, 1) — 1010 (10) [line 2]",
                "(1, 3) — end [line 2]",
            ]
        );
    }

    #[test]
    fn test_empty_source_is_not_analysed() {
        let analysis = analyze("  \n\t");
        assert!(matches!(analysis.verdict, Verdict::Empty));
        assert_eq!(analysis.verdict.to_string(), "source is empty");
        assert!(analysis.listing().is_empty());
    }

    #[test]
    fn test_failed_run_keeps_only_the_trace() {
        let analysis = analyze("a : integer;\na = 1.5\nend");
        let err = analysis.error().unwrap();
        assert_eq!(err.line(), 2);
        assert!(analysis.lexed.tokens.is_empty());
        assert!(analysis.symbols.is_empty());
        assert!(!analysis.trace().is_empty());
    }
}

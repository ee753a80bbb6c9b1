//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and the token-level helpers the
//! grammar methods share, plus the [`parse_and_check`] entry point.
//!
//! # Parser Architecture
//!
//! The Parser is a recursive descent recogniser that type-checks as it goes:
//! - This module: Parser struct, layout handling, token expectations
//! - `declarations`: the program loop and variable declarations
//! - `statements`: compound, assignment, conditional, loops, input/output
//! - `expressions`: the three binary precedence levels, `~` and primaries
//!
//! # Layout
//!
//! The token stream still contains spaces, newlines and `(* ... *)` comment
//! spans. Every grammar method skips layout before the token it expects, and
//! expressions never consume trailing layout, so the single space that
//! separates `input`/`output` arguments is still there for the list parser.
//!
//! # Implementation
//!
//! Parser methods are split across multiple files using `impl Parser` blocks,
//! allowing each module to extend the Parser with related functionality while
//! maintaining access to the shared parser state.

use crate::parser::errors::CompileError;
use crate::parser::symbols::SymbolTable;
use crate::parser::token::{printable, Token, TokenKind};

/// Recursive descent parser and checker over a token slice
pub struct Parser<'a> {
    pub(crate) tokens: &'a [Token],
    pub(crate) position: usize,
    pub(crate) symbols: SymbolTable,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            position: 0,
            symbols: SymbolTable::new(),
        }
    }

    /// Check the whole program and hand back the declared symbols.
    pub fn check(mut self) -> Result<SymbolTable, CompileError> {
        self.parse_program()?;
        Ok(self.symbols)
    }

    // ===== Layout =====

    /// First index at or after `index` that is not layout. A comment span
    /// counts as layout from `(*` through its `*)`, or to the end of input.
    pub(crate) fn layout_end(&self, mut index: usize) -> usize {
        while let Some(token) = self.tokens.get(index) {
            if token.is_whitespace() {
                index += 1;
            } else if token.is_separator("(*") {
                index += 1;
                while self
                    .tokens
                    .get(index)
                    .is_some_and(|t| !t.is_separator("*)"))
                {
                    index += 1;
                }
                if index < self.tokens.len() {
                    index += 1;
                }
            } else {
                break;
            }
        }
        index
    }

    pub(crate) fn skip_layout(&mut self) {
        self.position = self.layout_end(self.position);
    }

    /// The `n`-th grammar-significant token ahead, without consuming anything.
    pub(crate) fn peek_significant(&self, n: usize) -> Option<&'a Token> {
        let mut index = self.layout_end(self.position);
        for _ in 0..n {
            index = self.layout_end(index + 1);
        }
        self.tokens.get(index)
    }

    pub(crate) fn next_significant(&self) -> Option<&'a Token> {
        self.peek_significant(0)
    }

    // ===== Helper methods =====

    pub(crate) fn current(&self) -> Option<&'a Token> {
        self.tokens.get(self.position)
    }

    pub(crate) fn advance(&mut self) -> Option<&'a Token> {
        let token = self.current()?;
        self.position += 1;
        Some(token)
    }

    pub(crate) fn check_separator(&self, text: &str) -> bool {
        self.next_significant().is_some_and(|t| t.is_separator(text))
    }

    pub(crate) fn check_keyword(&self, text: &str) -> bool {
        self.next_significant().is_some_and(|t| t.is_keyword(text))
    }

    /// Consume the current token (no layout skipping) if it has the given kind
    /// and, when `text` is set, exactly that text.
    pub(crate) fn consume(
        &mut self,
        kind: TokenKind,
        text: Option<&str>,
    ) -> Result<&'a Token, CompileError> {
        let token = self.current().ok_or_else(unexpected_end)?;
        let matches = token.kind == kind && text.map_or(true, |t| token.text == t);
        if !matches {
            let expected = match text {
                Some(t) => format!("{}('{}')", kind, printable(t)),
                None => kind.to_string(),
            };
            return Err(CompileError::syntax(
                token.line(),
                format!("expected {}, found {}", expected, token),
            ));
        }
        self.position += 1;
        Ok(token)
    }

    pub(crate) fn expect(
        &mut self,
        kind: TokenKind,
        text: Option<&str>,
    ) -> Result<&'a Token, CompileError> {
        self.skip_layout();
        self.consume(kind, text)
    }

    pub(crate) fn expect_separator(&mut self, text: &str) -> Result<&'a Token, CompileError> {
        self.expect(TokenKind::Separator, Some(text))
    }

    pub(crate) fn expect_keyword(&mut self, text: &str) -> Result<&'a Token, CompileError> {
        self.expect(TokenKind::Keyword, Some(text))
    }

    pub(crate) fn expect_identifier(&mut self) -> Result<&'a Token, CompileError> {
        self.expect(TokenKind::Identifier, None)
    }

    /// Take the next significant token if it is one of the given operator
    /// separators; otherwise leave the position untouched.
    pub(crate) fn take_operator(&mut self, operators: &[&str]) -> Option<&'a Token> {
        let token = self.next_significant()?;
        if token.kind != TokenKind::Separator || !operators.contains(&token.text.as_str()) {
            return None;
        }
        self.skip_layout();
        self.advance()
    }
}

/// Syntax error for a token stream that ends before the grammar is satisfied.
pub(crate) fn unexpected_end() -> CompileError {
    CompileError::syntax(0, "unexpected end of file")
}

/// Check a token sequence against the grammar and type rules.
pub fn parse_and_check(tokens: &[Token]) -> Result<SymbolTable, CompileError> {
    Parser::new(tokens).check()
}

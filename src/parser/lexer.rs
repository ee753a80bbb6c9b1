//! Lexer (tokenizer) for toy language source
//!
//! Converts raw source text into a flat [`Token`] stream consumed by the
//! parser. Layout is not discarded: every space and newline becomes its own
//! separator token, and comments are delimited by `(*` / `*)` separator
//! tokens so that a consumer can rebuild the layout of the program.
//!
//! Alongside the tokens the lexer fills two [`InternTable`]s (identifiers and
//! number display texts) and records a trace of every scanning decision.

use super::errors::CompileError;
use super::numeral::{self, Numeral, ScanState, Step};
use super::token::{
    is_keyword, is_letter_separator, match_symbol_separator, InternTable, SourceLocation, Token,
    TokenKind,
};

/// Result of a successful lexer run.
#[derive(Debug, Clone, Default)]
pub struct Lexed {
    pub tokens: Vec<Token>,
    pub identifiers: InternTable,
    pub numbers: InternTable,
    pub trace: Vec<String>,
}

/// Lexer for toy language source
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
    tokens: Vec<Token>,
    identifiers: InternTable,
    numbers: InternTable,
    trace: Vec<String>,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
            tokens: Vec::new(),
            identifiers: InternTable::new(),
            numbers: InternTable::new(),
            trace: Vec::new(),
        }
    }

    /// Tokenize the entire input, stopping at the first lexical error.
    pub fn tokenize(mut self) -> Result<Lexed, CompileError> {
        self.run()?;
        Ok(Lexed {
            tokens: self.tokens,
            identifiers: self.identifiers,
            numbers: self.numbers,
            trace: self.trace,
        })
    }

    /// Like [`Lexer::tokenize`], but a failure also hands back the trace
    /// recorded up to the error.
    pub fn tokenize_traced(mut self) -> Result<Lexed, (CompileError, Vec<String>)> {
        if let Err(err) = self.run() {
            self.log(format!("stopped: {}", err.message()));
            return Err((err, self.trace));
        }
        Ok(Lexed {
            tokens: self.tokens,
            identifiers: self.identifiers,
            numbers: self.numbers,
            trace: self.trace,
        })
    }

    fn run(&mut self) -> Result<(), CompileError> {
        while let Some(ch) = self.peek() {
            match ch {
                '\n' | ' ' => {
                    self.push_separator(if ch == '\n' { "\n" } else { " " });
                    self.advance();
                }
                _ if ch.is_whitespace() => {
                    self.advance();
                }
                '(' if self.peek_ahead(1) == Some('*') => self.comment(),
                _ if ch.is_ascii_alphabetic() => self.letter_lexeme()?,
                _ if ch.is_ascii_digit() || ch == '.' => self.number()?,
                _ => {
                    if !self.symbol_separator() {
                        return Err(CompileError::lexical(
                            self.line,
                            format!("invalid character '{}'", ch),
                        ));
                    }
                }
            }
        }
        Ok(())
    }

    /// Identifier, keyword or letter separator
    fn letter_lexeme(&mut self) -> Result<(), CompileError> {
        let loc = self.current_location();
        let mut word = String::new();

        while let Some(ch) = self.peek() {
            if !(ch.is_alphanumeric() || ch == '_') {
                break;
            }
            if !ch.is_ascii() {
                return Err(CompileError::lexical(
                    self.line,
                    format!("invalid character '{}' in identifier", ch),
                ));
            }
            word.push(ch);
            self.advance();
        }

        let kind = if is_letter_separator(&word) {
            TokenKind::Separator
        } else if is_keyword(&word) {
            TokenKind::Keyword
        } else {
            self.identifiers.intern(&word);
            TokenKind::Identifier
        };
        self.trace.push(format!(
            "[line {}, column {}] {}: {}",
            loc.line, loc.column, kind, word
        ));
        self.tokens.push(Token::new(kind, word, loc));
        Ok(())
    }

    /// Emit the longest symbolic separator at the cursor, if any.
    fn symbol_separator(&mut self) -> bool {
        let Some(sep) = match_symbol_separator(&self.input[self.position..]) else {
            return false;
        };
        self.push_separator(sep);
        for _ in 0..sep.chars().count() {
            self.advance();
        }
        true
    }

    fn number(&mut self) -> Result<(), CompileError> {
        let loc = self.current_location();
        let mut raw = String::new();
        let mut state = ScanState::Start;
        self.log(format!("number: {} state", state));

        while let Some(ch) = self.peek() {
            match numeral::step(state, ch) {
                Step::Accept { push, next } => {
                    raw.push(push);
                    self.advance();
                    self.log_transition(state, next, &raw);
                    state = next;
                }
                Step::Insert { push, next } => {
                    raw.push(push);
                    self.log_transition(state, next, &raw);
                    state = next;
                }
                Step::Stop => break,
                Step::Reject(message) => return Err(CompileError::lexical(self.line, message)),
            }
        }

        let numeral =
            Numeral::derive(&raw).map_err(|message| CompileError::lexical(self.line, message))?;
        self.numbers.intern(&numeral.display);
        self.log(format!("NUMBER: {}", numeral.display));
        self.tokens.push(Token::number(numeral.display, raw, loc));
        Ok(())
    }

    /// `(*` ... `*)`; an unterminated comment runs to the end of input.
    fn comment(&mut self) {
        let start_line = self.line;
        self.log("comment opened".to_string());
        self.push_separator("(*");
        self.advance();
        self.advance();

        while !self.is_at_end() {
            if self.peek() == Some('*') && self.peek_ahead(1) == Some(')') {
                self.push_separator("*)");
                self.advance();
                self.advance();
                self.log("comment closed".to_string());
                return;
            }
            self.advance();
        }

        self.log(format!(
            "end of input inside the comment opened on line {}",
            start_line
        ));
    }

    fn push_separator(&mut self, text: &str) {
        let loc = self.current_location();
        self.tokens.push(Token::new(TokenKind::Separator, text, loc));
    }

    fn log(&mut self, message: String) {
        self.trace.push(format!(
            "[line {}, column {}] {}",
            self.line, self.column, message
        ));
    }

    fn log_transition(&mut self, from: ScanState, to: ScanState, raw: &str) {
        if from == to {
            self.log(format!("{} -> {}", from, raw));
        } else {
            self.log(format!("{} -> {}: {}", from, to, raw));
        }
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Peek ahead n characters
    fn peek_ahead(&self, n: usize) -> Option<char> {
        self.input.get(self.position + n).copied()
    }

    /// Advance to next character
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }
}

/// Tokenize `source` into tokens and interned tables.
pub fn tokenize(source: &str) -> Result<Lexed, CompileError> {
    Lexer::new(source).tokenize()
}

//! # Introduction
//!
//! toylang is the front end of a small teaching language: a lexer with
//! multi-base numeric literals and a recursive-descent parser that type checks
//! the program in the same pass. Results are shown in a terminal UI built with
//! [ratatui](https://docs.rs/ratatui) or printed as a token listing.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Tokens (+ tables) → Parser/Checker → Analysis → TUI / listing
//! ```
//!
//! 1. [`parser`]: tokenizes the source, parses it and checks types against a
//!    flat [`SymbolTable`]. The first error ends the run.
//! 2. [`analysis`]: runs both passes over one source text and builds the
//!    `(kind, code) — text [line N]` listing.
//! 3. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Language
//!
//! Types: `integer`, `real`, `boolean`.
//! Statements: assignment (`let` optional), `{ ... }`, `if/then/else/end_else`,
//! `for (;;)`, `do while ... loop`, `input(...)`, `output(...)`.
//! Comments: `(* ... *)`.

pub mod analysis;
pub mod parser;
pub mod ui;

pub use analysis::{analyze, Analysis, ListingEntry, Verdict};
pub use parser::errors::{CompileError, ErrorKind};
pub use parser::lexer::{tokenize, Lexed};
pub use parser::parse::parse_and_check;
pub use parser::symbols::{SymbolTable, ValueType};
pub use parser::token::{Token, TokenKind};

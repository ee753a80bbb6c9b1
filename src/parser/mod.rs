//! Toy language front end
//!
//! This module turns source text into a checked program:
//! - [`token`]: token model, fixed keyword/separator tables, interned tables
//! - [`numeral`]: numeric literal state machine and display derivation
//! - [`lexer`]: tokenization (source text → tokens)
//! - [`parse`]: recursive descent parsing with inline type checking
//! - [`symbols`]: the flat symbol table
//! - [`errors`]: the lexical / syntax / semantic error type
//!
//! # Language
//!
//! Programs are a sequence of declarations (`a, b : integer;`) and statements
//! ending in `end`. Types are `integer`, `real` and `boolean`; operators are
//! spelled as words (`plus`, `div`, `LT`, ...). Numbers may carry a base suffix
//! (`1010b`, `17o`, `99d`, `1ACh`) or be written as floats (`3.14`, `1E3`).
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent; grammar recognition and type checking
//! happen in the same pass, and the first error ends the analysis.

pub mod declarations;
pub mod errors;
pub mod expressions;
pub mod lexer;
pub mod numeral;
pub mod parse;
pub mod statements;
pub mod symbols;
pub mod token;

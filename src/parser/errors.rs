//! Compile error type shared by the lexer and the parser/checker
//!
//! Every error is fatal: the pass that detects it stops and returns it, and
//! the caller discards whatever partial state was built.

use std::fmt;

/// Which phase rejected the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lexical,
    Syntax,
    Semantic,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Lexical => write!(f, "lexical"),
            ErrorKind::Syntax => write!(f, "syntax"),
            ErrorKind::Semantic => write!(f, "semantic"),
        }
    }
}

/// First error found in a source text. `line` is 1-based; 0 means the token
/// stream ended before the grammar was satisfied.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    /// Malformed or unrecognised characters
    #[error("[line {line}] lexical error: {message}")]
    Lexical { line: usize, message: String },

    /// Token sequence does not match the grammar
    #[error("[line {line}] syntax error: {message}")]
    Syntax { line: usize, message: String },

    /// Declaration or type rule violated
    #[error("[line {line}] semantic error: {message}")]
    Semantic { line: usize, message: String },
}

impl CompileError {
    pub fn lexical(line: usize, message: impl Into<String>) -> Self {
        CompileError::Lexical {
            line,
            message: message.into(),
        }
    }

    pub fn syntax(line: usize, message: impl Into<String>) -> Self {
        CompileError::Syntax {
            line,
            message: message.into(),
        }
    }

    pub fn semantic(line: usize, message: impl Into<String>) -> Self {
        CompileError::Semantic {
            line,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CompileError::Lexical { .. } => ErrorKind::Lexical,
            CompileError::Syntax { .. } => ErrorKind::Syntax,
            CompileError::Semantic { .. } => ErrorKind::Semantic,
        }
    }

    pub fn line(&self) -> usize {
        match self {
            CompileError::Lexical { line, .. }
            | CompileError::Syntax { line, .. }
            | CompileError::Semantic { line, .. } => *line,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            CompileError::Lexical { message, .. }
            | CompileError::Syntax { message, .. }
            | CompileError::Semantic { message, .. } => message,
        }
    }
}

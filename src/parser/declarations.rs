//! Program and declaration parsing
//!
//! # Grammar
//!
//! ```text
//! program     ::= { declaration | statement } "end"
//! declaration ::= identifier { "," identifier } ":" type ";"
//! type        ::= "integer" | "real" | "boolean"
//! ```
//!
//! A declaration is recognised by lookahead: an identifier followed by `,` or
//! `:`. Anything else at the top level is parsed as a statement.

use crate::parser::errors::CompileError;
use crate::parser::parse::Parser;
use crate::parser::symbols::ValueType;
use crate::parser::token::TokenKind;

impl<'a> Parser<'a> {
    /// Parse the whole program up to and including the final `end`.
    pub(crate) fn parse_program(&mut self) -> Result<(), CompileError> {
        while let Some(token) = self.next_significant() {
            if token.is_keyword("end") {
                break;
            }
            if self.at_declaration() {
                self.parse_declaration()?;
            } else {
                self.parse_statement()?;
            }
        }

        self.expect_keyword("end")?;
        Ok(())
    }

    pub(crate) fn at_declaration(&self) -> bool {
        let name = self.peek_significant(0);
        let follower = self.peek_significant(1);
        name.is_some_and(|t| t.kind == TokenKind::Identifier)
            && follower.is_some_and(|t| t.is_separator(",") || t.is_separator(":"))
    }

    /// Parse `a, b : type;` and declare every name.
    pub(crate) fn parse_declaration(&mut self) -> Result<(), CompileError> {
        let mut names = vec![self.expect_identifier()?];
        while self.check_separator(",") {
            self.expect_separator(",")?;
            names.push(self.expect_identifier()?);
        }

        self.expect_separator(":")?;
        let type_token = self.expect(TokenKind::Keyword, None)?;
        let ty = ValueType::from_keyword(&type_token.text).ok_or_else(|| {
            CompileError::syntax(
                type_token.line(),
                format!("unknown type '{}'", type_token.text),
            )
        })?;

        for name in names {
            self.symbols.declare(&name.text, ty, name.line())?;
        }

        self.expect_separator(";")?;
        Ok(())
    }
}

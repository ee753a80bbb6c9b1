//! Statement parsing implementation
//!
//! # Grammar
//!
//! ```text
//! statement   ::= compound | assignment | conditional | fixed_loop
//!               | cond_loop | input_stmt | output_stmt
//! compound    ::= "{" statement { ";" statement } "}"
//! assignment  ::= [ "let" ] identifier "=" expression
//! conditional ::= "if" expression "then" statement [ "else" statement ] "end_else"
//! fixed_loop  ::= "for" "(" [expression] ";" [expression] ";" [expression] ")" statement
//! cond_loop   ::= "do" "while" expression statement "loop"
//! input_stmt  ::= "input" "(" identifier { " " identifier } ")"
//! output_stmt ::= "output" "(" expression { " " expression } ")"
//! ```
//!
//! Only the `if` condition is constrained to `boolean`; the `for` clauses and
//! the `do while` condition are checked for internal consistency only.

use crate::parser::errors::CompileError;
use crate::parser::parse::{unexpected_end, Parser};
use crate::parser::symbols::ValueType;
use crate::parser::token::{printable, TokenKind};

impl<'a> Parser<'a> {
    /// Parse a statement
    pub(crate) fn parse_statement(&mut self) -> Result<(), CompileError> {
        self.skip_layout();
        let token = self.current().ok_or_else(unexpected_end)?;

        match (token.kind, token.text.as_str()) {
            (TokenKind::Identifier, _) | (TokenKind::Keyword, "let") => self.parse_assignment(),
            (TokenKind::Separator, "{") => self.parse_compound(),
            (TokenKind::Keyword, "if") => self.parse_conditional(),
            (TokenKind::Keyword, "for") => self.parse_fixed_loop(),
            (TokenKind::Keyword, "do") => self.parse_conditional_loop(),
            (TokenKind::Keyword, "input") => self.parse_input(),
            (TokenKind::Keyword, "output") => self.parse_output(),
            _ => Err(CompileError::syntax(
                token.line(),
                format!("unexpected token '{}'", printable(&token.text)),
            )),
        }
    }

    fn parse_compound(&mut self) -> Result<(), CompileError> {
        self.expect_separator("{")?;
        self.parse_statement()?;
        while self.check_separator(";") {
            self.expect_separator(";")?;
            self.parse_statement()?;
        }
        self.expect_separator("}")?;
        Ok(())
    }

    fn parse_assignment(&mut self) -> Result<(), CompileError> {
        if self.check_keyword("let") {
            self.expect_keyword("let")?;
        }
        let name = self.expect_identifier()?;
        self.expect_separator("=")?;
        let value = self.parse_expression()?;

        // the target is looked up only after the value has been checked
        let target = self.symbols.lookup(&name.text, name.line())?;
        if target != value.ty {
            return Err(CompileError::semantic(
                name.line(),
                format!(
                    "type mismatch in assignment to '{}': '{}' and '{}' ({})",
                    name.text, target, value.ty, value.text
                ),
            ));
        }
        Ok(())
    }

    fn parse_conditional(&mut self) -> Result<(), CompileError> {
        self.expect_keyword("if")?;
        let condition = self.parse_expression()?;
        if condition.ty != ValueType::Boolean {
            // reported at the token after the condition, usually `then`
            let line = self.next_significant().map_or(0, |t| t.line());
            return Err(CompileError::semantic(
                line,
                format!(
                    "if condition must be boolean, found '{}' ({})",
                    condition.ty, condition.text
                ),
            ));
        }

        self.expect_keyword("then")?;
        self.parse_statement()?;
        if self.check_keyword("else") {
            self.expect_keyword("else")?;
            self.parse_statement()?;
        }
        self.expect_keyword("end_else")?;
        Ok(())
    }

    fn parse_fixed_loop(&mut self) -> Result<(), CompileError> {
        self.expect_keyword("for")?;
        self.expect_separator("(")?;
        for terminator in [";", ";", ")"] {
            if !self.check_separator(terminator) {
                self.parse_expression()?;
            }
            self.expect_separator(terminator)?;
        }
        self.parse_statement()
    }

    fn parse_conditional_loop(&mut self) -> Result<(), CompileError> {
        self.expect_keyword("do")?;
        self.expect_keyword("while")?;
        // unlike `if`, the loop condition may have any type
        self.parse_expression()?;
        self.parse_statement()?;
        self.expect_keyword("loop")?;
        Ok(())
    }

    fn parse_input(&mut self) -> Result<(), CompileError> {
        self.expect_keyword("input")?;
        self.expect_separator("(")?;
        loop {
            let name = self.expect_identifier()?;
            self.symbols.lookup(&name.text, name.line())?;
            if !self.at_argument_space() {
                break;
            }
            self.consume(TokenKind::Separator, Some(" "))?;
        }
        self.expect_separator(")")?;
        Ok(())
    }

    fn parse_output(&mut self) -> Result<(), CompileError> {
        self.expect_keyword("output")?;
        self.expect_separator("(")?;
        loop {
            self.parse_expression()?;
            if !self.at_argument_space() {
                break;
            }
            self.consume(TokenKind::Separator, Some(" "))?;
        }
        self.expect_separator(")")?;
        Ok(())
    }

    /// The argument separator of input/output lists is a literal space token
    /// followed by another argument; a space before `)` is plain layout.
    fn at_argument_space(&self) -> bool {
        self.current().is_some_and(|t| t.is_separator(" ")) && !self.check_separator(")")
    }
}

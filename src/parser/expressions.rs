//! Expression parsing and type inference
//!
//! Three left-associative binary levels, from loosest to tightest:
//!
//! ```text
//! expression ::= operand { relop operand }          NE EQ LT LE GT GE
//! operand    ::= addend { addop addend }            plus min or
//! addend     ::= unary { mulop unary }              mult div and
//! unary      ::= "~" unary | primary
//! primary    ::= identifier | number | "true" | "false" | "(" expression ")"
//! ```
//!
//! Each level returns a [`TypedValue`]. Both operands of a binary operator
//! must have the same type; relational operators yield `boolean`, the other
//! two groups yield the operand type. `or` and `and` do not require boolean
//! operands. `div` is rejected between two integers.

use crate::parser::errors::CompileError;
use crate::parser::parse::{unexpected_end, Parser};
use crate::parser::symbols::ValueType;
use crate::parser::token::{printable, Token, TokenKind};

const RELATIONAL: [&str; 6] = ["NE", "EQ", "LT", "LE", "GT", "GE"];
const ADDITIVE: [&str; 3] = ["plus", "min", "or"];
const MULTIPLICATIVE: [&str; 3] = ["mult", "div", "and"];

/// Type of a checked sub-expression plus its reconstructed text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedValue {
    pub ty: ValueType,
    pub text: String,
}

impl TypedValue {
    fn new(ty: ValueType, text: impl Into<String>) -> Self {
        Self {
            ty,
            text: text.into(),
        }
    }
}

impl<'a> Parser<'a> {
    /// Parse expression (top-level entry point)
    pub(crate) fn parse_expression(&mut self) -> Result<TypedValue, CompileError> {
        let mut left = self.parse_operand()?;

        while let Some(op) = self.take_operator(&RELATIONAL) {
            let right = self.parse_operand()?;
            let text = combined(&left, op, &right);
            same_type(&left, &right, op, "relational", &text)?;
            left = TypedValue::new(ValueType::Boolean, text);
        }

        Ok(left)
    }

    fn parse_operand(&mut self) -> Result<TypedValue, CompileError> {
        let mut left = self.parse_addend()?;

        while let Some(op) = self.take_operator(&ADDITIVE) {
            let right = self.parse_addend()?;
            let text = combined(&left, op, &right);
            same_type(&left, &right, op, "additive", &text)?;
            left = TypedValue::new(left.ty, text);
        }

        Ok(left)
    }

    fn parse_addend(&mut self) -> Result<TypedValue, CompileError> {
        let mut left = self.parse_unary()?;

        while let Some(op) = self.take_operator(&MULTIPLICATIVE) {
            let right = self.parse_unary()?;
            let text = combined(&left, op, &right);
            same_type(&left, &right, op, "multiplicative", &text)?;
            if op.text == "div" && left.ty == ValueType::Integer {
                return Err(CompileError::semantic(
                    op.line(),
                    format!("operation 'div' is not allowed for integer operands ({})", text),
                ));
            }
            left = TypedValue::new(left.ty, text);
        }

        Ok(left)
    }

    fn parse_unary(&mut self) -> Result<TypedValue, CompileError> {
        self.skip_layout();
        let Some(op) = self.current().filter(|t| t.is_separator("~")) else {
            return self.parse_primary();
        };
        self.advance();

        let operand = self.parse_unary()?;
        if operand.ty != ValueType::Boolean {
            return Err(CompileError::semantic(
                op.line(),
                format!(
                    "operator '~' needs a boolean operand, found '{}' ({})",
                    operand.ty, operand.text
                ),
            ));
        }
        Ok(TypedValue::new(
            ValueType::Boolean,
            format!("~{}", operand.text),
        ))
    }

    fn parse_primary(&mut self) -> Result<TypedValue, CompileError> {
        self.skip_layout();
        let token = self.current().ok_or_else(unexpected_end)?;

        match token.kind {
            TokenKind::Identifier => {
                self.advance();
                let ty = self.symbols.lookup(&token.text, token.line())?;
                Ok(TypedValue::new(ty, token.text.as_str()))
            }
            TokenKind::Number => {
                self.advance();
                // the display text only contains '.' when the digits do
                let ty = if token.text.contains('.') {
                    ValueType::Real
                } else {
                    ValueType::Integer
                };
                let text = token.raw_numeric.as_deref().unwrap_or(&token.text);
                Ok(TypedValue::new(ty, text))
            }
            TokenKind::Keyword if token.text == "true" || token.text == "false" => {
                self.advance();
                Ok(TypedValue::new(ValueType::Boolean, token.text.as_str()))
            }
            TokenKind::Separator if token.text == "(" => {
                self.advance();
                let inner = self.parse_expression()?;
                self.expect_separator(")")?;
                Ok(inner)
            }
            _ => Err(CompileError::syntax(
                token.line(),
                format!("unexpected token '{}'", printable(&token.text)),
            )),
        }
    }
}

fn combined(left: &TypedValue, op: &Token, right: &TypedValue) -> String {
    format!("{} {} {}", left.text, op.text, right.text)
}

fn same_type(
    left: &TypedValue,
    right: &TypedValue,
    op: &Token,
    group: &str,
    text: &str,
) -> Result<(), CompileError> {
    if left.ty == right.ty {
        return Ok(());
    }
    Err(CompileError::semantic(
        op.line(),
        format!(
            "type mismatch in {} operation '{}': '{}' and '{}'",
            group, text, left.ty, right.ty
        ),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::errors::ErrorKind;
    use crate::parser::lexer::tokenize;

    /// Declares `decls`, then parses `expr` as a standalone expression.
    fn infer(decls: &[(&str, ValueType)], expr: &str) -> Result<TypedValue, CompileError> {
        let lexed = tokenize(expr).unwrap();
        let mut parser = Parser::new(&lexed.tokens);
        for (name, ty) in decls {
            parser.symbols.declare(name, *ty, 1).unwrap();
        }
        parser.parse_expression()
    }

    #[test]
    fn test_relational_yields_boolean() {
        let value = infer(&[("a", ValueType::Real)], "a LT 2.5").unwrap();
        assert_eq!(value, TypedValue::new(ValueType::Boolean, "a LT 2.5"));
    }

    #[test]
    fn test_chaining_is_left_associative() {
        let value = infer(&[("a", ValueType::Integer)], "a plus 1 min 2 mult a").unwrap();
        assert_eq!(value.ty, ValueType::Integer);
        assert_eq!(value.text, "a plus 1 min 2 mult a");
    }

    #[test]
    fn test_parentheses_are_transparent() {
        let value = infer(&[], "(true and false) or ~(false)").unwrap();
        assert_eq!(value, TypedValue::new(ValueType::Boolean, "true and false or ~false"));
    }

    #[test]
    fn test_div_on_integers_is_rejected() {
        let err = infer(&[("a", ValueType::Integer)], "a div 2").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Semantic);
        assert!(err.message().starts_with("operation 'div' is not allowed"));

        let value = infer(&[("x", ValueType::Real)], "x div 2.0").unwrap();
        assert_eq!(value.ty, ValueType::Real);
    }

    #[test]
    fn test_or_and_accept_non_boolean_operands() {
        // `or` and `and` only require matching types
        assert_eq!(infer(&[], "1 or 2").unwrap().ty, ValueType::Integer);
        assert_eq!(infer(&[], "1.5 and 2.5").unwrap().ty, ValueType::Real);
    }

    #[test]
    fn test_tilde_needs_boolean() {
        let err = infer(&[], "~1").unwrap_err();
        assert_eq!(err.message(), "operator '~' needs a boolean operand, found 'integer' (1)");
    }

    #[test]
    fn test_number_literal_types() {
        assert_eq!(infer(&[], "3.14").unwrap().ty, ValueType::Real);
        assert_eq!(infer(&[], "1ACh").unwrap(), TypedValue::new(ValueType::Integer, "1ACH"));
        // an exponent without a fraction still reads as integer
        assert_eq!(infer(&[], "1E3").unwrap(), TypedValue::new(ValueType::Integer, "1E+3"));
    }

    #[test]
    fn test_relational_mismatch() {
        let err = infer(&[("b", ValueType::Boolean)], "b EQ 1").unwrap_err();
        assert_eq!(
            err.message(),
            "type mismatch in relational operation 'b EQ 1': 'boolean' and 'integer'"
        );
    }

    #[test]
    fn test_expression_keeps_trailing_layout() {
        let lexed = tokenize("1 plus 2 x").unwrap();
        let mut parser = Parser::new(&lexed.tokens);
        parser.parse_expression().unwrap();
        assert!(parser.current().unwrap().is_separator(" "));
    }

    #[test]
    fn test_unexpected_end_inside_expression() {
        let err = infer(&[], "1 plus").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Syntax);
        assert_eq!(err.line(), 0);
    }
}

//! Flat symbol table used while checking a program
//!
//! There is a single namespace for the whole program: a name may be declared
//! once, and every use must follow its declaration.

use super::errors::CompileError;
use rustc_hash::FxHashMap;
use std::fmt;

/// Semantic type of a declared name or an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Integer,
    Real,
    Boolean,
}

impl ValueType {
    /// Type named by a declaration keyword.
    pub fn from_keyword(word: &str) -> Option<ValueType> {
        match word {
            "integer" => Some(ValueType::Integer),
            "real" => Some(ValueType::Real),
            "boolean" => Some(ValueType::Boolean),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ValueType::Integer => "integer",
            ValueType::Real => "real",
            ValueType::Boolean => "boolean",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable {
    types: FxHashMap<String, ValueType>,
    order: Vec<String>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare `name`; `line` is reported if it already exists.
    pub fn declare(&mut self, name: &str, ty: ValueType, line: usize) -> Result<(), CompileError> {
        if self.types.contains_key(name) {
            return Err(CompileError::semantic(
                line,
                format!("variable '{}' is already declared", name),
            ));
        }
        self.types.insert(name.to_string(), ty);
        self.order.push(name.to_string());
        Ok(())
    }

    /// Type of a declared name; `line` is reported if it is unknown.
    pub fn lookup(&self, name: &str, line: usize) -> Result<ValueType, CompileError> {
        self.types.get(name).copied().ok_or_else(|| {
            CompileError::semantic(line, format!("variable '{}' is not declared", name))
        })
    }

    pub fn get(&self, name: &str) -> Option<ValueType> {
        self.types.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Declared names with their types, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, ValueType)> + '_ {
        self.order
            .iter()
            .map(move |name| (name.as_str(), self.types[name]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::errors::ErrorKind;

    #[test]
    fn test_declare_and_lookup() {
        let mut symbols = SymbolTable::new();
        symbols.declare("b", ValueType::Real, 1).unwrap();
        symbols.declare("a", ValueType::Boolean, 2).unwrap();
        assert_eq!(symbols.lookup("a", 3), Ok(ValueType::Boolean));
        assert_eq!(
            symbols.iter().collect::<Vec<_>>(),
            vec![("b", ValueType::Real), ("a", ValueType::Boolean)]
        );
    }

    #[test]
    fn test_redeclaration_is_rejected_even_with_same_type() {
        let mut symbols = SymbolTable::new();
        symbols.declare("a", ValueType::Integer, 1).unwrap();
        let err = symbols.declare("a", ValueType::Integer, 4).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Semantic);
        assert_eq!(err.line(), 4);
        assert_eq!(symbols.get("a"), Some(ValueType::Integer));
    }

    #[test]
    fn test_unknown_name() {
        let symbols = SymbolTable::new();
        let err = symbols.lookup("ghost", 7).unwrap_err();
        assert_eq!(err.message(), "variable 'ghost' is not declared");
        assert_eq!(err.line(), 7);
    }
}

//! # Source Printer
//!
//! `Display` implementations that render a tree back to source text.
//! Infix, prefix and index expressions are fully parenthesized, so the
//! printed text parses back to an equal tree without precedence concerns.
//!
//! ## Example
//!
//! ```rust
//! use csg_ast::{Expression, InfixOperator};
//!
//! let sum = Expression::Infix {
//!     left: Box::new(Expression::Integer(1)),
//!     operator: InfixOperator::Add,
//!     right: Box::new(Expression::Integer(2)),
//! };
//! assert_eq!(sum.to_string(), "(1 + 2)");
//! ```

use crate::ast::*;
use std::fmt;

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_statements(f, &self.statements, "\n")
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.statements.is_empty() {
            return write!(f, "{{ }}");
        }
        write!(f, "{{ ")?;
        write_statements(f, &self.statements, " ")?;
        write!(f, " }}")
    }
}

/// Writes statements separated by `separator`, terminating every expression
/// statement except the last so adjacent expressions cannot merge.
fn write_statements(f: &mut fmt::Formatter<'_>, statements: &[Statement], separator: &str) -> fmt::Result {
    for (i, statement) in statements.iter().enumerate() {
        write!(f, "{statement}")?;
        if i + 1 < statements.len() {
            if matches!(statement, Statement::Expression(_)) {
                write!(f, ";")?;
            }
            write!(f, "{separator}")?;
        }
    }
    Ok(())
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Let { name, value } => write!(f, "let {name} = {value};"),
            Statement::Return(value) => write!(f, "return {value};"),
            Statement::Expression(expression) => write!(f, "{expression}"),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Identifier(name) => write!(f, "{name}"),
            Expression::Integer(value) => write!(f, "{value}"),
            // Debug keeps a fraction or exponent, so the literal stays a float.
            Expression::Float(value) => write!(f, "{value:?}"),
            Expression::String(value) => write!(f, "\"{value}\""),
            Expression::Boolean(value) => write!(f, "{value}"),
            Expression::Undef => write!(f, "undef"),
            Expression::Prefix { operator, right } => write!(f, "({}{right})", operator.symbol()),
            Expression::Infix { left, operator, right } => {
                write!(f, "({left} {} {right})", operator.symbol())
            }
            Expression::If {
                condition,
                consequence,
                alternative,
            } => {
                write!(f, "if ({condition}) {consequence}")?;
                if let Some(alternative) = alternative {
                    write!(f, " else {alternative}")?;
                }
                Ok(())
            }
            Expression::Function { parameters, body } => {
                write!(f, "function({}) {body}", parameters.join(", "))
            }
            Expression::Call { function, arguments } => {
                write!(f, "{function}(")?;
                write_list(f, arguments)?;
                write!(f, ")")
            }
            Expression::Array(elements) => {
                write!(f, "[")?;
                write_list(f, elements)?;
                write!(f, "]")
            }
            Expression::Hash(pairs) => {
                write!(f, "{{")?;
                for (i, (key, value)) in pairs.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            }
            Expression::Index { left, index } => write!(f, "({left}[{index}])"),
            Expression::NamedArgument { name, value } => write!(f, "{name} = {value}"),
            Expression::Primitive(primitive) => write!(f, "{primitive}"),
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.kind.keyword())?;
        write_list(f, &self.arguments)?;
        write!(f, ")")?;
        if let Some(body) = &self.body {
            write!(f, " {body}")?;
        }
        Ok(())
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, items: &[Expression]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================

//! # Operator Parsing
//!
//! Binding powers and infix handlers.
//!
//! ## Operator Precedence
//!
//! | Precedence | Operators |
//! |------------|-----------|
//! | 1 | == != = (named argument) |
//! | 2 | < > |
//! | 3 | + - |
//! | 4 | * / |
//! | 5 | ! - (prefix) |
//! | 6 | ( (call) |
//! | 7 | [ (index) |

use super::Parser;
use crate::error::{ParseError, ParseErrorKind};
use crate::lexer::TokenKind;
use csg_ast::{Expression, InfixOperator};

// =============================================================================
// PRECEDENCE
// =============================================================================

/// Operator precedence levels.
///
/// Higher values bind tighter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(super) enum Precedence {
    /// Sentinel for "any expression"
    Lowest,
    /// `==`, `!=` and `=`
    Equals,
    /// `<`, `>`
    LessGreater,
    /// `+`, `-`
    Sum,
    /// `*`, `/`
    Product,
    /// `!x`, `-x`
    Prefix,
    /// `f(x)`
    Call,
    /// `a[i]`
    Index,
}

impl Precedence {
    /// Binding power of a token in infix position.
    pub(super) fn of(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Eq | TokenKind::NotEq | TokenKind::Assign => Self::Equals,
            TokenKind::Lt | TokenKind::Gt => Self::LessGreater,
            TokenKind::Plus | TokenKind::Minus => Self::Sum,
            TokenKind::Asterisk | TokenKind::Slash => Self::Product,
            TokenKind::LParen => Self::Call,
            TokenKind::LBracket => Self::Index,
            _ => Self::Lowest,
        }
    }
}

/// Infix handler signature; receives the already-parsed left operand.
pub(super) type InfixParseFn<'a> =
    fn(&mut Parser<'a>, Expression) -> Result<Expression, ParseError>;

/// Binary operator a token spells, if any.
fn infix_operator(kind: TokenKind) -> Option<InfixOperator> {
    Some(match kind {
        TokenKind::Plus => InfixOperator::Add,
        TokenKind::Minus => InfixOperator::Subtract,
        TokenKind::Asterisk => InfixOperator::Multiply,
        TokenKind::Slash => InfixOperator::Divide,
        TokenKind::Lt => InfixOperator::LessThan,
        TokenKind::Gt => InfixOperator::GreaterThan,
        TokenKind::Eq => InfixOperator::Equal,
        TokenKind::NotEq => InfixOperator::NotEqual,
        _ => return None,
    })
}

// =============================================================================
// INFIX HANDLERS
// =============================================================================

impl<'a> Parser<'a> {
    /// Infix handler registered for a token kind.
    pub(super) fn infix_rule(kind: TokenKind) -> Option<InfixParseFn<'a>> {
        match kind {
            TokenKind::LParen => Some(Self::parse_call_expression),
            TokenKind::LBracket => Some(Self::parse_index_expression),
            TokenKind::Assign => Some(Self::parse_named_argument),
            kind if infix_operator(kind).is_some() => Some(Self::parse_infix_expression),
            _ => None,
        }
    }

    /// `left OP right`, left-associative.
    fn parse_infix_expression(&mut self, left: Expression) -> Result<Expression, ParseError> {
        let operator = infix_operator(self.cur.kind).ok_or_else(|| {
            ParseError::new(
                ParseErrorKind::NoPrefixParseFn {
                    found: self.cur.kind.display().to_string(),
                },
                self.cur.position,
            )
        })?;
        let precedence = Precedence::of(self.cur.kind);
        self.next_token();
        let right = self.parse_expression(precedence)?;

        Ok(Expression::Infix {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        })
    }

    /// `function(arguments)`
    fn parse_call_expression(&mut self, function: Expression) -> Result<Expression, ParseError> {
        let arguments = self.parse_expression_list(TokenKind::RParen)?;
        Ok(Expression::Call {
            function: Box::new(function),
            arguments,
        })
    }

    /// `left[index]`
    fn parse_index_expression(&mut self, left: Expression) -> Result<Expression, ParseError> {
        self.next_token();
        let index = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RBracket)?;

        Ok(Expression::Index {
            left: Box::new(left),
            index: Box::new(index),
        })
    }

    /// `name = value`; the value extends as far right as possible.
    fn parse_named_argument(&mut self, left: Expression) -> Result<Expression, ParseError> {
        let Expression::Identifier(name) = left else {
            return Err(ParseError::new(
                ParseErrorKind::InvalidNamedArgument {
                    found: left.to_string(),
                },
                self.cur.position,
            ));
        };
        self.next_token();
        let value = self.parse_expression(Precedence::Lowest)?;

        Ok(Expression::NamedArgument {
            name,
            value: Box::new(value),
        })
    }
}

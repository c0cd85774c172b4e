//! # Expression Parsing
//!
//! The Pratt loop and every prefix handler except the CSG keywords.
//!
//! ## Example
//!
//! ```text
//! 5 + 2 * 10
//! if (x < 10) { x } else { 10 }
//! function(a, b) { a + b }
//! [1, 2, 3][0]
//! {"size": 10}
//! ```

use super::operators::Precedence;
use super::Parser;
use crate::error::{ParseError, ParseErrorKind};
use crate::lexer::TokenKind;
use csg_ast::{Expression, PrefixOperator};

/// Prefix handler signature; called with the first token under the cursor.
type PrefixParseFn<'a> = fn(&mut Parser<'a>) -> Result<Expression, ParseError>;

impl<'a> Parser<'a> {
    /// Parse an expression whose operators bind tighter than `precedence`.
    ///
    /// Leaves `cur` on the last token of the expression.
    pub(super) fn parse_expression(
        &mut self,
        precedence: Precedence,
    ) -> Result<Expression, ParseError> {
        let prefix = Self::prefix_rule(self.cur.kind).ok_or_else(|| {
            ParseError::new(
                ParseErrorKind::NoPrefixParseFn {
                    found: self.cur.kind.display().to_string(),
                },
                self.cur.position,
            )
        })?;
        let mut left = prefix(self)?;

        while !self.peek_is(TokenKind::Semicolon) && precedence < self.peek_precedence() {
            // A block primitive ends its statement at the closing brace.
            if matches!(&left, Expression::Primitive(p) if p.body.is_some()) {
                break;
            }
            let Some(infix) = Self::infix_rule(self.peek.kind) else {
                break;
            };
            self.next_token();
            left = infix(self, left)?;
        }

        Ok(left)
    }

    /// Prefix handler registered for a token kind.
    fn prefix_rule(kind: TokenKind) -> Option<PrefixParseFn<'a>> {
        match kind {
            TokenKind::Ident => Some(Self::parse_identifier),
            TokenKind::Int => Some(Self::parse_integer_literal),
            TokenKind::Float => Some(Self::parse_float_literal),
            TokenKind::String => Some(Self::parse_string_literal),
            TokenKind::True | TokenKind::False => Some(Self::parse_boolean),
            TokenKind::Undef => Some(Self::parse_undef),
            TokenKind::Bang | TokenKind::Minus => Some(Self::parse_prefix_expression),
            TokenKind::LParen => Some(Self::parse_grouped_expression),
            TokenKind::If => Some(Self::parse_if_expression),
            TokenKind::Function => Some(Self::parse_function_literal),
            TokenKind::LBracket => Some(Self::parse_array_literal),
            TokenKind::LBrace => Some(Self::parse_hash_literal),
            kind if kind.primitive().is_some() => Some(Self::parse_primitive),
            _ => None,
        }
    }

    // =========================================================================
    // LITERALS
    // =========================================================================

    fn parse_identifier(&mut self) -> Result<Expression, ParseError> {
        Ok(Expression::Identifier(self.cur.literal.clone()))
    }

    fn parse_integer_literal(&mut self) -> Result<Expression, ParseError> {
        self.cur
            .literal
            .parse()
            .map(Expression::Integer)
            .map_err(|_| {
                ParseError::new(
                    ParseErrorKind::InvalidInteger {
                        text: self.cur.literal.clone(),
                    },
                    self.cur.position,
                )
            })
    }

    fn parse_float_literal(&mut self) -> Result<Expression, ParseError> {
        self.cur
            .literal
            .parse()
            .map(Expression::Float)
            .map_err(|_| {
                ParseError::new(
                    ParseErrorKind::InvalidFloat {
                        text: self.cur.literal.clone(),
                    },
                    self.cur.position,
                )
            })
    }

    fn parse_string_literal(&mut self) -> Result<Expression, ParseError> {
        Ok(Expression::String(self.cur.literal.clone()))
    }

    fn parse_boolean(&mut self) -> Result<Expression, ParseError> {
        Ok(Expression::Boolean(self.cur_is(TokenKind::True)))
    }

    fn parse_undef(&mut self) -> Result<Expression, ParseError> {
        Ok(Expression::Undef)
    }

    // =========================================================================
    // OPERATORS AND GROUPING
    // =========================================================================

    /// `!right` or `-right`
    fn parse_prefix_expression(&mut self) -> Result<Expression, ParseError> {
        let operator = if self.cur_is(TokenKind::Bang) {
            PrefixOperator::Not
        } else {
            PrefixOperator::Negate
        };
        self.next_token();
        let right = self.parse_expression(Precedence::Prefix)?;

        Ok(Expression::Prefix {
            operator,
            right: Box::new(right),
        })
    }

    /// `( expression )`
    fn parse_grouped_expression(&mut self) -> Result<Expression, ParseError> {
        self.next_token();
        let expression = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen)?;
        Ok(expression)
    }

    // =========================================================================
    // CONTROL FLOW AND FUNCTIONS
    // =========================================================================

    /// `if (condition) { ... } [else { ... }]`
    fn parse_if_expression(&mut self) -> Result<Expression, ParseError> {
        self.expect_peek(TokenKind::LParen)?;
        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen)?;
        self.expect_peek(TokenKind::LBrace)?;
        let consequence = self.parse_block()?;

        let alternative = if self.peek_is(TokenKind::Else) {
            self.next_token();
            self.expect_peek(TokenKind::LBrace)?;
            Some(self.parse_block()?)
        } else {
            None
        };

        Ok(Expression::If {
            condition: Box::new(condition),
            consequence,
            alternative,
        })
    }

    /// `function(a, b) { ... }`
    fn parse_function_literal(&mut self) -> Result<Expression, ParseError> {
        self.expect_peek(TokenKind::LParen)?;
        let parameters = self.parse_function_parameters()?;
        self.expect_peek(TokenKind::LBrace)?;
        let body = self.parse_block()?;
        Ok(Expression::Function { parameters, body })
    }

    fn parse_function_parameters(&mut self) -> Result<Vec<String>, ParseError> {
        let mut parameters = Vec::new();
        if self.peek_is(TokenKind::RParen) {
            self.next_token();
            return Ok(parameters);
        }

        self.expect_peek(TokenKind::Ident)?;
        parameters.push(self.cur.literal.clone());
        while self.peek_is(TokenKind::Comma) {
            self.next_token();
            self.expect_peek(TokenKind::Ident)?;
            parameters.push(self.cur.literal.clone());
        }

        self.expect_peek(TokenKind::RParen)?;
        Ok(parameters)
    }

    // =========================================================================
    // COLLECTIONS
    // =========================================================================

    /// `[a, b, c]`
    fn parse_array_literal(&mut self) -> Result<Expression, ParseError> {
        Ok(Expression::Array(
            self.parse_expression_list(TokenKind::RBracket)?,
        ))
    }

    /// `{key: value, ...}`
    fn parse_hash_literal(&mut self) -> Result<Expression, ParseError> {
        let mut pairs = Vec::new();

        while !self.peek_is(TokenKind::RBrace) {
            self.next_token();
            let key = self.parse_expression(Precedence::Lowest)?;
            self.expect_peek(TokenKind::Colon)?;
            self.next_token();
            let value = self.parse_expression(Precedence::Lowest)?;
            pairs.push((key, value));

            if !self.peek_is(TokenKind::RBrace) {
                self.expect_peek(TokenKind::Comma)?;
            }
        }

        self.expect_peek(TokenKind::RBrace)?;
        Ok(Expression::Hash(pairs))
    }

    /// Comma-separated expressions up to `end`, with `cur` on the opening
    /// delimiter. Leaves `cur` on `end`.
    pub(super) fn parse_expression_list(
        &mut self,
        end: TokenKind,
    ) -> Result<Vec<Expression>, ParseError> {
        let mut list = Vec::new();
        if self.peek_is(end) {
            self.next_token();
            return Ok(list);
        }

        self.next_token();
        list.push(self.parse_expression(Precedence::Lowest)?);
        while self.peek_is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            list.push(self.parse_expression(Precedence::Lowest)?);
        }

        self.expect_peek(end)?;
        Ok(list)
    }
}

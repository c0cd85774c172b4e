//! # Primitive Parsing
//!
//! Handlers for the CSG keywords.
//!
//! ## Grammar
//!
//! ```text
//! leaf  = KEYWORD "(" arguments ")" [";"]
//! block = KEYWORD ["(" arguments ")"] ( ";" | "{" statements "}" )
//! ```
//!
//! Arguments are positional expressions or `name = expression` pairs.
//! Whether a block keyword produced the leaf or block form is decided by
//! the presence of the braces alone.

use super::Parser;
use crate::error::{ParseError, ParseErrorKind};
use crate::lexer::TokenKind;
use csg_ast::{Expression, Primitive};

impl<'a> Parser<'a> {
    /// Parse a primitive with `cur` on its keyword.
    ///
    /// A keyword followed by `=` is an argument name, as in `text(text = "A")`.
    pub(super) fn parse_primitive(&mut self) -> Result<Expression, ParseError> {
        if self.peek_is(TokenKind::Assign) {
            return Ok(Expression::Identifier(self.cur.literal.clone()));
        }

        let kind = self.cur.kind.primitive().ok_or_else(|| {
            ParseError::new(
                ParseErrorKind::NoPrefixParseFn {
                    found: self.cur.kind.display().to_string(),
                },
                self.cur.position,
            )
        })?;

        let (arguments, body) = if kind.accepts_body() {
            let arguments = if self.peek_is(TokenKind::LParen) {
                self.next_token();
                self.parse_expression_list(TokenKind::RParen)?
            } else {
                Vec::new()
            };
            let body = if self.peek_is(TokenKind::LBrace) {
                self.next_token();
                Some(self.parse_block()?)
            } else {
                None
            };
            (arguments, body)
        } else {
            self.expect_peek(TokenKind::LParen)?;
            (self.parse_expression_list(TokenKind::RParen)?, None)
        };

        Ok(Expression::Primitive(Primitive {
            kind,
            arguments,
            body,
        }))
    }
}

// =============================================================================
// TESTS
// =============================================================================

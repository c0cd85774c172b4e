//! # CSG Parser
//!
//! Pratt parser for the CSG scripting language.
//! Produces a [`Program`] plus the list of errors it recovered from.
//!
//! ## Example
//!
//! ```rust
//! use csg_parser::lexer::Lexer;
//! use csg_parser::parser::Parser;
//!
//! let mut parser = Parser::new(Lexer::new("cube(10);"));
//! let program = parser.parse_program();
//! assert!(parser.errors().is_empty());
//! assert_eq!(program.statements.len(), 1);
//! ```
//!
//! ## Architecture
//!
//! - `operators` - precedence table and infix handlers
//! - `expressions` - the Pratt loop and prefix handlers
//! - `primitives` - CSG keyword handlers

mod expressions;
mod operators;
mod primitives;

use crate::error::{ParseError, ParseErrorKind};
use crate::lexer::{Lexer, Token, TokenKind};
use csg_ast::{Block, Program, Statement};
use operators::Precedence;

// =============================================================================
// PARSER
// =============================================================================

/// Pratt parser with two tokens of lookahead.
///
/// Comment tokens are dropped before the parser sees them.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    /// Token under examination.
    cur: Token,
    /// Token after `cur`.
    peek: Token,
    /// Collected parse errors.
    errors: Vec<ParseError>,
}

impl<'a> Parser<'a> {
    /// Create a parser and load the first two tokens.
    pub fn new(mut lexer: Lexer<'a>) -> Self {
        let cur = next_significant(&mut lexer);
        let peek = next_significant(&mut lexer);
        Self {
            lexer,
            cur,
            peek,
            errors: Vec::new(),
        }
    }

    /// Parse the entire input.
    ///
    /// Never stops at the first error: a failing statement is dropped, the
    /// error is recorded and parsing resumes at the next statement boundary.
    ///
    /// ## Returns
    ///
    /// Program holding every statement that parsed cleanly
    pub fn parse_program(&mut self) -> Program {
        Program {
            statements: self.parse_statements_until(TokenKind::Eof),
        }
    }

    /// Human-readable error messages, in the order they were found.
    pub fn errors(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// Take ownership of the collected errors.
    pub fn into_errors(self) -> Vec<ParseError> {
        self.errors
    }

    // =========================================================================
    // TOKEN ACCESS
    // =========================================================================

    /// Shift the lookahead window one token forward.
    fn next_token(&mut self) {
        let next = next_significant(&mut self.lexer);
        self.cur = std::mem::replace(&mut self.peek, next);
    }

    fn cur_is(&self, kind: TokenKind) -> bool {
        self.cur.kind == kind
    }

    fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// Advance only if the next token has the expected kind.
    ///
    /// ## Returns
    ///
    /// Ok when the token was consumed, or an `UnexpectedToken` error at the
    /// position of the token actually found
    fn expect_peek(&mut self, kind: TokenKind) -> Result<(), ParseError> {
        if self.peek_is(kind) {
            self.next_token();
            Ok(())
        } else {
            Err(ParseError::new(
                ParseErrorKind::UnexpectedToken {
                    expected: kind.display().to_string(),
                    found: self.peek.kind.display().to_string(),
                },
                self.peek.position,
            ))
        }
    }

    fn peek_precedence(&self) -> Precedence {
        Precedence::of(self.peek.kind)
    }

    // =========================================================================
    // STATEMENTS
    // =========================================================================

    /// Parse statements until `end` (or EOF) is the current token.
    fn parse_statements_until(&mut self, end: TokenKind) -> Vec<Statement> {
        let mut statements = Vec::new();

        while !self.cur_is(end) && !self.cur_is(TokenKind::Eof) {
            match self.parse_statement() {
                Ok(statement) => statements.push(statement),
                Err(error) => {
                    self.errors.push(error);
                    self.synchronize();
                    if self.cur_is(end) {
                        break;
                    }
                }
            }
            self.next_token();
        }

        statements
    }

    /// Parse one statement, leaving `cur` on its last token.
    fn parse_statement(&mut self) -> Result<Statement, ParseError> {
        let statement = match self.cur.kind {
            TokenKind::Let => self.parse_let_statement()?,
            TokenKind::Return => {
                self.next_token();
                Statement::Return(self.parse_expression(Precedence::Lowest)?)
            }
            _ => Statement::Expression(self.parse_expression(Precedence::Lowest)?),
        };

        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        }
        Ok(statement)
    }

    /// `let IDENT = expression`
    fn parse_let_statement(&mut self) -> Result<Statement, ParseError> {
        self.expect_peek(TokenKind::Ident)?;
        let name = self.cur.literal.clone();
        self.expect_peek(TokenKind::Assign)?;
        self.next_token();
        let value = self.parse_expression(Precedence::Lowest)?;
        Ok(Statement::Let { name, value })
    }

    /// Parse `{ statements }` starting with `cur` on the opening brace.
    fn parse_block(&mut self) -> Result<Block, ParseError> {
        self.next_token();
        let statements = self.parse_statements_until(TokenKind::RBrace);

        if !self.cur_is(TokenKind::RBrace) {
            return Err(ParseError::new(
                ParseErrorKind::UnexpectedToken {
                    expected: TokenKind::RBrace.display().to_string(),
                    found: self.cur.kind.display().to_string(),
                },
                self.cur.position,
            ));
        }
        Ok(Block { statements })
    }

    // =========================================================================
    // ERROR RECOVERY
    // =========================================================================

    /// Skip to the end of the broken statement.
    ///
    /// Stops on a `;` or `}` under the cursor, or right before a `}` or EOF.
    fn synchronize(&mut self) {
        while !matches!(
            self.cur.kind,
            TokenKind::Semicolon | TokenKind::RBrace | TokenKind::Eof
        ) && !matches!(self.peek.kind, TokenKind::RBrace | TokenKind::Eof)
        {
            self.next_token();
        }
    }
}

/// Next token that is not a comment.
fn next_significant(lexer: &mut Lexer<'_>) -> Token {
    loop {
        let token = lexer.next_token();
        if token.kind != TokenKind::Comment {
            return token;
        }
    }
}

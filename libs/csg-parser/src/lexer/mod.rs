//! # CSG Lexer
//!
//! Tokenizes CSG source code one token per call.
//!
//! ## Example
//!
//! ```rust
//! use csg_parser::lexer::{Lexer, TokenKind};
//!
//! let tokens = Lexer::new("cube(10);").tokenize();
//! assert_eq!(tokens[0].kind, TokenKind::Cube);
//! assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
//! ```

mod cursor;
mod token;

pub use cursor::{Cursor, Position};
pub use token::{Token, TokenKind};

// =============================================================================
// LEXER
// =============================================================================

/// CSG lexer.
///
/// Call [`Lexer::next_token`] repeatedly; once the input is exhausted every
/// further call returns an EOF token.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
        }
    }

    /// Tokenize the entire source.
    ///
    /// ## Returns
    ///
    /// Vector of tokens ending with the EOF token.
    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let done = token.is_eof();
            tokens.push(token);
            if done {
                return tokens;
            }
        }
    }

    /// Scan the next token.
    pub fn next_token(&mut self) -> Token {
        self.cursor.advance_while(|c| matches!(c, ' ' | '\t' | '\r' | '\n'));

        let start = self.cursor.position();
        let Some(c) = self.cursor.advance() else {
            return Token::new(TokenKind::Eof, "", start);
        };

        let kind = match c {
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '[' => TokenKind::LBracket,
            ']' => TokenKind::RBracket,
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            ';' => TokenKind::Semicolon,
            ',' => TokenKind::Comma,
            ':' => TokenKind::Colon,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Asterisk,
            '<' => TokenKind::Lt,
            '>' => TokenKind::Gt,

            '=' => self.two_char('=', TokenKind::Eq, TokenKind::Assign),
            '!' => self.two_char('=', TokenKind::NotEq, TokenKind::Bang),

            '/' if self.cursor.peek() == Some('/') => {
                self.cursor.advance();
                let text = self.cursor.advance_while(|c| c != '\n');
                return Token::new(TokenKind::Comment, text, start);
            }
            '/' => TokenKind::Slash,

            '"' => return self.scan_string(start),
            '0'..='9' => return self.scan_number(start),
            c if is_ident_start(c) => return self.scan_identifier(start),

            _ => TokenKind::Illegal,
        };

        Token::new(kind, self.cursor.slice_from(start.byte), start)
    }

    /// Consume `second` if it follows, choosing between the two-character and
    /// single-character kinds.
    fn two_char(&mut self, second: char, double: TokenKind, single: TokenKind) -> TokenKind {
        if self.cursor.peek() == Some(second) {
            self.cursor.advance();
            double
        } else {
            single
        }
    }

    /// Scan a string literal. There are no escapes; an unterminated string
    /// runs to the end of the input.
    fn scan_string(&mut self, start: Position) -> Token {
        let text = self.cursor.advance_while(|c| c != '"');
        self.cursor.advance();
        Token::new(TokenKind::String, text, start)
    }

    /// Scan a number literal. A `.` or an exponent makes it a float; a sign is
    /// only part of the literal directly after the exponent marker.
    fn scan_number(&mut self, start: Position) -> Token {
        let mut kind = TokenKind::Int;
        let mut has_dot = false;
        let mut has_exponent = false;

        while let Some(c) = self.cursor.peek() {
            match c {
                '0'..='9' => {}
                '.' if !has_dot && !has_exponent => {
                    has_dot = true;
                    kind = TokenKind::Float;
                }
                'e' | 'E' if !has_exponent => {
                    has_exponent = true;
                    kind = TokenKind::Float;
                    self.cursor.advance();
                    if matches!(self.cursor.peek(), Some('+' | '-')) {
                        self.cursor.advance();
                    }
                    continue;
                }
                _ => break,
            }
            self.cursor.advance();
        }

        Token::new(kind, self.cursor.slice_from(start.byte), start)
    }

    /// Scan an identifier or keyword.
    fn scan_identifier(&mut self, start: Position) -> Token {
        self.cursor.advance_while(|c| is_ident_start(c) || c.is_ascii_digit());
        let text = self.cursor.slice_from(start.byte);
        Token::new(TokenKind::lookup_ident(text), text, start)
    }
}

/// Letters, `_` and the `$` of special variables like `$fn`.
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '$'
}

// =============================================================================
// TESTS
// =============================================================================

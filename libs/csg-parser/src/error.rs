//! # Parse Errors
//!
//! Error types for the CSG parser.
//!
//! ## Example
//!
//! ```rust
//! use csg_parser::error::{ParseError, ParseErrorKind};
//! use csg_parser::lexer::Position;
//!
//! let error = ParseError::new(
//!     ParseErrorKind::NoPrefixParseFn { found: ")".to_string() },
//!     Position::default(),
//! );
//! assert_eq!(error.message(), "no prefix parse function for ) found");
//! ```

use crate::lexer::Position;
use std::fmt;

// =============================================================================
// PARSE ERROR
// =============================================================================

/// A parse error with location information.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    /// Error kind with details.
    pub kind: ParseErrorKind,
    /// Position of the offending token.
    pub position: Position,
}

impl ParseError {
    /// Create a new parse error.
    ///
    /// ## Parameters
    ///
    /// - `kind`: Error kind
    /// - `position`: Source location
    pub const fn new(kind: ParseErrorKind, position: Position) -> Self {
        Self { kind, position }
    }

    /// Message without the location suffix.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.kind, self.position)
    }
}

impl std::error::Error for ParseError {}

// =============================================================================
// PARSE ERROR KIND
// =============================================================================

/// Kinds of parse errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorKind {
    /// The next token was not the one the grammar requires.
    UnexpectedToken {
        /// Display form of the expected token kind.
        expected: String,
        /// Display form of the token that was found.
        found: String,
    },

    /// No expression can start with this token.
    NoPrefixParseFn {
        found: String,
    },

    /// Integer literal out of range.
    InvalidInteger {
        text: String,
    },

    /// Malformed float literal.
    InvalidFloat {
        text: String,
    },

    /// Left side of a `name = value` argument is not an identifier.
    InvalidNamedArgument {
        found: String,
    },
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedToken { expected, found } => {
                write!(f, "expected next token to be {expected}, got {found} instead")
            }
            Self::NoPrefixParseFn { found } => {
                write!(f, "no prefix parse function for {found} found")
            }
            Self::InvalidInteger { text } => write!(f, "could not parse {text:?} as integer"),
            Self::InvalidFloat { text } => write!(f, "could not parse {text:?} as float"),
            Self::InvalidNamedArgument { found } => {
                write!(f, "expected identifier before '=', got {found}")
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_token_display() {
        let error = ParseError::new(
            ParseErrorKind::UnexpectedToken {
                expected: ")".to_string(),
                found: "EOF".to_string(),
            },
            Position::new(4, 1, 5),
        );
        assert_eq!(
            error.to_string(),
            "expected next token to be ), got EOF instead at line 1, column 5"
        );
    }

    #[test]
    fn test_literal_errors_quote_text() {
        let kind = ParseErrorKind::InvalidInteger {
            text: "99999999999999999999".to_string(),
        };
        assert_eq!(
            kind.to_string(),
            "could not parse \"99999999999999999999\" as integer"
        );
    }
}

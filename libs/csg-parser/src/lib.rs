//! # CSG Parser
//!
//! Lexer and Pratt parser for the CSG scripting language.
//!
//! ## Architecture
//!
//! ```text
//! Source Text → Lexer → Tokens → Parser → Program
//! ```
//!
//! ## Example
//!
//! ```rust
//! use csg_parser::parse;
//!
//! let output = parse("union() { cube(10); sphere(r = 5); }");
//! assert!(output.is_ok());
//! assert_eq!(output.program.statements.len(), 1);
//! ```
//!
//! ## Pipeline Integration
//!
//! ```text
//! csg-parser → csg-eval → csg-irmf → csg-cli
//! ```

pub mod error;
pub mod lexer;
pub mod parser;

pub use error::{ParseError, ParseErrorKind};
pub use lexer::{Lexer, Position, Token, TokenKind};
pub use parser::Parser;

use csg_ast::Program;

// =============================================================================
// PUBLIC API
// =============================================================================

/// Result of parsing a source text.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutput {
    /// Every statement that parsed cleanly.
    pub program: Program,
    /// Errors the parser recovered from.
    pub errors: Vec<ParseError>,
}

impl ParseOutput {
    /// True when the source parsed without errors.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Errors rendered as messages with their positions.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

/// Parse CSG source code into a program.
///
/// ## Parameters
///
/// - `source`: CSG source code string
///
/// ## Returns
///
/// `ParseOutput` with the program and any recovered errors
///
/// ## Example
///
/// ```rust
/// let output = csg_parser::parse("cube(; sphere(5);");
/// assert!(!output.is_ok());
/// assert_eq!(output.program.statements.len(), 1);
/// ```
pub fn parse(source: &str) -> ParseOutput {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();
    ParseOutput {
        program,
        errors: parser.into_errors(),
    }
}

// =============================================================================
// TESTS
// =============================================================================

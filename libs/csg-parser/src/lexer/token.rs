//! # Tokens
//!
//! Token types for the CSG lexer.
//!
//! ## Example
//!
//! ```rust
//! use csg_parser::lexer::{Position, Token, TokenKind};
//!
//! let token = Token::new(TokenKind::Int, "10", Position::default());
//! assert_eq!(token.kind, TokenKind::Int);
//! ```

use super::cursor::Position;
use csg_ast::PrimitiveKind;

// =============================================================================
// TOKEN
// =============================================================================

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// Token type.
    pub kind: TokenKind,
    /// Token text. For strings this excludes the quotes, for comments the `//`.
    pub literal: String,
    /// Where the token starts.
    pub position: Position,
}

impl Token {
    /// Create a new token.
    ///
    /// ## Parameters
    ///
    /// - `kind`: Token type
    /// - `literal`: Token text
    /// - `position`: Source location of the first character
    pub fn new(kind: TokenKind, literal: impl Into<String>, position: Position) -> Self {
        Self {
            kind,
            literal: literal.into(),
            position,
        }
    }

    /// Check if token is EOF.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

// =============================================================================
// TOKEN KIND
// =============================================================================

/// Types of tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Meta
    /// Unrecognized character
    Illegal,
    /// End of input
    Eof,
    /// `// ...` line comment
    Comment,

    // Literals
    /// Identifier like `x` or `$fn`
    Ident,
    /// Integer literal like `10`
    Int,
    /// Float literal like `3.14` or `1e-3`
    Float,
    /// String literal like `"hello"`
    String,

    // Operators
    /// `=`
    Assign,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `!`
    Bang,
    /// `*`
    Asterisk,
    /// `/`
    Slash,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `==`
    Eq,
    /// `!=`
    NotEq,

    // Delimiters
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `:`
    Colon,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `[`
    LBracket,
    /// `]`
    RBracket,

    // Keywords
    Function,
    Let,
    True,
    False,
    If,
    Else,
    Return,
    Undef,

    // CSG keywords
    Circle,
    Color,
    Cube,
    Cylinder,
    Difference,
    Group,
    Hull,
    Intersection,
    LinearExtrude,
    Minkowski,
    Multmatrix,
    Polygon,
    Polyhedron,
    Projection,
    RotateExtrude,
    Sphere,
    Square,
    Text,
    Union,
}

impl TokenKind {
    /// Resolve an identifier-shaped word to its keyword kind, or `Ident`.
    pub fn lookup_ident(word: &str) -> Self {
        match word {
            "function" => Self::Function,
            "let" => Self::Let,
            "true" => Self::True,
            "false" => Self::False,
            "if" => Self::If,
            "else" => Self::Else,
            "return" => Self::Return,
            "undef" => Self::Undef,
            _ => PrimitiveKind::from_keyword(word)
                .map(Self::from_primitive)
                .unwrap_or(Self::Ident),
        }
    }

    /// Token kind of a primitive keyword.
    pub const fn from_primitive(kind: PrimitiveKind) -> Self {
        match kind {
            PrimitiveKind::Circle => Self::Circle,
            PrimitiveKind::Color => Self::Color,
            PrimitiveKind::Cube => Self::Cube,
            PrimitiveKind::Cylinder => Self::Cylinder,
            PrimitiveKind::Difference => Self::Difference,
            PrimitiveKind::Group => Self::Group,
            PrimitiveKind::Hull => Self::Hull,
            PrimitiveKind::Intersection => Self::Intersection,
            PrimitiveKind::LinearExtrude => Self::LinearExtrude,
            PrimitiveKind::Minkowski => Self::Minkowski,
            PrimitiveKind::Multmatrix => Self::Multmatrix,
            PrimitiveKind::Polygon => Self::Polygon,
            PrimitiveKind::Polyhedron => Self::Polyhedron,
            PrimitiveKind::Projection => Self::Projection,
            PrimitiveKind::RotateExtrude => Self::RotateExtrude,
            PrimitiveKind::Sphere => Self::Sphere,
            PrimitiveKind::Square => Self::Square,
            PrimitiveKind::Text => Self::Text,
            PrimitiveKind::Union => Self::Union,
        }
    }

    /// The primitive a CSG keyword token names.
    pub const fn primitive(&self) -> Option<PrimitiveKind> {
        Some(match self {
            Self::Circle => PrimitiveKind::Circle,
            Self::Color => PrimitiveKind::Color,
            Self::Cube => PrimitiveKind::Cube,
            Self::Cylinder => PrimitiveKind::Cylinder,
            Self::Difference => PrimitiveKind::Difference,
            Self::Group => PrimitiveKind::Group,
            Self::Hull => PrimitiveKind::Hull,
            Self::Intersection => PrimitiveKind::Intersection,
            Self::LinearExtrude => PrimitiveKind::LinearExtrude,
            Self::Minkowski => PrimitiveKind::Minkowski,
            Self::Multmatrix => PrimitiveKind::Multmatrix,
            Self::Polygon => PrimitiveKind::Polygon,
            Self::Polyhedron => PrimitiveKind::Polyhedron,
            Self::Projection => PrimitiveKind::Projection,
            Self::RotateExtrude => PrimitiveKind::RotateExtrude,
            Self::Sphere => PrimitiveKind::Sphere,
            Self::Square => PrimitiveKind::Square,
            Self::Text => PrimitiveKind::Text,
            Self::Union => PrimitiveKind::Union,
            _ => return None,
        })
    }

    /// Get display string for error messages.
    pub const fn display(&self) -> &'static str {
        match self {
            Self::Illegal => "ILLEGAL",
            Self::Eof => "EOF",
            Self::Comment => "COMMENT",
            Self::Ident => "IDENT",
            Self::Int => "INT",
            Self::Float => "FLOAT",
            Self::String => "STRING",
            Self::Assign => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Bang => "!",
            Self::Asterisk => "*",
            Self::Slash => "/",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::Colon => ":",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::Function => "FUNCTION",
            Self::Let => "LET",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::Return => "RETURN",
            Self::Undef => "UNDEF",
            Self::Circle => "CIRCLE",
            Self::Color => "COLOR",
            Self::Cube => "CUBE",
            Self::Cylinder => "CYLINDER",
            Self::Difference => "DIFFERENCE",
            Self::Group => "GROUP",
            Self::Hull => "HULL",
            Self::Intersection => "INTERSECTION",
            Self::LinearExtrude => "LINEAR_EXTRUDE",
            Self::Minkowski => "MINKOWSKI",
            Self::Multmatrix => "MULTMATRIX",
            Self::Polygon => "POLYGON",
            Self::Polyhedron => "POLYHEDRON",
            Self::Projection => "PROJECTION",
            Self::RotateExtrude => "ROTATE_EXTRUDE",
            Self::Sphere => "SPHERE",
            Self::Square => "SQUARE",
            Self::Text => "TEXT",
            Self::Union => "UNION",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display())
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_keywords() {
        assert_eq!(TokenKind::lookup_ident("let"), TokenKind::Let);
        assert_eq!(TokenKind::lookup_ident("undef"), TokenKind::Undef);
        assert_eq!(TokenKind::lookup_ident("linear_extrude"), TokenKind::LinearExtrude);
        assert_eq!(TokenKind::lookup_ident("cubes"), TokenKind::Ident);
        assert_eq!(TokenKind::lookup_ident("$fn"), TokenKind::Ident);
    }

    #[test]
    fn test_every_primitive_has_a_keyword_token() {
        for kind in PrimitiveKind::ALL {
            let token = TokenKind::lookup_ident(kind.keyword());
            assert_eq!(token.primitive(), Some(kind));
        }
        assert_eq!(TokenKind::Let.primitive(), None);
    }

    #[test]
    fn test_token_display() {
        assert_eq!(TokenKind::LParen.display(), "(");
        assert_eq!(TokenKind::Ident.to_string(), "IDENT");
    }
}

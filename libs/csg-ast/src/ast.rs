//! # Syntax Tree Nodes
//!
//! Statement and expression variants produced by the parser and consumed by
//! the evaluator.

use serde::{Deserialize, Serialize};

// =============================================================================
// PROGRAM & STATEMENTS
// =============================================================================

/// A parsed source file: an ordered list of top-level statements.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Program {
    pub statements: Vec<Statement>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Statement {
    /// `let name = value;`
    Let { name: String, value: Expression },
    /// `return value;`
    Return(Expression),
    /// Bare expression, optionally terminated by `;`.
    Expression(Expression),
}

/// Brace-delimited statement list used by `if`, function bodies and block primitives.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Block {
    pub statements: Vec<Statement>,
}

// =============================================================================
// EXPRESSIONS
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Expression {
    Identifier(String),
    Integer(i64),
    Float(f64),
    String(String),
    Boolean(bool),
    /// `undef`
    Undef,
    Prefix {
        operator: PrefixOperator,
        right: Box<Expression>,
    },
    Infix {
        left: Box<Expression>,
        operator: InfixOperator,
        right: Box<Expression>,
    },
    If {
        condition: Box<Expression>,
        consequence: Block,
        alternative: Option<Block>,
    },
    /// `function(a, b) { ... }`
    Function { parameters: Vec<String>, body: Block },
    Call {
        function: Box<Expression>,
        arguments: Vec<Expression>,
    },
    Array(Vec<Expression>),
    /// `{key: value, ...}` with pairs kept in source order.
    Hash(Vec<(Expression, Expression)>),
    Index {
        left: Box<Expression>,
        index: Box<Expression>,
    },
    /// `name = value` inside an argument list.
    NamedArgument { name: String, value: Box<Expression> },
    Primitive(Primitive),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PrefixOperator {
    /// `!`
    Not,
    /// `-`
    Negate,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum InfixOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    LessThan,
    GreaterThan,
    Equal,
    NotEqual,
}

impl PrefixOperator {
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Not => "!",
            Self::Negate => "-",
        }
    }
}

impl InfixOperator {
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::LessThan => "<",
            Self::GreaterThan => ">",
            Self::Equal => "==",
            Self::NotEqual => "!=",
        }
    }
}

// =============================================================================
// CSG PRIMITIVES
// =============================================================================

/// A CSG primitive invocation such as `cube(2)` or `union() { ... }`.
///
/// `body` is `Some` for the block form and `None` for the leaf form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Primitive {
    pub kind: PrimitiveKind,
    pub arguments: Vec<Expression>,
    pub body: Option<Block>,
}

/// The closed set of primitive keywords understood by the language.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PrimitiveKind {
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

impl PrimitiveKind {
    /// Every primitive kind, in keyword order.
    pub const ALL: [PrimitiveKind; 19] = [
        Self::Circle,
        Self::Color,
        Self::Cube,
        Self::Cylinder,
        Self::Difference,
        Self::Group,
        Self::Hull,
        Self::Intersection,
        Self::LinearExtrude,
        Self::Minkowski,
        Self::Multmatrix,
        Self::Polygon,
        Self::Polyhedron,
        Self::Projection,
        Self::RotateExtrude,
        Self::Sphere,
        Self::Square,
        Self::Text,
        Self::Union,
    ];

    /// Source keyword for this primitive.
    pub const fn keyword(&self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Color => "color",
            Self::Cube => "cube",
            Self::Cylinder => "cylinder",
            Self::Difference => "difference",
            Self::Group => "group",
            Self::Hull => "hull",
            Self::Intersection => "intersection",
            Self::LinearExtrude => "linear_extrude",
            Self::Minkowski => "minkowski",
            Self::Multmatrix => "multmatrix",
            Self::Polygon => "polygon",
            Self::Polyhedron => "polyhedron",
            Self::Projection => "projection",
            Self::RotateExtrude => "rotate_extrude",
            Self::Sphere => "sphere",
            Self::Square => "square",
            Self::Text => "text",
            Self::Union => "union",
        }
    }

    /// Look up a primitive by its source keyword.
    pub fn from_keyword(word: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.keyword() == word)
    }

    /// Whether the primitive accepts a `{ ... }` body.
    ///
    /// `group` is accepted both with and without a body.
    pub const fn accepts_body(&self) -> bool {
        matches!(
            self,
            Self::Color
                | Self::Difference
                | Self::Group
                | Self::Hull
                | Self::Intersection
                | Self::LinearExtrude
                | Self::Minkowski
                | Self::Multmatrix
                | Self::Projection
                | Self::RotateExtrude
                | Self::Union
        )
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_lookup_roundtrips() {
        for kind in PrimitiveKind::ALL {
            assert_eq!(PrimitiveKind::from_keyword(kind.keyword()), Some(kind));
        }
        assert_eq!(PrimitiveKind::from_keyword("translate"), None);
    }

    #[test]
    fn test_block_kinds() {
        assert!(PrimitiveKind::Union.accepts_body());
        assert!(PrimitiveKind::Group.accepts_body());
        assert!(!PrimitiveKind::Cube.accepts_body());
        assert!(!PrimitiveKind::Polyhedron.accepts_body());
    }
}

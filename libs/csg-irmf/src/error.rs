//! # Compile Errors
//!
//! Error types for shader generation.

use csg_ast::PrimitiveKind;
use csg_eval::EvalError;
use thiserror::Error;

/// Errors that can occur while compiling a scene into a shader.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompileError {
    /// Parse or runtime error from the evaluation layer
    #[error(transparent)]
    Eval(#[from] EvalError),

    /// `multmatrix` argument has no inverse
    #[error("multmatrix: singular matrix (determinant {determinant})")]
    SingularMatrix { determinant: f64 },

    /// A band of a polygon is crossed by more than two edges
    #[error("polygon: concave polygons are not supported")]
    ConcavePolygon,

    /// Polygon with fewer than three points
    #[error("polygon: expected at least 3 points, got {count}")]
    TooFewPoints { count: usize },

    /// Argument of the wrong type or shape
    #[error("{primitive}: {message}")]
    InvalidArgument {
        primitive: PrimitiveKind,
        message: String,
    },

    /// Primitive or feature without a shader translation
    #[error("unsupported: {0}")]
    Unsupported(String),

    /// Value in the scene list that is not a CSG primitive
    #[error("expected a CSG primitive, got {0}")]
    NotAPrimitive(&'static str),
}

impl CompileError {
    /// Creates an invalid argument error.
    pub fn invalid_argument(primitive: PrimitiveKind, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            primitive,
            message: message.into(),
        }
    }
}

//! # Evaluation Errors
//!
//! Errors surfaced at the crate boundary. Inside the evaluator a runtime
//! failure is an [`Object::Error`](crate::Object::Error) value.

use thiserror::Error;

/// Errors that can occur while evaluating a scene.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// The source did not parse; one message per recovered error.
    #[error("parse errors:\n\t{}", .0.join("\n\t"))]
    Parse(Vec<String>),

    /// Evaluation produced an error object.
    #[error("{0}")]
    Runtime(String),
}

// =============================================================================
// TESTS
// =============================================================================

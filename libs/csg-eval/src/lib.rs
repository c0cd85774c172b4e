//! # CSG Eval
//!
//! Tree-walking evaluator for the CSG scripting language.
//!
//! ## Architecture
//!
//! ```text
//! Source → csg-parser (Program) → csg-eval (Object tree) → csg-irmf
//! ```
//!
//! ## Example
//!
//! ```rust
//! use csg_eval::{evaluate, Object};
//!
//! let scene = evaluate("let r = 2; union() { sphere(r = r); cube(r * 2); }").unwrap();
//! assert_eq!(scene.len(), 1);
//! assert_eq!(scene[0].type_name(), "UNION");
//! ```
//!
//! ## Language Notes
//!
//! - Only `null` and `false` are falsy
//! - Integer division by zero is the error `division by zero`
//! - Mixed integer/float arithmetic is carried out in floats

pub mod builtins;
pub mod environment;
pub mod error;
pub mod evaluator;
pub mod object;

pub use environment::{Env, Environment};
pub use error::EvalError;
pub use evaluator::{eval_program, eval_scene};
pub use object::{Builtin, CsgPrimitive, Function, HashKey, HashPair, NamedArgument, Object};

// =============================================================================
// PUBLIC API
// =============================================================================

/// Parse and evaluate source code, returning its top-level CSG objects.
///
/// ## Parameters
///
/// - `source`: CSG source code string
///
/// ## Returns
///
/// CSG objects in source order, `EvalError::Parse` when the source has
/// syntax errors, or `EvalError::Runtime` for the first runtime error
///
/// ## Example
///
/// ```rust
/// use csg_eval::{evaluate, EvalError};
///
/// let err = evaluate("cube(size);").unwrap_err();
/// assert_eq!(err, EvalError::Runtime("identifier not found: size".into()));
/// ```
pub fn evaluate(source: &str) -> Result<Vec<Object>, EvalError> {
    evaluate_in(source, &Environment::new())
}

/// Like [`evaluate`], but binds names in a caller-provided environment.
pub fn evaluate_in(source: &str, env: &Env) -> Result<Vec<Object>, EvalError> {
    let output = csg_parser::parse(source);
    if !output.is_ok() {
        return Err(EvalError::Parse(output.messages()));
    }
    eval_scene(&output.program, env)
}

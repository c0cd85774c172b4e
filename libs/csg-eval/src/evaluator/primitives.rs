//! # Primitive Evaluation
//!
//! CSG keywords evaluate their arguments and, for block primitives, the body
//! statements in the enclosing environment. Every CSG object a body statement
//! produces becomes a child, so loops written as arrays of primitives and
//! helper functions returning primitives both work inside a block.

use super::expressions::eval_expressions;
use super::{collect_statements, with_stack};
use crate::environment::Env;
use crate::object::{CsgPrimitive, Object};
use csg_ast::{Block, Primitive};
use std::rc::Rc;
use tracing::trace;

/// Evaluate a primitive node into a CSG object.
pub(super) fn eval_primitive(primitive: &Primitive, env: &Env) -> Object {
    let arguments = match eval_expressions(&primitive.arguments, env) {
        Ok(arguments) => arguments,
        Err(error) => return error,
    };

    let body = match &primitive.body {
        Some(block) => match with_stack(|| eval_body(block, env)) {
            Ok(children) => Some(children),
            Err(error) => return error,
        },
        None => None,
    };

    trace!(
        kind = %primitive.kind,
        arguments = arguments.len(),
        children = body.as_ref().map_or(0, Vec::len),
        "evaluated primitive"
    );
    Object::Primitive(Rc::new(CsgPrimitive {
        kind: primitive.kind,
        arguments,
        body,
    }))
}

/// Evaluate body statements and collect their CSG objects.
///
/// A `return` ends the body; its value is collected like any other.
fn eval_body(block: &Block, env: &Env) -> Result<Vec<Object>, Object> {
    let mut children = Vec::new();
    collect_statements(&block.statements, env, &mut children).map_err(Object::Error)?;
    Ok(children)
}

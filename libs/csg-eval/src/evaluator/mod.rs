//! # Evaluator
//!
//! Tree-walking evaluation of a parsed [`Program`].
//!
//! ## Example
//!
//! ```rust
//! use csg_eval::{eval_program, Environment, Object};
//!
//! let program = csg_parser::parse("let x = 5; x * 2").program;
//! let result = eval_program(&program, &Environment::new());
//! assert_eq!(result, Object::Integer(10));
//! ```
//!
//! ## Architecture
//!
//! - `expressions` - literals, operators, indexing, calls
//! - `primitives` - CSG primitive nodes and body collection

mod expressions;
mod primitives;

use crate::environment::Env;
use crate::error::EvalError;
use crate::object::Object;
use config::constants::{STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};
use csg_ast::{Block, Expression, Program, Statement};
use stacker::maybe_grow;
use tracing::{debug, instrument};

pub(crate) use expressions::eval_expression;

// =============================================================================
// PROGRAMS
// =============================================================================

/// Evaluate a program and return the value of its last statement.
///
/// A top-level `return` ends the program with its value; an error ends it
/// with the error object.
pub fn eval_program(program: &Program, env: &Env) -> Object {
    let mut result = Object::Null;

    for statement in &program.statements {
        result = eval_statement(statement, env);
        match result {
            Object::ReturnValue(value) => return *value,
            Object::Error(_) => return result,
            _ => {}
        }
    }

    result
}

/// Evaluate a program and collect the CSG objects its statements produce.
///
/// Arrays of CSG objects are flattened; other values are dropped.
///
/// ## Returns
///
/// Top-level CSG objects in source order, or the first runtime error
#[instrument(skip_all, fields(statements = program.statements.len()))]
pub fn eval_scene(program: &Program, env: &Env) -> Result<Vec<Object>, EvalError> {
    let mut objects = Vec::new();
    collect_statements(&program.statements, env, &mut objects).map_err(EvalError::Runtime)?;

    debug!(objects = objects.len(), "collected scene objects");
    Ok(objects)
}

/// Evaluate `statements` and push every CSG object they produce onto `out`.
///
/// A statement-level `if` collects from its taken branch, so each primitive
/// in the branch is kept rather than only the last one.
///
/// ## Returns
///
/// `true` once a `return` has ended the statements, or the first error message
pub(crate) fn collect_statements(
    statements: &[Statement],
    env: &Env,
    out: &mut Vec<Object>,
) -> Result<bool, String> {
    for statement in statements {
        let value = match statement {
            Statement::Expression(Expression::If {
                condition,
                consequence,
                alternative,
            }) => {
                let condition = eval_expression(condition, env);
                if let Object::Error(message) = condition {
                    return Err(message);
                }
                let branch = if condition.is_truthy() {
                    Some(consequence)
                } else {
                    alternative.as_ref()
                };
                if let Some(branch) = branch {
                    if with_stack(|| collect_statements(&branch.statements, env, out))? {
                        return Ok(true);
                    }
                }
                continue;
            }
            statement => eval_statement(statement, env),
        };

        match value {
            Object::Error(message) => return Err(message),
            Object::ReturnValue(inner) => {
                collect_csg(*inner, out);
                return Ok(true);
            }
            value => collect_csg(value, out),
        }
    }

    Ok(false)
}

/// Push the CSG objects contained in `value` onto `out`.
pub(crate) fn collect_csg(value: Object, out: &mut Vec<Object>) {
    match value {
        Object::Primitive(_) => out.push(value),
        Object::Array(elements) => {
            for element in elements.iter() {
                collect_csg(element.clone(), out);
            }
        }
        _ => {}
    }
}

// =============================================================================
// STATEMENTS
// =============================================================================

fn eval_statement(statement: &Statement, env: &Env) -> Object {
    match statement {
        Statement::Let { name, value } => {
            let value = eval_expression(value, env);
            if value.is_error() {
                return value;
            }
            env.borrow_mut().set(name.as_str(), value);
            Object::Null
        }
        Statement::Return(value) => {
            let value = eval_expression(value, env);
            if value.is_error() {
                return value;
            }
            Object::ReturnValue(Box::new(value))
        }
        Statement::Expression(expression) => eval_expression(expression, env),
    }
}

/// Evaluate a block, stopping at the first `return` or error.
///
/// The `ReturnValue` wrapper is kept so enclosing blocks stop as well.
pub(crate) fn eval_block(block: &Block, env: &Env) -> Object {
    let mut result = Object::Null;

    for statement in &block.statements {
        result = eval_statement(statement, env);
        if matches!(result, Object::ReturnValue(_) | Object::Error(_)) {
            return result;
        }
    }

    result
}

/// Run `f` with enough stack for deeply nested scripts.
pub(crate) fn with_stack<R>(f: impl FnOnce() -> R) -> R {
    maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, f)
}

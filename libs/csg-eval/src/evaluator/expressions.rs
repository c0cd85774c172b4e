//! # Expression Evaluation
//!
//! ## Infix Dispatch
//!
//! 1. integer with integer
//! 2. numeric pairs with a float, evaluated as floats
//! 3. string with string
//! 4. `==` / `!=` by identity
//! 5. `type mismatch` for differing types, `unknown operator` otherwise

use super::{eval_block, primitives::eval_primitive, with_stack};
use crate::builtins;
use crate::environment::{Env, Environment};
use crate::object::{Function, HashPair, NamedArgument, Object};
use csg_ast::{Expression, InfixOperator, PrefixOperator};
use std::collections::BTreeMap;
use std::rc::Rc;
use tracing::trace;

/// Evaluate an expression.
pub(crate) fn eval_expression(expression: &Expression, env: &Env) -> Object {
    with_stack(|| eval_expression_inner(expression, env))
}

fn eval_expression_inner(expression: &Expression, env: &Env) -> Object {
    match expression {
        Expression::Identifier(name) => eval_identifier(name, env),
        Expression::Integer(value) => Object::Integer(*value),
        Expression::Float(value) => Object::Float(*value),
        Expression::String(value) => Object::String(value.clone()),
        Expression::Boolean(value) => Object::Boolean(*value),
        Expression::Undef => Object::Null,

        Expression::Prefix { operator, right } => {
            let right = eval_expression(right, env);
            if right.is_error() {
                return right;
            }
            eval_prefix(*operator, right)
        }

        Expression::Infix {
            left,
            operator,
            right,
        } => {
            let left = eval_expression(left, env);
            if left.is_error() {
                return left;
            }
            let right = eval_expression(right, env);
            if right.is_error() {
                return right;
            }
            eval_infix(*operator, &left, &right)
        }

        Expression::If {
            condition,
            consequence,
            alternative,
        } => {
            let condition = eval_expression(condition, env);
            if condition.is_error() {
                return condition;
            }
            if condition.is_truthy() {
                eval_block(consequence, env)
            } else if let Some(alternative) = alternative {
                eval_block(alternative, env)
            } else {
                Object::Null
            }
        }

        Expression::Function { parameters, body } => Object::Function(Rc::new(Function {
            parameters: parameters.clone(),
            body: body.clone(),
            env: Rc::clone(env),
        })),

        Expression::Call {
            function,
            arguments,
        } => {
            let function = eval_expression(function, env);
            if function.is_error() {
                return function;
            }
            match eval_expressions(arguments, env) {
                Ok(arguments) => apply_function(&function, &arguments),
                Err(error) => error,
            }
        }

        Expression::Array(elements) => match eval_expressions(elements, env) {
            Ok(elements) => Object::Array(Rc::new(elements)),
            Err(error) => error,
        },

        Expression::Hash(pairs) => eval_hash_literal(pairs, env),

        Expression::Index { left, index } => {
            let left = eval_expression(left, env);
            if left.is_error() {
                return left;
            }
            let index = eval_expression(index, env);
            if index.is_error() {
                return index;
            }
            eval_index(&left, &index)
        }

        Expression::NamedArgument { name, value } => {
            let value = eval_expression(value, env);
            if value.is_error() {
                return value;
            }
            Object::NamedArgument(Rc::new(NamedArgument {
                name: name.clone(),
                value,
            }))
        }

        Expression::Primitive(primitive) => eval_primitive(primitive, env),
    }
}

/// Evaluate expressions left to right, stopping at the first error.
pub(super) fn eval_expressions(
    expressions: &[Expression],
    env: &Env,
) -> Result<Vec<Object>, Object> {
    expressions
        .iter()
        .map(|expression| {
            let value = eval_expression(expression, env);
            if value.is_error() {
                Err(value)
            } else {
                Ok(value)
            }
        })
        .collect()
}

fn eval_identifier(name: &str, env: &Env) -> Object {
    env.borrow()
        .get(name)
        .or_else(|| builtins::lookup(name))
        .unwrap_or_else(|| Object::error(format!("identifier not found: {name}")))
}

// =============================================================================
// OPERATORS
// =============================================================================

fn eval_prefix(operator: PrefixOperator, right: Object) -> Object {
    match operator {
        PrefixOperator::Not => Object::Boolean(matches!(
            right,
            Object::Boolean(false) | Object::Null
        )),
        PrefixOperator::Negate => match right {
            Object::Integer(value) => Object::Integer(value.wrapping_neg()),
            Object::Float(value) => Object::Float(-value),
            other => Object::error(format!("unknown operator: -{}", other.type_name())),
        },
    }
}

fn eval_infix(operator: InfixOperator, left: &Object, right: &Object) -> Object {
    match (left, right) {
        (Object::Integer(l), Object::Integer(r)) => eval_integer_infix(operator, *l, *r),
        (Object::Integer(_) | Object::Float(_), Object::Integer(_) | Object::Float(_)) => {
            match (left.as_f64(), right.as_f64()) {
                (Some(l), Some(r)) => eval_float_infix(operator, l, r),
                _ => unknown_operator(operator, left, right),
            }
        }
        (Object::String(l), Object::String(r)) => eval_string_infix(operator, l, r, left, right),
        _ => match operator {
            InfixOperator::Equal => Object::Boolean(left.is_identical(right)),
            InfixOperator::NotEqual => Object::Boolean(!left.is_identical(right)),
            _ if left.type_name() != right.type_name() => Object::error(format!(
                "type mismatch: {} {} {}",
                left.type_name(),
                operator.symbol(),
                right.type_name()
            )),
            _ => unknown_operator(operator, left, right),
        },
    }
}

fn unknown_operator(operator: InfixOperator, left: &Object, right: &Object) -> Object {
    Object::error(format!(
        "unknown operator: {} {} {}",
        left.type_name(),
        operator.symbol(),
        right.type_name()
    ))
}

fn eval_integer_infix(operator: InfixOperator, l: i64, r: i64) -> Object {
    match operator {
        InfixOperator::Add => Object::Integer(l.wrapping_add(r)),
        InfixOperator::Subtract => Object::Integer(l.wrapping_sub(r)),
        InfixOperator::Multiply => Object::Integer(l.wrapping_mul(r)),
        InfixOperator::Divide if r == 0 => Object::error("division by zero"),
        InfixOperator::Divide => Object::Integer(l.wrapping_div(r)),
        InfixOperator::LessThan => Object::Boolean(l < r),
        InfixOperator::GreaterThan => Object::Boolean(l > r),
        InfixOperator::Equal => Object::Boolean(l == r),
        InfixOperator::NotEqual => Object::Boolean(l != r),
    }
}

fn eval_float_infix(operator: InfixOperator, l: f64, r: f64) -> Object {
    match operator {
        InfixOperator::Add => Object::Float(l + r),
        InfixOperator::Subtract => Object::Float(l - r),
        InfixOperator::Multiply => Object::Float(l * r),
        InfixOperator::Divide => Object::Float(l / r),
        InfixOperator::LessThan => Object::Boolean(l < r),
        InfixOperator::GreaterThan => Object::Boolean(l > r),
        InfixOperator::Equal => Object::Boolean(l == r),
        InfixOperator::NotEqual => Object::Boolean(l != r),
    }
}

fn eval_string_infix(
    operator: InfixOperator,
    l: &str,
    r: &str,
    left: &Object,
    right: &Object,
) -> Object {
    match operator {
        InfixOperator::Add => Object::String(format!("{l}{r}")),
        InfixOperator::LessThan => Object::Boolean(l < r),
        InfixOperator::GreaterThan => Object::Boolean(l > r),
        InfixOperator::Equal => Object::Boolean(l == r),
        InfixOperator::NotEqual => Object::Boolean(l != r),
        _ => unknown_operator(operator, left, right),
    }
}

// =============================================================================
// COLLECTIONS
// =============================================================================

fn eval_hash_literal(pairs: &[(Expression, Expression)], env: &Env) -> Object {
    let mut map = BTreeMap::new();

    for (key_expression, value_expression) in pairs {
        let key = eval_expression(key_expression, env);
        if key.is_error() {
            return key;
        }
        let Some(hash_key) = key.hash_key() else {
            return Object::error(format!("unusable as hash key: {}", key.type_name()));
        };
        let value = eval_expression(value_expression, env);
        if value.is_error() {
            return value;
        }
        map.insert(hash_key, HashPair { key, value });
    }

    Object::Hash(Rc::new(map))
}

fn eval_index(left: &Object, index: &Object) -> Object {
    match (left, index) {
        (Object::Array(elements), Object::Integer(i)) => usize::try_from(*i)
            .ok()
            .and_then(|i| elements.get(i))
            .cloned()
            .unwrap_or(Object::Null),
        (Object::Hash(pairs), _) => match index.hash_key() {
            Some(key) => pairs
                .get(&key)
                .map(|pair| pair.value.clone())
                .unwrap_or(Object::Null),
            None => Object::error(format!("unusable as hash key: {}", index.type_name())),
        },
        _ => Object::error(format!("index operator not supported: {}", left.type_name())),
    }
}

// =============================================================================
// CALLS
// =============================================================================

fn apply_function(function: &Object, arguments: &[Object]) -> Object {
    match function {
        Object::Function(function) => {
            if function.parameters.len() != arguments.len() {
                return Object::error(format!(
                    "wrong number of arguments: want={}, got={}",
                    function.parameters.len(),
                    arguments.len()
                ));
            }
            trace!(arity = arguments.len(), "applying function");

            let scope = Environment::enclosed(&function.env);
            {
                let mut scope = scope.borrow_mut();
                for (parameter, argument) in function.parameters.iter().zip(arguments) {
                    scope.set(parameter.as_str(), argument.clone());
                }
            }

            match eval_block(&function.body, &scope) {
                Object::ReturnValue(value) => *value,
                value => value,
            }
        }
        Object::Builtin(builtin) => {
            trace!(builtin = builtin.name, "applying builtin");
            (builtin.function)(arguments)
        }
        other => Object::error(format!("not a function: {}", other.type_name())),
    }
}

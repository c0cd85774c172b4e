//! # Builtin Functions
//!
//! Native functions resolved after the environment chain misses.
//!
//! | Name | Arguments | Result |
//! |------|-----------|--------|
//! | `len` | string or array | length as integer |
//! | `first` | array | first element or null |
//! | `last` | array | last element or null |
//! | `rest` | array | array without its first element, or null when empty |
//! | `push` | array, value | new array with the value appended |
//! | `puts` | anything | prints each argument, returns null |

use crate::object::{Builtin, Object};
use std::rc::Rc;

const BUILTINS: [Builtin; 6] = [
    Builtin { name: "len", function: len },
    Builtin { name: "first", function: first },
    Builtin { name: "last", function: last },
    Builtin { name: "rest", function: rest },
    Builtin { name: "push", function: push },
    Builtin { name: "puts", function: puts },
];

/// Look up a builtin by name.
pub fn lookup(name: &str) -> Option<Object> {
    BUILTINS
        .iter()
        .find(|builtin| builtin.name == name)
        .map(|builtin| Object::Builtin(*builtin))
}

fn arity_error(got: usize, want: usize) -> Object {
    Object::error(format!("wrong number of arguments. got={got}, want={want}"))
}

/// The single array argument of `first`, `last` and `rest`.
fn array_argument<'a>(name: &str, args: &'a [Object]) -> Result<&'a [Object], Object> {
    match args {
        [Object::Array(elements)] => Ok(elements.as_slice()),
        [other] => Err(Object::error(format!(
            "argument to `{name}` must be ARRAY, got {}",
            other.type_name()
        ))),
        _ => Err(arity_error(args.len(), 1)),
    }
}

fn len(args: &[Object]) -> Object {
    match args {
        [Object::String(value)] => Object::Integer(value.len() as i64),
        [Object::Array(elements)] => Object::Integer(elements.len() as i64),
        [other] => Object::error(format!(
            "argument to `len` not supported, got {}",
            other.type_name()
        )),
        _ => arity_error(args.len(), 1),
    }
}

fn first(args: &[Object]) -> Object {
    match array_argument("first", args) {
        Ok(elements) => elements.first().cloned().unwrap_or(Object::Null),
        Err(error) => error,
    }
}

fn last(args: &[Object]) -> Object {
    match array_argument("last", args) {
        Ok(elements) => elements.last().cloned().unwrap_or(Object::Null),
        Err(error) => error,
    }
}

fn rest(args: &[Object]) -> Object {
    match array_argument("rest", args) {
        Ok([]) => Object::Null,
        Ok([_, tail @ ..]) => Object::Array(Rc::new(tail.to_vec())),
        Err(error) => error,
    }
}

fn push(args: &[Object]) -> Object {
    match args {
        [Object::Array(elements), value] => {
            let mut extended = Vec::with_capacity(elements.len() + 1);
            extended.extend(elements.iter().cloned());
            extended.push(value.clone());
            Object::Array(Rc::new(extended))
        }
        [other, _] => Object::error(format!(
            "argument to `push` must be ARRAY, got {}",
            other.type_name()
        )),
        _ => arity_error(args.len(), 2),
    }
}

fn puts(args: &[Object]) -> Object {
    for arg in args {
        println!("{arg}");
    }
    Object::Null
}

// =============================================================================
// TESTS
// =============================================================================

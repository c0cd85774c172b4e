//! # Argument Resolution
//!
//! Maps the evaluated argument list of a primitive onto its parameter names.
//!
//! Positional arguments fill the parameter names in order, named arguments
//! override them, and unknown names (`$fn`, `convexity`, ...) are ignored.
//! `undef` counts as absent.

use crate::error::CompileError;
use csg_ast::PrimitiveKind;
use csg_eval::Object;

/// Resolved arguments of one primitive.
#[derive(Debug)]
pub(crate) struct Arguments<'a> {
    kind: PrimitiveKind,
    names: &'static [&'static str],
    values: Vec<Option<&'a Object>>,
}

impl<'a> Arguments<'a> {
    /// Resolve `arguments` against the parameter `names` of `kind`.
    pub(crate) fn resolve(
        kind: PrimitiveKind,
        arguments: &'a [Object],
        names: &'static [&'static str],
    ) -> Self {
        let mut values = vec![None; names.len()];
        let mut position = 0;

        for argument in arguments {
            match argument {
                Object::NamedArgument(named) => {
                    if let Some(index) = names.iter().position(|name| *name == named.name) {
                        values[index] = Some(&named.value);
                    }
                }
                value => {
                    if position < values.len() {
                        values[position] = Some(value);
                    }
                    position += 1;
                }
            }
        }

        for value in &mut values {
            if matches!(value, Some(Object::Null)) {
                *value = None;
            }
        }

        Self {
            kind,
            names,
            values,
        }
    }

    /// Raw value bound to `name`.
    pub(crate) fn get(&self, name: &str) -> Option<&'a Object> {
        self.names
            .iter()
            .position(|candidate| *candidate == name)
            .and_then(|index| self.values[index])
    }

    pub(crate) fn is_set(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Numeric value of `name`.
    pub(crate) fn number(&self, name: &str) -> Result<Option<f64>, CompileError> {
        match self.get(name) {
            None => Ok(None),
            Some(value) => value.as_f64().map(Some).ok_or_else(|| {
                self.invalid(format!("`{name}` must be a number, got {}", value.type_name()))
            }),
        }
    }

    /// Boolean flag; absent means `false`.
    pub(crate) fn flag(&self, name: &str) -> Result<bool, CompileError> {
        match self.get(name) {
            None => Ok(false),
            Some(Object::Boolean(value)) => Ok(*value),
            Some(value) => Err(self.invalid(format!(
                "`{name}` must be a boolean, got {}",
                value.type_name()
            ))),
        }
    }

    /// A scalar or a vector of `len` numbers.
    pub(crate) fn vector(&self, name: &str, len: usize) -> Result<Option<Vector>, CompileError> {
        match self.get(name) {
            None => Ok(None),
            Some(Object::Array(elements)) => {
                if elements.len() != len {
                    return Err(self.invalid(format!(
                        "`{name}` must have {len} elements, got {}",
                        elements.len()
                    )));
                }
                let values = elements
                    .iter()
                    .map(|element| {
                        element.as_f64().ok_or_else(|| {
                            self.invalid(format!(
                                "`{name}` elements must be numbers, got {}",
                                element.type_name()
                            ))
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Some(Vector::Components(values)))
            }
            Some(value) => match value.as_f64() {
                Some(scalar) => Ok(Some(Vector::Scalar(scalar))),
                None => Err(self.invalid(format!(
                    "`{name}` must be a number or vector, got {}",
                    value.type_name()
                ))),
            },
        }
    }

    pub(crate) fn invalid(&self, message: impl Into<String>) -> CompileError {
        CompileError::invalid_argument(self.kind, message)
    }
}

/// Size argument written either as one number or per component.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Vector {
    Scalar(f64),
    Components(Vec<f64>),
}

impl Vector {
    /// Component `i`, repeating a scalar.
    pub(crate) fn at(&self, i: usize) -> f64 {
        match self {
            Self::Scalar(value) => *value,
            Self::Components(values) => values[i],
        }
    }

    /// GLSL constructor arguments: `2` or `5, 4, 3`.
    pub(crate) fn glsl(&self) -> String {
        match self {
            Self::Scalar(value) => crate::format::number(*value),
            Self::Components(values) => crate::format::numbers(values),
        }
    }
}

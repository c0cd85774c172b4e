//! # Runtime Objects
//!
//! Values produced by evaluation, CSG primitives included.
//!
//! ## Example
//!
//! ```rust
//! use csg_eval::Object;
//!
//! assert_eq!(Object::Integer(5).inspect(), "5");
//! assert_eq!(Object::Float(1.5).type_name(), "FLOAT");
//! assert!(Object::Integer(0).is_truthy());
//! assert!(!Object::Null.is_truthy());
//! ```

use crate::environment::Env;
use csg_ast::{Block, PrimitiveKind};
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

// =============================================================================
// OBJECT
// =============================================================================

/// A runtime value.
///
/// Heap variants are reference counted, so cloning an object is cheap and
/// `==` in the language can compare them by identity.
#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    Integer(i64),
    Float(f64),
    String(String),
    Boolean(bool),
    Null,
    Array(Rc<Vec<Object>>),
    Hash(Rc<BTreeMap<HashKey, HashPair>>),
    /// User function closing over its defining environment.
    Function(Rc<Function>),
    Builtin(Builtin),
    /// Runtime failure; short-circuits every containing evaluation.
    Error(String),
    /// Control-flow wrapper produced by `return`.
    ReturnValue(Box<Object>),
    /// `name = value` argument, kept for the primitive that receives it.
    NamedArgument(Rc<NamedArgument>),
    /// Evaluated CSG primitive.
    Primitive(Rc<CsgPrimitive>),
}

impl Object {
    /// Create an error object.
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error(message.into())
    }

    /// Type name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "INTEGER",
            Self::Float(_) => "FLOAT",
            Self::String(_) => "STRING",
            Self::Boolean(_) => "BOOLEAN",
            Self::Null => "NULL",
            Self::Array(_) => "ARRAY",
            Self::Hash(_) => "HASH",
            Self::Function(_) => "FUNCTION",
            Self::Builtin(_) => "BUILTIN",
            Self::Error(_) => "ERROR",
            Self::ReturnValue(_) => "RETURN_VALUE",
            Self::NamedArgument(_) => "NAMED_ARGUMENT",
            Self::Primitive(p) => primitive_type_name(p.kind),
        }
    }

    /// Only `null` and `false` are falsy; `0` and `""` are truthy.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Self::Null | Self::Boolean(false))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Numeric value of an integer or float.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(value) => Some(*value as f64),
            Self::Float(value) => Some(*value),
            _ => None,
        }
    }

    /// Key under which this object can be stored in a hash.
    pub fn hash_key(&self) -> Option<HashKey> {
        match self {
            Self::Integer(value) => Some(HashKey::Integer(*value)),
            Self::Boolean(value) => Some(HashKey::Boolean(*value)),
            Self::String(value) => Some(HashKey::String(value.clone())),
            _ => None,
        }
    }

    /// Identity comparison used by `==` on non-numeric, non-string operands.
    pub fn is_identical(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Null, Self::Null) => true,
            (Self::Array(a), Self::Array(b)) => Rc::ptr_eq(a, b),
            (Self::Hash(a), Self::Hash(b)) => Rc::ptr_eq(a, b),
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            (Self::Builtin(a), Self::Builtin(b)) => a.name == b.name,
            (Self::NamedArgument(a), Self::NamedArgument(b)) => Rc::ptr_eq(a, b),
            (Self::Primitive(a), Self::Primitive(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Source-like rendering shown by the REPL.
    pub fn inspect(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::String(value) => write!(f, "{value}"),
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Null => write!(f, "null"),
            Self::Array(elements) => {
                write!(f, "[")?;
                write_joined(f, elements.iter())?;
                write!(f, "]")
            }
            Self::Hash(pairs) => {
                write!(f, "{{")?;
                for (i, pair) in pairs.values().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", pair.key, pair.value)?;
                }
                write!(f, "}}")
            }
            Self::Function(function) => {
                write!(f, "function({}) {}", function.parameters.join(", "), function.body)
            }
            Self::Builtin(_) => write!(f, "builtin function"),
            Self::Error(message) => write!(f, "ERROR: {message}"),
            Self::ReturnValue(value) => write!(f, "{value}"),
            Self::NamedArgument(argument) => write!(f, "{} = {}", argument.name, argument.value),
            Self::Primitive(primitive) => write!(f, "{primitive}"),
        }
    }
}

fn write_joined<'a>(
    f: &mut fmt::Formatter<'_>,
    items: impl Iterator<Item = &'a Object>,
) -> fmt::Result {
    for (i, item) in items.enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

fn primitive_type_name(kind: PrimitiveKind) -> &'static str {
    match kind {
        PrimitiveKind::Circle => "CIRCLE",
        PrimitiveKind::Color => "COLOR",
        PrimitiveKind::Cube => "CUBE",
        PrimitiveKind::Cylinder => "CYLINDER",
        PrimitiveKind::Difference => "DIFFERENCE",
        PrimitiveKind::Group => "GROUP",
        PrimitiveKind::Hull => "HULL",
        PrimitiveKind::Intersection => "INTERSECTION",
        PrimitiveKind::LinearExtrude => "LINEAR_EXTRUDE",
        PrimitiveKind::Minkowski => "MINKOWSKI",
        PrimitiveKind::Multmatrix => "MULTMATRIX",
        PrimitiveKind::Polygon => "POLYGON",
        PrimitiveKind::Polyhedron => "POLYHEDRON",
        PrimitiveKind::Projection => "PROJECTION",
        PrimitiveKind::RotateExtrude => "ROTATE_EXTRUDE",
        PrimitiveKind::Sphere => "SPHERE",
        PrimitiveKind::Square => "SQUARE",
        PrimitiveKind::Text => "TEXT",
        PrimitiveKind::Union => "UNION",
    }
}

// =============================================================================
// HASHES
// =============================================================================

/// Hashable projection of an object.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HashKey {
    Integer(i64),
    Boolean(bool),
    String(String),
}

/// Original key object alongside its value.
#[derive(Debug, Clone, PartialEq)]
pub struct HashPair {
    pub key: Object,
    pub value: Object,
}

// =============================================================================
// FUNCTIONS
// =============================================================================

/// Function literal plus the environment it was defined in.
pub struct Function {
    pub parameters: Vec<String>,
    pub body: Block,
    pub env: Env,
}

// The captured environment usually contains the function itself.
impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("parameters", &self.parameters)
            .field("body", &self.body)
            .finish_non_exhaustive()
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        self.parameters == other.parameters
            && self.body == other.body
            && Rc::ptr_eq(&self.env, &other.env)
    }
}

/// Native function signature.
pub type BuiltinFunction = fn(&[Object]) -> Object;

/// Native function exposed to scripts.
#[derive(Clone, Copy)]
pub struct Builtin {
    pub name: &'static str,
    pub function: BuiltinFunction,
}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Builtin({})", self.name)
    }
}

impl PartialEq for Builtin {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

// =============================================================================
// CSG OBJECTS
// =============================================================================

/// Evaluated `name = value` argument.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedArgument {
    pub name: String,
    pub value: Object,
}

/// Evaluated CSG primitive.
///
/// `body` holds the CSG children of a block primitive, in source order, and
/// is `None` for the leaf form.
#[derive(Debug, Clone, PartialEq)]
pub struct CsgPrimitive {
    pub kind: PrimitiveKind,
    pub arguments: Vec<Object>,
    pub body: Option<Vec<Object>>,
}

impl CsgPrimitive {
    /// CSG children; empty for the leaf form.
    pub fn children(&self) -> &[Object] {
        self.body.as_deref().unwrap_or_default()
    }
}

impl fmt::Display for CsgPrimitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.kind)?;
        write_joined(f, self.arguments.iter())?;
        match &self.body {
            None => write!(f, ");"),
            Some(children) => {
                writeln!(f, ") {{")?;
                for child in children {
                    writeln!(f, "{child}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

//! # CSG AST Crate
//!
//! Typed Abstract Syntax Tree for the CSG scripting language: a small
//! expression language (bindings, closures, arrays, hashes) extended with
//! OpenSCAD-style geometric primitives.
//!
//! ## Architecture
//!
//! ```text
//! Source → csg-parser (tokens, Pratt parser) → csg-ast (Program) → csg-eval → csg-irmf
//! ```
//!
//! ## Example
//!
//! ```rust
//! use csg_ast::{Expression, Primitive, PrimitiveKind, Program, Statement};
//!
//! let program = Program {
//!     statements: vec![Statement::Expression(Expression::Primitive(Primitive {
//!         kind: PrimitiveKind::Cube,
//!         arguments: vec![Expression::Integer(2)],
//!         body: None,
//!     }))],
//! };
//! assert_eq!(program.to_string(), "cube(2)");
//! ```
//!
//! ## Design Principles
//!
//! - **Owned Tree**: every node owns its children, no sharing and no cycles
//! - **Structural Blocks**: a primitive is a block primitive exactly when it has a body
//! - **Printable**: `Display` output parses back to an equal tree

pub mod ast;
pub mod printer;

pub use ast::*;

//! # Compiler
//!
//! Walks an evaluated CSG object tree and emits GLSL.
//!
//! Every primitive compiles to a call expression such as
//! `sphere(float(1), xyz)` plus its bounding box. Block primitives compile
//! their children first and then synthesize a numbered function wrapping
//! the children's calls, so nested functions always precede their callers.
//!
//! ## Example
//!
//! ```rust
//! use csg_irmf::Compiler;
//!
//! let scene = csg_eval::evaluate("union() { sphere(1); cube(2); }").unwrap();
//! let shader = Compiler::compile(&scene, false).unwrap();
//! assert_eq!(shader.functions.len(), 2);
//! assert!(shader.functions[0].starts_with("float union0(in vec3 xyz) {"));
//! ```
//!
//! ## Architecture
//!
//! - `leaves` - cube, sphere, cylinder, square, circle
//! - `transform` - multmatrix
//! - `extrude` - linear_extrude, rotate_extrude
//! - `polygon` - convex polygon bands

mod extrude;
mod leaves;
mod polygon;
mod transform;

use crate::error::CompileError;
use crate::format::number;
use crate::library::LibraryFunction;
use crate::mbb::Mbb;
use crate::shader::Shader;
use config::constants::{CENTER_ROUNDING_STEP, STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};
use csg_ast::PrimitiveKind;
use csg_eval::{CsgPrimitive, Object};
use stacker::maybe_grow;
use tracing::{debug, instrument, trace};

/// Call expression of one compiled primitive and the bounds it covers.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Call {
    pub expression: String,
    pub mbb: Mbb,
}

impl Call {
    pub(crate) fn new(expression: impl Into<String>, mbb: Mbb) -> Self {
        Self {
            expression: expression.into(),
            mbb,
        }
    }
}

/// Calls of a block's children and their merged bounds.
#[derive(Debug)]
pub(crate) struct Children {
    pub calls: Vec<String>,
    pub mbb: Mbb,
}

impl Children {
    pub(crate) fn joined(&self, separator: &str) -> String {
        self.calls.join(separator)
    }
}

/// Shader generator for one scene.
#[derive(Debug, Default)]
pub struct Compiler {
    shader: Shader,
}

impl Compiler {
    /// Compile top-level CSG objects into a shader.
    ///
    /// ## Parameters
    ///
    /// - `objects`: top-level CSG objects, as returned by `csg_eval::evaluate`
    /// - `center`: move the model centre to the origin
    ///
    /// ## Returns
    ///
    /// The shader, empty when no object produced geometry
    #[instrument(skip_all, fields(objects = objects.len(), center = center))]
    pub fn compile(objects: &[Object], center: bool) -> Result<Shader, CompileError> {
        let mut compiler = Compiler::default();

        let Some(children) = compiler.compile_children(objects)? else {
            debug!("scene produced no geometry");
            return Ok(compiler.shader);
        };

        let sum = children.joined(" + ");
        let (main, mbb) = if center {
            let offset = children.mbb.center();
            let half = (children.mbb.size() + 0.5).round() * CENTER_ROUNDING_STEP;
            let main = format!(
                "void mainModel4(out vec4 materials, in vec3 xyz) {{\n\txyz += vec3({}, {}, {});\n\tmaterials[0] = {sum};\n}}\n",
                number(offset.x),
                number(offset.y),
                number(offset.z),
            );
            (main, Mbb::symmetric(half))
        } else {
            let main = format!(
                "void mainModel4(out vec4 materials, in vec3 xyz) {{\n\tmaterials[0] = {sum};\n}}\n"
            );
            (main, children.mbb)
        };

        compiler.shader.functions.push(main);
        compiler.shader.mbb = Some(mbb);
        debug!(
            functions = compiler.shader.functions.len(),
            library = compiler.shader.library.len(),
            "compiled shader"
        );
        Ok(compiler.shader)
    }

    // =========================================================================
    // DISPATCH
    // =========================================================================

    /// Compile a list of objects, skipping those without geometry.
    pub(crate) fn compile_children(
        &mut self,
        objects: &[Object],
    ) -> Result<Option<Children>, CompileError> {
        let mut calls = Vec::new();
        let mut mbb = None;

        for object in objects {
            if let Some(call) = self.compile_object(object)? {
                calls.push(call.expression);
                mbb = Mbb::merge_into(mbb, call.mbb);
            }
        }

        Ok(mbb.map(|mbb| Children { calls, mbb }))
    }

    fn compile_object(&mut self, object: &Object) -> Result<Option<Call>, CompileError> {
        match object {
            Object::Primitive(primitive) => {
                maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || {
                    self.compile_primitive(primitive)
                })
            }
            other => Err(CompileError::NotAPrimitive(other.type_name())),
        }
    }

    fn compile_primitive(&mut self, primitive: &CsgPrimitive) -> Result<Option<Call>, CompileError> {
        trace!(kind = %primitive.kind, "compiling primitive");
        let arguments = primitive.arguments.as_slice();

        match primitive.kind {
            PrimitiveKind::Cube => self.cube(arguments).map(Some),
            PrimitiveKind::Sphere => self.sphere(arguments).map(Some),
            PrimitiveKind::Cylinder => self.cylinder(arguments).map(Some),
            PrimitiveKind::Square => self.square(arguments).map(Some),
            PrimitiveKind::Circle => self.circle(arguments).map(Some),
            PrimitiveKind::Polygon => self.polygon(arguments).map(Some),

            PrimitiveKind::Union => self.combine("union", " + ", true, primitive.children()),
            PrimitiveKind::Difference => {
                self.combine("difference", " - ", true, primitive.children())
            }
            PrimitiveKind::Intersection => {
                self.combine("intersection", " * ", true, primitive.children())
            }
            PrimitiveKind::Group => self.combine("groupBlock", " + ", false, primitive.children()),
            PrimitiveKind::Color => self.combine("colorBlock", " + ", false, primitive.children()),

            PrimitiveKind::Multmatrix => self.multmatrix(arguments, primitive.children()),
            PrimitiveKind::LinearExtrude => self.linear_extrude(arguments, primitive.children()),
            PrimitiveKind::RotateExtrude => self.rotate_extrude(arguments, primitive.children()),

            kind @ (PrimitiveKind::Hull
            | PrimitiveKind::Minkowski
            | PrimitiveKind::Projection
            | PrimitiveKind::Polyhedron
            | PrimitiveKind::Text) => Err(CompileError::Unsupported(kind.keyword().to_string())),
        }
    }

    // =========================================================================
    // FUNCTIONS
    // =========================================================================

    /// Name for the next synthesized function.
    pub(crate) fn next_name(&self, prefix: &str) -> String {
        format!("{prefix}{}", self.shader.functions.len())
    }

    /// Append a synthesized function and return the call to it.
    pub(crate) fn push_function(&mut self, name: String, source: String) -> String {
        debug!(function = %name, "synthesized block function");
        self.shader.functions.push(source);
        format!("{name}(xyz)")
    }

    pub(crate) fn require(&mut self, function: LibraryFunction) {
        if self.shader.library.insert(function) {
            trace!(function = %function, "pulled in library function");
        }
    }

    /// Boolean or grouping block summing, subtracting or multiplying its children.
    fn combine(
        &mut self,
        prefix: &str,
        separator: &str,
        clamp: bool,
        children: &[Object],
    ) -> Result<Option<Call>, CompileError> {
        let Some(children) = self.compile_children(children)? else {
            return Ok(None);
        };

        let name = self.next_name(prefix);
        let body = children.joined(separator);
        let source = if clamp {
            format!("float {name}(in vec3 xyz) {{\n\treturn clamp({body}, 0.0, 1.0);\n}}\n")
        } else {
            format!("float {name}(in vec3 xyz) {{\n\treturn {body};\n}}\n")
        };

        Ok(Some(Call::new(self.push_function(name, source), children.mbb)))
    }
}

#[cfg(test)]
mod tests;

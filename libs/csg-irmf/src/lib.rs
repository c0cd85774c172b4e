//! # CSG IRMF
//!
//! Compiles evaluated CSG scenes into IRMF shaders: GLSL source with a
//! `mainModel4` entry point, preceded by a header describing the model bounds.
//!
//! ## Architecture
//!
//! ```text
//! csg-eval (Object tree) → Compiler → Shader → .irmf text
//! ```
//!
//! ## Example
//!
//! ```rust
//! use csg_irmf::compile_source;
//!
//! let shader = compile_source("sphere(r = 2);", false).unwrap();
//! assert_eq!(
//!     shader.functions[0],
//!     "void mainModel4(out vec4 materials, in vec3 xyz) {\n\tmaterials[0] = sphere(float(2), xyz);\n}\n"
//! );
//! ```
//!
//! ## Limits
//!
//! - `hull`, `minkowski`, `projection`, `polyhedron` and `text` are rejected
//! - Polygons must be convex and given without `paths`
//! - Bounding boxes of rotated children are estimated from two corners

mod arguments;
pub mod compiler;
pub mod error;
pub mod format;
pub mod library;
pub mod mbb;
pub mod shader;

pub use compiler::Compiler;
pub use error::CompileError;
pub use library::LibraryFunction;
pub use mbb::Mbb;
pub use shader::Shader;

// =============================================================================
// PUBLIC API
// =============================================================================

/// Parse, evaluate and compile CSG source.
///
/// ## Parameters
///
/// - `source`: CSG source code string
/// - `center`: move the model centre to the origin
///
/// ## Returns
///
/// The compiled shader, or the first parse, evaluation or compile error
pub fn compile_source(source: &str, center: bool) -> Result<Shader, CompileError> {
    let scene = csg_eval::evaluate(source)?;
    Compiler::compile(&scene, center)
}

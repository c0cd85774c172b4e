//! `multmatrix` blocks.
//!
//! The shader maps each sample point back into the children's frame, so the
//! generated function carries the inverse of the scene matrix while the
//! bounding box moves with the forward matrix.

use super::{Call, Compiler};
use crate::arguments::Arguments;
use crate::error::CompileError;
use crate::format::number;
use csg_ast::PrimitiveKind;
use csg_eval::Object;
use glam::{DMat4, DVec4};

const MULTMATRIX: &[&str] = &["m"];

impl Compiler {
    pub(super) fn multmatrix(
        &mut self,
        arguments: &[Object],
        children: &[Object],
    ) -> Result<Option<Call>, CompileError> {
        let Some(children) = self.compile_children(children)? else {
            return Ok(None);
        };

        let args = Arguments::resolve(PrimitiveKind::Multmatrix, arguments, MULTMATRIX);
        let matrix = matrix(&args)?;
        // Only a zero determinant is singular; tiny uniform scales still invert.
        let determinant = matrix.determinant();
        if determinant == 0.0 {
            return Err(CompileError::SingularMatrix { determinant });
        }
        let inverse = matrix.inverse();
        if !inverse.is_finite() {
            return Err(CompileError::SingularMatrix { determinant });
        }

        let rows = (0..4)
            .map(|i| vec4(inverse.row(i)))
            .collect::<Vec<_>>()
            .join(", ");
        let name = self.next_name("multimatrixBlock");
        let source = format!(
            "float {name}(in vec3 xyz) {{\n\tmat4 xfm = mat4({rows});\n\txyz = (vec4(xyz, 1.0) * xfm).xyz;\n\treturn {};\n}}\n",
            children.joined(" + ")
        );

        let mbb = children.mbb.transform(&matrix);
        Ok(Some(Call::new(self.push_function(name, source), mbb)))
    }
}

/// Read the 4×4 row-major `m` argument.
fn matrix(args: &Arguments<'_>) -> Result<DMat4, CompileError> {
    let Some(value) = args.get("m") else {
        return Err(args.invalid("missing matrix argument"));
    };
    let shape_error = || args.invalid("matrix must be 4 rows of 4 numbers");

    let Object::Array(rows) = value else {
        return Err(shape_error());
    };
    if rows.len() != 4 {
        return Err(shape_error());
    }

    let mut cells = [[0.0; 4]; 4];
    for (row, cells) in rows.iter().zip(cells.iter_mut()) {
        let Object::Array(values) = row else {
            return Err(shape_error());
        };
        if values.len() != 4 {
            return Err(shape_error());
        }
        for (value, cell) in values.iter().zip(cells.iter_mut()) {
            *cell = value.as_f64().ok_or_else(shape_error)?;
        }
    }

    // glam is column-major.
    Ok(DMat4::from_cols_array_2d(&cells).transpose())
}

fn vec4(row: DVec4) -> String {
    format!(
        "vec4({}, {}, {}, {})",
        number(row.x),
        number(row.y),
        number(row.z),
        number(row.w)
    )
}

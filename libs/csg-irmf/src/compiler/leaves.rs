//! Leaf primitives: direct calls into the GLSL library.

use super::{Call, Compiler};
use crate::arguments::{Arguments, Vector};
use crate::error::CompileError;
use crate::format::number;
use crate::library::LibraryFunction;
use crate::mbb::Mbb;
use config::constants::DEFAULT_PRIMITIVE_SIZE;
use csg_ast::PrimitiveKind;
use csg_eval::Object;
use glam::DVec3;

const CUBE: &[&str] = &["size", "center"];
const SPHERE: &[&str] = &["r", "d"];
const CYLINDER: &[&str] = &["h", "r1", "r2", "center", "r", "d", "d1", "d2"];
const SQUARE: &[&str] = &["size", "center"];
const CIRCLE: &[&str] = &["r", "d"];

impl Compiler {
    pub(super) fn cube(&mut self, arguments: &[Object]) -> Result<Call, CompileError> {
        let args = Arguments::resolve(PrimitiveKind::Cube, arguments, CUBE);
        let size = args
            .vector("size", 3)?
            .unwrap_or(Vector::Scalar(DEFAULT_PRIMITIVE_SIZE));
        let center = args.flag("center")?;

        self.require(LibraryFunction::Cube);
        let extent = DVec3::new(size.at(0), size.at(1), size.at(2));
        Ok(Call::new(
            format!("cube(vec3({}), {center}, xyz)", size.glsl()),
            box_mbb(extent, center),
        ))
    }

    pub(super) fn sphere(&mut self, arguments: &[Object]) -> Result<Call, CompileError> {
        let args = Arguments::resolve(PrimitiveKind::Sphere, arguments, SPHERE);
        let radius = radius(&args)?;

        self.require(LibraryFunction::Sphere);
        Ok(Call::new(
            format!("sphere(float({}), xyz)", number(radius)),
            Mbb::symmetric(DVec3::splat(radius)),
        ))
    }

    pub(super) fn cylinder(&mut self, arguments: &[Object]) -> Result<Call, CompileError> {
        let args = Arguments::resolve(PrimitiveKind::Cylinder, arguments, CYLINDER);
        let height = args.number("h")?.unwrap_or(DEFAULT_PRIMITIVE_SIZE);
        let center = args.flag("center")?;

        // Explicit radii first, then diameters, then the shared forms with
        // `r` ahead of `d`.
        let mut r1 = args.number("r1")?;
        let mut r2 = args.number("r2")?;
        if r2.is_none() {
            r2 = args.number("d2")?.map(|d| 0.5 * d);
        }
        if r1.is_none() {
            r1 = args.number("d1")?.map(|d| 0.5 * d);
        }
        for shared in [args.number("r")?, args.number("d")?.map(|d| 0.5 * d)] {
            if r1.is_none() && r2.is_none() {
                r1 = shared;
                r2 = shared;
            }
        }
        let r1 = r1.unwrap_or(DEFAULT_PRIMITIVE_SIZE);
        let r2 = r2.unwrap_or(DEFAULT_PRIMITIVE_SIZE);

        self.require(LibraryFunction::Cylinder);
        let radius = r1.max(r2);
        let (z_min, z_max) = if center {
            (-0.5 * height, 0.5 * height)
        } else {
            (0.0, height)
        };
        Ok(Call::new(
            format!(
                "cylinder(float({}), float({}), float({}), {center}, xyz)",
                number(height),
                number(r1),
                number(r2)
            ),
            Mbb::new(
                DVec3::new(-radius, -radius, z_min),
                DVec3::new(radius, radius, z_max),
            ),
        ))
    }

    pub(super) fn square(&mut self, arguments: &[Object]) -> Result<Call, CompileError> {
        let args = Arguments::resolve(PrimitiveKind::Square, arguments, SQUARE);
        let size = args
            .vector("size", 2)?
            .unwrap_or(Vector::Scalar(DEFAULT_PRIMITIVE_SIZE));
        let center = args.flag("center")?;

        self.require(LibraryFunction::Square);
        let extent = DVec3::new(size.at(0), size.at(1), 0.0);
        Ok(Call::new(
            format!("square(vec2({}), {center}, xyz)", size.glsl()),
            box_mbb(extent, center),
        ))
    }

    pub(super) fn circle(&mut self, arguments: &[Object]) -> Result<Call, CompileError> {
        let args = Arguments::resolve(PrimitiveKind::Circle, arguments, CIRCLE);
        let radius = radius(&args)?;

        self.require(LibraryFunction::Circle);
        Ok(Call::new(
            format!("circle(float({}), xyz)", number(radius)),
            Mbb::symmetric(DVec3::new(radius, radius, 0.0)),
        ))
    }
}

/// `r` beats `d / 2`; unit radius otherwise.
fn radius(args: &Arguments<'_>) -> Result<f64, CompileError> {
    if let Some(r) = args.number("r")? {
        return Ok(r);
    }
    Ok(args
        .number("d")?
        .map(|d| 0.5 * d)
        .unwrap_or(DEFAULT_PRIMITIVE_SIZE))
}

fn box_mbb(extent: DVec3, center: bool) -> Mbb {
    if center {
        Mbb::symmetric(0.5 * extent)
    } else {
        Mbb::new(DVec3::ZERO, extent)
    }
}

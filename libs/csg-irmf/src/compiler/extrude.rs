//! Extrusions of 2D children along z (`linear_extrude`) and around z
//! (`rotate_extrude`).

use super::{Call, Compiler};
use crate::arguments::{Arguments, Vector};
use crate::error::CompileError;
use crate::format::number;
use crate::library::LibraryFunction;
use crate::mbb::Mbb;
use config::constants::{
    DEFAULT_PRIMITIVE_SIZE, DEFAULT_ROTATE_EXTRUDE_ANGLE, GLSL_PI, TWIST_SAMPLE_STEPS,
};
use csg_ast::PrimitiveKind;
use csg_eval::Object;
use glam::{DVec2, DVec3};

const LINEAR_EXTRUDE: &[&str] = &["height", "center", "twist", "scale"];
const ROTATE_EXTRUDE: &[&str] = &["angle"];

impl Compiler {
    pub(super) fn linear_extrude(
        &mut self,
        arguments: &[Object],
        children: &[Object],
    ) -> Result<Option<Call>, CompileError> {
        let Some(children) = self.compile_children(children)? else {
            return Ok(None);
        };

        let args = Arguments::resolve(PrimitiveKind::LinearExtrude, arguments, LINEAR_EXTRUDE);
        let height = args.number("height")?.unwrap_or(DEFAULT_PRIMITIVE_SIZE);
        let center = args.flag("center")?;
        let twist = args.number("twist")?;
        let scale = args.vector("scale", 2)?.unwrap_or(Vector::Scalar(1.0));
        let scale = DVec2::new(scale.at(0), scale.at(1));

        let name = self.next_name("linearExtrudeBlock");
        let mut source = format!(
            "float {name}(in vec3 xyz) {{\n\txyz.z /= float({});\n\tfloat z = xyz.z;\n\tif ({center}) {{ z += 0.5; }} else {{ xyz.z -= 0.5; }}\n\tif (abs(xyz.z) > 0.5) {{ return 0.0; }}\n",
            number(height)
        );
        if let Some(twist) = twist {
            source.push_str(&format!(
                "\tfloat angle = mix(0.0, float({})*{GLSL_PI}/180.0, z);\n",
                number(twist)
            ));
        }
        source.push_str(&format!(
            "\tvec2 s = mix(vec2(1),vec2({},{}),z);\n\txyz.xy /= s;\n",
            number(scale.x),
            number(scale.y)
        ));
        if twist.is_some() {
            source.push_str("\txyz = (vec4(xyz, 1) * rotZ(angle)).xyz;\n");
        }
        source.push_str(&format!("\treturn {};\n}}\n", children.joined(" + ")));

        let footprint = match twist {
            Some(twist) => {
                self.require(LibraryFunction::RotAxis);
                self.require(LibraryFunction::RotZ);
                twisted_footprint(children.mbb, scale, twist)
            }
            None => scaled_footprint(children.mbb, scale),
        };
        let (z_min, z_max) = if center {
            (-0.5 * height, 0.5 * height)
        } else {
            (0.0, height)
        };
        let mbb = Mbb::new(
            DVec3::new(footprint.min.x, footprint.min.y, z_min),
            DVec3::new(footprint.max.x, footprint.max.y, z_max),
        );

        Ok(Some(Call::new(self.push_function(name, source), mbb)))
    }

    pub(super) fn rotate_extrude(
        &mut self,
        arguments: &[Object],
        children: &[Object],
    ) -> Result<Option<Call>, CompileError> {
        let Some(children) = self.compile_children(children)? else {
            return Ok(None);
        };

        let args = Arguments::resolve(PrimitiveKind::RotateExtrude, arguments, ROTATE_EXTRUDE);
        let angle = args.number("angle")?.unwrap_or(DEFAULT_ROTATE_EXTRUDE_ANGLE);

        self.require(LibraryFunction::RotAxis);
        self.require(LibraryFunction::RotZ);
        let name = self.next_name("rotateExtrudeBlock");
        let source = format!(
            "float {name}(in vec3 xyz) {{\n\tfloat angle = atan(xyz.y, xyz.x);\n\tif (angle<0.) {{ angle+=(2.*{GLSL_PI}); }}\n\tif (angle>float({})*{GLSL_PI}/180.0) {{ return 0.0; }}\n\tvec3 slice=(vec4(xyz,1)*rotZ(-angle)).xyz;\n\txyz = slice.xzy;\n\treturn {};\n}}\n",
            number(angle),
            children.joined(" + ")
        );

        // The child's x becomes the radius and its y becomes z.
        let child = children.mbb;
        let radius = child.min.x.abs().max(child.max.x.abs());
        let mbb = Mbb::new(
            DVec3::new(-radius, -radius, child.min.y),
            DVec3::new(radius, radius, child.max.y),
        );

        Ok(Some(Call::new(self.push_function(name, source), mbb)))
    }
}

/// Untwisted footprint: scales above 1 widen the box about its centre.
fn scaled_footprint(mbb: Mbb, scale: DVec2) -> Mbb {
    let center = mbb.center();
    let half = 0.5 * mbb.size();
    let mut result = mbb;
    if scale.x > 1.0 {
        result.min.x = center.x - scale.x * half.x;
        result.max.x = center.x + scale.x * half.x;
    }
    if scale.y > 1.0 {
        result.min.y = center.y - scale.y * half.y;
        result.max.y = center.y + scale.y * half.y;
    }
    result
}

/// Twisted footprint: merge of the scaled and rotated corners sampled along
/// the extrusion.
fn twisted_footprint(mbb: Mbb, scale: DVec2, twist: f64) -> Mbb {
    let center = mbb.center();
    let half = 0.5 * mbb.size();
    let mut result = mbb;

    for step in 0..=TWIST_SAMPLE_STEPS {
        let t = f64::from(step) / f64::from(TWIST_SAMPLE_STEPS);
        let s = DVec2::ONE.lerp(scale, t);
        let low = DVec2::new(center.x - s.x * half.x, center.y - s.y * half.y);
        let high = DVec2::new(center.x + s.x * half.x, center.y + s.y * half.y);

        let rotation = DVec2::from_angle(-twist.to_radians() * t);
        let a = rotation.rotate(low);
        let b = rotation.rotate(high);
        let sample = Mbb::new(a.min(b).extend(0.0), a.max(b).extend(0.0));
        result = result.merge(&sample);
    }

    result
}

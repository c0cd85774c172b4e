//! # GLSL Primitive Library
//!
//! Shared GLSL functions that generated code calls into. A shader includes
//! each library function at most once, ordered by name.

use std::fmt;

/// Library function a shader may depend on.
///
/// Variant order matches the byte order of the function names, so a
/// `BTreeSet<LibraryFunction>` iterates in name order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LibraryFunction {
    Circle,
    Cube,
    Cylinder,
    RotAxis,
    RotZ,
    Sphere,
    Square,
    TestTwoLineSegments,
}

impl LibraryFunction {
    pub const ALL: [LibraryFunction; 8] = [
        Self::Circle,
        Self::Cube,
        Self::Cylinder,
        Self::RotAxis,
        Self::RotZ,
        Self::Sphere,
        Self::Square,
        Self::TestTwoLineSegments,
    ];

    /// GLSL function name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Cube => "cube",
            Self::Cylinder => "cylinder",
            Self::RotAxis => "rotAxis",
            Self::RotZ => "rotZ",
            Self::Sphere => "sphere",
            Self::Square => "square",
            Self::TestTwoLineSegments => "testTwoLineSegments",
        }
    }

    /// GLSL source, terminated by a newline.
    pub fn source(self) -> &'static str {
        match self {
            Self::Circle => CIRCLE,
            Self::Cube => CUBE,
            Self::Cylinder => CYLINDER,
            Self::RotAxis => ROT_AXIS,
            Self::RotZ => ROT_Z,
            Self::Sphere => SPHERE,
            Self::Square => SQUARE,
            Self::TestTwoLineSegments => TEST_TWO_LINE_SEGMENTS,
        }
    }
}

impl fmt::Display for LibraryFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// SOURCES
// =============================================================================

const CIRCLE: &str = "float circle(in float radius, in vec3 xyz) {
\tfloat r = length(xyz.xy);
\treturn r <= radius ? 1.0 : 0.0;
}
";

const CUBE: &str = "float cube(in vec3 size, in bool center, in vec3 xyz) {
\txyz /= size;
\tif (!center) { xyz -= vec3(0.5); }
\tif (any(greaterThan(abs(xyz), vec3(0.5)))) { return 0.0; }
\treturn 1.0;
}
";

const CYLINDER: &str = "float cylinder(in float h, in float r1, in float r2, in bool center, in vec3 xyz) {
\txyz.z /= h;
\tfloat z = xyz.z;
\tif (center) { z += 0.5; } else { xyz.z -= 0.5; }
\tif (abs(xyz.z) > 0.5) { return 0.0; }
\tfloat r = length(xyz.xy);
\tfloat radius = mix(r1, r2, z);
\treturn r <= radius ? 1.0 : 0.0;
}
";

// Rodrigues rotation about a unit axis.
const ROT_AXIS: &str = "mat3 rotAxis(vec3 axis, float a) {
  float s = sin(a);
  float c = cos(a);
  float oc = 1.0 - c;
  vec3 as = axis * s;
  mat3 p = mat3(axis.x * axis, axis.y * axis, axis.z * axis);
  mat3 q = mat3(c, - as.z, as.y, as.z, c, - as.x, - as.y, as.x, c);
  return p * oc + q;
}
";

const ROT_Z: &str = "mat4 rotZ(float angle) {
  return mat4(rotAxis(vec3(0, 0, 1), angle));
}
";

const SPHERE: &str = "float sphere(in float radius, in vec3 xyz) {
\tfloat r = length(xyz);
\treturn r <= radius ? 1.0 : 0.0;
}
";

const SQUARE: &str = "float square(in vec2 size, in bool center, in vec3 xyz) {
\txyz.xy /= size;
\tif (!center) { xyz.xy -= vec2(0.5); }
\tif (any(greaterThan(abs(xyz.xy), vec2(0.5)))) { return 0.0; }
\treturn 1.0;
}
";

// Inside test for a point between a left and a right edge of one band.
const TEST_TWO_LINE_SEGMENTS: &str = "float testTwoLineSegments(in vec2 l0, in vec2 l1, in vec2 r0, in vec2 r1, in vec2 xy) {
\tfloat lx = mix(l0.x, l1.x, (xy.y - l0.y) / (l1.y - l0.y));
\tfloat rx = mix(r0.x, r1.x, (xy.y - r0.y) / (r1.y - r0.y));
\treturn xy.x >= lx && xy.x <= rx ? 1.0 : 0.0;
}
";

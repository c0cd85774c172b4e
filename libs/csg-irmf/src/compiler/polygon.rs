//! Simple `polygon` fills.
//!
//! The polygon is cut into horizontal bands between consecutive distinct y
//! values of its points. Inside a band a convex polygon is crossed by exactly
//! one left and one right edge, and the fill test checks that the sample lies
//! between them.

use super::{Call, Compiler};
use crate::arguments::Arguments;
use crate::error::CompileError;
use crate::format::number;
use crate::library::LibraryFunction;
use crate::mbb::Mbb;
use csg_ast::PrimitiveKind;
use csg_eval::Object;
use glam::{DVec2, DVec3};

const POLYGON: &[&str] = &["points", "paths"];

/// Non-horizontal polygon edge ordered from lower to upper y.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Edge {
    low: DVec2,
    high: DVec2,
}

impl Compiler {
    pub(super) fn polygon(&mut self, arguments: &[Object]) -> Result<Call, CompileError> {
        let args = Arguments::resolve(PrimitiveKind::Polygon, arguments, POLYGON);
        if args.is_set("paths") {
            return Err(CompileError::Unsupported("polygon paths".to_string()));
        }
        let points = points(&args)?;
        if points.len() < 3 {
            return Err(CompileError::TooFewPoints {
                count: points.len(),
            });
        }

        let mut ys: Vec<f64> = points.iter().map(|p| p.y).collect();
        ys.sort_by(f64::total_cmp);
        ys.dedup();
        let min = points.iter().copied().fold(DVec2::INFINITY, DVec2::min);
        let max = points.iter().copied().fold(DVec2::NEG_INFINITY, DVec2::max);

        let mut lines = Vec::new();
        for band in ys.windows(2) {
            if let Some(line) = band_test(band[0], band[1], &points)? {
                lines.push(line);
            }
        }

        self.require(LibraryFunction::TestTwoLineSegments);
        let name = self.next_name("simplePolygon");
        let mut source = format!(
            "float {name}(in vec3 xyz) {{\n\tif (any(lessThan(xyz.xy, vec2({},{}))) || any(greaterThan(xyz.xy, vec2({},{})))) {{ return 0.0; }}\n",
            number(min.x),
            number(min.y),
            number(max.x),
            number(max.y)
        );
        for line in &lines {
            source.push('\t');
            source.push_str(line);
            source.push('\n');
        }
        source.push_str("\treturn 1.0;\n}\n");

        let mbb = Mbb::new(min.extend(0.0), max.extend(0.0));
        Ok(Call::new(self.push_function(name, source), mbb))
    }
}

fn points(args: &Arguments<'_>) -> Result<Vec<DVec2>, CompileError> {
    let Some(value) = args.get("points") else {
        return Err(args.invalid("missing points argument"));
    };
    let Object::Array(elements) = value else {
        return Err(args.invalid(format!("points must be an array, got {}", value.type_name())));
    };

    elements
        .iter()
        .map(|element| match element {
            Object::Array(xy) if xy.len() == 2 => match (xy[0].as_f64(), xy[1].as_f64()) {
                (Some(x), Some(y)) => Ok(DVec2::new(x, y)),
                _ => Err(args.invalid("point coordinates must be numbers")),
            },
            other => Err(args.invalid(format!("expected [x, y] point, got {other}"))),
        })
        .collect()
}

/// GLSL test for the band `low..=high`, or `None` when fewer than two edges
/// cross it.
fn band_test(low: f64, high: f64, points: &[DVec2]) -> Result<Option<String>, CompileError> {
    let mut left: Option<Edge> = None;
    let mut right: Option<Edge> = None;

    for (i, &start) in points.iter().enumerate() {
        let end = points[(i + 1) % points.len()];
        if start.y == end.y {
            continue;
        }
        let edge = if start.y < end.y {
            Edge { low: start, high: end }
        } else {
            Edge { low: end, high: start }
        };
        if low >= edge.high.y || high <= edge.low.y {
            continue;
        }

        match (left, right) {
            (None, _) => left = Some(edge),
            (Some(first), None) => {
                if edge.low.x < first.low.x || edge.high.x < first.high.x {
                    left = Some(edge);
                    right = Some(first);
                } else {
                    right = Some(edge);
                }
            }
            (Some(_), Some(_)) => return Err(CompileError::ConcavePolygon),
        }
    }

    let (Some(left), Some(right)) = (left, right) else {
        return Ok(None);
    };
    Ok(Some(format!(
        "if (xyz.y >= float({}) && xyz.y <= float({})) {{ return testTwoLineSegments(vec2({},{}),vec2({},{}),vec2({},{}),vec2({},{}),xyz.xy); }}",
        number(low),
        number(high),
        number(left.low.x),
        number(left.low.y),
        number(left.high.x),
        number(left.high.y),
        number(right.low.x),
        number(right.low.y),
        number(right.high.x),
        number(right.high.y),
    )))
}

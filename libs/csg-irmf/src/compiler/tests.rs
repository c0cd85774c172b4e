//! Tests for shader generation.

use super::*;
use crate::compile_source;
use glam::DVec3;

fn compile(source: &str) -> Shader {
    compile_source(source, false).expect("compile")
}

fn main_body(sum: &str) -> String {
    format!("void mainModel4(out vec4 materials, in vec3 xyz) {{\n\tmaterials[0] = {sum};\n}}\n")
}

fn mbb(min: [f64; 3], max: [f64; 3]) -> Option<Mbb> {
    Some(Mbb::new(DVec3::from_array(min), DVec3::from_array(max)))
}

fn assert_mbb_near(shader: &Shader, min: [f64; 3], max: [f64; 3]) {
    let actual = shader.mbb.expect("mbb");
    let expected = Mbb::new(DVec3::from_array(min), DVec3::from_array(max));
    assert!(
        actual.min.abs_diff_eq(expected.min, 0.5) && actual.max.abs_diff_eq(expected.max, 0.5),
        "mbb = {actual:?}, want {expected:?}"
    );
}

// =============================================================================
// LEAVES
// =============================================================================

#[test]
fn test_cube() {
    let tests = [
        ("cube();", "cube(vec3(1), false, xyz)", [0.0; 3], [1.0; 3]),
        ("cube(2);", "cube(vec3(2), false, xyz)", [0.0; 3], [2.0; 3]),
        ("cube(center=true);", "cube(vec3(1), true, xyz)", [-0.5; 3], [0.5; 3]),
        ("cube(size=5);", "cube(vec3(5), false, xyz)", [0.0; 3], [5.0; 3]),
        (
            "cube(size= [ 5 , 4 , 3 ]);",
            "cube(vec3(5, 4, 3), false, xyz)",
            [0.0; 3],
            [5.0, 4.0, 3.0],
        ),
        (
            "cube(center = false, size = [ 5 , 4 , 3 ]);",
            "cube(vec3(5, 4, 3), false, xyz)",
            [0.0; 3],
            [5.0, 4.0, 3.0],
        ),
    ];

    for (source, call, min, max) in tests {
        let shader = compile(source);
        assert_eq!(shader.functions, vec![main_body(call)], "{source}");
        assert_eq!(shader.mbb, mbb(min, max), "{source}");
        assert_eq!(shader.library.iter().collect::<Vec<_>>(), [&LibraryFunction::Cube]);
    }
}

#[test]
fn test_sphere() {
    let tests = [
        ("sphere();", "sphere(float(1), xyz)", 1.0),
        ("sphere(2);", "sphere(float(2), xyz)", 2.0),
        ("sphere(r = 2);", "sphere(float(2), xyz)", 2.0),
        ("sphere(r=2.75);", "sphere(float(2.75), xyz)", 2.75),
        ("sphere(d = 2);", "sphere(float(1), xyz)", 1.0),
        ("sphere(d = 20, r=1);", "sphere(float(1), xyz)", 1.0),
        ("sphere($fn = 0, $fa = 12, $fs = 2, r = 1);", "sphere(float(1), xyz)", 1.0),
    ];

    for (source, call, r) in tests {
        let shader = compile(source);
        assert_eq!(shader.functions, vec![main_body(call)], "{source}");
        assert_eq!(shader.mbb, mbb([-r; 3], [r; 3]), "{source}");
    }
}

#[test]
fn test_sphere_radius_and_diameter_agree() {
    assert_eq!(compile("sphere(r = 3);"), compile("sphere(d = 6);"));
}

#[test]
fn test_cylinder() {
    let tapered = "cylinder(float(15), float(9.5), float(19.5), false, xyz)";
    let cone = "cylinder(float(15), float(10), float(0), true, xyz)";
    let straight = "cylinder(float(20), float(10), float(10), true, xyz)";
    let tests = [
        (
            "cylinder();",
            "cylinder(float(1), float(1), float(1), false, xyz)",
            [-1.0, -1.0, 0.0],
            [1.0, 1.0, 1.0],
        ),
        ("cylinder(h=15, r1=9.5, r2=19.5, center=false);", tapered, [-19.5, -19.5, 0.0], [19.5, 19.5, 15.0]),
        ("cylinder(  15,    9.5,    19.5, false);", tapered, [-19.5, -19.5, 0.0], [19.5, 19.5, 15.0]),
        ("cylinder(  15,    9.5,    19.5);", tapered, [-19.5, -19.5, 0.0], [19.5, 19.5, 15.0]),
        ("cylinder(  15,    9.5, d2=39  );", tapered, [-19.5, -19.5, 0.0], [19.5, 19.5, 15.0]),
        ("cylinder(  15, d1=19,  d2=39  );", tapered, [-19.5, -19.5, 0.0], [19.5, 19.5, 15.0]),
        ("cylinder(  15, d1=19,  r2=19.5);", tapered, [-19.5, -19.5, 0.0], [19.5, 19.5, 15.0]),
        ("cylinder(h=15, r1=10, r2=0, center=true);", cone, [-10.0, -10.0, -7.5], [10.0, 10.0, 7.5]),
        ("cylinder(  15,    10,    0,        true);", cone, [-10.0, -10.0, -7.5], [10.0, 10.0, 7.5]),
        ("cylinder(h=15, d1=20, d2=0, center=true);", cone, [-10.0, -10.0, -7.5], [10.0, 10.0, 7.5]),
        ("cylinder(h=20, r=10, center=true);", straight, [-10.0; 3], [10.0; 3]),
        ("cylinder(  20,   10, 10,true);", straight, [-10.0; 3], [10.0; 3]),
        ("cylinder(  20, d=20, center=true);", straight, [-10.0; 3], [10.0; 3]),
        ("cylinder(  20,r1=10, d2=20, center=true);", straight, [-10.0; 3], [10.0; 3]),
    ];

    for (source, call, min, max) in tests {
        let shader = compile(source);
        assert_eq!(shader.functions, vec![main_body(call)], "{source}");
        assert_eq!(shader.mbb, mbb(min, max), "{source}");
    }
}

#[test]
fn test_cylinder_radius_beats_diameter() {
    let shader = compile("cylinder(h = 2, r = 1, d = 4);");
    assert_eq!(
        shader.functions,
        vec![main_body("cylinder(float(2), float(1), float(1), false, xyz)")]
    );
    assert_eq!(shader.mbb, mbb([-1.0, -1.0, 0.0], [1.0, 1.0, 2.0]));
    assert_eq!(compile("cylinder(h = 2, d = 4, r = 1);"), shader);
    assert_eq!(compile("cylinder(h = 2, r = 1);"), shader);
}

#[test]
fn test_square() {
    let tests = [
        ("square();", "square(vec2(1), false, xyz)", [0.0; 3], [1.0, 1.0, 0.0]),
        ("square([20,10],true);", "square(vec2(20, 10), true, xyz)", [-10.0, -5.0, 0.0], [10.0, 5.0, 0.0]),
        ("square(size = 10);", "square(vec2(10), false, xyz)", [0.0; 3], [10.0, 10.0, 0.0]),
        ("square(10,false);", "square(vec2(10), false, xyz)", [0.0; 3], [10.0, 10.0, 0.0]),
        ("square([10,10],center=false);", "square(vec2(10, 10), false, xyz)", [0.0; 3], [10.0, 10.0, 0.0]),
        (
            "square(center = false,size = [10, 10] );",
            "square(vec2(10, 10), false, xyz)",
            [0.0; 3],
            [10.0, 10.0, 0.0],
        ),
    ];

    for (source, call, min, max) in tests {
        let shader = compile(source);
        assert_eq!(shader.functions, vec![main_body(call)], "{source}");
        assert_eq!(shader.mbb, mbb(min, max), "{source}");
    }
}

#[test]
fn test_circle() {
    let shader = compile("circle($fn = 100, r = 3);");
    assert_eq!(shader.functions, vec![main_body("circle(float(3), xyz)")]);
    assert_eq!(shader.mbb, mbb([-3.0, -3.0, 0.0], [3.0, 3.0, 0.0]));
    assert_eq!(compile("circle(d = 4);").functions, vec![main_body("circle(float(2), xyz)")]);
}

// =============================================================================
// BLOCKS
// =============================================================================

#[test]
fn test_multmatrix() {
    let shader =
        compile("multmatrix([[1, 0, 0, -19], [0, 1, 0, -0.5], [0, 0, 1, 0], [0, 0, 0, 1]]) {sphere();}");
    assert_eq!(
        shader.functions,
        vec![
            "float multimatrixBlock0(in vec3 xyz) {
\tmat4 xfm = mat4(vec4(1, 0, 0, 19), vec4(0, 1, 0, 0.5), vec4(0, 0, 1, 0), vec4(0, 0, 0, 1));
\txyz = (vec4(xyz, 1.0) * xfm).xyz;
\treturn sphere(float(1), xyz);
}
"
            .to_string(),
            main_body("multimatrixBlock0(xyz)"),
        ]
    );
    assert_eq!(shader.mbb, mbb([-20.0, -1.5, -1.0], [-18.0, 0.5, 1.0]));
}

#[test]
fn test_multmatrix_scale_inverse() {
    let shader = compile("multmatrix([[2, 0, 0, 0], [0, 4, 0, 0], [0, 0, 1, 0], [0, 0, 0, 1]]) {cube();}");
    assert!(shader.functions[0]
        .contains("mat4 xfm = mat4(vec4(0.5, 0, 0, 0), vec4(0, 0.25, 0, 0), vec4(0, 0, 1, 0), vec4(0, 0, 0, 1));"));
    assert_eq!(shader.mbb, mbb([0.0; 3], [2.0, 4.0, 1.0]));
}

#[test]
fn test_singular_multmatrix() {
    let err = compile_source(
        "multmatrix([[0, 0, 0, 0], [0, 1, 0, 0], [0, 0, 1, 0], [0, 0, 0, 1]]) {cube();}",
        false,
    )
    .unwrap_err();
    assert!(matches!(err, CompileError::SingularMatrix { .. }));
}

#[test]
fn test_small_scale_multmatrix_is_invertible() {
    let shader = compile(
        "multmatrix([[0.00001, 0, 0, 0], [0, 0.00001, 0, 0], [0, 0, 0.00001, 0], [0, 0, 0, 1]]) {cube(100000);}",
    );
    assert_eq!(shader.functions[1], main_body("multimatrixBlock0(xyz)"));

    let inverse_scale = shader.functions[0]
        .split_once("mat4(vec4(")
        .and_then(|(_, rest)| rest.split_once(','))
        .map(|(first, _)| first.parse::<f64>().unwrap())
        .unwrap();
    assert!((inverse_scale - 100000.0).abs() < 1e-6, "inverse scale = {inverse_scale}");
    assert_mbb_near(&shader, [0.0; 3], [1.0; 3]);
}

#[test]
fn test_malformed_multmatrix() {
    let err = compile_source("multmatrix([[1, 0], [0, 1]]) {cube();}", false).unwrap_err();
    assert_eq!(
        err.to_string(),
        "multmatrix: matrix must be 4 rows of 4 numbers"
    );
}

fn translated_sphere_scene(block: &str) -> String {
    format!(
        "{block}() {{
\tsphere($fn = 100, $fa = 12, $fs = 2, r = 1);
\tmultmatrix([[1, 0, 0, 2], [0, 1, 0, 0], [0, 0, 1, 0], [0, 0, 0, 1]]) {{
\t\tsphere($fn = 100, $fa = 12, $fs = 2, r = 2);
\t}}
}}
"
    )
}

const TRANSLATED_SPHERE: &str = "float multimatrixBlock0(in vec3 xyz) {
\tmat4 xfm = mat4(vec4(1, 0, 0, -2), vec4(0, 1, 0, 0), vec4(0, 0, 1, 0), vec4(0, 0, 0, 1));
\txyz = (vec4(xyz, 1.0) * xfm).xyz;
\treturn sphere(float(2), xyz);
}
";

#[test]
fn test_boolean_blocks() {
    let tests = [("union", "+"), ("difference", "-"), ("intersection", "*")];

    for (block, operator) in tests {
        let shader = compile(&translated_sphere_scene(block));
        assert_eq!(
            shader.functions,
            vec![
                TRANSLATED_SPHERE.to_string(),
                format!(
                    "float {block}1(in vec3 xyz) {{\n\treturn clamp(sphere(float(1), xyz) {operator} multimatrixBlock0(xyz), 0.0, 1.0);\n}}\n"
                ),
                main_body(&format!("{block}1(xyz)")),
            ],
            "{block}"
        );
        assert_eq!(shader.mbb, mbb([-1.0, -2.0, -2.0], [4.0, 2.0, 2.0]), "{block}");
    }
}

#[test]
fn test_group_and_color_are_unclamped() {
    let shader = compile("group() { cube(); sphere(); }");
    assert_eq!(
        shader.functions[0],
        "float groupBlock0(in vec3 xyz) {\n\treturn cube(vec3(1), false, xyz) + sphere(float(1), xyz);\n}\n"
    );

    let shader = compile("color([1, 0, 0, 1]) { cube(); }");
    assert_eq!(
        shader.functions[0],
        "float colorBlock0(in vec3 xyz) {\n\treturn cube(vec3(1), false, xyz);\n}\n"
    );
}

#[test]
fn test_empty_blocks_contribute_nothing() {
    let shader = compile("group(); union() { cube(); group() {} }");
    assert_eq!(
        shader.functions,
        vec![
            "float union0(in vec3 xyz) {\n\treturn clamp(cube(vec3(1), false, xyz), 0.0, 1.0);\n}\n".to_string(),
            main_body("union0(xyz)"),
        ]
    );

    let empty = compile("group() {}");
    assert!(empty.is_empty());
    assert!(empty.functions.is_empty());
}

#[test]
fn test_top_level_calls_are_summed() {
    let shader = compile("cube(); sphere(2);");
    assert_eq!(
        shader.functions,
        vec![main_body("cube(vec3(1), false, xyz) + sphere(float(2), xyz)")]
    );
    assert_eq!(shader.mbb, mbb([-2.0; 3], [2.0; 3]));
    assert_eq!(
        shader.library.iter().map(|f| f.name()).collect::<Vec<_>>(),
        ["cube", "sphere"]
    );
}

// =============================================================================
// EXTRUSIONS
// =============================================================================

const TRANSLATED_CIRCLE: &str = "float multimatrixBlock0(in vec3 xyz) {
\tmat4 xfm = mat4(vec4(1, 0, 0, -1), vec4(0, 1, 0, 0), vec4(0, 0, 1, 0), vec4(0, 0, 0, 1));
\txyz = (vec4(xyz, 1.0) * xfm).xyz;
\treturn circle(float(1), xyz);
}
";

fn extrude_scene(header: &str) -> String {
    format!(
        "{header} {{
\tmultmatrix([[1, 0, 0, 1], [0, 1, 0, 0], [0, 0, 1, 0], [0, 0, 0, 1]]) {{
\t\tcircle($fn = 100, $fa = 12, $fs = 2, r = 1);
\t}}
}}"
    )
}

#[test]
fn test_linear_extrude() {
    for (center, z) in [(false, [0.0, 10.0]), (true, [-5.0, 5.0])] {
        let shader = compile(&extrude_scene(&format!(
            "linear_extrude(height = 10, center = {center}, convexity = 1, scale = [1, 1], $fn = 0, $fa = 12, $fs = 2)"
        )));
        assert_eq!(
            shader.functions,
            vec![
                TRANSLATED_CIRCLE.to_string(),
                format!(
                    "float linearExtrudeBlock1(in vec3 xyz) {{
\txyz.z /= float(10);
\tfloat z = xyz.z;
\tif ({center}) {{ z += 0.5; }} else {{ xyz.z -= 0.5; }}
\tif (abs(xyz.z) > 0.5) {{ return 0.0; }}
\tvec2 s = mix(vec2(1),vec2(1,1),z);
\txyz.xy /= s;
\treturn multimatrixBlock0(xyz);
}}
"
                ),
                main_body("linearExtrudeBlock1(xyz)"),
            ]
        );
        assert_mbb_near(&shader, [0.0, -1.0, z[0]], [2.0, 1.0, z[1]]);
    }
}

#[test]
fn test_linear_extrude_scale_widens() {
    let shader = compile("linear_extrude(height = 4, scale = 2) { square(2, center = true); }");
    assert!(shader.functions[0].contains("\tvec2 s = mix(vec2(1),vec2(2,2),z);\n"));
    assert_eq!(shader.mbb, mbb([-2.0, -2.0, 0.0], [2.0, 2.0, 4.0]));
}

#[test]
fn test_linear_extrude_twist() {
    let shader = compile(&extrude_scene(
        "linear_extrude(height = 10, center = false, convexity = 1, twist = 90, slices = 7, scale = [1, 1], $fn = 0, $fa = 12, $fs = 2)",
    ));
    assert_eq!(
        shader.functions[1],
        "float linearExtrudeBlock1(in vec3 xyz) {
\txyz.z /= float(10);
\tfloat z = xyz.z;
\tif (false) { z += 0.5; } else { xyz.z -= 0.5; }
\tif (abs(xyz.z) > 0.5) { return 0.0; }
\tfloat angle = mix(0.0, float(90)*3.1415926535897932384626433832795/180.0, z);
\tvec2 s = mix(vec2(1),vec2(1,1),z);
\txyz.xy /= s;
\txyz = (vec4(xyz, 1) * rotZ(angle)).xyz;
\treturn multimatrixBlock0(xyz);
}
"
    );
    assert_mbb_near(&shader, [-1.0, -2.0, 0.0], [2.0, 1.0, 10.0]);
    assert!(shader.library.contains(&LibraryFunction::RotAxis));
    assert!(shader.library.contains(&LibraryFunction::RotZ));
}

#[test]
fn test_rotate_extrude() {
    let shader = compile(&extrude_scene(
        "rotate_extrude(convexity = 2, $fn = 100, $fa = 12, $fs = 2)",
    ));
    assert_eq!(
        shader.functions,
        vec![
            TRANSLATED_CIRCLE.to_string(),
            "float rotateExtrudeBlock1(in vec3 xyz) {
\tfloat angle = atan(xyz.y, xyz.x);
\tif (angle<0.) { angle+=(2.*3.1415926535897932384626433832795); }
\tif (angle>float(360)*3.1415926535897932384626433832795/180.0) { return 0.0; }
\tvec3 slice=(vec4(xyz,1)*rotZ(-angle)).xyz;
\txyz = slice.xzy;
\treturn multimatrixBlock0(xyz);
}
"
            .to_string(),
            main_body("rotateExtrudeBlock1(xyz)"),
        ]
    );
    assert_eq!(shader.mbb, mbb([-2.0, -2.0, -1.0], [2.0, 2.0, 1.0]));
    assert_eq!(
        shader.library.iter().map(|f| f.name()).collect::<Vec<_>>(),
        ["circle", "rotAxis", "rotZ"]
    );
}

#[test]
fn test_rotate_extrude_angle() {
    let shader = compile("rotate_extrude(angle = 90) { square(1); }");
    assert!(shader.functions[0]
        .contains("\tif (angle>float(90)*3.1415926535897932384626433832795/180.0) { return 0.0; }\n"));
}

// =============================================================================
// POLYGONS
// =============================================================================

#[test]
fn test_simple_polygon() {
    let shader = compile(
        "polygon(points = [[0, 0], [100, 0], [130, 50], [30, 50]], paths = undef, convexity = 1);",
    );
    assert_eq!(
        shader.functions,
        vec![
            "float simplePolygon0(in vec3 xyz) {
\tif (any(lessThan(xyz.xy, vec2(0,0))) || any(greaterThan(xyz.xy, vec2(130,50)))) { return 0.0; }
\tif (xyz.y >= float(0) && xyz.y <= float(50)) { return testTwoLineSegments(vec2(0,0),vec2(30,50),vec2(100,0),vec2(130,50),xyz.xy); }
\treturn 1.0;
}
"
            .to_string(),
            main_body("simplePolygon0(xyz)"),
        ]
    );
    assert_eq!(shader.mbb, mbb([0.0; 3], [130.0, 50.0, 0.0]));
    assert!(shader.library.contains(&LibraryFunction::TestTwoLineSegments));
}

#[test]
fn test_polygon_bands() {
    let shader = compile("polygon([[0, 0], [2, -1], [4, 0], [2, 3]]);");
    assert_eq!(
        shader.functions[0].matches("testTwoLineSegments(").count(),
        2,
        "{}",
        shader.functions[0]
    );
    assert!(shader.functions[0].contains(
        "if (xyz.y >= float(-1) && xyz.y <= float(0)) { return testTwoLineSegments(vec2(2,-1),vec2(0,0),vec2(2,-1),vec2(4,0),xyz.xy); }"
    ));
}

#[test]
fn test_concave_polygon_is_rejected() {
    let err = compile_source("polygon([[0, 0], [10, 0], [10, 10], [5, 5], [0, 10]]);", false)
        .unwrap_err();
    assert_eq!(err, CompileError::ConcavePolygon);
}

#[test]
fn test_polygon_argument_errors() {
    assert_eq!(
        compile_source("polygon([[0, 0], [1, 1]]);", false).unwrap_err(),
        CompileError::TooFewPoints { count: 2 }
    );
    assert_eq!(
        compile_source("polygon([[0, 0], [1, 0], [0, 1]], [[0, 1, 2]]);", false).unwrap_err(),
        CompileError::Unsupported("polygon paths".into())
    );
    assert!(matches!(
        compile_source("polygon([[0, 0], [1], [0, 1]]);", false).unwrap_err(),
        CompileError::InvalidArgument { .. }
    ));
}

// =============================================================================
// SCENE
// =============================================================================

#[test]
fn test_center() {
    let shader = compile_source("cube([3, 2, 10]);", true).unwrap();
    assert_eq!(
        shader.functions,
        vec![
            "void mainModel4(out vec4 materials, in vec3 xyz) {\n\txyz += vec3(1.5, 1, 5);\n\tmaterials[0] = cube(vec3(3, 2, 10), false, xyz);\n}\n"
                .to_string()
        ]
    );
    assert_eq!(shader.mbb, mbb([-2.0, -1.5, -5.5], [2.0, 1.5, 5.5]));
}

#[test]
fn test_center_rounds_up_to_half_units() {
    let shader = compile_source("sphere(1.1);", true).unwrap();
    assert_eq!(shader.mbb, mbb([-1.5; 3], [1.5; 3]));
}

#[test]
fn test_unsupported_primitives() {
    for (source, name) in [
        ("hull() { cube(); }", "hull"),
        ("minkowski() { cube(); }", "minkowski"),
        ("projection() { cube(); }", "projection"),
        ("polyhedron(points = [[0, 0, 0]], faces = [[0]]);", "polyhedron"),
        ("text(text = \"hi\");", "text"),
    ] {
        assert_eq!(
            compile_source(source, false).unwrap_err(),
            CompileError::Unsupported(name.into()),
            "{source}"
        );
    }
}

#[test]
fn test_non_primitive_objects_are_rejected() {
    let err = Compiler::compile(&[Object::Integer(1)], false).unwrap_err();
    assert_eq!(err, CompileError::NotAPrimitive("INTEGER"));
}

#[test]
fn test_evaluation_errors_propagate() {
    assert!(matches!(
        compile_source("cube(size);", false).unwrap_err(),
        CompileError::Eval(_)
    ));
    assert!(matches!(
        compile_source("cube(", false).unwrap_err(),
        CompileError::Eval(csg_eval::EvalError::Parse(_))
    ));
}

#[test]
fn test_invalid_argument_types() {
    assert_eq!(
        compile_source("cube(center = 1);", false).unwrap_err().to_string(),
        "cube: `center` must be a boolean, got INTEGER"
    );
}

//! Printing a parsed program and parsing the text again yields the same tree.

use csg_parser::parse;

fn assert_round_trip(source: &str) {
    let first = parse(source);
    assert!(first.is_ok(), "Errors in {source:?}: {:?}", first.messages());

    let printed = first.program.to_string();
    let second = parse(&printed);
    assert!(second.is_ok(), "Errors in printed {printed:?}: {:?}", second.messages());
    assert_eq!(first.program, second.program, "printed as {printed:?}");
}

#[test]
fn test_cube_with_named_arguments() {
    assert_round_trip("cube(size = [1, 1, 1], center = false);");
}

#[test]
fn test_every_leaf_primitive() {
    let sources = [
        "circle($fn = 50, $fa = 12, $fs = 2, r = 0.75);",
        "cube(size = [10.4, 9, 20.8], center = false);",
        "cylinder($fn = 0, $fa = 12, $fs = 2, h = 8, r1 = 6.5, r2 = 6.5, center = true);",
        "polygon(points = [[0, 0], [100, 0], [130, 50], [30, 50]], paths = undef, convexity = 1);",
        "polyhedron(points = [[0, 0, 0], [1, 0, 0], [0, 1, 0], [0, 0, 1]], faces = [[0, 1, 2], [0, 1, 3]], convexity = 1);",
        "sphere($fn = 0, $fa = 12, $fs = 2, r = 10);",
        "square(size = [20, 10], center = true);",
        "text(text = \"HeartyGFX\", size = 10, spacing = 1, font = \"Liberation Sans\", halign = \"left\", valign = \"baseline\");",
        "group();",
    ];
    for source in sources {
        assert_round_trip(source);
    }
}

#[test]
fn test_every_block_primitive() {
    let sources = [
        "union() { cube(1); sphere(2); }",
        "difference() { cube(10, true); sphere(6); }",
        "intersection() { cube(10, center = true); sphere(7); }",
        "group() { cube(1); }",
        "hull() { circle(1); square(2); }",
        "minkowski() { cube(1); sphere(0.5); }",
        "multmatrix([[1, 0, 0, -19], [0, 1, 0, -0.5], [0, 0, 1, 0], [0, 0, 0, 1]]) { sphere(); }",
        "projection(cut = false) { cube(1); }",
        "color([1, 0, 0, 1]) { cube(1); }",
        "linear_extrude(height = 10, center = false, convexity = 10, twist = 90, slices = 20, scale = [1, 1]) { circle(1); }",
        "rotate_extrude(angle = 360, convexity = 2) { square(1); }",
    ];
    for source in sources {
        assert_round_trip(source);
    }
}

#[test]
fn test_nested_scene() {
    assert_round_trip(
        "group() {\n\
         \tmultmatrix([[1, 0, 0, 2], [0, 1, 0, 0], [0, 0, 1, 0], [0, 0, 0, 1]]) {\n\
         \t\tunion() {\n\
         \t\t\tsphere(r = 1);\n\
         \t\t\tcube(size = [1, 2, 3], center = true);\n\
         \t\t}\n\
         \t}\n\
         \tgroup();\n\
         }",
    );
}

#[test]
fn test_general_expressions() {
    let sources = [
        "let add = function(a, b) { return a + b; }; add(1, 2 * 3);",
        "let h = {\"size\": [1, 2], true: 5, 3: \"x\"}; h[\"size\"][0];",
        "if (1 < 2) { 10 } else { -2.5 }",
        "let x = !true == false; x != undef;",
        "let scale = 1e-3; cube(size = scale * 1000);",
    ];
    for source in sources {
        assert_round_trip(source);
    }
}

// Host-side tests for the OBJ reader.

use craneyard_core::{parse_obj, ObjError};

const TRIANGLE: &str = "\
v 0 0 0
v 1 0 0
v 0 1 0
f 1 2 3
";

const QUAD_WITH_NORMALS: &str = "\
# a single quad, normal per corner
v -1 -1 0
v 1 -1 0
v 1 1 0
v -1 1 0
vn 0 0 1
f 1//1 2//1 3//1 4//1
";

const TEXTURED: &str = "\
v 0 0 0
v 1 0 0
v 0 1 0
vt 0 0
vt 1 0
vt 0 1
vn 0 0 1
f 1/1/1 2/2/1 3/3/1
";

#[test]
fn parses_a_bare_triangle_and_derives_normals() {
    let mesh = parse_obj(TRIANGLE).expect("triangle should parse");
    assert_eq!(mesh.vertices.len(), 3);
    assert_eq!(mesh.indices.len(), 3);
    for v in &mesh.vertices {
        // flat +Z normal derived from the face
        assert!((v.normal[2] - 1.0).abs() < 1e-6, "derived normal wrong");
    }
}

#[test]
fn fan_triangulates_quads() {
    let mesh = parse_obj(QUAD_WITH_NORMALS).expect("quad should parse");
    assert_eq!(mesh.indices.len(), 6);
    for v in &mesh.vertices {
        assert_eq!(v.normal, [0.0, 0.0, 1.0]);
    }
}

#[test]
fn reads_past_texture_coordinates() {
    let mesh = parse_obj(TEXTURED).expect("textured triangle should parse");
    assert_eq!(mesh.indices.len(), 3);
    for v in &mesh.vertices {
        assert_eq!(v.normal, [0.0, 0.0, 1.0]);
    }
}

#[test]
fn resolves_negative_indices() {
    let text = "\
v 0 0 0
v 1 0 0
v 0 1 0
f -3 -2 -1
";
    let mesh = parse_obj(text).expect("negative indices should resolve");
    assert_eq!(mesh.vertices[0].position, [0.0, 0.0, 0.0]);
    assert_eq!(mesh.vertices[2].position, [0.0, 1.0, 0.0]);
}

#[test]
fn ignores_comments_and_unknown_records() {
    let text = format!("# header\no crane\ng body\nusemtl steel\ns off\n{TRIANGLE}");
    assert!(parse_obj(&text).is_ok());
}

#[test]
fn rejects_malformed_vertices() {
    let err = parse_obj("v 1.0 2.0\n").unwrap_err();
    assert!(matches!(err, ObjError::Malformed { kind: "v", line: 1 }));
}

#[test]
fn rejects_out_of_range_face_indices() {
    let text = "\
v 0 0 0
v 1 0 0
f 1 2 9
";
    let err = parse_obj(text).unwrap_err();
    assert!(matches!(err, ObjError::IndexOutOfRange { index: 9, line: 3 }));
}

#[test]
fn rejects_degenerate_faces() {
    let text = "\
v 0 0 0
v 1 0 0
f 1 2
";
    assert!(matches!(
        parse_obj(text).unwrap_err(),
        ObjError::Malformed { kind: "f", .. }
    ));
}

#[test]
fn rejects_models_without_faces() {
    assert!(matches!(
        parse_obj("v 0 0 0\nvn 0 1 0\n").unwrap_err(),
        ObjError::Empty
    ));
}

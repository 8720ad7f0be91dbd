use bezier_mesh::constants::{DEFAULT_DOME_EXTENT, DEFAULT_RESOLUTION};
use bezier_mesh::modules::export::obj::ToObj;
use bezier_mesh::modules::generate::{dome_grid, random_grid};
use bezier_mesh::{pt3, tessellate, tessellate_with, BezierError, ControlGrid, TessellationConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_complete_workflow() {
    // Generate the dome demo grid and tessellate it at the default resolution
    let mut rng = StdRng::seed_from_u64(2024);
    let grid = dome_grid(&mut rng, DEFAULT_DOME_EXTENT);
    let mesh = tessellate_with(&grid, &TessellationConfig::default()).unwrap();

    assert_eq!(mesh.vertices.len(), DEFAULT_RESOLUTION * DEFAULT_RESOLUTION);
    assert_eq!(
        mesh.faces.len(),
        (DEFAULT_RESOLUTION - 1) * (DEFAULT_RESOLUTION - 1)
    );

    // The lifted inner control points pull the middle of the patch upwards
    let middle = mesh.vertex(DEFAULT_RESOLUTION / 2, DEFAULT_RESOLUTION / 2);
    let corner_height = grid.corners().iter().map(|p| p.z).fold(f64::MIN, f64::max);
    assert!(middle.z > corner_height);

    // Every face can be drawn as a closed quad outline
    for face in &mesh.faces {
        let quad = mesh.face_vertices(face);
        assert!(quad.iter().all(|p| p.x.is_finite() && p.y.is_finite() && p.z.is_finite()));
    }

    let obj = mesh.to_obj();
    assert_eq!(obj.lines().count(), mesh.vertices.len() + mesh.faces.len());
}

#[test]
fn test_json_grid_to_mesh() {
    let json = r#"[
        [{"x": 0, "y": 0, "z": 0}, {"x": 0, "y": 1, "z": 0}, {"x": 0, "y": 2, "z": 0}, {"x": 0, "y": 3, "z": 0}],
        [{"x": 1, "y": 0, "z": 0}, {"x": 1, "y": 1, "z": 0}, {"x": 1, "y": 2, "z": 0}, {"x": 1, "y": 3, "z": 0}],
        [{"x": 2, "y": 0, "z": 0}, {"x": 2, "y": 1, "z": 0}, {"x": 2, "y": 2, "z": 0}, {"x": 2, "y": 3, "z": 0}],
        [{"x": 3, "y": 0, "z": 0}, {"x": 3, "y": 1, "z": 0}, {"x": 3, "y": 2, "z": 0}, {"x": 3, "y": 3, "z": 0}]
    ]"#;
    let grid = ControlGrid::from_json(json).unwrap();
    let mesh = tessellate(&grid, 4).unwrap();

    assert!(mesh.vertices.iter().all(|p| p.z == 0.0));
    assert_eq!(mesh.vertex(0, 0), pt3!(0, 0, 0));
    assert_eq!(mesh.vertex(0, 3), pt3!(3, 0, 0));
    assert_eq!(mesh.vertex(3, 0), pt3!(0, 3, 0));
    assert_eq!(mesh.vertex(3, 3), pt3!(3, 3, 0));

    // A flat patch has the same normal everywhere
    for face in &mesh.faces {
        let normal = mesh.face_normal(face).unwrap();
        assert!((normal.z.abs() - 1.0).abs() < 1e-12);
    }
    assert_eq!(mesh.triangulate().len(), 2 * mesh.faces.len());
}

#[test]
fn test_random_grid_keeps_corners() {
    let mut rng = StdRng::seed_from_u64(11);
    let grid = random_grid(&mut rng, 800.0);
    let mesh = tessellate(&grid, 12).unwrap();

    let [p00, p03, p30, p33] = grid.corners();
    assert_eq!(mesh.vertex(0, 0), p00);
    assert_eq!(mesh.vertex(11, 0), p03);
    assert_eq!(mesh.vertex(0, 11), p30);
    assert_eq!(mesh.vertex(11, 11), p33);
}

#[test]
fn test_malformed_input_is_rejected() {
    let three_rows = vec![vec![pt3!(0, 0, 0); 4]; 3];
    assert!(matches!(
        ControlGrid::try_from(three_rows),
        Err(BezierError::InvalidShape { rows: 3, .. })
    ));

    assert!(matches!(
        tessellate(&ControlGrid::default(), 0),
        Err(BezierError::InvalidResolution(0))
    ));
}

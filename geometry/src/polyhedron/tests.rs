//! Tests for the polyhedron subdivision engine

use super::*;
use crate::types::MeshData;

#[test]
fn test_icosahedron_detail_0_is_non_indexed() {
    // 20 base faces, one triangle each, three private vertex copies per
    // triangle: 60 vertices and an identity index buffer
    let data: MeshData = generate_icosahedron(1.0, 0);

    assert_eq!(data.vertex_count(), 60);
    assert_eq!(data.indices.len(), 60);
    for (i, &index) in data.indices.iter().enumerate() {
        assert_eq!(index as usize, i);
    }
}

#[test]
fn test_tetrahedron_detail_0_counts() {
    let data: MeshData = generate_tetrahedron(1.0, 0);
    assert_eq!(data.vertex_count(), 4 * 3);
    assert_eq!(data.indices.len(), 4 * 3);
}

#[test]
fn test_octahedron_subdivision_counts() {
    // Each detail step re-subdivides the base faces into cols^2 triangles
    let data: MeshData = generate_octahedron(1.0, 1);
    assert_eq!(data.vertex_count(), 8 * 4 * 3);

    let data: MeshData = generate_octahedron(1.0, 2);
    assert_eq!(data.vertex_count(), 8 * 9 * 3);
}

#[test]
fn test_vertices_projected_onto_radius() {
    let data: MeshData = generate_icosahedron(2.0, 2);
    for vertex in &data.vertices {
        let [x, y, z] = vertex.position;
        let length = (x * x + y * y + z * z).sqrt();
        assert!((length - 2.0).abs() < 1e-4);
    }
}

#[test]
fn test_detail_0_preserves_base_shape() {
    // At detail 0 the tetrahedron keeps its four flat faces; corners land
    // on the projected base vertices, not on a finer sphere
    let data: MeshData = generate_tetrahedron(3.0_f32.sqrt(), 0);

    // Base corner (1,1,1) normalizes to (1,1,1)/sqrt(3) and projects back
    // onto itself
    let found = data
        .vertices
        .iter()
        .any(|v| (v.position[0] - 1.0).abs() < 1e-5
            && (v.position[1] - 1.0).abs() < 1e-5
            && (v.position[2] - 1.0).abs() < 1e-5);
    assert!(found);
}

#[test]
fn test_normals_follow_projected_positions() {
    let data: MeshData = generate_octahedron(1.5, 1);
    for vertex in &data.vertices {
        let [x, y, z] = vertex.position;
        let [nx, ny, nz] = vertex.normal;
        // normal = position / radius
        assert!((x / 1.5 - nx).abs() < 1e-5);
        assert!((y / 1.5 - ny).abs() < 1e-5);
        assert!((z / 1.5 - nz).abs() < 1e-5);
    }
}

#[test]
fn test_malformed_vertex_list_is_rejected() {
    let result = generate_polyhedron::<MeshData>(&[0.0, 1.0, 2.0, 3.0], &[], 1.0, 0);
    assert_eq!(
        result.err(),
        Some(GeometryError::MalformedVertexList(4))
    );
}

#[test]
fn test_malformed_index_list_is_rejected() {
    let vertices = [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0];
    let result = generate_polyhedron::<MeshData>(&vertices, &[0, 1, 2, 0], 1.0, 0);
    assert_eq!(result.err(), Some(GeometryError::MalformedIndexList(4)));
}

#[test]
fn test_out_of_bounds_index_is_rejected() {
    let vertices = [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0];
    let result = generate_polyhedron::<MeshData>(&vertices, &[0, 1, 3], 1.0, 0);
    assert_eq!(
        result.err(),
        Some(GeometryError::IndexOutOfBounds {
            index: 3,
            vertex_count: 3
        })
    );
}

#[test]
fn test_empty_input_produces_empty_mesh() {
    let data = generate_polyhedron::<MeshData>(&[], &[], 1.0, 3).unwrap();
    assert_eq!(data.vertex_count(), 0);
    assert_eq!(data.indices.len(), 0);
}

#[test]
fn test_custom_base_matches_builtin() {
    // Feeding the tetrahedron table through the flat-slice entry point
    // must agree with the built-in generator
    #[rustfmt::skip]
    let vertices = [
        1.0, 1.0, 1.0,   -1.0, -1.0, 1.0,   -1.0, 1.0, -1.0,   1.0, -1.0, -1.0,
    ];
    let indices = [2, 1, 0, 0, 3, 2, 1, 3, 0, 2, 3, 1];

    let custom = generate_polyhedron::<MeshData>(&vertices, &indices, 1.0, 1).unwrap();
    let builtin: MeshData = generate_tetrahedron(1.0, 1);

    assert_eq!(custom.vertices.len(), builtin.vertices.len());
    for (a, b) in custom.vertices.iter().zip(&builtin.vertices) {
        assert_eq!(a.position, b.position);
        assert_eq!(a.uv, b.uv);
    }
}

#[test]
fn test_detail_clamps_to_vertex_budget() {
    // detail 50 would need 60 * 51^2 vertices; the engine clamps to the
    // largest level that fits the 16-bit index space
    let data: MeshData = generate_icosahedron(1.0, 50);
    assert_eq!(data.vertex_count(), 60 * 33 * 33);
    assert!(data.vertex_count() <= MAX_VERTICES);
}

#[test]
fn test_seam_straddle_correction_is_idempotent() {
    // After one pass no triangle may still span the 0/1 wraparound
    for detail in [0, 1, 2, 3] {
        let data: MeshData = generate_icosahedron(1.0, detail);

        for triangle in data.vertices.chunks_exact(3) {
            let u0 = triangle[0].uv[0];
            let u1 = triangle[1].uv[0];
            let u2 = triangle[2].uv[0];

            let max = u0.max(u1).max(u2);
            let min = u0.min(u1).min(u2);
            assert!(!(max > 0.9 && min < 0.1));
        }
    }
}

#[test]
fn test_correct_seam_rerun_changes_nothing() {
    let data: MeshData = generate_octahedron(1.0, 2);
    let mut uvs: Vec<[f32; 2]> = data.vertices.iter().map(|v| v.uv).collect();
    let before = uvs.clone();

    correct_seam(&mut uvs);
    assert_eq!(uvs, before);
}

#[test]
fn test_uvs_stay_in_seam_corrected_range() {
    // Base UVs live in [0, 1]; the corrections may push U into [-1, 2]
    for detail in [0, 2] {
        let data: MeshData = generate_icosahedron(1.0, detail);
        for vertex in &data.vertices {
            assert!(vertex.uv[0] >= -1.0 && vertex.uv[0] <= 2.0);
            assert!(vertex.uv[1] >= 0.0 && vertex.uv[1] <= 1.0);
        }
    }
}

#[test]
fn test_axis_vertices_borrow_triangle_azimuth() {
    // The octahedron poles sit on the vertical axis where azimuth is
    // undefined; each face copy must take its own triangle's azimuth
    // instead of a fixed singular value
    let data: MeshData = generate_octahedron(1.0, 0);

    let mut pole_us = Vec::new();
    for vertex in &data.vertices {
        if vertex.position[0].abs() < 1e-6 && vertex.position[2].abs() < 1e-6 {
            pole_us.push(vertex.uv[0]);
        }
    }

    // 8 faces touch a pole, and they cannot all agree on one U
    assert_eq!(pole_us.len(), 8);
    let first = pole_us[0];
    assert!(pole_us.iter().any(|u| (u - first).abs() > 1e-3));
}

#[test]
fn test_row_offset_walks_shrinking_rows() {
    // cols = 3: row lengths 4, 3, 2, 1
    assert_eq!(row_offset(3, 0), 0);
    assert_eq!(row_offset(3, 1), 4);
    assert_eq!(row_offset(3, 2), 7);
    assert_eq!(row_offset(3, 3), 9);
    assert_eq!(row_offset(3, 4), 10);
}

#[test]
fn test_subdivide_face_emits_cols_squared_triangles() {
    use glam::Vec3;

    for cols in 1..=4 {
        let mut out = Vec::new();
        subdivide_face(Vec3::X, Vec3::Y, Vec3::Z, cols, &mut out);
        assert_eq!(out.len(), cols * cols * 3);
    }
}

#[test]
fn test_subdivide_face_detail_0_keeps_winding_cycle() {
    use glam::Vec3;

    let mut out = Vec::new();
    subdivide_face(Vec3::X, Vec3::Y, Vec3::Z, 1, &mut out);
    // One triangle, rotated but same cycle as (a, b, c)
    assert_eq!(out, vec![Vec3::Y, Vec3::Z, Vec3::X]);
}

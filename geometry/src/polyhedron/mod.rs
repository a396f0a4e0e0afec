//! Polyhedron subdivision engine
//!
//! Recursive subdivision of a triangulated base solid, spherical
//! projection, and seam-correct UV generation. Output is non-indexed:
//! every sub-triangle owns its three vertex copies, so the per-triangle
//! UV seam corrections never leak into neighbouring triangles, and the
//! index buffer is the identity permutation. Do not weld vertices
//! afterwards; that would reintroduce the seam artifact the duplication
//! avoids.

use glam::Vec3;
use std::f32::consts::PI;
use tracing::warn;

use crate::error::GeometryError;
use crate::types::{MAX_VERTICES, MeshBuilder};

mod solids;

#[cfg(test)]
mod tests;

pub use solids::{generate_icosahedron, generate_octahedron, generate_tetrahedron};

/// A vertex this close to the vertical axis has no defined azimuth
const AXIS_EPSILON: f32 = 1e-6;

/// Generate a mesh from an arbitrary triangulated polyhedron
///
/// # Arguments
/// * `vertices` - Flat base vertex list, 3 floats per vertex
/// * `indices` - Flat triangle list, 3 entries per triangle
/// * `radius` - Target sphere radius every vertex is projected onto
/// * `detail` - Subdivision level; 0 keeps the base faces
///
/// # Errors
/// Fails when either list length is not a multiple of 3, when an index
/// names a vertex past the end of the list, or when the base solid alone
/// would overflow the 16-bit index space. No partial mesh is produced on
/// failure.
pub fn generate_polyhedron<M: MeshBuilder + Default>(
    vertices: &[f32],
    indices: &[u16],
    radius: f32,
    detail: u32,
) -> Result<M, GeometryError> {
    if vertices.len() % 3 != 0 {
        return Err(GeometryError::MalformedVertexList(vertices.len()));
    }
    if indices.len() % 3 != 0 {
        return Err(GeometryError::MalformedIndexList(indices.len()));
    }
    if indices.len() > MAX_VERTICES {
        return Err(GeometryError::VertexBudgetExceeded {
            required: indices.len(),
            max: MAX_VERTICES,
        });
    }

    let vertex_count = vertices.len() / 3;
    if let Some(&index) = indices.iter().find(|&&i| i as usize >= vertex_count) {
        return Err(GeometryError::IndexOutOfBounds {
            index,
            vertex_count,
        });
    }

    let base: Vec<Vec3> = vertices
        .chunks_exact(3)
        .map(|v| Vec3::new(v[0], v[1], v[2]))
        .collect();

    Ok(build(&base, indices, radius, detail))
}

/// Run the engine over a known-good base solid.
///
/// Passes are strictly sequential: subdivide, project to the sphere,
/// generate UVs, correct poles/azimuth, correct the seam straddle, then
/// hand off with normals taken from the projected positions.
pub(crate) fn build<M: MeshBuilder + Default>(
    base: &[Vec3],
    faces: &[u16],
    radius: f32,
    detail: u32,
) -> M {
    let radius = if radius < 0.0 {
        warn!("generate_polyhedron: radius must be >= 0.0, clamping to 0.0");
        0.0
    } else {
        radius
    };

    let detail = clamp_detail(faces.len() / 3, detail);
    let cols = detail as usize + 1;

    let mut positions: Vec<Vec3> = Vec::with_capacity(faces.len() * cols * cols);
    for tri in faces.chunks_exact(3) {
        subdivide_face(
            base[tri[0] as usize],
            base[tri[1] as usize],
            base[tri[2] as usize],
            cols,
            &mut positions,
        );
    }

    for position in &mut positions {
        *position = position.normalize_or_zero() * radius;
    }

    let mut uvs = generate_uvs(&positions);
    correct_uvs(&positions, &mut uvs);
    correct_seam(&mut uvs);

    let mut mesh = M::default();
    for (position, uv) in positions.iter().zip(&uvs) {
        let normal = position.normalize_or_zero();
        mesh.add_vertex(*position, normal, (uv[0], uv[1]));
    }
    for i in (0..positions.len()).step_by(3) {
        mesh.add_triangle(i as u16, (i + 1) as u16, (i + 2) as u16);
    }

    mesh
}

/// Clamp `detail` so the duplicated output stays inside the 16-bit index
/// space: `faces × cols² × 3 ≤ 65536` with `cols = detail + 1`.
fn clamp_detail(face_count: usize, detail: u32) -> u32 {
    if face_count == 0 {
        return detail;
    }

    let max_cols = ((MAX_VERTICES / (3 * face_count)) as f64).sqrt() as u32;
    let max_detail = max_cols.saturating_sub(1);

    if detail > max_detail {
        warn!(
            "generate_polyhedron: detail {} overflows the vertex budget for {} faces, clamping to {}",
            detail, face_count, max_detail
        );
        max_detail
    } else {
        detail
    }
}

/// Start of lattice row `row`: rows shrink by one entry each step, so row
/// `r` begins after `Σ_{t<r} (cols - t + 1)` points.
fn row_offset(cols: usize, row: usize) -> usize {
    row * (cols + 1) - (row * row - row) / 2
}

/// Subdivide one base triangle into `cols²` sub-triangles, emitting three
/// fresh vertex copies per sub-triangle.
///
/// The lattice interpolates edges a→c and b→c at `cols + 1` steps and
/// then across each row; sub-triangles alternate an even/odd rule along
/// each row to keep the winding consistent.
fn subdivide_face(a: Vec3, b: Vec3, c: Vec3, cols: usize, out: &mut Vec<Vec3>) {
    let mut lattice = Vec::with_capacity(row_offset(cols, cols + 1));

    for i in 0..=cols {
        let t = i as f32 / cols as f32;
        let aj = a.lerp(c, t);
        let bj = b.lerp(c, t);
        let row_len = cols - i;

        for j in 0..=row_len {
            if j == 0 && i == cols {
                // Single-point apex row; the lerp denominator is zero here
                lattice.push(aj);
            } else {
                lattice.push(aj.lerp(bj, j as f32 / row_len as f32));
            }
        }
    }

    for i in 0..cols {
        let r0 = row_offset(cols, i);
        let r1 = row_offset(cols, i + 1);

        for j in 0..2 * (cols - i) - 1 {
            let k = j / 2;

            if j % 2 == 0 {
                out.push(lattice[r0 + k + 1]);
                out.push(lattice[r1 + k]);
                out.push(lattice[r0 + k]);
            } else {
                out.push(lattice[r0 + k + 1]);
                out.push(lattice[r1 + k + 1]);
                out.push(lattice[r1 + k]);
            }
        }
    }
}

/// Angle around the vertical axis, measured so that U = 0.5 faces -X
fn azimuth(v: Vec3) -> f32 {
    v.z.atan2(-v.x)
}

/// Angle above the horizon
fn inclination(v: Vec3) -> f32 {
    (-v.y).atan2((v.x * v.x + v.z * v.z).sqrt())
}

fn generate_uvs(positions: &[Vec3]) -> Vec<[f32; 2]> {
    positions
        .iter()
        .map(|p| {
            [
                azimuth(*p) / (2.0 * PI) + 0.5,
                inclination(*p) / PI + 0.5,
            ]
        })
        .collect()
}

/// Per-triangle pole and negative-azimuth correction.
///
/// Each triangle borrows its centroid's azimuth: vertices at U = 1 on a
/// negative-azimuth triangle wrap down by one, and vertices on the
/// vertical axis (where azimuth is undefined) take the centroid's U.
fn correct_uvs(positions: &[Vec3], uvs: &mut [[f32; 2]]) {
    for tri in 0..positions.len() / 3 {
        let i = tri * 3;
        let centroid = (positions[i] + positions[i + 1] + positions[i + 2]) / 3.0;
        let azi = azimuth(centroid);

        for corner in i..i + 3 {
            let vertex = positions[corner];

            if azi < 0.0 && uvs[corner][0] == 1.0 {
                uvs[corner][0] -= 1.0;
            }
            if vertex.x.abs() < AXIS_EPSILON && vertex.z.abs() < AXIS_EPSILON {
                uvs[corner][0] = azi / (2.0 * PI) + 0.5;
            }
        }
    }
}

/// Per-triangle seam unwrap: a triangle whose U span straddles the 0/1
/// texture wraparound (max > 0.9 and min < 0.1) gets +1 added to each of
/// its low-U vertices. Vertices are not shared across triangles, so the
/// shift never leaks. Idempotent: an unwrapped triangle no longer
/// straddles.
fn correct_seam(uvs: &mut [[f32; 2]]) {
    for tri in 0..uvs.len() / 3 {
        let i = tri * 3;
        let u0 = uvs[i][0];
        let u1 = uvs[i + 1][0];
        let u2 = uvs[i + 2][0];

        let max = u0.max(u1).max(u2);
        let min = u0.min(u1).min(u2);

        if max > 0.9 && min < 0.1 {
            for corner in i..i + 3 {
                if uvs[corner][0] < 0.2 {
                    uvs[corner][0] += 1.0;
                }
            }
        }
    }
}

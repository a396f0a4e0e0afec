//! Swept-tube primitives (torus, torus knot)

use glam::Vec3;
use std::f32::consts::PI;
use tracing::warn;

use crate::types::MeshBuilder;

/// Finite-difference step for the torus-knot moving frame
const FRAME_EPSILON: f32 = 0.01;

/// Generate a torus with wrapped UV mapping
///
/// # Arguments
/// * `ring_radius` - Distance from torus center to tube center
/// * `tube_radius` - Tube radius
/// * `ring_segments` - Segments around the ring path (min 3, max 256)
/// * `tube_segments` - Segments around the tube cross-section (min 3, max 128)
///
/// # Returns
/// Mesh with `(ring_segments + 1) × (tube_segments + 1)` vertices
///
/// # UV Mapping
/// - U wraps 0→1 around the ring path (XZ plane)
/// - V wraps 0→1 around the tube cross-section
///
/// Note: Includes duplicate seam vertices at U=1.0 and V=1.0 for correct
/// texture wrapping.
pub fn generate_torus<M: MeshBuilder + Default>(
    ring_radius: f32,
    tube_radius: f32,
    ring_segments: u32,
    tube_segments: u32,
) -> M {
    let ring_radius = if ring_radius < 0.0 {
        warn!("generate_torus: ring_radius must be >= 0.0, clamping to 0.0");
        0.0
    } else {
        ring_radius
    };

    let tube_radius = if tube_radius < 0.0 {
        warn!("generate_torus: tube_radius must be >= 0.0, clamping to 0.0");
        0.0
    } else {
        tube_radius
    };

    let ring_segments = ring_segments.clamp(3, 256);
    let tube_segments = tube_segments.clamp(3, 128);

    let mut mesh = M::default();

    for i in 0..=ring_segments {
        let u = i as f32 / ring_segments as f32;
        let theta = u * 2.0 * PI;
        let cos_theta = theta.cos();
        let sin_theta = theta.sin();

        let ring_point = Vec3::new(ring_radius * cos_theta, 0.0, ring_radius * sin_theta);

        for j in 0..=tube_segments {
            let v = j as f32 / tube_segments as f32;
            let phi = v * 2.0 * PI;

            let position = Vec3::new(
                (ring_radius + tube_radius * phi.cos()) * cos_theta,
                tube_radius * phi.sin(),
                (ring_radius + tube_radius * phi.cos()) * sin_theta,
            );
            let normal = (position - ring_point).normalize_or_zero();

            mesh.add_vertex(position, normal, (u, v));
        }
    }

    let stride = tube_segments + 1;
    for i in 0..ring_segments {
        for j in 0..tube_segments {
            let i0 = (i * stride + j) as u16;
            let i1 = (i * stride + j + 1) as u16;
            let i2 = ((i + 1) * stride + j) as u16;
            let i3 = ((i + 1) * stride + j + 1) as u16;

            mesh.add_triangle(i0, i1, i3);
            mesh.add_triangle(i0, i3, i2);
        }
    }

    mesh
}

/// Generate a (p, q) torus knot
///
/// # Arguments
/// * `radius` - Scale of the knot curve
/// * `tube_radius` - Tube radius
/// * `tubular_segments` - Segments along the knot curve (min 3, max 256)
/// * `radial_segments` - Segments around the tube (min 3, max 128)
/// * `p` - Windings around the axis of rotational symmetry (min 1)
/// * `q` - Windings around the interior circle (min 1)
///
/// # Returns
/// Mesh with `(tubular_segments + 1) × (radial_segments + 1)` vertices
///
/// # Frame Construction
/// The local frame per curve sample comes from finite-differencing the
/// curve at `u` and `u + 0.01` and orthogonalizing via cross products:
/// T = P2 - P1, B = normalize(T × (P2 + P1)), N = normalize(B × T).
/// This keeps adjacent frames coherent without parallel transport.
pub fn generate_torus_knot<M: MeshBuilder + Default>(
    radius: f32,
    tube_radius: f32,
    tubular_segments: u32,
    radial_segments: u32,
    p: u32,
    q: u32,
) -> M {
    let radius = if radius < 0.0 {
        warn!("generate_torus_knot: radius must be >= 0.0, clamping to 0.0");
        0.0
    } else {
        radius
    };

    let tube_radius = if tube_radius < 0.0 {
        warn!("generate_torus_knot: tube_radius must be >= 0.0, clamping to 0.0");
        0.0
    } else {
        tube_radius
    };

    let p = if p == 0 {
        warn!("generate_torus_knot: p must be >= 1, clamping to 1");
        1
    } else {
        p
    };

    let q = if q == 0 {
        warn!("generate_torus_knot: q must be >= 1, clamping to 1");
        1
    } else {
        q
    };

    let tubular_segments = tubular_segments.clamp(3, 256);
    let radial_segments = radial_segments.clamp(3, 128);

    let mut mesh = M::default();

    for i in 0..=tubular_segments {
        let u = i as f32 / tubular_segments as f32 * p as f32 * 2.0 * PI;

        let p1 = knot_point(u, p as f32, q as f32, radius);
        let p2 = knot_point(u + FRAME_EPSILON, p as f32, q as f32, radius);

        let tangent = p2 - p1;
        let binormal = tangent.cross(p2 + p1).normalize_or_zero();
        let normal_axis = binormal.cross(tangent).normalize_or_zero();

        for j in 0..=radial_segments {
            let v = j as f32 / radial_segments as f32 * 2.0 * PI;

            // Cross-section offset in the (N, B) plane
            let cx = -tube_radius * v.cos();
            let cy = tube_radius * v.sin();

            let position = p1 + cx * normal_axis + cy * binormal;
            let normal = (position - p1).normalize_or_zero();

            let uv = (
                i as f32 / tubular_segments as f32,
                j as f32 / radial_segments as f32,
            );
            mesh.add_vertex(position, normal, uv);
        }
    }

    let stride = radial_segments + 1;
    for j in 1..=tubular_segments {
        for i in 1..=radial_segments {
            let a = ((j - 1) * stride + (i - 1)) as u16;
            let b = (j * stride + (i - 1)) as u16;
            let c = (j * stride + i) as u16;
            let d = ((j - 1) * stride + i) as u16;

            mesh.add_triangle(a, b, d);
            mesh.add_triangle(b, c, d);
        }
    }

    mesh
}

/// Point on the closed (p, q) knot curve
fn knot_point(u: f32, p: f32, q: f32, radius: f32) -> Vec3 {
    let cu = u.cos();
    let su = u.sin();
    let qu_over_p = q / p * u;
    let cs = qu_over_p.cos();

    Vec3::new(
        radius * (2.0 + cs) * 0.5 * cu,
        radius * (2.0 + cs) * 0.5 * su,
        radius * qu_over_p.sin() * 0.5,
    )
}

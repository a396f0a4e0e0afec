//! Parametric sphere (full and partial sweeps)

use glam::Vec3;
use std::f32::consts::PI;
use tracing::warn;

use crate::types::{MeshBuilder, MeshBuilderColor};

/// Generate a full UV sphere with smooth normals and equirectangular UVs
///
/// # Arguments
/// * `radius` - Sphere radius
/// * `width_segments` - Longitudinal divisions (min 3, max 256)
/// * `height_segments` - Latitudinal divisions (min 2, max 192)
///
/// # Returns
/// Mesh with `(width_segments + 1) × (height_segments + 1)` vertices;
/// pole rows do not emit their degenerate triangle.
pub fn generate_sphere<M: MeshBuilder + Default>(
    radius: f32,
    width_segments: u32,
    height_segments: u32,
) -> M {
    generate_sphere_section(
        radius,
        width_segments,
        height_segments,
        0.0,
        2.0 * PI,
        0.0,
        PI,
    )
}

/// Generate a partial sphere over explicit phi/theta sweeps
///
/// # Arguments
/// * `radius` - Sphere radius
/// * `width_segments` - Longitudinal divisions (min 3, max 256)
/// * `height_segments` - Latitudinal divisions (min 2, max 192)
/// * `phi_start` - Horizontal start angle (radians)
/// * `phi_length` - Horizontal sweep (radians, 2π for a full circle)
/// * `theta_start` - Vertical start angle (radians, 0 at the north pole)
/// * `theta_length` - Vertical sweep (radians, effective end capped at π)
///
/// # Returns
/// Mesh with `(width_segments + 1) × (height_segments + 1)` vertices
///
/// # UV Mapping
/// - U follows phi; on a full-circle sweep the pole rows get a half-texel
///   shift (`±0.5 / width_segments`) so the seam does not bleed
/// - V follows theta, 1 at the north pole, 0 at the south pole
pub fn generate_sphere_section<M: MeshBuilder + Default>(
    radius: f32,
    width_segments: u32,
    height_segments: u32,
    phi_start: f32,
    phi_length: f32,
    theta_start: f32,
    theta_length: f32,
) -> M {
    let radius = if radius < 0.0 {
        warn!("generate_sphere: radius must be >= 0.0, clamping to 0.0");
        0.0
    } else {
        radius
    };

    let width_segments = width_segments.clamp(3, 256);
    let height_segments = height_segments.clamp(2, 192);

    let theta_end = (theta_start + theta_length).min(PI);
    let full_circle = phi_length >= 2.0 * PI;

    let mut mesh = M::default();

    for iy in 0..=height_segments {
        let v = iy as f32 / height_segments as f32;

        // Half-texel shift hides the seam where the collapsed pole row
        // meets the wrapped U = 0/1 column
        let u_offset = if iy == 0 && theta_start == 0.0 && full_circle {
            0.5 / width_segments as f32
        } else if iy == height_segments && theta_end >= PI && full_circle {
            -0.5 / width_segments as f32
        } else {
            0.0
        };

        let theta = theta_start + v * theta_length;
        let sin_theta = theta.sin();
        let cos_theta = theta.cos();

        for ix in 0..=width_segments {
            let u = ix as f32 / width_segments as f32;
            let phi = phi_start + u * phi_length;

            let position = Vec3::new(
                -radius * phi.cos() * sin_theta,
                radius * cos_theta,
                radius * phi.sin() * sin_theta,
            );
            let normal = position.normalize_or_zero();

            mesh.add_vertex(position, normal, (u + u_offset, 1.0 - v));
        }
    }

    emit_sphere_triangles(&mut mesh, width_segments, height_segments, theta_start, theta_end);
    mesh
}

/// Generate a full sphere with one flat vertex color
///
/// Same layout as [`generate_sphere`], with the given RGBA color assigned
/// to every vertex.
pub fn generate_sphere_colored<M: MeshBuilderColor + Default>(
    radius: f32,
    width_segments: u32,
    height_segments: u32,
    color: [f32; 4],
) -> M {
    let radius = if radius < 0.0 {
        warn!("generate_sphere_colored: radius must be >= 0.0, clamping to 0.0");
        0.0
    } else {
        radius
    };

    let width_segments = width_segments.clamp(3, 256);
    let height_segments = height_segments.clamp(2, 192);

    let mut mesh = M::default();

    for iy in 0..=height_segments {
        let v = iy as f32 / height_segments as f32;

        let u_offset = if iy == 0 {
            0.5 / width_segments as f32
        } else if iy == height_segments {
            -0.5 / width_segments as f32
        } else {
            0.0
        };

        let theta = v * PI;
        let sin_theta = theta.sin();
        let cos_theta = theta.cos();

        for ix in 0..=width_segments {
            let u = ix as f32 / width_segments as f32;
            let phi = u * 2.0 * PI;

            let position = Vec3::new(
                -radius * phi.cos() * sin_theta,
                radius * cos_theta,
                radius * phi.sin() * sin_theta,
            );
            let normal = position.normalize_or_zero();

            mesh.add_vertex_colored(position, normal, (u + u_offset, 1.0 - v), color);
        }
    }

    emit_sphere_triangles(&mut mesh, width_segments, height_segments, 0.0, PI);
    mesh
}

/// Quad triangulation over the sphere grid. The first row's lower
/// triangle and the last row's upper triangle collapse at the poles and
/// are skipped when the theta range touches 0 or π.
fn emit_sphere_triangles<M: MeshBuilder + Default>(
    mesh: &mut M,
    width_segments: u32,
    height_segments: u32,
    theta_start: f32,
    theta_end: f32,
) {
    let stride = width_segments + 1;

    for iy in 0..height_segments {
        for ix in 0..width_segments {
            let a = (iy * stride + ix + 1) as u16;
            let b = (iy * stride + ix) as u16;
            let c = ((iy + 1) * stride + ix) as u16;
            let d = ((iy + 1) * stride + ix + 1) as u16;

            if iy != 0 || theta_start > 0.0 {
                mesh.add_triangle(a, b, d);
            }
            if iy != height_segments - 1 || theta_end < PI {
                mesh.add_triangle(b, c, d);
            }
        }
    }
}

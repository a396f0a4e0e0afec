//! Primitives with caps (cylinder, cone, capsule)

use glam::Vec3;
use std::f32::consts::{FRAC_PI_2, PI};
use tracing::warn;

use crate::types::MeshBuilder;

/// Generate a cylinder (or truncated cone) mesh
///
/// # Arguments
/// * `radius_top` - Top radius (>= 0.0)
/// * `radius_bottom` - Bottom radius (>= 0.0)
/// * `height` - Cylinder height
/// * `radial_segments` - Radial divisions (min 3, max 256)
/// * `height_segments` - Rows along the torso (min 1, max 128)
/// * `open_ended` - Skip both caps when true
///
/// # Returns
/// Mesh with torso rows lerping radius from top to bottom; a cap is only
/// emitted when its radius is > 0, which keeps a cone apex fan-free.
///
/// # UV Mapping
/// - Torso: U wraps 0→1 around the circumference, V runs 1→0 top to bottom
/// - Caps: radial mapping around the center at (0.5, 0.5)
pub fn generate_cylinder<M: MeshBuilder + Default>(
    radius_top: f32,
    radius_bottom: f32,
    height: f32,
    radial_segments: u32,
    height_segments: u32,
    open_ended: bool,
) -> M {
    let radius_top = if radius_top < 0.0 {
        warn!("generate_cylinder: radius_top must be >= 0.0, clamping to 0.0");
        0.0
    } else {
        radius_top
    };

    let radius_bottom = if radius_bottom < 0.0 {
        warn!("generate_cylinder: radius_bottom must be >= 0.0, clamping to 0.0");
        0.0
    } else {
        radius_bottom
    };

    let height = if height < 0.0 {
        warn!("generate_cylinder: height must be >= 0.0, clamping to 0.0");
        0.0
    } else {
        height
    };

    let radial_segments = radial_segments.clamp(3, 256);
    let height_segments = height_segments.clamp(1, 128);

    let mut mesh = M::default();
    let half_height = height * 0.5;

    // Slant normal for tapered walls; a flat (height 0) torso degenerates
    // to a vertical normal rather than dividing by zero
    let slope = if height > 0.0 {
        (radius_bottom - radius_top) / height
    } else {
        0.0
    };

    let stride = radial_segments + 1;

    for iy in 0..=height_segments {
        let v = iy as f32 / height_segments as f32;
        let radius = radius_top + v * (radius_bottom - radius_top);
        let y = half_height - v * height;

        for ix in 0..=radial_segments {
            let u = ix as f32 / radial_segments as f32;
            let theta = u * 2.0 * PI;
            let sin_theta = theta.sin();
            let cos_theta = theta.cos();

            let position = Vec3::new(radius * sin_theta, y, radius * cos_theta);
            let normal = Vec3::new(sin_theta, slope, cos_theta).normalize();

            mesh.add_vertex(position, normal, (u, 1.0 - v));
        }
    }

    // Quads whose top or bottom edge sits on a zero-radius ring collapse;
    // those triangles are skipped the same way as sphere poles
    for iy in 0..height_segments {
        for ix in 0..radial_segments {
            let a = (iy * stride + ix) as u16;
            let b = ((iy + 1) * stride + ix) as u16;
            let c = ((iy + 1) * stride + ix + 1) as u16;
            let d = (iy * stride + ix + 1) as u16;

            if radius_top > 0.0 || iy != 0 {
                mesh.add_triangle(a, b, d);
            }
            if radius_bottom > 0.0 || iy != height_segments - 1 {
                mesh.add_triangle(b, c, d);
            }
        }
    }

    if !open_ended {
        if radius_top > 0.0 {
            build_cap(&mut mesh, radius_top, half_height, radial_segments, true);
        }
        if radius_bottom > 0.0 {
            build_cap(&mut mesh, radius_bottom, half_height, radial_segments, false);
        }
    }

    mesh
}

/// Generate a cone mesh (a cylinder whose top radius is 0)
///
/// # Arguments
/// * `radius` - Base radius
/// * `height` - Cone height
/// * `radial_segments` - Radial divisions (min 3, max 256)
/// * `height_segments` - Rows along the flank (min 1, max 128)
/// * `open_ended` - Skip the base cap when true
pub fn generate_cone<M: MeshBuilder + Default>(
    radius: f32,
    height: f32,
    radial_segments: u32,
    height_segments: u32,
    open_ended: bool,
) -> M {
    generate_cylinder(
        0.0,
        radius,
        height,
        radial_segments,
        height_segments,
        open_ended,
    )
}

/// Cap fan with one copy of the center vertex per radial wedge, so each
/// wedge carries its own UV.
fn build_cap<M: MeshBuilder + Default>(
    mesh: &mut M,
    radius: f32,
    half_height: f32,
    radial_segments: u32,
    top: bool,
) {
    let sign = if top { 1.0 } else { -1.0 };
    let y = half_height * sign;
    let normal = Vec3::new(0.0, sign, 0.0);

    let center_start = mesh.vertex_count() as u16;
    for _ in 0..radial_segments {
        mesh.add_vertex(Vec3::new(0.0, y, 0.0), normal, (0.5, 0.5));
    }

    let rim_start = mesh.vertex_count() as u16;
    for ix in 0..=radial_segments {
        let u = ix as f32 / radial_segments as f32;
        let theta = u * 2.0 * PI;
        let sin_theta = theta.sin();
        let cos_theta = theta.cos();

        let position = Vec3::new(radius * sin_theta, y, radius * cos_theta);
        let uv = (cos_theta * 0.5 + 0.5, sin_theta * 0.5 * sign + 0.5);

        mesh.add_vertex(position, normal, uv);
    }

    for ix in 0..radial_segments as u16 {
        let center = center_start + ix;
        let rim = rim_start + ix;

        if top {
            mesh.add_triangle(rim, rim + 1, center);
        } else {
            mesh.add_triangle(rim + 1, rim, center);
        }
    }
}

/// One latitudinal ring of the capsule profile
struct ProfileRow {
    y: f32,
    radius: f32,
    /// Unit normal components: radial (XZ) and vertical
    normal_xz: f32,
    normal_y: f32,
    v: f32,
}

/// Generate a capsule mesh (cylinder with hemispherical caps)
///
/// # Arguments
/// * `radius` - Capsule radius
/// * `height` - Height of the cylindrical section (>= 0.0)
/// * `radial_segments` - Radial divisions (min 3, max 256)
/// * `cap_segments` - Rings per hemispherical cap (min 1, max 64)
/// * `height_segments` - Rows along the cylindrical band (min 1, max 64)
///
/// # Returns
/// Mesh walking one profile from top pole through the cylinder band to
/// the bottom pole. Total height = height + 2 × radius.
///
/// # UV Mapping
/// V is proportional to accumulated arc length along the profile
/// (`π/2 × radius` per cap plus the band height), not to row index, so
/// texture density stays uniform across the curvature changes; it runs
/// 1 at the top pole to 0 at the bottom pole. The first and last ring get
/// the same half-texel U shift as sphere poles.
pub fn generate_capsule<M: MeshBuilder + Default>(
    radius: f32,
    height: f32,
    radial_segments: u32,
    cap_segments: u32,
    height_segments: u32,
) -> M {
    let radius = if radius < 0.0 {
        warn!("generate_capsule: radius must be >= 0.0, clamping to 0.0");
        0.0
    } else {
        radius
    };

    let height = if height < 0.0 {
        warn!("generate_capsule: height must be >= 0.0, clamping to 0.0");
        0.0
    } else {
        height
    };

    let radial_segments = radial_segments.clamp(3, 256);
    let cap_segments = cap_segments.clamp(1, 64);
    let height_segments = height_segments.clamp(1, 64);

    // If height is 0, the two caps meet at the equator: just a sphere
    if height == 0.0 {
        return super::sphere::generate_sphere(radius, radial_segments, cap_segments * 2);
    }

    let mut mesh = M::default();
    let half_height = height * 0.5;

    // total_arc > 0 is guaranteed: a zero-height capsule returned above
    let cap_arc = FRAC_PI_2 * radius;
    let total_arc = 2.0 * cap_arc + height;
    // `arc` is distance walked from the top pole; V is the remaining
    // fraction, so the top pole sits at exactly 1 and the bottom at 0
    let v_at = |arc: f32| (total_arc - arc) / total_arc;

    // Profile rows from top pole to bottom pole
    let row_count = 2 * cap_segments + height_segments + 1;
    let mut rows = Vec::with_capacity(row_count as usize);

    for i in 0..=cap_segments {
        let t = i as f32 / cap_segments as f32;
        let angle = FRAC_PI_2 * (1.0 - t);
        rows.push(ProfileRow {
            y: half_height + radius * angle.sin(),
            radius: radius * angle.cos(),
            normal_xz: angle.cos(),
            normal_y: angle.sin(),
            v: v_at(cap_arc * t),
        });
    }

    for i in 1..=height_segments {
        let t = i as f32 / height_segments as f32;
        rows.push(ProfileRow {
            y: half_height - t * height,
            radius,
            normal_xz: 1.0,
            normal_y: 0.0,
            v: v_at(cap_arc + t * height),
        });
    }

    for i in 1..=cap_segments {
        let t = i as f32 / cap_segments as f32;
        let angle = -FRAC_PI_2 * t;
        rows.push(ProfileRow {
            y: -half_height + radius * angle.sin(),
            radius: radius * angle.cos(),
            normal_xz: angle.cos(),
            normal_y: angle.sin(),
            // Measured back from the end so the bottom pole lands on 0
            v: v_at(total_arc - cap_arc * (1.0 - t)),
        });
    }

    let last_row = rows.len() - 1;
    for (ri, row) in rows.iter().enumerate() {
        let u_offset = if ri == 0 {
            0.5 / radial_segments as f32
        } else if ri == last_row {
            -0.5 / radial_segments as f32
        } else {
            0.0
        };

        for ix in 0..=radial_segments {
            let u = ix as f32 / radial_segments as f32;
            let theta = u * 2.0 * PI;
            let sin_theta = theta.sin();
            let cos_theta = theta.cos();

            let position = Vec3::new(row.radius * sin_theta, row.y, row.radius * cos_theta);
            let normal = Vec3::new(
                row.normal_xz * sin_theta,
                row.normal_y,
                row.normal_xz * cos_theta,
            );

            mesh.add_vertex(position, normal, (u + u_offset, row.v));
        }
    }

    // Pole-adjacent degenerate triangles are skipped as for the sphere
    let stride = radial_segments + 1;
    let quad_rows = rows.len() as u32 - 1;

    for iy in 0..quad_rows {
        for ix in 0..radial_segments {
            let a = (iy * stride + ix) as u16;
            let b = ((iy + 1) * stride + ix) as u16;
            let c = ((iy + 1) * stride + ix + 1) as u16;
            let d = (iy * stride + ix + 1) as u16;

            if iy != 0 {
                mesh.add_triangle(a, b, d);
            }
            if iy != quad_rows - 1 {
                mesh.add_triangle(b, c, d);
            }
        }
    }

    mesh
}

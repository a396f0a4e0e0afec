//! Mesh assembler
//!
//! Public per-shape entry points: each runs a generator into [`MeshData`]
//! and attaches the shape tag plus closed-form bounds, returning a
//! finished [`Mesh`] ready for the rendering-resource and collision
//! layers.

use crate::bounds::{ShapeBounds, ShapeKind};
use crate::error::GeometryError;
use crate::primitives;
use crate::types::{Mesh, MeshData};

/// Plane on the XZ plane; see [`primitives::generate_plane`]
pub fn plane(width: f32, depth: f32, width_segments: u32, depth_segments: u32) -> Mesh {
    let data =
        primitives::generate_plane::<MeshData>(width, depth, width_segments, depth_segments);
    Mesh::assemble(
        data,
        ShapeKind::Plane,
        ShapeBounds::plane(width.max(0.0), depth.max(0.0)),
    )
}

/// Plane with one flat vertex color
pub fn plane_colored(
    width: f32,
    depth: f32,
    width_segments: u32,
    depth_segments: u32,
    color: [f32; 4],
) -> Mesh {
    let data = primitives::generate_plane_colored::<MeshData>(
        width,
        depth,
        width_segments,
        depth_segments,
        color,
    );
    Mesh::assemble(
        data,
        ShapeKind::Plane,
        ShapeBounds::plane(width.max(0.0), depth.max(0.0)),
    )
}

/// Axis-aligned cube with per-axis subdivisions
pub fn cube(
    width: f32,
    height: f32,
    depth: f32,
    width_segments: u32,
    height_segments: u32,
    depth_segments: u32,
) -> Mesh {
    let data = primitives::generate_cube::<MeshData>(
        width,
        height,
        depth,
        width_segments,
        height_segments,
        depth_segments,
    );
    Mesh::assemble(
        data,
        ShapeKind::Cube,
        ShapeBounds::cube(width.max(0.0), height.max(0.0), depth.max(0.0)),
    )
}

/// Cube with one flat color per face (face ids 0..5: +X, -X, +Y, -Y, +Z, -Z)
pub fn cube_colored(
    width: f32,
    height: f32,
    depth: f32,
    width_segments: u32,
    height_segments: u32,
    depth_segments: u32,
    face_colors: [[f32; 4]; 6],
) -> Mesh {
    let data = primitives::generate_cube_colored::<MeshData>(
        width,
        height,
        depth,
        width_segments,
        height_segments,
        depth_segments,
        face_colors,
    );
    Mesh::assemble(
        data,
        ShapeKind::Cube,
        ShapeBounds::cube(width.max(0.0), height.max(0.0), depth.max(0.0)),
    )
}

/// Full UV sphere
pub fn sphere(radius: f32, width_segments: u32, height_segments: u32) -> Mesh {
    let data =
        primitives::generate_sphere::<MeshData>(radius, width_segments, height_segments);
    Mesh::assemble(data, ShapeKind::Sphere, ShapeBounds::sphere(radius.max(0.0)))
}

/// Partial sphere over explicit phi/theta sweeps
pub fn sphere_section(
    radius: f32,
    width_segments: u32,
    height_segments: u32,
    phi_start: f32,
    phi_length: f32,
    theta_start: f32,
    theta_length: f32,
) -> Mesh {
    let data = primitives::generate_sphere_section::<MeshData>(
        radius,
        width_segments,
        height_segments,
        phi_start,
        phi_length,
        theta_start,
        theta_length,
    );
    Mesh::assemble(data, ShapeKind::Sphere, ShapeBounds::sphere(radius.max(0.0)))
}

/// Full sphere with one flat vertex color
pub fn sphere_colored(
    radius: f32,
    width_segments: u32,
    height_segments: u32,
    color: [f32; 4],
) -> Mesh {
    let data = primitives::generate_sphere_colored::<MeshData>(
        radius,
        width_segments,
        height_segments,
        color,
    );
    Mesh::assemble(data, ShapeKind::Sphere, ShapeBounds::sphere(radius.max(0.0)))
}

/// Cylinder (or truncated cone when the radii differ)
pub fn cylinder(
    radius_top: f32,
    radius_bottom: f32,
    height: f32,
    radial_segments: u32,
    height_segments: u32,
    open_ended: bool,
) -> Mesh {
    let data = primitives::generate_cylinder::<MeshData>(
        radius_top,
        radius_bottom,
        height,
        radial_segments,
        height_segments,
        open_ended,
    );
    Mesh::assemble(
        data,
        ShapeKind::Cylinder,
        ShapeBounds::cylinder(radius_top.max(0.0), radius_bottom.max(0.0), height.max(0.0)),
    )
}

/// Cone: a cylinder whose top radius is 0
pub fn cone(
    radius: f32,
    height: f32,
    radial_segments: u32,
    height_segments: u32,
    open_ended: bool,
) -> Mesh {
    let data = primitives::generate_cone::<MeshData>(
        radius,
        height,
        radial_segments,
        height_segments,
        open_ended,
    );
    Mesh::assemble(
        data,
        ShapeKind::Cone,
        ShapeBounds::cylinder(0.0, radius.max(0.0), height.max(0.0)),
    )
}

/// Capsule; `height` is the cylindrical section only
pub fn capsule(
    radius: f32,
    height: f32,
    radial_segments: u32,
    cap_segments: u32,
    height_segments: u32,
) -> Mesh {
    let data = primitives::generate_capsule::<MeshData>(
        radius,
        height,
        radial_segments,
        cap_segments,
        height_segments,
    );
    Mesh::assemble(
        data,
        ShapeKind::Capsule,
        ShapeBounds::capsule(radius.max(0.0), height.max(0.0)),
    )
}

/// Torus in the XZ plane
pub fn torus(
    ring_radius: f32,
    tube_radius: f32,
    ring_segments: u32,
    tube_segments: u32,
) -> Mesh {
    let data = primitives::generate_torus::<MeshData>(
        ring_radius,
        tube_radius,
        ring_segments,
        tube_segments,
    );
    Mesh::assemble(
        data,
        ShapeKind::Torus,
        ShapeBounds::torus(ring_radius.max(0.0), tube_radius.max(0.0)),
    )
}

/// (p, q) torus knot
pub fn torus_knot(
    radius: f32,
    tube_radius: f32,
    tubular_segments: u32,
    radial_segments: u32,
    p: u32,
    q: u32,
) -> Mesh {
    let data = primitives::generate_torus_knot::<MeshData>(
        radius,
        tube_radius,
        tubular_segments,
        radial_segments,
        p,
        q,
    );
    Mesh::assemble(
        data,
        ShapeKind::TorusKnot,
        ShapeBounds::torus_knot(radius.max(0.0), tube_radius.max(0.0)),
    )
}

/// Subdivided arbitrary polyhedron projected onto a sphere
///
/// # Errors
/// See [`polyhedron::generate_polyhedron`]; no mesh is produced on
/// malformed input.
pub fn polyhedron(
    vertices: &[f32],
    indices: &[u16],
    radius: f32,
    detail: u32,
) -> Result<Mesh, GeometryError> {
    let data = crate::polyhedron::generate_polyhedron::<MeshData>(vertices, indices, radius, detail)?;
    Ok(Mesh::assemble(
        data,
        ShapeKind::Polyhedron,
        ShapeBounds::polyhedron(radius.max(0.0)),
    ))
}

/// Subdivided tetrahedron
pub fn tetrahedron(radius: f32, detail: u32) -> Mesh {
    let data = crate::polyhedron::generate_tetrahedron::<MeshData>(radius, detail);
    Mesh::assemble(
        data,
        ShapeKind::Polyhedron,
        ShapeBounds::polyhedron(radius.max(0.0)),
    )
}

/// Subdivided octahedron
pub fn octahedron(radius: f32, detail: u32) -> Mesh {
    let data = crate::polyhedron::generate_octahedron::<MeshData>(radius, detail);
    Mesh::assemble(
        data,
        ShapeKind::Polyhedron,
        ShapeBounds::polyhedron(radius.max(0.0)),
    )
}

/// Subdivided icosahedron
pub fn icosahedron(radius: f32, detail: u32) -> Mesh {
    let data = crate::polyhedron::generate_icosahedron::<MeshData>(radius, detail);
    Mesh::assemble(
        data,
        ShapeKind::Polyhedron,
        ShapeBounds::polyhedron(radius.max(0.0)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_mesh_carries_bounds_and_tag() {
        let mesh = sphere(2.0, 16, 8);
        assert_eq!(mesh.shape, ShapeKind::Sphere);
        assert_eq!(mesh.bounding_radius, 2.0);
        assert_eq!(mesh.half_extents, glam::Vec3::splat(2.0));
        assert_eq!(mesh.vertex_count(), 17 * 9);
    }

    #[test]
    fn test_cone_tag_differs_from_cylinder() {
        let mesh = cone(1.0, 2.0, 8, 1, false);
        assert_eq!(mesh.shape, ShapeKind::Cone);
        // Bounds come from the base radius
        assert_eq!(mesh.bounding_radius, 2.0_f32.sqrt());
    }

    #[test]
    fn test_cube_colored_populates_colors() {
        let colors = [
            [1.0, 0.0, 0.0, 1.0],
            [0.0, 1.0, 0.0, 1.0],
            [0.0, 0.0, 1.0, 1.0],
            [1.0, 1.0, 0.0, 1.0],
            [0.0, 1.0, 1.0, 1.0],
            [1.0, 0.0, 1.0, 1.0],
        ];
        let mesh = cube_colored(1.0, 1.0, 1.0, 1, 1, 1, colors);

        assert_eq!(mesh.data.colors.len(), mesh.vertex_count());
        // 4 vertices per face, 6 faces
        assert_eq!(mesh.vertex_count(), 24);
        // Face id 0 (+X) wears the first table entry
        assert_eq!(mesh.data.colors[0], colors[0]);
        // Last face (-Z) wears the last
        assert_eq!(mesh.data.colors[23], colors[5]);
    }

    #[test]
    fn test_plain_generators_leave_colors_empty() {
        assert!(cube(1.0, 1.0, 1.0, 1, 1, 1).data.colors.is_empty());
        assert!(sphere(1.0, 8, 4).data.colors.is_empty());
    }
}

//! Per-shape bounding volumes and collision metadata
//!
//! Closed-form bounding-box half extents, `dims` tuples, and
//! bounding-sphere radii. `dims` is consumed by the external
//! collision-shape factory; its field meaning is fixed per shape and must
//! not be reinterpreted generically.

use glam::Vec3;

/// Which generator produced a mesh
///
/// The tag fixes how `dims` is read by the collision-shape factory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Cube,
    Plane,
    Sphere,
    Cylinder,
    Cone,
    Capsule,
    Torus,
    TorusKnot,
    Polyhedron,
}

/// Bounding volumes plus collision metadata for one shape
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeBounds {
    /// Axis-aligned bounding-box half extents
    pub half_extents: Vec3,
    /// Shape-specific dims tuple (meaning documented per constructor)
    pub dims: Vec3,
    /// Conservative bounding-sphere radius
    pub radius: f32,
}

impl ShapeBounds {
    /// Cube bounds. `dims` = full extents (width, height, depth).
    pub fn cube(width: f32, height: f32, depth: f32) -> Self {
        let half = Vec3::new(width, height, depth) * 0.5;
        Self {
            half_extents: half,
            dims: Vec3::new(width, height, depth),
            radius: half.max_element(),
        }
    }

    /// Plane bounds. `dims` = (width, 0, depth).
    pub fn plane(width: f32, depth: f32) -> Self {
        let half = Vec3::new(width * 0.5, 0.0, depth * 0.5);
        Self {
            half_extents: half,
            dims: Vec3::new(width, 0.0, depth),
            radius: half.max_element(),
        }
    }

    /// Sphere bounds. `dims` = (radius, radius, radius).
    pub fn sphere(radius: f32) -> Self {
        Self {
            half_extents: Vec3::splat(radius),
            dims: Vec3::splat(radius),
            radius,
        }
    }

    /// Cylinder/cone bounds from the larger radius.
    /// `dims` = (max radius, height, 0).
    pub fn cylinder(radius_top: f32, radius_bottom: f32, height: f32) -> Self {
        let max_radius = radius_top.max(radius_bottom);
        let half_height = height * 0.5;
        Self {
            half_extents: Vec3::new(max_radius, half_height, max_radius),
            dims: Vec3::new(max_radius, height, 0.0),
            radius: (max_radius * max_radius + half_height * half_height).sqrt(),
        }
    }

    /// Capsule bounds. `height` is the cylindrical section only;
    /// `dims` = (radius, height, 0).
    pub fn capsule(radius: f32, height: f32) -> Self {
        let half_height = height * 0.5;
        Self {
            half_extents: Vec3::new(radius, half_height + radius, radius),
            dims: Vec3::new(radius, height, 0.0),
            radius: half_height + radius,
        }
    }

    /// Torus bounds from ring radius and tube radius.
    /// `dims` = (overall diameter, tube diameter, 0).
    pub fn torus(ring_radius: f32, tube_radius: f32) -> Self {
        let outer = ring_radius + tube_radius;
        Self {
            half_extents: Vec3::new(outer, tube_radius, outer),
            dims: Vec3::new(outer * 2.0, tube_radius * 2.0, 0.0),
            radius: outer,
        }
    }

    /// Torus-knot bounds. The knot curve lies within `ring_radius` of the
    /// origin in XY and within `ring_radius / 2` in Z before the tube is
    /// swept. `dims` = (overall diameter, tube diameter, 0).
    pub fn torus_knot(ring_radius: f32, tube_radius: f32) -> Self {
        let outer = ring_radius + tube_radius;
        Self {
            half_extents: Vec3::new(outer, outer, ring_radius * 0.5 + tube_radius),
            dims: Vec3::new(outer * 2.0, tube_radius * 2.0, 0.0),
            radius: outer,
        }
    }

    /// Polyhedron bounds: every vertex is projected onto the target
    /// sphere. `dims` = (radius, radius, radius).
    pub fn polyhedron(radius: f32) -> Self {
        Self::sphere(radius)
    }
}

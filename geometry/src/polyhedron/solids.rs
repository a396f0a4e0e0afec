//! Canonical base solids for the subdivision engine

use glam::Vec3;

use crate::types::MeshBuilder;

const TETRAHEDRON_VERTICES: [Vec3; 4] = [
    Vec3::new(1.0, 1.0, 1.0),
    Vec3::new(-1.0, -1.0, 1.0),
    Vec3::new(-1.0, 1.0, -1.0),
    Vec3::new(1.0, -1.0, -1.0),
];

const TETRAHEDRON_INDICES: [u16; 12] = [2, 1, 0, 0, 3, 2, 1, 3, 0, 2, 3, 1];

const OCTAHEDRON_VERTICES: [Vec3; 6] = [
    Vec3::new(1.0, 0.0, 0.0),
    Vec3::new(-1.0, 0.0, 0.0),
    Vec3::new(0.0, 1.0, 0.0),
    Vec3::new(0.0, -1.0, 0.0),
    Vec3::new(0.0, 0.0, 1.0),
    Vec3::new(0.0, 0.0, -1.0),
];

#[rustfmt::skip]
const OCTAHEDRON_INDICES: [u16; 24] = [
    0, 2, 4,    0, 4, 3,    0, 3, 5,    0, 5, 2,
    1, 2, 5,    1, 5, 3,    1, 3, 4,    1, 4, 2,
];

#[rustfmt::skip]
const ICOSAHEDRON_INDICES: [u16; 60] = [
    0, 11, 5,    0, 5, 1,     0, 1, 7,     0, 7, 10,    0, 10, 11,
    1, 5, 9,     5, 11, 4,    11, 10, 2,   10, 7, 6,    7, 1, 8,
    3, 9, 4,     3, 4, 2,     3, 2, 6,     3, 6, 8,     3, 8, 9,
    4, 9, 5,     2, 4, 11,    6, 2, 10,    8, 6, 7,     9, 8, 1,
];

/// Generate a subdivided tetrahedron projected onto a sphere
///
/// # Arguments
/// * `radius` - Target sphere radius
/// * `detail` - Subdivision level; 0 keeps the four base faces
pub fn generate_tetrahedron<M: MeshBuilder + Default>(radius: f32, detail: u32) -> M {
    super::build(&TETRAHEDRON_VERTICES, &TETRAHEDRON_INDICES, radius, detail)
}

/// Generate a subdivided octahedron projected onto a sphere
///
/// # Arguments
/// * `radius` - Target sphere radius
/// * `detail` - Subdivision level; 0 keeps the eight base faces
pub fn generate_octahedron<M: MeshBuilder + Default>(radius: f32, detail: u32) -> M {
    super::build(&OCTAHEDRON_VERTICES, &OCTAHEDRON_INDICES, radius, detail)
}

/// Generate a subdivided icosahedron projected onto a sphere
///
/// The classic geodesic base: subdividing it gives the most uniform
/// triangle distribution of the three canonical solids.
///
/// # Arguments
/// * `radius` - Target sphere radius
/// * `detail` - Subdivision level; 0 keeps the twenty base faces
pub fn generate_icosahedron<M: MeshBuilder + Default>(radius: f32, detail: u32) -> M {
    // Golden ratio; the engine normalizes, so the raw rectangle
    // coordinates are fine as-is
    let t = (1.0 + 5.0_f32.sqrt()) / 2.0;

    let vertices = [
        Vec3::new(-1.0, t, 0.0),
        Vec3::new(1.0, t, 0.0),
        Vec3::new(-1.0, -t, 0.0),
        Vec3::new(1.0, -t, 0.0),
        Vec3::new(0.0, -1.0, t),
        Vec3::new(0.0, 1.0, t),
        Vec3::new(0.0, -1.0, -t),
        Vec3::new(0.0, 1.0, -t),
        Vec3::new(t, 0.0, -1.0),
        Vec3::new(t, 0.0, 1.0),
        Vec3::new(-t, 0.0, -1.0),
        Vec3::new(-t, 0.0, 1.0),
    ];

    super::build(&vertices, &ICOSAHEDRON_INDICES, radius, detail)
}

//! Procedural mesh generation
//!
//! Pure, deterministic generators that synthesize triangle-mesh data
//! (vertices, 16-bit indices, bounds) for a fixed catalog of parametric
//! primitives and for polyhedra built by recursive subdivision of a base
//! solid.
//!
//! Every generator allocates fresh buffers, performs no I/O, and touches
//! no shared state; calls are independent and safe to run concurrently.
//! Out-of-range numeric parameters are clamped (with a `tracing` warning)
//! rather than rejected; only malformed polyhedron input fails, with a
//! [`GeometryError`] and no partial mesh.

mod bounds;
mod error;
mod polyhedron;
mod primitives;
mod shapes;
mod types;

pub use bounds::{ShapeBounds, ShapeKind};
pub use error::GeometryError;
pub use types::{MAX_VERTICES, Mesh, MeshBuilder, MeshBuilderColor, MeshData, Vertex};

// Builder-generic generators (write into any MeshBuilder)
pub use polyhedron::{
    generate_icosahedron, generate_octahedron, generate_polyhedron, generate_tetrahedron,
};
pub use primitives::{
    generate_capsule, generate_cone, generate_cube, generate_cube_colored, generate_cylinder,
    generate_plane, generate_plane_colored, generate_sphere, generate_sphere_colored,
    generate_sphere_section, generate_torus, generate_torus_knot,
};

// Assembled meshes with shape tag and bounds attached
pub use shapes::{
    capsule, cone, cube, cube_colored, cylinder, icosahedron, octahedron, plane, plane_colored,
    polyhedron, sphere, sphere_colored, sphere_section, tetrahedron, torus, torus_knot,
};

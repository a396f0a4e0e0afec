//! Parametric mesh primitives
//!
//! Closed-form generators for the fixed shape catalog. Each primitive is
//! sampled on a 2D parameter grid, mapped through shape-specific formulas
//! to position and analytic normal, and triangulated two triangles per
//! cell with a fixed diagonal.

mod cylinder_capsule;
mod plane_cube;
mod sphere;
mod torus_knot;


pub use cylinder_capsule::{generate_capsule, generate_cone, generate_cylinder};
pub use plane_cube::{generate_cube, generate_cube_colored, generate_plane, generate_plane_colored};
pub use sphere::{generate_sphere, generate_sphere_colored, generate_sphere_section};
pub use torus_knot::{generate_torus, generate_torus_knot};

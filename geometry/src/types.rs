//! Mesh data types
//!
//! Shared types for procedural mesh generation.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::bounds::{ShapeBounds, ShapeKind};

/// Maximum vertex count a generator may produce (16-bit index space).
pub const MAX_VERTICES: usize = 65536;

/// Trait for mesh construction - enables generic geometry generation
///
/// Every generator writes through this interface instead of touching
/// vertex/index storage directly, so each generation pass stays
/// independently testable against any backing store.
pub trait MeshBuilder: Default {
    /// Add a vertex with position, normal, and UV coordinates, returning its index
    fn add_vertex(&mut self, position: Vec3, normal: Vec3, uv: (f32, f32)) -> u16;

    /// Add a triangle using three vertex indices
    fn add_triangle(&mut self, i0: u16, i1: u16, i2: u16);

    /// Number of vertices added so far (the next vertex gets this index)
    fn vertex_count(&self) -> usize;
}

/// Trait extension for meshes with per-vertex color
pub trait MeshBuilderColor: MeshBuilder {
    /// Add a vertex with position, normal, UV, and RGBA color, returning its index
    fn add_vertex_colored(
        &mut self,
        position: Vec3,
        normal: Vec3,
        uv: (f32, f32),
        color: [f32; 4],
    ) -> u16;
}

/// Interleaved vertex: position, normal, UV (f32 throughout)
///
/// `#[repr(C)]` + `Pod` so the rendering-resource layer can upload the
/// vertex array verbatim with `bytemuck::cast_slice`.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    /// Position as [x, y, z]
    pub position: [f32; 3],
    /// Normal as [x, y, z]
    pub normal: [f32; 3],
    /// Texture coordinates as [u, v]
    pub uv: [f32; 2],
}

impl Vertex {
    /// Create a new vertex
    pub fn new(position: Vec3, normal: Vec3, uv: (f32, f32)) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
            uv: [uv.0, uv.1],
        }
    }
}

/// Generated vertex/index buffers
///
/// `colors` is empty unless a colored generator ran; when populated it
/// holds exactly one RGBA entry per vertex.
#[derive(Clone, Default)]
pub struct MeshData {
    /// Interleaved vertices (insertion order is memory layout)
    pub vertices: Vec<Vertex>,
    /// Vertex colors as [r, g, b, a] (empty if no colors)
    pub colors: Vec<[f32; 4]>,
    /// Triangle indices (u16 for GPU compatibility)
    pub indices: Vec<u16>,
}

impl MeshData {
    /// Create empty mesh data
    pub fn new() -> Self {
        Self::default()
    }

    /// Get vertex count
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get triangle count
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

impl MeshBuilder for MeshData {
    fn add_vertex(&mut self, position: Vec3, normal: Vec3, uv: (f32, f32)) -> u16 {
        let index = self.vertices.len() as u16;
        self.vertices.push(Vertex::new(position, normal, uv));
        index
    }

    fn add_triangle(&mut self, i0: u16, i1: u16, i2: u16) {
        self.indices.push(i0);
        self.indices.push(i1);
        self.indices.push(i2);
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
}

impl MeshBuilderColor for MeshData {
    fn add_vertex_colored(
        &mut self,
        position: Vec3,
        normal: Vec3,
        uv: (f32, f32),
        color: [f32; 4],
    ) -> u16 {
        let index = self.add_vertex(position, normal, uv);
        self.colors.push(color);
        index
    }
}

/// A finished mesh: generated buffers plus shape tag and bounding volumes
///
/// Constructed whole by one assembler call and immutable afterwards;
/// ownership moves to the caller (typically the rendering-resource layer).
pub struct Mesh {
    /// Vertex and index buffers
    pub data: MeshData,
    /// Which generator produced this mesh (fixes the meaning of `dims`)
    pub shape: ShapeKind,
    /// Axis-aligned bounding-box half extents
    pub half_extents: Vec3,
    /// Shape-specific metadata for the collision-shape factory
    pub dims: Vec3,
    /// Conservative bounding-sphere radius
    pub bounding_radius: f32,
}

impl Mesh {
    /// Pack generator output and per-shape bounds into a finished mesh
    pub fn assemble(data: MeshData, shape: ShapeKind, bounds: ShapeBounds) -> Self {
        Self {
            data,
            shape,
            half_extents: bounds.half_extents,
            dims: bounds.dims,
            bounding_radius: bounds.radius,
        }
    }

    /// Get vertex count
    pub fn vertex_count(&self) -> usize {
        self.data.vertex_count()
    }

    /// Get triangle count
    pub fn triangle_count(&self) -> usize {
        self.data.triangle_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_is_pod() {
        // Stride must match the POS_NORMAL_UV layout: 3 + 3 + 2 floats = 32 bytes
        assert_eq!(std::mem::size_of::<Vertex>(), 32);

        let v = Vertex::new(Vec3::ONE, Vec3::Y, (0.25, 0.75));
        let bytes: &[u8] = bytemuck::bytes_of(&v);
        assert_eq!(bytes.len(), 32);
    }

    #[test]
    fn test_mesh_data_builder_indices() {
        let mut data = MeshData::new();
        let i0 = data.add_vertex(Vec3::ZERO, Vec3::Y, (0.0, 0.0));
        let i1 = data.add_vertex(Vec3::X, Vec3::Y, (1.0, 0.0));
        let i2 = data.add_vertex(Vec3::Z, Vec3::Y, (0.0, 1.0));
        data.add_triangle(i0, i1, i2);

        assert_eq!((i0, i1, i2), (0, 1, 2));
        assert_eq!(data.vertex_count(), 3);
        assert_eq!(data.triangle_count(), 1);
        assert!(data.colors.is_empty());
    }

    #[test]
    fn test_colored_builder_tracks_one_color_per_vertex() {
        let mut data = MeshData::new();
        data.add_vertex_colored(Vec3::ZERO, Vec3::Y, (0.0, 0.0), [1.0, 0.0, 0.0, 1.0]);
        data.add_vertex_colored(Vec3::X, Vec3::Y, (1.0, 0.0), [1.0, 0.0, 0.0, 1.0]);

        assert_eq!(data.colors.len(), data.vertex_count());
    }
}

//! Error type for geometry generation

/// Error type for polyhedron generation failures
///
/// Primitive generators never fail: out-of-range numeric parameters are
/// clamped (and logged) instead. Only malformed polyhedron input and a
/// base solid too large for the 16-bit index space are surfaced here.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeometryError {
    /// Flat vertex list length is not a multiple of 3
    #[error("polyhedron vertex list has {0} floats, expected a multiple of 3")]
    MalformedVertexList(usize),

    /// Flat index list length is not a multiple of 3
    #[error("polyhedron index list has {0} entries, expected a multiple of 3")]
    MalformedIndexList(usize),

    /// An index names a vertex past the end of the vertex list
    #[error("polyhedron index {index} is out of bounds for {vertex_count} vertices")]
    IndexOutOfBounds { index: u16, vertex_count: usize },

    /// Base solid exceeds the 16-bit index space even at detail 0
    #[error("polyhedron needs {required} vertices, exceeding the 16-bit budget of {max}")]
    VertexBudgetExceeded { required: usize, max: usize },
}

use thiserror::Error;

/// Errors reported by graph operations.
///
/// A failed operation never mutates the graph.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    /// An edge was added with an endpoint that is not a vertex of the graph.
    #[error("edge {from} -> {into} references a vertex outside 0..{num_vertices}")]
    EdgeOutOfRange {
        from: usize,
        into: usize,
        num_vertices: usize,
    },

    /// A vertex index outside `0..num_vertices` was queried.
    #[error("vertex {vertex} not found (graph has {num_vertices} vertices)")]
    VertexNotFound { vertex: usize, num_vertices: usize },
}

//! Edge storage backends.
//!
//! A [`Storage`] owns the edges of a [`Digraph`](crate::Digraph) and knows how
//! to answer neighbor queries for its own representation.  Vertex bookkeeping
//! and index validation live in the graph, so every method here may assume
//! its vertex arguments are below the graph's vertex count.

pub mod adjacency_list;
pub mod adjacency_matrix;

pub use adjacency_list::AdjacencyList;
pub use adjacency_matrix::AdjacencyMatrix;

/// Trait defining the representation primitives a graph delegates to.
///
/// Implemented by [`AdjacencyList`] and [`AdjacencyMatrix`].
pub trait Storage: Default {
    /// Makes room for a new vertex.  `vertex` is the index being created,
    /// which is always the number of vertices added before it.
    fn add_vertex(&mut self, vertex: usize);

    /// Records one more edge from `from` to `into`.
    fn add_edge(&mut self, from: usize, into: usize);

    /// Out-neighbors of `vertex`, one entry per parallel edge.
    fn neighbors(&self, vertex: usize) -> Vec<usize>;

    /// In-neighbors of `vertex`, one entry per parallel edge.
    fn in_neighbors(&self, vertex: usize) -> Vec<usize>;

    /// Vertices reachable from `vertex` by following exactly two edges, with
    /// one entry per two-edge walk.
    fn distance2(&self, vertex: usize) -> Vec<usize> {
        let mut two_hop = Vec::new();
        for one_hop in self.neighbors(vertex) {
            two_hop.extend(self.neighbors(one_hop));
        }
        two_hop
    }
}

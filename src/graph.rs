//! `Graph` and `GraphMut` are the core traits of this library.  `Graph`
//! provides read-only queries and the algorithms built on them, while
//! `GraphMut` adds vertices and edges.
//!
//! Vertices are dense indices `0..num_vertices()`.  Edges are directed,
//! unlabeled, and may be self-loops or parallel to existing edges; each one is
//! counted separately.  Nothing is ever removed.
//!
//! [`Digraph`] implements both traits once for any [`Storage`] backend:
//!
//! - [`AdjacencyListGraph`]: out-neighbors kept in insertion order
//! - [`AdjacencyMatrixGraph`]: a growable matrix of edge multiplicities

use std::ops::Range;

use bitvec::vec::BitVec;

use crate::{
    error::GraphError,
    search::{self, BfsIterator, DfsIterator, ParentMap, SearchOrder},
    sorting::insertion_sort_by,
    storage::{AdjacencyList, AdjacencyMatrix, Storage},
    tracing_support::{debug, trace},
};

/// A directed graph whose vertices are the indices `0..num_vertices()`.
///
/// Queries about a vertex outside that range fail with
/// [`GraphError::VertexNotFound`].  Neighbor lists are freshly allocated and
/// contain one entry per edge, so parallel edges produce repeated entries.
pub trait Graph {
    /// Gets the number of vertices in the graph.
    fn num_vertices(&self) -> usize;

    /// Gets the number of edges in the graph.
    fn num_edges(&self) -> usize;

    /// Gets the out-neighbors of `vertex`: the targets of its outgoing edges.
    fn neighbors(&self, vertex: usize) -> Result<Vec<usize>, GraphError>;

    /// Gets the in-neighbors of `vertex`: the sources of its incoming edges.
    fn in_neighbors(&self, vertex: usize) -> Result<Vec<usize>, GraphError>;

    /// Gets the vertices reachable from `vertex` in exactly two hops.  For each
    /// out-neighbor `u` of `vertex`, in order, all out-neighbors of `u` are
    /// appended.  The result is neither sorted nor deduplicated.
    fn distance2(&self, vertex: usize) -> Result<Vec<usize>, GraphError> {
        let mut two_hop = Vec::new();
        for one_hop in self.neighbors(vertex)? {
            two_hop.extend(self.neighbors(one_hop)?);
        }
        Ok(two_hop)
    }

    fn is_empty(&self) -> bool {
        self.num_vertices() == 0
    }

    /// Iterates over every vertex index in ascending order.
    fn vertices(&self) -> Range<usize> {
        0..self.num_vertices()
    }

    fn check_valid_vertex(&self, vertex: usize) -> Result<(), GraphError> {
        if vertex < self.num_vertices() {
            Ok(())
        } else {
            Err(GraphError::VertexNotFound {
                vertex,
                num_vertices: self.num_vertices(),
            })
        }
    }

    fn out_degree(&self, vertex: usize) -> Result<usize, GraphError> {
        Ok(self.neighbors(vertex)?.len())
    }

    fn in_degree(&self, vertex: usize) -> Result<usize, GraphError> {
        Ok(self.in_neighbors(vertex)?.len())
    }

    /// Total degree of `vertex`.  A self-loop counts twice.
    fn degree(&self, vertex: usize) -> Result<usize, GraphError> {
        Ok(self.in_degree(vertex)? + self.out_degree(vertex)?)
    }

    /// Returns true if at least one edge leads from `from` to `into`.
    fn has_edge(&self, from: usize, into: usize) -> Result<bool, GraphError> {
        self.check_valid_vertex(into)?;
        Ok(self.neighbors(from)?.contains(&into))
    }

    /// Gets the distinct out-neighbors of `vertex` in the order they first
    /// appear in [`Graph::neighbors`].
    fn successors(&self, vertex: usize) -> Result<Vec<usize>, GraphError> {
        let mut successors = self.neighbors(vertex)?;
        let mut seen: BitVec = BitVec::repeat(false, self.num_vertices());
        successors.retain(|&v| !seen.replace(v, true));
        Ok(successors)
    }

    /// The degree sequence: the total degree of every vertex, sorted from
    /// largest to smallest.  Its length is the vertex count and its sum is
    /// twice the edge count.  Fails if any vertex's neighbors cannot be
    /// looked up.
    fn degree_sequence(&self) -> Result<Vec<usize>, GraphError> {
        let mut degrees = self
            .vertices()
            .map(|vertex| self.degree(vertex))
            .collect::<Result<Vec<_>, _>>()?;
        insertion_sort_by(&mut degrees, |a, b| b.cmp(a));
        Ok(degrees)
    }

    /// Searches for `goal` from `start` with a stack as the frontier.
    ///
    /// The search stops as soon as `goal` is popped and returns the parent
    /// of every vertex discovered so far.  Returns `Ok(None)` if `goal` is
    /// unreachable.  When `start == goal` the map is empty.
    fn depth_first_search(
        &self,
        start: usize,
        goal: usize,
    ) -> Result<Option<ParentMap>, GraphError> {
        search::search::<_, Vec<usize>>(self, start, goal)
    }

    /// Like [`Graph::depth_first_search`], but with a queue as the frontier.
    fn breadth_first_search(
        &self,
        start: usize,
        goal: usize,
    ) -> Result<Option<ParentMap>, GraphError> {
        search::search::<_, std::collections::VecDeque<usize>>(self, start, goal)
    }

    /// Runs the search selected by `order` and reconstructs the path from
    /// `start` to `goal`, both included.
    fn find_path(
        &self,
        start: usize,
        goal: usize,
        order: SearchOrder,
    ) -> Result<Option<Vec<usize>>, GraphError> {
        let parents = match order {
            SearchOrder::DepthFirst => self.depth_first_search(start, goal)?,
            SearchOrder::BreadthFirst => self.breadth_first_search(start, goal)?,
        };
        Ok(parents.and_then(|parents| parents.path_to(start, goal)))
    }

    /// Visits the vertices reachable from `start` in depth-first order.
    fn dfs(&self, start: usize) -> Result<DfsIterator<'_, Self>, GraphError> {
        DfsIterator::new(self, start)
    }

    /// Visits the vertices reachable from `start` in breadth-first order.
    fn bfs(&self, start: usize) -> Result<BfsIterator<'_, Self>, GraphError> {
        BfsIterator::new(self, start)
    }

    /// Finds a path from `start` to `goal` with the fewest edges.  The first
    /// failed neighbor lookup along the way is returned as the error.
    #[cfg(feature = "pathfinding")]
    fn shortest_path(&self, start: usize, goal: usize) -> Result<Option<Vec<usize>>, GraphError> {
        self.check_valid_vertex(start)?;
        self.check_valid_vertex(goal)?;
        let mut failure = None;
        let path = pathfinding::prelude::bfs(
            &start,
            |&vertex| match self.successors(vertex) {
                Ok(successors) => successors,
                Err(err) => {
                    failure.get_or_insert(err);
                    Vec::new()
                }
            },
            |&vertex| vertex == goal,
        );
        match failure {
            Some(err) => Err(err),
            None => Ok(path),
        }
    }
}

/// A [`Graph`] that can grow.
pub trait GraphMut: Graph {
    /// Adds a vertex and returns its index, which is the previous vertex
    /// count.
    fn add_vertex(&mut self) -> usize;

    /// Adds an edge from `from` to `into`.  Fails with
    /// [`GraphError::EdgeOutOfRange`], leaving the graph untouched, if either
    /// endpoint is not a vertex.
    fn add_edge(&mut self, from: usize, into: usize) -> Result<(), GraphError>;

    /// Adds `count` vertices and returns their indices.
    fn add_vertices(&mut self, count: usize) -> Range<usize> {
        let start = self.num_vertices();
        for _ in 0..count {
            self.add_vertex();
        }
        start..self.num_vertices()
    }

    /// Adds edges in order, stopping at the first one that fails.  Edges
    /// before the failing one stay in the graph.
    fn add_edges<I>(&mut self, edges: I) -> Result<(), GraphError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        for (from, into) in edges {
            self.add_edge(from, into)?;
        }
        Ok(())
    }
}

/// A directed multigraph over a [`Storage`] backend.
///
/// The graph keeps the vertex and edge counts and validates indices; the
/// backend stores edges and answers neighbor queries.
#[derive(Clone, Debug, Default)]
pub struct Digraph<S: Storage> {
    storage: S,
    num_vertices: usize,
    num_edges: usize,
}

/// A [`Digraph`] stored as adjacency lists.
pub type AdjacencyListGraph = Digraph<AdjacencyList>;

/// A [`Digraph`] stored as a growable adjacency matrix.
pub type AdjacencyMatrixGraph = Digraph<AdjacencyMatrix>;

impl<S: Storage> Digraph<S> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph with `num_vertices` vertices and the given edges.
    pub fn from_edges<I>(num_vertices: usize, edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut graph = Self::new();
        graph.add_vertices(num_vertices);
        graph.add_edges(edges)?;
        Ok(graph)
    }

    /// Gets the edge storage backend.
    pub fn storage(&self) -> &S {
        &self.storage
    }
}

impl Digraph<AdjacencyMatrix> {
    /// Creates an empty matrix-backed graph with room for `capacity` vertices
    /// before the matrix first grows.
    pub fn with_capacity(capacity: usize) -> Self {
        Digraph {
            storage: AdjacencyMatrix::with_capacity(capacity),
            num_vertices: 0,
            num_edges: 0,
        }
    }

    /// Current side length of the underlying matrix.
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }
}

impl<S: Storage> Graph for Digraph<S> {
    fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    fn num_edges(&self) -> usize {
        self.num_edges
    }

    fn neighbors(&self, vertex: usize) -> Result<Vec<usize>, GraphError> {
        self.check_valid_vertex(vertex)?;
        Ok(self.storage.neighbors(vertex))
    }

    fn in_neighbors(&self, vertex: usize) -> Result<Vec<usize>, GraphError> {
        self.check_valid_vertex(vertex)?;
        Ok(self.storage.in_neighbors(vertex))
    }

    fn distance2(&self, vertex: usize) -> Result<Vec<usize>, GraphError> {
        self.check_valid_vertex(vertex)?;
        Ok(self.storage.distance2(vertex))
    }
}

impl<S: Storage> GraphMut for Digraph<S> {
    fn add_vertex(&mut self) -> usize {
        let vertex = self.num_vertices;
        self.storage.add_vertex(vertex);
        self.num_vertices += 1;
        trace!(vertex, "vertex added");
        vertex
    }

    fn add_edge(&mut self, from: usize, into: usize) -> Result<(), GraphError> {
        if from >= self.num_vertices || into >= self.num_vertices {
            debug!(from, into, num_vertices = self.num_vertices, "edge rejected");
            return Err(GraphError::EdgeOutOfRange {
                from,
                into,
                num_vertices: self.num_vertices,
            });
        }
        self.storage.add_edge(from, into);
        self.num_edges += 1;
        Ok(())
    }
}

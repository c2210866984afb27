use crate::{storage::Storage, tracing_support::trace};

/// Adjacency-list storage: each vertex owns the ordered list of its
/// out-neighbors.
///
/// Neighbors are kept in edge-insertion order and parallel edges appear once
/// per edge.  Finding in-neighbors scans every list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdjacencyList {
    adjacency: Vec<Vec<usize>>,
}

impl AdjacencyList {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for AdjacencyList {
    fn add_vertex(&mut self, vertex: usize) {
        debug_assert_eq!(vertex, self.adjacency.len());
        self.adjacency.push(Vec::new());
    }

    fn add_edge(&mut self, from: usize, into: usize) {
        trace!(from, into, "adjacency list edge");
        if let Some(targets) = self.adjacency.get_mut(from) {
            targets.push(into);
        }
    }

    fn neighbors(&self, vertex: usize) -> Vec<usize> {
        self.adjacency.get(vertex).cloned().unwrap_or_default()
    }

    fn in_neighbors(&self, vertex: usize) -> Vec<usize> {
        let mut in_neighbors = Vec::new();
        for (source, targets) in self.adjacency.iter().enumerate() {
            for &target in targets {
                if target == vertex {
                    in_neighbors.push(source);
                }
            }
        }
        in_neighbors
    }
}

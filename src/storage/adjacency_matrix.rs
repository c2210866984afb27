use std::iter;

use crate::{
    storage::Storage,
    tracing_support::{debug, trace},
};

/// Dense adjacency-matrix storage for directed multigraphs.
///
/// Cell `(row, col)` counts the edges from `row` to `col`, so parallel edges
/// and self-loops need no special handling.  The matrix is a square,
/// row-major buffer whose side (`capacity`) is always at least the number of
/// vertices.  When a new vertex would not fit, the side grows to twice the
/// new vertex count and the old cells are copied over row by row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    cells: Vec<u32>,
    capacity: usize,
}

impl AdjacencyMatrix {
    /// Side length of the matrix created by [`AdjacencyMatrix::new`].
    pub const INITIAL_CAPACITY: usize = 5;

    pub fn new() -> Self {
        Self::with_capacity(Self::INITIAL_CAPACITY)
    }

    /// Creates an empty matrix with room for `capacity` vertices before the
    /// first reallocation.
    pub fn with_capacity(capacity: usize) -> Self {
        AdjacencyMatrix {
            cells: vec![0; capacity * capacity],
            capacity,
        }
    }

    /// Current side length of the matrix.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of edges from `from` to `into`.  Cells outside the matrix count
    /// as zero.
    pub fn edge_count(&self, from: usize, into: usize) -> u32 {
        self.index(from, into).map_or(0, |index| self.cells[index])
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.capacity && col < self.capacity).then(|| self.unchecked_index(row, col))
    }

    fn unchecked_index(&self, row: usize, col: usize) -> usize {
        row * self.capacity + col
    }

    /// Reallocates to a `new_capacity` square and copies every cell of the
    /// old matrix.  Only the old bounds are read.
    fn grow(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity > self.capacity);
        let old_capacity = self.capacity;
        let mut cells = vec![0; new_capacity * new_capacity];
        for row in 0..old_capacity {
            let old_start = row * old_capacity;
            let new_start = row * new_capacity;
            cells[new_start..new_start + old_capacity]
                .copy_from_slice(&self.cells[old_start..old_start + old_capacity]);
        }
        debug!(old_capacity, new_capacity, "adjacency matrix grown");
        self.cells = cells;
        self.capacity = new_capacity;
    }

    fn row(&self, row: usize) -> &[u32] {
        let start = row * self.capacity;
        self.cells.get(start..start + self.capacity).unwrap_or(&[])
    }
}

impl Default for AdjacencyMatrix {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage for AdjacencyMatrix {
    fn add_vertex(&mut self, vertex: usize) {
        if vertex >= self.capacity {
            self.grow(2 * (vertex + 1));
        }
    }

    fn add_edge(&mut self, from: usize, into: usize) {
        trace!(from, into, "adjacency matrix edge");
        if let Some(index) = self.index(from, into) {
            self.cells[index] += 1;
        }
    }

    fn neighbors(&self, vertex: usize) -> Vec<usize> {
        let mut neighbors = Vec::new();
        for (col, &count) in self.row(vertex).iter().enumerate() {
            neighbors.extend(iter::repeat_n(col, count as usize));
        }
        neighbors
    }

    fn in_neighbors(&self, vertex: usize) -> Vec<usize> {
        let mut in_neighbors = Vec::new();
        if vertex >= self.capacity {
            return in_neighbors;
        }
        for row in 0..self.capacity {
            let count = self.cells[self.unchecked_index(row, vertex)];
            in_neighbors.extend(iter::repeat_n(row, count as usize));
        }
        in_neighbors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage_with_vertices(n: usize) -> AdjacencyMatrix {
        let mut storage = AdjacencyMatrix::new();
        for v in 0..n {
            storage.add_vertex(v);
        }
        storage
    }

    #[test]
    fn test_new_matrix_has_initial_capacity() {
        let storage = AdjacencyMatrix::new();
        assert_eq!(storage.capacity(), AdjacencyMatrix::INITIAL_CAPACITY);
        assert_eq!(storage.cells.len(), 25);
    }

    #[test]
    fn test_no_growth_below_capacity() {
        let storage = storage_with_vertices(5);
        assert_eq!(storage.capacity(), 5);
    }

    #[test]
    fn test_growth_doubles_new_vertex_count() {
        let mut storage = storage_with_vertices(5);
        storage.add_vertex(5);
        assert_eq!(storage.capacity(), 12);
        for v in 6..12 {
            storage.add_vertex(v);
        }
        assert_eq!(storage.capacity(), 12);
        storage.add_vertex(12);
        assert_eq!(storage.capacity(), 26);
    }

    #[test]
    fn test_growth_preserves_cells() {
        let mut storage = storage_with_vertices(5);
        storage.add_edge(0, 4);
        storage.add_edge(4, 0);
        storage.add_edge(4, 4);
        storage.add_edge(2, 3);
        storage.add_edge(2, 3);
        let before: Vec<_> = (0..5).map(|v| storage.neighbors(v)).collect();

        for v in 5..20 {
            storage.add_vertex(v);
        }

        let after: Vec<_> = (0..5).map(|v| storage.neighbors(v)).collect();
        assert_eq!(before, after);
        assert_eq!(storage.edge_count(2, 3), 2);
        assert_eq!(storage.edge_count(4, 4), 1);
        assert_eq!(storage.in_neighbors(0), vec![4]);
    }

    #[test]
    fn test_zero_capacity_grows_on_first_vertex() {
        let mut storage = AdjacencyMatrix::with_capacity(0);
        storage.add_vertex(0);
        assert_eq!(storage.capacity(), 2);
        storage.add_edge(0, 0);
        assert_eq!(storage.neighbors(0), vec![0]);
    }

    #[test]
    fn test_neighbors_ascending_with_multiplicity() {
        let mut storage = storage_with_vertices(4);
        storage.add_edge(1, 3);
        storage.add_edge(1, 0);
        storage.add_edge(1, 3);
        storage.add_edge(1, 2);
        assert_eq!(storage.neighbors(1), vec![0, 2, 3, 3]);
    }

    #[test]
    fn test_in_neighbors_ascending_with_multiplicity() {
        let mut storage = storage_with_vertices(4);
        storage.add_edge(3, 0);
        storage.add_edge(1, 0);
        storage.add_edge(3, 0);
        assert_eq!(storage.in_neighbors(0), vec![1, 3, 3]);
    }

    #[test]
    fn test_self_loop_counts_in_row_and_column() {
        let mut storage = storage_with_vertices(2);
        storage.add_edge(1, 1);
        assert_eq!(storage.neighbors(1), vec![1]);
        assert_eq!(storage.in_neighbors(1), vec![1]);
    }

    #[test]
    fn test_queries_outside_matrix_are_empty() {
        let storage = storage_with_vertices(2);
        assert!(storage.neighbors(100).is_empty());
        assert!(storage.in_neighbors(100).is_empty());
        assert_eq!(storage.edge_count(0, 100), 0);
    }
}

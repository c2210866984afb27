#![allow(dead_code)]

use digraphs::{Digraph, GraphMut, Storage};
use quickcheck::{Arbitrary, Gen};

pub const SCENARIO_VERTICES: usize = 13;

pub const SCENARIO_EDGES: [(usize, usize); 12] = [
    (0, 1),
    (0, 2),
    (2, 3),
    (3, 4),
    (3, 5),
    (4, 6),
    (4, 7),
    (6, 8),
    (5, 10),
    (5, 9),
    (9, 11),
    (9, 12),
];

/// The thirteen-vertex tree used throughout the demos.
pub fn scenario_graph<S: Storage>() -> Digraph<S> {
    Digraph::from_edges(SCENARIO_VERTICES, SCENARIO_EDGES).unwrap()
}

/// A random graph description: a vertex count and edges between those
/// vertices, possibly with self-loops and parallel edges.
#[derive(Clone, Debug)]
pub struct ArbGraph {
    pub num_vertices: usize,
    pub edges: Vec<(usize, usize)>,
}

impl ArbGraph {
    pub fn build<S: Storage>(&self) -> Digraph<S> {
        let mut graph = Digraph::new();
        graph.add_vertices(self.num_vertices);
        graph.add_edges(self.edges.iter().copied()).unwrap();
        graph
    }
}

impl Arbitrary for ArbGraph {
    fn arbitrary(g: &mut Gen) -> Self {
        // Up to 15 vertices, so the matrix backend regularly grows.
        let num_vertices = usize::arbitrary(g) % 16;
        let edges = if num_vertices == 0 {
            Vec::new()
        } else {
            let num_edges = usize::arbitrary(g) % (3 * num_vertices + 1);
            (0..num_edges)
                .map(|_| {
                    (
                        usize::arbitrary(g) % num_vertices,
                        usize::arbitrary(g) % num_vertices,
                    )
                })
                .collect()
        };
        ArbGraph {
            num_vertices,
            edges,
        }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let num_vertices = self.num_vertices;
        Box::new(self.edges.shrink().map(move |edges| ArbGraph {
            num_vertices,
            edges,
        }))
    }
}

pub fn sorted(mut values: Vec<usize>) -> Vec<usize> {
    values.sort_unstable();
    values
}

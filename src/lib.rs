//! Directed graphs over interchangeable edge storage, together with a few
//! classic search, sort and tree routines.
//!
//! Build a graph with [`GraphMut`], then query it through [`Graph`]:
//!
//! ```
//! use digraphs::prelude::*;
//!
//! let mut graph = AdjacencyMatrixGraph::new();
//! let a = graph.add_vertex();
//! let b = graph.add_vertex();
//! graph.add_edge(a, b)?;
//! graph.add_edge(a, b)?;
//! assert_eq!(graph.neighbors(a)?, vec![b, b]);
//! assert_eq!(graph.degree_sequence()?, vec![2, 2]);
//! # Ok::<(), digraphs::GraphError>(())
//! ```

pub mod error;
pub mod graph;
pub mod prelude;
pub mod search;
pub mod searching;
pub mod sorting;
pub mod storage;
pub mod tracing_support;
pub mod tree;

pub use error::GraphError;
pub use graph::{AdjacencyListGraph, AdjacencyMatrixGraph, Digraph, Graph, GraphMut};
pub use search::{ParentMap, SearchOrder};
pub use storage::{AdjacencyList, AdjacencyMatrix, Storage};

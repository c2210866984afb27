pub use crate::error::GraphError;
pub use crate::graph::{AdjacencyListGraph, AdjacencyMatrixGraph, Digraph, Graph, GraphMut};
pub use crate::search::{ParentMap, SearchOrder};
pub use crate::storage::Storage;

//! Graph search: goal-directed depth-first and breadth-first search that
//! record how each vertex was discovered, plus visit-order iterators.

use std::collections::{HashMap, VecDeque};

use bitvec::vec::BitVec;
use derivative::Derivative;

use crate::{
    error::GraphError,
    graph::Graph,
    tracing_support::{debug, info_span},
};

/// Which frontier discipline a search uses.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum SearchOrder {
    /// Last-in, first-out frontier.
    DepthFirst,
    /// First-in, first-out frontier.
    BreadthFirst,
}

/// Parent pointers recorded by a search: for every vertex discovered, the
/// vertex it was discovered from.  The start vertex has no entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParentMap {
    parents: HashMap<usize, usize>,
}

impl ParentMap {
    /// The vertex `vertex` was discovered from, if it was discovered.
    pub fn get(&self, vertex: usize) -> Option<usize> {
        self.parents.get(&vertex).copied()
    }

    pub fn contains(&self, vertex: usize) -> bool {
        self.parents.contains_key(&vertex)
    }

    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Iterates over `(vertex, parent)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.parents.iter().map(|(&vertex, &parent)| (vertex, parent))
    }

    /// Reconstructs the path `start ..= goal` by following parent pointers
    /// back from `goal`.  Returns `None` if the pointers do not lead from
    /// `goal` back to `start`.
    pub fn path_to(&self, start: usize, goal: usize) -> Option<Vec<usize>> {
        let mut path = vec![goal];
        let mut current = goal;
        while current != start {
            current = self.get(current)?;
            path.push(current);
            if path.len() > self.parents.len() + 1 {
                return None;
            }
        }
        path.reverse();
        Some(path)
    }

    fn insert(&mut self, vertex: usize, parent: usize) {
        self.parents.insert(vertex, parent);
    }
}

impl From<ParentMap> for HashMap<usize, usize> {
    fn from(map: ParentMap) -> Self {
        map.parents
    }
}

/// A collection of vertices waiting to be expanded.
pub(crate) trait Frontier: Default {
    fn push(&mut self, vertex: usize);
    fn pop(&mut self) -> Option<usize>;
}

impl Frontier for Vec<usize> {
    fn push(&mut self, vertex: usize) {
        Vec::push(self, vertex);
    }

    fn pop(&mut self) -> Option<usize> {
        Vec::pop(self)
    }
}

impl Frontier for VecDeque<usize> {
    fn push(&mut self, vertex: usize) {
        self.push_back(vertex);
    }

    fn pop(&mut self) -> Option<usize> {
        self.pop_front()
    }
}

/// Searches from `start` until `goal` is taken off the frontier.
///
/// A vertex is marked visited when it is discovered, so it enters the
/// frontier at most once.  Returns `Ok(None)` if the frontier empties first.
pub(crate) fn search<G, F>(
    graph: &G,
    start: usize,
    goal: usize,
) -> Result<Option<ParentMap>, GraphError>
where
    G: Graph + ?Sized,
    F: Frontier,
{
    graph.check_valid_vertex(start)?;
    graph.check_valid_vertex(goal)?;
    let _span = info_span!("search", start, goal).entered();

    let mut frontier = F::default();
    let mut visited: BitVec = BitVec::repeat(false, graph.num_vertices());
    let mut parents = ParentMap::default();

    frontier.push(start);
    visited.set(start, true);
    while let Some(current) = frontier.pop() {
        if current == goal {
            debug!(discovered = parents.len(), "goal reached");
            return Ok(Some(parents));
        }
        for neighbor in graph.neighbors(current)? {
            if !visited.replace(neighbor, true) {
                parents.insert(neighbor, current);
                frontier.push(neighbor);
            }
        }
    }
    debug!(discovered = parents.len(), "goal unreachable");
    Ok(None)
}

/// Iterator over the vertices reachable from a start vertex in depth-first
/// preorder.  Neighbors are explored in the order the graph reports them.
///
/// A failed neighbor lookup is yielded as an `Err`, after which the iterator
/// is exhausted.
#[derive(Derivative)]
#[derivative(Clone(bound = ""), Debug(bound = ""))]
pub struct DfsIterator<'g, G: Graph + ?Sized> {
    #[derivative(Debug = "ignore")]
    graph: &'g G,
    visited: BitVec,
    stack: Vec<usize>,
}

impl<'g, G> DfsIterator<'g, G>
where
    G: Graph + ?Sized,
{
    pub fn new(graph: &'g G, start: usize) -> Result<Self, GraphError> {
        graph.check_valid_vertex(start)?;
        Ok(Self {
            graph,
            visited: BitVec::repeat(false, graph.num_vertices()),
            stack: vec![start],
        })
    }
}

impl<'g, G> Iterator for DfsIterator<'g, G>
where
    G: Graph + ?Sized,
{
    type Item = Result<usize, GraphError>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(vertex) = self.stack.pop() {
            if self.visited.replace(vertex, true) {
                continue;
            }
            let neighbors = match self.graph.neighbors(vertex) {
                Ok(neighbors) => neighbors,
                Err(err) => {
                    self.stack.clear();
                    return Some(Err(err));
                }
            };
            for neighbor in neighbors.into_iter().rev() {
                if !self.visited[neighbor] {
                    self.stack.push(neighbor);
                }
            }
            return Some(Ok(vertex));
        }
        None
    }
}

/// Iterator over the vertices reachable from a start vertex in breadth-first
/// order.  Stops after yielding the first failed neighbor lookup.
#[derive(Derivative)]
#[derivative(Clone(bound = ""), Debug(bound = ""))]
pub struct BfsIterator<'g, G: Graph + ?Sized> {
    #[derivative(Debug = "ignore")]
    graph: &'g G,
    visited: BitVec,
    queue: VecDeque<usize>,
}

impl<'g, G> BfsIterator<'g, G>
where
    G: Graph + ?Sized,
{
    pub fn new(graph: &'g G, start: usize) -> Result<Self, GraphError> {
        graph.check_valid_vertex(start)?;
        let mut visited = BitVec::repeat(false, graph.num_vertices());
        visited.set(start, true);
        Ok(Self {
            graph,
            visited,
            queue: VecDeque::from([start]),
        })
    }
}

impl<'g, G> Iterator for BfsIterator<'g, G>
where
    G: Graph + ?Sized,
{
    type Item = Result<usize, GraphError>;

    fn next(&mut self) -> Option<Self::Item> {
        let vertex = self.queue.pop_front()?;
        match self.graph.neighbors(vertex) {
            Ok(neighbors) => {
                for neighbor in neighbors {
                    if !self.visited.replace(neighbor, true) {
                        self.queue.push_back(neighbor);
                    }
                }
                Some(Ok(vertex))
            }
            Err(err) => {
                self.queue.clear();
                Some(Err(err))
            }
        }
    }
}

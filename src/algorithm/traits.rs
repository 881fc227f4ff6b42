use std::fmt::Debug;
use num_traits::{Float, Zero};
use crate::algorithm::path::{Path, PathReconstructor};
use crate::graph::Graph;
use crate::Result;

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Distances from source to each vertex (`None` = unreachable)
    pub distances: Vec<Option<W>>,

    /// Predecessor vertices in the shortest path tree (`None` for the source and unreached vertices)
    pub predecessors: Vec<Option<usize>>,

    /// Source vertex ID
    pub source: usize,
}

impl<W> ShortestPathResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates the result of a run on a graph without vertices
    pub fn empty(source: usize) -> Self {
        ShortestPathResult {
            distances: Vec::new(),
            predecessors: Vec::new(),
            source,
        }
    }

    /// Number of vertices covered by the tables
    pub fn vertex_count(&self) -> usize {
        self.distances.len()
    }

    /// Distance to `vertex`, or `None` if it is unreachable or out of range
    pub fn distance(&self, vertex: usize) -> Option<W> {
        self.distances.get(vertex).copied().flatten()
    }

    /// Returns true if `vertex` was reached from the source
    pub fn is_reachable(&self, vertex: usize) -> bool {
        self.distance(vertex).is_some()
    }

    /// Number of reached vertices, including the source
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_some()).count()
    }
}

/// One relaxation step: `distance[vertex]` was lowered via the settled vertex `via`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Relaxation<W> {
    /// Vertex whose tentative distance was lowered
    pub vertex: usize,
    /// Settled vertex the improvement goes through (the new predecessor)
    pub via: usize,
    /// Tentative distance before the step (`None` = infinite)
    pub previous: Option<W>,
    /// Tentative distance after the step
    pub distance: W,
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>;

    /// Find the shortest path between two vertices, stopping once `destination` is settled
    fn find_path(&self, graph: &G, source: usize, destination: usize) -> Result<Option<Path<W>>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of vertices
    fn get_path(&self, result: &ShortestPathResult<W>, target: usize) -> Result<Option<Path<W>>> {
        PathReconstructor::reconstruct(result, target)
    }
}

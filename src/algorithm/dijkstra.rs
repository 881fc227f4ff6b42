use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::graph::Graph;
use crate::algorithm::engine::{self, HeapFrontier};
use crate::algorithm::{Path, PathReconstructor, Relaxation, ShortestPathAlgorithm, ShortestPathResult};
use crate::Result;

/// Dijkstra's algorithm driven by an indexed binary heap with decrease-key.
///
/// Runs in O((V + E) log V). This is the recommended variant for all graphs
/// except very dense ones.
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }

    /// Computes shortest paths from `source`, reporting every relaxation to `observe`
    pub fn compute_traced<W, G, O>(&self, graph: &G, source: usize, observe: O) -> Result<ShortestPathResult<W>>
    where
        W: Float + Zero + Debug + Copy + Ord,
        G: Graph<W>,
        O: FnMut(Relaxation<W>),
    {
        self.run(graph, source, None, observe)
    }

    fn run<W, G, O>(&self, graph: &G, source: usize, target: Option<usize>, observe: O) -> Result<ShortestPathResult<W>>
    where
        W: Float + Zero + Debug + Copy + Ord,
        G: Graph<W>,
        O: FnMut(Relaxation<W>),
    {
        if graph.vertex_count() == 0 {
            return Ok(ShortestPathResult::empty(source));
        }
        engine::check_vertex::<W, G>(graph, source)?;
        if let Some(target) = target {
            engine::check_vertex::<W, G>(graph, target)?;
        }

        let distances: Vec<W> = engine::initial_distances(graph.vertex_count(), source);
        let mut frontier = HeapFrontier::new(&distances);

        Ok(engine::relax("dijkstra", graph, source, distances, &mut frontier, target, observe))
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        self.run(graph, source, None, |_| {})
    }

    fn find_path(&self, graph: &G, source: usize, destination: usize) -> Result<Option<Path<W>>> {
        if graph.vertex_count() == 0 {
            return Ok(None);
        }
        let result = self.run(graph, source, Some(destination), |_| {})?;
        PathReconstructor::reconstruct(&result, destination)
    }
}

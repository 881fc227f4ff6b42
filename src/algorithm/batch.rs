//! Independent queries from several sources against one shared graph.

use std::fmt::Debug;
use log::debug;
use num_traits::{Float, Zero};
use rayon::prelude::*;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::Graph;
use crate::Result;

/// Runs `algorithm` from every vertex in `sources` in parallel.
///
/// The graph is only read; each query allocates its own tables and heap.
/// Results are returned in the order of `sources`. If any source is out of
/// range the whole batch fails with that error.
pub fn compute_from_sources<W, G, A>(
    algorithm: &A,
    graph: &G,
    sources: &[usize],
) -> Result<Vec<ShortestPathResult<W>>>
where
    W: Float + Zero + Debug + Copy + Send,
    G: Graph<W> + Sync,
    A: ShortestPathAlgorithm<W, G> + Sync,
{
    debug!(
        "{}: batch of {} sources on {} vertices",
        algorithm.name(),
        sources.len(),
        graph.vertex_count()
    );

    sources
        .par_iter()
        .map(|&source| algorithm.compute_shortest_paths(graph, source))
        .collect()
}

/// Runs `algorithm` from every vertex of `graph`; entry `i` is the result for source `i`.
pub fn all_pairs<W, G, A>(algorithm: &A, graph: &G) -> Result<Vec<ShortestPathResult<W>>>
where
    W: Float + Zero + Debug + Copy + Send,
    G: Graph<W> + Sync,
    A: ShortestPathAlgorithm<W, G> + Sync,
{
    let sources: Vec<usize> = (0..graph.vertex_count()).collect();
    compute_from_sources(algorithm, graph, &sources)
}

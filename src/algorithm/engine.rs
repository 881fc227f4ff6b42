//! The relaxation loop shared by every Dijkstra variant.
//!
//! Variants differ only in how the next vertex to settle is chosen, which is
//! abstracted by [`Frontier`]. Keeping a single loop is what makes the dense
//! and heap variants produce identical tables.

use std::fmt::Debug;
use log::{debug, trace};
use num_traits::{Float, Zero};

use crate::algorithm::{Relaxation, ShortestPathResult};
use crate::data_structures::IndexedMinHeap;
use crate::graph::Graph;
use crate::{Error, Result};

/// Selection strategy for the next vertex to settle
pub(crate) trait Frontier<W> {
    /// Settles and returns the unsettled vertex with the smallest `(distance, id)`.
    /// Returns `None` when no unsettled vertex has a finite distance.
    fn settle_next(&mut self, distances: &[W]) -> Option<usize>;

    /// Returns true if `vertex` is not settled yet
    fn is_unsettled(&self, vertex: usize) -> bool;

    /// Notifies the frontier that `distances[vertex]` was lowered to `distance`
    fn lowered(&mut self, vertex: usize, distance: W);
}

/// Frontier backed by an [`IndexedMinHeap`], O(log V) per operation
pub(crate) struct HeapFrontier<W>
where
    W: Copy + Ord + Debug,
{
    heap: IndexedMinHeap<W>,
}

impl<W> HeapFrontier<W>
where
    W: Float + Copy + Ord + Debug,
{
    pub(crate) fn new(distances: &[W]) -> Self {
        HeapFrontier {
            heap: IndexedMinHeap::build(distances),
        }
    }
}

impl<W> Frontier<W> for HeapFrontier<W>
where
    W: Float + Copy + Ord + Debug,
{
    fn settle_next(&mut self, _distances: &[W]) -> Option<usize> {
        let (vertex, distance) = self.heap.extract_min()?;
        // Everything left in the heap is at infinity as well: unreachable.
        if distance.is_infinite() {
            return None;
        }
        Some(vertex)
    }

    fn is_unsettled(&self, vertex: usize) -> bool {
        self.heap.contains(vertex)
    }

    fn lowered(&mut self, vertex: usize, distance: W) {
        self.heap.decrease_key(vertex, distance);
    }
}

/// Frontier that scans every vertex for the minimum, O(V) per selection
pub(crate) struct ScanFrontier {
    settled: Vec<bool>,
}

impl ScanFrontier {
    pub(crate) fn new(vertex_count: usize) -> Self {
        ScanFrontier {
            settled: vec![false; vertex_count],
        }
    }
}

impl<W> Frontier<W> for ScanFrontier
where
    W: Float + Copy + Ord + Debug,
{
    fn settle_next(&mut self, distances: &[W]) -> Option<usize> {
        let mut best: Option<usize> = None;
        let mut min = W::infinity();

        // Strict comparison keeps the lowest id among equal distances.
        for (v, &dist) in distances.iter().enumerate() {
            if !self.settled[v] && dist < min {
                min = dist;
                best = Some(v);
            }
        }

        let vertex = best?;
        self.settled[vertex] = true;
        Some(vertex)
    }

    fn is_unsettled(&self, vertex: usize) -> bool {
        !self.settled[vertex]
    }

    fn lowered(&mut self, _vertex: usize, _distance: W) {}
}

/// Fails with `OutOfRange` unless `vertex` belongs to `graph`
pub(crate) fn check_vertex<W, G>(graph: &G, vertex: usize) -> Result<()>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    if graph.has_vertex(vertex) {
        Ok(())
    } else {
        Err(Error::OutOfRange {
            vertex,
            vertex_count: graph.vertex_count(),
        })
    }
}

/// Distance table for a fresh run: zero at `source`, infinity elsewhere
pub(crate) fn initial_distances<W>(vertex_count: usize, source: usize) -> Vec<W>
where
    W: Float + Zero + Copy,
{
    let mut distances = vec![W::infinity(); vertex_count];
    distances[source] = W::zero();
    distances
}

/// Runs Dijkstra's relaxation loop from `source`.
///
/// Stops when the frontier has no reachable vertex left, or right after
/// `target` is settled. Path lengths that overflow the weight type saturate
/// at `W::max_value()`. In the latter case vertices settled before the stop
/// have final distances; the rest keep their tentative values.
pub(crate) fn relax<W, G, F, O>(
    variant: &'static str,
    graph: &G,
    source: usize,
    mut distances: Vec<W>,
    frontier: &mut F,
    target: Option<usize>,
    mut observe: O,
) -> ShortestPathResult<W>
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
    F: Frontier<W>,
    O: FnMut(Relaxation<W>),
{
    let n = graph.vertex_count();
    debug!("{}: start from vertex {} on {} vertices", variant, source, n);

    let mut predecessors: Vec<Option<usize>> = vec![None; n];
    let mut settled = 0usize;

    while let Some(u) = frontier.settle_next(&distances) {
        settled += 1;
        let dist_u = distances[u];
        trace!("{}: settled vertex {} at distance {:?}", variant, u, dist_u);

        if target == Some(u) {
            break;
        }

        for (v, weight) in graph.outgoing_edges(u) {
            if !frontier.is_unsettled(v) {
                continue;
            }

            // Finite weights can sum to infinity; a reached vertex stays finite.
            let mut candidate = dist_u + weight;
            if candidate.is_infinite() {
                candidate = W::max_value();
            }
            if candidate < distances[v] {
                let previous = distances[v];
                distances[v] = candidate;
                predecessors[v] = Some(u);
                frontier.lowered(v, candidate);

                trace!("{}: relaxed {} -> {} to {:?}", variant, u, v, candidate);
                observe(Relaxation {
                    vertex: v,
                    via: u,
                    previous: finite(previous),
                    distance: candidate,
                });
            }
        }
    }

    debug!("{}: settled {} of {} vertices", variant, settled, n);

    ShortestPathResult {
        distances: distances.into_iter().map(finite).collect(),
        predecessors,
        source,
    }
}

fn finite<W: Float>(value: W) -> Option<W> {
    if value.is_finite() {
        Some(value)
    } else {
        None
    }
}

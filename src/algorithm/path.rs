use std::fmt::Debug;
use log::warn;
use num_traits::{Float, Zero};

use crate::algorithm::ShortestPathResult;
use crate::graph::Graph;
use crate::{Error, Result};

/// A shortest path from a source to a destination
#[derive(Debug, Clone, PartialEq)]
pub struct Path<W> {
    /// Vertices in source -> destination order
    pub vertices: Vec<usize>,
    /// Total weight of the path
    pub distance: W,
}

impl<W> Path<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// First vertex of the path, `None` for an empty vertex list
    pub fn source(&self) -> Option<usize> {
        self.vertices.first().copied()
    }

    /// Last vertex of the path, `None` for an empty vertex list
    pub fn destination(&self) -> Option<usize> {
        self.vertices.last().copied()
    }

    /// Number of edges on the path (zero when source == destination)
    pub fn hop_count(&self) -> Option<usize> {
        self.vertices.len().checked_sub(1)
    }

    /// Sums the weights of consecutive edges in `graph`.
    /// Returns `None` if some step is not an edge of `graph`.
    pub fn weight_in<G: Graph<W>>(&self, graph: &G) -> Option<W> {
        self.vertices
            .windows(2)
            .try_fold(W::zero(), |total, step| {
                graph.get_edge_weight(step[0], step[1]).map(|w| total + w)
            })
    }
}

/// Turns predecessor tables into explicit vertex sequences.
///
/// The walk is iterative (collect destination -> source, then reverse), so
/// path length is bounded only by the vertex count.
#[derive(Debug, Default, Clone, Copy)]
pub struct PathReconstructor;

impl PathReconstructor {
    /// Reconstructs the path from `result.source` to `destination`.
    ///
    /// Returns `Ok(None)` if `destination` was not reached, and the single
    /// vertex path `[source]` when `destination == source`. A predecessor
    /// chain that loops or does not end at the source is reported as
    /// `InvariantViolation`.
    pub fn reconstruct<W>(result: &ShortestPathResult<W>, destination: usize) -> Result<Option<Path<W>>>
    where
        W: Float + Zero + Debug + Copy,
    {
        let n = result.predecessors.len();
        if result.distances.len() != n {
            return Err(Error::InvariantViolation(format!(
                "distance table has {} entries but predecessor table has {}",
                result.distances.len(),
                n
            )));
        }
        if destination >= n {
            return Err(Error::OutOfRange {
                vertex: destination,
                vertex_count: n,
            });
        }

        let distance = match result.distances[destination] {
            Some(distance) => distance,
            None => return Ok(None),
        };

        let vertices = Self::walk(&result.predecessors, destination)?;
        if vertices[0] != result.source {
            warn!(
                "Predecessor chain of vertex {} ends at {} instead of source {}",
                destination, vertices[0], result.source
            );
            return Err(Error::InvariantViolation(format!(
                "predecessor chain of vertex {} ends at {} instead of source {}",
                destination, vertices[0], result.source
            )));
        }

        Ok(Some(Path { vertices, distance }))
    }

    /// Follows predecessor links from `destination` until a vertex without a
    /// predecessor, returning the visited vertices in forward order.
    pub fn walk(predecessors: &[Option<usize>], destination: usize) -> Result<Vec<usize>> {
        let n = predecessors.len();
        if destination >= n {
            return Err(Error::OutOfRange {
                vertex: destination,
                vertex_count: n,
            });
        }

        let mut visited = vec![false; n];
        let mut path = Vec::new();
        let mut current = destination;

        loop {
            if visited[current] {
                warn!("Cycle detected in predecessor table at vertex {}", current);
                return Err(Error::InvariantViolation(format!(
                    "cycle in predecessor table at vertex {}",
                    current
                )));
            }
            visited[current] = true;
            path.push(current);

            match predecessors[current] {
                None => break,
                Some(pred) if pred < n => current = pred,
                Some(pred) => {
                    return Err(Error::InvariantViolation(format!(
                        "vertex {} has predecessor {} outside the table",
                        current, pred
                    )));
                }
            }
        }

        path.reverse();
        Ok(path)
    }
}

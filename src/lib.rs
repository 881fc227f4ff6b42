//! Dijkstra SSSP - single-source shortest paths on non-negatively weighted graphs
//!
//! This library provides two interchangeable variants of Dijkstra's algorithm:
//!
//! - [`Dijkstra`]: the recommended O((V+E) log V) variant, driven by an
//!   [`IndexedMinHeap`](data_structures::IndexedMinHeap) with decrease-key.
//! - [`DenseDijkstra`]: the O(V^2) array-scan variant, kept as a reference
//!   implementation and used for specific source/destination searches.
//!
//! Both variants settle vertices in `(distance, vertex id)` order and only
//! replace a predecessor on a strictly shorter distance, so for the same
//! input they produce identical distance and predecessor tables.

pub mod algorithm;
pub mod data_structures;
#[cfg(feature = "ffi")]
pub mod ffi;
pub mod graph;
pub mod report;

pub use algorithm::{
    dense::DenseDijkstra, dijkstra::Dijkstra, path::Path, path::PathReconstructor,
    ShortestPathAlgorithm, ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::{DirectedGraph, GraphConfig};

use graph::Graph;
use num_traits::{Float, Zero};
use std::fmt::Debug;

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Vertex {vertex} out of range for graph with {vertex_count} vertices")]
    OutOfRange { vertex: usize, vertex_count: usize },

    #[error("Invalid weight {weight} on edge {from} -> {to}: weights must be finite and non-negative")]
    InvalidWeight { from: usize, to: usize, weight: f64 },

    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Computes shortest paths from `source` with the heap-based [`Dijkstra`].
pub fn compute_shortest_paths<W, G>(graph: &G, source: usize) -> Result<ShortestPathResult<W>>
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    Dijkstra::new().compute_shortest_paths(graph, source)
}

/// Finds the shortest path between `source` and `destination` with the
/// dense search, stopping as soon as `destination` is settled.
///
/// Returns `Ok(None)` when `destination` is unreachable.
pub fn find_path<W, G>(graph: &G, source: usize, destination: usize) -> Result<Option<Path<W>>>
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    DenseDijkstra::new().find_path(graph, source, destination)
}

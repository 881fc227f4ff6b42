use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::Result;

/// Trait representing a weighted directed graph with a fixed vertex set `0..vertex_count()`
pub trait Graph<W>: Debug
where
    W: Float + Zero + Debug + Copy,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of stored directed edges (self-loops are never stored)
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges from a vertex, in ascending target order
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns an iterator over the incoming edges to a vertex, in ascending source order
    fn incoming_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.get_edge_weight(from, to).is_some()
    }

    /// Gets the weight of an edge if it exists.
    ///
    /// The distance from a vertex to itself is always zero.
    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W>;
}

/// Trait for mutable graph operations
pub trait MutableGraph<W>: Graph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Sets the weight of the directed edge `from -> to`, replacing any previous weight
    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()>;

    /// Sets `from -> to` and `to -> from` to the same weight.
    ///
    /// Both directions are validated before either one is written.
    fn add_undirected_edge(&mut self, u: usize, v: usize, weight: W) -> Result<()>;

    /// Removes a directed edge, returning whether it existed
    fn remove_edge(&mut self, from: usize, to: usize) -> Result<bool>;
}

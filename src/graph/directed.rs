use crate::graph::config::GraphConfig;
use crate::graph::traits::{Graph, MutableGraph};
use crate::{Error, Result};
use num_traits::{Float, Zero};
use std::fmt::Debug;

/// A directed graph implementation using adjacency lists.
///
/// The vertex set is fixed at construction; vertices are `0..vertex_count`.
/// Each adjacency list is kept sorted by neighbour id, so lookups are a
/// binary search and iteration order is reproducible.
#[derive(Debug, Clone)]
pub struct DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Outgoing edges for each vertex: vertex_id -> [(target_vertex, weight)]
    outgoing_edges: Vec<Vec<(usize, W)>>,

    /// Incoming edges for each vertex: vertex_id -> [(source_vertex, weight)]
    incoming_edges: Vec<Vec<(usize, W)>>,

    /// Number of stored directed edges
    edge_count: usize,
}

impl<W> DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates a graph with `vertex_count` vertices and no edges
    pub fn new(vertex_count: usize) -> Result<Self> {
        Self::with_config(vertex_count, &GraphConfig::default())
    }

    /// Creates a graph with `vertex_count` vertices, honouring the limits in `config`
    pub fn with_config(vertex_count: usize, config: &GraphConfig) -> Result<Self> {
        if !config.permits(vertex_count) {
            return Err(Error::InvalidArgument(format!(
                "vertex count {} exceeds configured maximum {}",
                vertex_count,
                config.max_vertices.unwrap_or(usize::MAX)
            )));
        }

        let mut outgoing_edges = Vec::new();
        let mut incoming_edges = Vec::new();
        outgoing_edges
            .try_reserve_exact(vertex_count)
            .and_then(|_| incoming_edges.try_reserve_exact(vertex_count))
            .map_err(|e| {
                Error::InvalidArgument(format!(
                    "cannot allocate a graph with {} vertices: {}",
                    vertex_count, e
                ))
            })?;
        outgoing_edges.resize_with(vertex_count, Vec::new);
        incoming_edges.resize_with(vertex_count, Vec::new);

        Ok(DirectedGraph {
            outgoing_edges,
            incoming_edges,
            edge_count: 0,
        })
    }

    fn check_vertex(&self, vertex: usize) -> Result<()> {
        if self.has_vertex(vertex) {
            Ok(())
        } else {
            Err(Error::OutOfRange {
                vertex,
                vertex_count: self.vertex_count(),
            })
        }
    }

    fn check_edge(&self, from: usize, to: usize, weight: W) -> Result<()> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        if weight.is_finite() && weight >= W::zero() {
            Ok(())
        } else {
            Err(Error::InvalidWeight {
                from,
                to,
                weight: weight.to_f64().unwrap_or(f64::NAN),
            })
        }
    }

    /// Inserts or overwrites `(key, weight)` in a sorted adjacency list.
    /// Returns true if a new entry was created.
    fn upsert(list: &mut Vec<(usize, W)>, key: usize, weight: W) -> bool {
        match list.binary_search_by_key(&key, |&(k, _)| k) {
            Ok(idx) => {
                list[idx].1 = weight;
                false
            }
            Err(idx) => {
                list.insert(idx, (key, weight));
                true
            }
        }
    }

    fn remove_from(list: &mut Vec<(usize, W)>, key: usize) -> bool {
        match list.binary_search_by_key(&key, |&(k, _)| k) {
            Ok(idx) => {
                list.remove(idx);
                true
            }
            Err(_) => false,
        }
    }

    /// Writes an already validated edge
    fn store_edge(&mut self, from: usize, to: usize, weight: W) {
        // Self-distance is fixed at zero; a self-loop can never shorten a path.
        if from == to {
            return;
        }
        if Self::upsert(&mut self.outgoing_edges[from], to, weight) {
            self.edge_count += 1;
        }
        Self::upsert(&mut self.incoming_edges[to], from, weight);
    }
}

impl<W> Graph<W> for DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.outgoing_edges.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        match self.outgoing_edges.get(vertex) {
            Some(edges) => Box::new(edges.iter().copied()),
            None => Box::new(std::iter::empty()),
        }
    }

    fn incoming_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        match self.incoming_edges.get(vertex) {
            Some(edges) => Box::new(edges.iter().copied()),
            None => Box::new(std::iter::empty()),
        }
    }

    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W> {
        let edges = self.outgoing_edges.get(from)?;
        if from == to {
            return Some(W::zero());
        }
        edges
            .binary_search_by_key(&to, |&(k, _)| k)
            .ok()
            .map(|idx| edges[idx].1)
    }
}

impl<W> MutableGraph<W> for DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        self.check_edge(from, to, weight)?;
        self.store_edge(from, to, weight);
        Ok(())
    }

    fn add_undirected_edge(&mut self, u: usize, v: usize, weight: W) -> Result<()> {
        self.check_edge(u, v, weight)?;
        self.store_edge(u, v, weight);
        self.store_edge(v, u, weight);
        Ok(())
    }

    fn remove_edge(&mut self, from: usize, to: usize) -> Result<bool> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;

        let removed = Self::remove_from(&mut self.outgoing_edges[from], to);
        if removed {
            Self::remove_from(&mut self.incoming_edges[to], from);
            self.edge_count -= 1;
        }
        Ok(removed)
    }
}

use crate::graph::{DirectedGraph, MutableGraph};
use crate::{Error, Result};
use ordered_float::OrderedFloat;
use rand::prelude::*;
use rand::rngs::StdRng;

/// Generates a random directed graph with about `edge_factor * n` edges.
/// Weights are drawn uniformly from `1.0..100.0`; the same seed always yields the same graph.
pub fn generate_random(n: usize, edge_factor: f64, seed: u64) -> Result<DirectedGraph<OrderedFloat<f64>>> {
    let mut graph = DirectedGraph::new(n)?;
    if n < 2 {
        return Ok(graph);
    }
    let mut rng = StdRng::seed_from_u64(seed);

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            let weight = OrderedFloat(rng.gen_range(1.0..100.0));
            graph.add_edge(u, v, weight)?;
        }
    }

    Ok(graph)
}

/// Generates a random graph whose weights are small integers in `0..=max_weight`.
///
/// Integer weights (including zero) produce many equal-distance ties, which
/// exercises the deterministic tie-break.
pub fn generate_random_integer(
    n: usize,
    edge_probability: f64,
    max_weight: u32,
    seed: u64,
) -> Result<DirectedGraph<OrderedFloat<f64>>> {
    let mut graph = DirectedGraph::new(n)?;
    let mut rng = StdRng::seed_from_u64(seed);

    for u in 0..n {
        for v in 0..n {
            if u != v && rng.gen_bool(edge_probability) {
                let weight = OrderedFloat(rng.gen_range(0..=max_weight) as f64);
                graph.add_edge(u, v, weight)?;
            }
        }
    }

    Ok(graph)
}

/// Generates a 2D grid graph (4-connectivity, both directions) with unit weights
pub fn generate_grid(width: usize, height: usize) -> Result<DirectedGraph<OrderedFloat<f64>>> {
    let n = width.checked_mul(height).ok_or_else(|| {
        Error::InvalidArgument(format!("grid of {} x {} vertices is too large", width, height))
    })?;
    let mut graph = DirectedGraph::new(n)?;

    let index = |x: usize, y: usize| -> usize { y * width + x };

    for y in 0..height {
        for x in 0..width {
            if x + 1 < width {
                graph.add_undirected_edge(index(x, y), index(x + 1, y), OrderedFloat(1.0))?;
            }
            if y + 1 < height {
                graph.add_undirected_edge(index(x, y), index(x, y + 1), OrderedFloat(1.0))?;
            }
        }
    }

    Ok(graph)
}

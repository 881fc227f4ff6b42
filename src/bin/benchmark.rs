use std::env;
use std::time::{Duration, Instant};
use ordered_float::OrderedFloat;
use dijkstra_sssp::algorithm::{dense::DenseDijkstra, dijkstra::Dijkstra, ShortestPathAlgorithm, ShortestPathResult};
use dijkstra_sssp::graph::{generators, DirectedGraph, Graph};

type Weight = OrderedFloat<f64>;

// Function to benchmark an algorithm on a graph
fn benchmark_algorithm<A>(
    name: &str,
    algorithm: &A,
    graph: &DirectedGraph<Weight>,
    source: usize,
) -> dijkstra_sssp::Result<(Duration, ShortestPathResult<Weight>)>
where
    A: ShortestPathAlgorithm<Weight, DirectedGraph<Weight>>,
{
    println!("Running {} on graph with {} vertices...", name, graph.vertex_count());

    let start = Instant::now();
    let result = algorithm.compute_shortest_paths(graph, source)?;
    let duration = start.elapsed();

    println!("  - Found {} reachable vertices in {:?}", result.reachable_count(), duration);

    Ok((duration, result))
}

fn main() -> dijkstra_sssp::Result<()> {
    env_logger::init();

    // Edge factor: average number of edges per vertex
    let edge_factor: f64 = env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(4.0);

    let graph_sizes = [500, 1_000, 2_000, 5_000, 10_000];

    println!("=====================================================");
    println!("Benchmark: Dense Dijkstra vs Heap Dijkstra");
    println!("Edge factor: {} edges per vertex (on average)", edge_factor);
    println!("=====================================================");

    let dense = DenseDijkstra::new();
    let heap = Dijkstra::new();
    let mut results = Vec::new();

    for (seed, &size) in graph_sizes.iter().enumerate() {
        println!("\nGenerating random graph with {} vertices...", size);
        let graph = generators::generate_random(size, edge_factor, seed as u64)?;
        println!("Graph has {} vertices and {} edges", graph.vertex_count(), graph.edge_count());

        let (dense_time, dense_result) = benchmark_algorithm("Dense Dijkstra", &dense, &graph, 0)?;
        let (heap_time, heap_result) = benchmark_algorithm("Heap Dijkstra", &heap, &graph, 0)?;

        let identical = dense_result == heap_result;
        if !identical {
            eprintln!("  ! Results differ between variants on {} vertices", size);
        }

        let speedup = dense_time.as_secs_f64() / heap_time.as_secs_f64();
        println!("Speedup - Heap vs Dense: {:.2}x", speedup);
        results.push((size, dense_time, heap_time, speedup, identical));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<12} | {:<12} | {:<10} | {:<9}", "Vertices", "Dense (ms)", "Heap (ms)", "Speedup", "Identical");
    println!("-----------------------------------------------------");

    for (size, dense_time, heap_time, speedup, identical) in &results {
        println!(
            "{:<10} | {:<12.2} | {:<12.2} | {:<10.2} | {:<9}",
            size,
            dense_time.as_secs_f64() * 1000.0,
            heap_time.as_secs_f64() * 1000.0,
            speedup,
            identical
        );
    }

    Ok(())
}

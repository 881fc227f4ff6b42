use dijkstra_sssp::graph::MutableGraph;
use dijkstra_sssp::report::{self, ReportConfig, ShortestPathReport};
use dijkstra_sssp::{DenseDijkstra, Dijkstra, DirectedGraph, ShortestPathAlgorithm};
use ordered_float::OrderedFloat;
use std::env;

type Weight = OrderedFloat<f64>;

fn directed_example() -> dijkstra_sssp::Result<DirectedGraph<Weight>> {
    let mut graph = DirectedGraph::new(6)?;
    let edges = [
        (0, 1, 4.0), (0, 2, 2.0), (1, 2, 1.0),
        (1, 3, 5.0), (2, 3, 8.0), (2, 4, 10.0),
        (3, 4, 2.0), (3, 5, 6.0), (4, 5, 3.0),
    ];
    for (from, to, weight) in edges {
        graph.add_edge(from, to, OrderedFloat(weight))?;
    }
    Ok(graph)
}

fn undirected_example() -> dijkstra_sssp::Result<DirectedGraph<Weight>> {
    let mut graph = DirectedGraph::new(5)?;
    let edges = [
        (0, 1, 2.0), (0, 3, 6.0), (1, 2, 3.0), (1, 3, 8.0),
        (1, 4, 5.0), (2, 4, 7.0), (3, 4, 9.0),
    ];
    for (u, v, weight) in edges {
        graph.add_undirected_edge(u, v, OrderedFloat(weight))?;
    }
    Ok(graph)
}

fn print_report<A>(algorithm: &A, graph: &DirectedGraph<Weight>, source: usize, json: bool) -> dijkstra_sssp::Result<()>
where
    A: ShortestPathAlgorithm<Weight, DirectedGraph<Weight>>,
{
    let result = algorithm.compute_shortest_paths(graph, source)?;
    let report = ShortestPathReport::from_result(algorithm.name(), &result)?;
    if json {
        match report::to_json(&report) {
            Ok(text) => println!("{}", text),
            Err(e) => eprintln!("Failed to serialize report: {}", e),
        }
    } else {
        println!("{}", report::render_table(&report, &ReportConfig::default()));
    }
    Ok(())
}

fn run(json: bool) -> dijkstra_sssp::Result<()> {
    println!("Example 1: Simple Directed Graph");
    println!("---------------------------------");
    let graph1 = directed_example()?;
    println!("Using basic O(V^2) implementation:");
    print_report(&DenseDijkstra::new(), &graph1, 0, json)?;
    println!("Using heap-based O((V+E)logV) implementation:");
    print_report(&Dijkstra::new(), &graph1, 0, json)?;

    println!("\nExample 2: Specific Path Finding");
    println!("--------------------------------");
    match dijkstra_sssp::find_path(&graph1, 0, 5)? {
        Some(path) => println!(
            "Shortest path from 0 to 5: {} (distance {})",
            report::format_path(&path.vertices),
            path.distance
        ),
        None => println!("No path found from 0 to 5"),
    }

    println!("\nExample 3: Undirected Graph");
    println!("---------------------------");
    let graph2 = undirected_example()?;
    print_report(&DenseDijkstra::new(), &graph2, 0, json)?;

    println!("\nComplexity Analysis:");
    println!("-------------------");
    println!("Basic implementation: O(V^2)");
    println!("Heap implementation:  O((V + E) log V)");
    println!("Space complexity:     O(V)");
    println!("\nBest for dense graphs: Basic implementation");
    println!("Best for sparse graphs: Heap implementation");

    Ok(())
}

fn main() {
    env_logger::init();

    let json = env::args().skip(1).any(|arg| arg == "--json");

    if let Err(e) = run(json) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

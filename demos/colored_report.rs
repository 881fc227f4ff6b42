use colored::*;
use dijkstra_sssp::graph::{generators, Graph};
use dijkstra_sssp::report::{format_path, ReportConfig, ShortestPathReport};
use dijkstra_sssp::{Dijkstra, ShortestPathAlgorithm};

fn main() {
    env_logger::init();

    let graph = match generators::generate_random_integer(12, 0.15, 9, 7) {
        Ok(graph) => graph,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            return;
        }
    };

    println!(
        "{}",
        format!("Random graph: {} vertices, {} edges", graph.vertex_count(), graph.edge_count())
            .bold()
            .underline()
    );

    let dijkstra = Dijkstra::new();
    let report = dijkstra
        .compute_shortest_paths(&graph, 0)
        .and_then(|result| ShortestPathReport::from_result("Dijkstra", &result));
    let report = match report {
        Ok(report) => report,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            return;
        }
    };

    let config = ReportConfig::default();
    println!("{:<8}{:<12}{}", "Vertex".bold(), "Distance".bold(), "Path".bold());
    for row in &report.rows {
        let distance = config.format_distance(row.distance);
        match &row.path {
            Some(path) if row.vertex == report.source => {
                println!("{:<8}{:<12}{}", row.vertex.to_string().cyan(), distance.cyan(), format_path(path).cyan())
            }
            Some(path) => println!("{:<8}{:<12}{}", row.vertex, distance.green(), format_path(path)),
            None => println!("{:<8}{:<12}{}", row.vertex, distance.red(), config.no_path_label.dimmed()),
        }
    }

    println!(
        "\n{} of {} vertices reachable from {}",
        report.reachable_count().to_string().yellow(),
        report.rows.len(),
        report.source
    );
}

use dijkstra_sssp::algorithm::{Relaxation, ShortestPathAlgorithm};
use dijkstra_sssp::graph::{DirectedGraph, Graph, MutableGraph};
use dijkstra_sssp::{DenseDijkstra, Dijkstra, Error, PathReconstructor};
use ordered_float::OrderedFloat;

type Weight = OrderedFloat<f64>;

fn w(value: f64) -> Weight {
    OrderedFloat(value)
}

// Six-vertex directed graph used throughout these tests
fn six_vertex_graph() -> DirectedGraph<Weight> {
    let mut graph = DirectedGraph::new(6).unwrap();
    let edges = [
        (0, 1, 4.0), (0, 2, 2.0), (1, 2, 1.0),
        (1, 3, 5.0), (2, 3, 8.0), (2, 4, 10.0),
        (3, 4, 2.0), (3, 5, 6.0), (4, 5, 3.0),
    ];
    for (from, to, weight) in edges {
        graph.add_edge(from, to, w(weight)).unwrap();
    }
    graph
}

fn undirected_graph() -> DirectedGraph<Weight> {
    let mut graph = DirectedGraph::new(5).unwrap();
    let edges = [
        (0, 1, 2.0), (0, 3, 6.0), (1, 2, 3.0), (1, 3, 8.0),
        (1, 4, 5.0), (2, 4, 7.0), (3, 4, 9.0),
    ];
    for (u, v, weight) in edges {
        graph.add_undirected_edge(u, v, w(weight)).unwrap();
    }
    graph
}

#[test]
fn test_six_vertex_scenario_heap() {
    let graph = six_vertex_graph();
    let result = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();

    let expected: Vec<Option<Weight>> = [0.0, 4.0, 2.0, 9.0, 11.0, 14.0].iter().map(|&d| Some(w(d))).collect();
    assert_eq!(result.distances, expected);
    assert_eq!(result.predecessors, vec![None, Some(0), Some(0), Some(1), Some(3), Some(4)]);
    assert_eq!(result.source, 0);
}

#[test]
fn test_six_vertex_scenario_dense_matches_heap() {
    let graph = six_vertex_graph();
    let heap = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();
    let dense = DenseDijkstra::new().compute_shortest_paths(&graph, 0).unwrap();
    assert_eq!(heap, dense);
}

#[test]
fn test_six_vertex_path_to_five() {
    let graph = six_vertex_graph();

    let path = dijkstra_sssp::find_path(&graph, 0, 5).unwrap().unwrap();
    assert_eq!(path.vertices, vec![0, 1, 3, 4, 5]);
    assert_eq!(path.distance, w(14.0));
    assert_eq!(path.hop_count(), Some(4));
    assert_eq!((path.source(), path.destination()), (Some(0), Some(5)));

    let heap_path = Dijkstra::new().find_path(&graph, 0, 5).unwrap().unwrap();
    assert_eq!(heap_path, path);
}

#[test]
fn test_undirected_scenario() {
    let graph = undirected_graph();
    let result = DenseDijkstra::new().compute_shortest_paths(&graph, 0).unwrap();

    let expected: Vec<Option<Weight>> = [0.0, 2.0, 5.0, 6.0, 7.0].iter().map(|&d| Some(w(d))).collect();
    assert_eq!(result.distances, expected);
    assert_eq!(result.predecessors, vec![None, Some(0), Some(1), Some(0), Some(1)]);
}

#[test]
fn test_empty_graph_yields_empty_result() {
    let graph: DirectedGraph<Weight> = DirectedGraph::new(0).unwrap();

    let heap = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();
    assert!(heap.distances.is_empty());
    assert!(heap.predecessors.is_empty());

    let dense = DenseDijkstra::new().compute_shortest_paths(&graph, 0).unwrap();
    assert_eq!(heap, dense);

    assert_eq!(dijkstra_sssp::find_path(&graph, 0, 0).unwrap(), None);
}

#[test]
fn test_disconnected_vertex_is_unreachable() {
    let mut graph = six_vertex_graph();
    // Vertex 5 keeps its incoming edges; cut them to isolate it.
    graph.remove_edge(3, 5).unwrap();
    graph.remove_edge(4, 5).unwrap();

    for result in [
        Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap(),
        DenseDijkstra::new().compute_shortest_paths(&graph, 0).unwrap(),
    ] {
        assert_eq!(result.distances[5], None);
        assert_eq!(result.predecessors[5], None);
        assert!(!result.is_reachable(5));
        assert_eq!(result.reachable_count(), 5);
        assert_eq!(PathReconstructor::reconstruct(&result, 5).unwrap(), None);
    }

    assert_eq!(dijkstra_sssp::find_path(&graph, 0, 5).unwrap(), None);
}

#[test]
fn test_edges_point_away_from_source() {
    // 1 -> 0 only: nothing is reachable from 0 except itself.
    let mut graph: DirectedGraph<Weight> = DirectedGraph::new(2).unwrap();
    graph.add_edge(1, 0, w(1.0)).unwrap();

    let result = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();
    assert_eq!(result.distances, vec![Some(w(0.0)), None]);
}

#[test]
fn test_self_distance_and_trivial_path() {
    let graph = six_vertex_graph();
    for source in 0..graph.vertex_count() {
        let result = Dijkstra::new().compute_shortest_paths(&graph, source).unwrap();
        assert_eq!(result.distances[source], Some(w(0.0)));
        assert_eq!(result.predecessors[source], None);

        let path = PathReconstructor::reconstruct(&result, source).unwrap().unwrap();
        assert_eq!(path.vertices, vec![source]);
        assert_eq!(path.hop_count(), Some(0));
    }

    let path = dijkstra_sssp::find_path(&graph, 3, 3).unwrap().unwrap();
    assert_eq!(path.vertices, vec![3]);
    assert_eq!(path.distance, w(0.0));
}

#[test]
fn test_source_out_of_range() {
    let graph = six_vertex_graph();
    assert_eq!(
        Dijkstra::new().compute_shortest_paths(&graph, 6),
        Err(Error::OutOfRange { vertex: 6, vertex_count: 6 })
    );
    assert_eq!(
        DenseDijkstra::new().compute_shortest_paths(&graph, 42),
        Err(Error::OutOfRange { vertex: 42, vertex_count: 6 })
    );
}

#[test]
fn test_destination_out_of_range() {
    let graph = six_vertex_graph();
    assert_eq!(
        dijkstra_sssp::find_path(&graph, 0, 6),
        Err(Error::OutOfRange { vertex: 6, vertex_count: 6 })
    );
    assert!(matches!(
        Dijkstra::new().find_path(&graph, 9, 0),
        Err(Error::OutOfRange { vertex: 9, .. })
    ));
}

#[test]
fn test_equal_distance_tie_prefers_lowest_id() {
    // Two equal routes to 3: via 1 and via 2. Vertex 1 settles first.
    let mut graph: DirectedGraph<Weight> = DirectedGraph::new(4).unwrap();
    graph.add_edge(0, 2, w(1.0)).unwrap();
    graph.add_edge(0, 1, w(1.0)).unwrap();
    graph.add_edge(2, 3, w(1.0)).unwrap();
    graph.add_edge(1, 3, w(1.0)).unwrap();

    let heap = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();
    let dense = DenseDijkstra::new().compute_shortest_paths(&graph, 0).unwrap();

    assert_eq!(heap.predecessors[3], Some(1));
    assert_eq!(heap, dense);
}

#[test]
fn test_zero_weight_edges() {
    let mut graph: DirectedGraph<Weight> = DirectedGraph::new(3).unwrap();
    graph.add_edge(0, 1, w(0.0)).unwrap();
    graph.add_edge(1, 2, w(0.0)).unwrap();
    graph.add_edge(0, 2, w(0.0)).unwrap();

    let result = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();
    assert_eq!(result.distances, vec![Some(w(0.0)); 3]);
    // 0 -> 2 reaches distance 0 first; the later equal candidate via 1 does not replace it.
    assert_eq!(result.predecessors, vec![None, Some(0), Some(0)]);
    assert_eq!(result, DenseDijkstra::new().compute_shortest_paths(&graph, 0).unwrap());
}

#[test]
fn test_distances_never_increase_during_run() {
    let graph = six_vertex_graph();

    for traced in [
        Dijkstra::new().compute_traced(&graph, 0, |_| {}).unwrap(),
        DenseDijkstra::new().compute_traced(&graph, 0, |_| {}).unwrap(),
    ] {
        assert_eq!(traced, Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap());
    }

    let mut steps: Vec<Relaxation<Weight>> = Vec::new();
    Dijkstra::new().compute_traced(&graph, 0, |step| steps.push(step)).unwrap();
    assert!(!steps.is_empty());

    let mut current: Vec<Option<Weight>> = vec![None; graph.vertex_count()];
    current[0] = Some(w(0.0));
    for step in &steps {
        assert_eq!(step.previous, current[step.vertex]);
        if let Some(previous) = step.previous {
            assert!(step.distance < previous, "distance of {} increased", step.vertex);
        }
        current[step.vertex] = Some(step.distance);
    }

    // Vertex 3 is first reached through 2 (10) and then improved through 1 (9).
    let to_three: Vec<(usize, Weight)> = steps.iter().filter(|s| s.vertex == 3).map(|s| (s.via, s.distance)).collect();
    assert_eq!(to_three, vec![(2, w(10.0)), (1, w(9.0))]);
}

#[test]
fn test_traced_runs_agree_between_variants() {
    let graph = undirected_graph();

    let mut heap_steps = Vec::new();
    let mut dense_steps = Vec::new();
    Dijkstra::new().compute_traced(&graph, 2, |s| heap_steps.push(s)).unwrap();
    DenseDijkstra::new().compute_traced(&graph, 2, |s| dense_steps.push(s)).unwrap();

    assert_eq!(heap_steps, dense_steps);
}

#[test]
fn test_paths_sum_to_distances() {
    let graph = six_vertex_graph();
    let dijkstra = Dijkstra::new();
    let result = dijkstra.compute_shortest_paths(&graph, 0).unwrap();

    for v in 0..graph.vertex_count() {
        let path = <Dijkstra as ShortestPathAlgorithm<Weight, DirectedGraph<Weight>>>::get_path(&dijkstra, &result, v)
            .unwrap()
            .unwrap();
        assert_eq!(path.vertices[0], 0);
        assert_eq!(path.destination(), Some(v));
        assert_eq!(path.weight_in(&graph), result.distances[v]);
        assert_eq!(Some(path.distance), result.distances[v]);
    }
}

#[test]
fn test_early_termination_settles_destination_correctly() {
    let graph = six_vertex_graph();
    let full = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();

    for destination in 0..graph.vertex_count() {
        let path = DenseDijkstra::new().find_path(&graph, 0, destination).unwrap().unwrap();
        let expected = PathReconstructor::reconstruct(&full, destination).unwrap().unwrap();
        assert_eq!(path, expected);
    }
}

#[test]
fn test_algorithm_names() {
    let dijkstra = Dijkstra::new();
    let dense = DenseDijkstra::new();
    assert_eq!(
        <Dijkstra as ShortestPathAlgorithm<Weight, DirectedGraph<Weight>>>::name(&dijkstra),
        "Dijkstra"
    );
    assert_eq!(
        <DenseDijkstra as ShortestPathAlgorithm<Weight, DirectedGraph<Weight>>>::name(&dense),
        "Dense Dijkstra"
    );
}

#[test]
fn test_top_level_compute_uses_heap_variant() {
    let graph = six_vertex_graph();
    assert_eq!(
        dijkstra_sssp::compute_shortest_paths(&graph, 0).unwrap(),
        Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap()
    );
}

#[test]
fn test_overflowing_path_length_saturates_and_stays_reachable() {
    let mut graph = DirectedGraph::new(3).unwrap();
    graph.add_edge(0, 1, w(f64::MAX)).unwrap();
    graph.add_edge(1, 2, w(f64::MAX)).unwrap();

    let heap = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();
    let dense = DenseDijkstra::new().compute_shortest_paths(&graph, 0).unwrap();
    assert_eq!(heap, dense);

    assert_eq!(heap.distances[2], Some(w(f64::MAX)));
    assert_eq!(heap.predecessors[2], Some(1));
    assert_eq!(heap.reachable_count(), 3);

    let path = dijkstra_sssp::find_path(&graph, 0, 2).unwrap().unwrap();
    assert_eq!(path.vertices, vec![0, 1, 2]);
    assert_eq!(path.distance, w(f64::MAX));
}

#[test]
fn test_saturated_distance_does_not_hide_cheaper_route() {
    let mut graph = DirectedGraph::new(4).unwrap();
    graph.add_edge(0, 1, w(f64::MAX)).unwrap();
    graph.add_edge(1, 3, w(f64::MAX)).unwrap();
    graph.add_edge(0, 2, w(1.0)).unwrap();
    graph.add_edge(2, 3, w(1.0)).unwrap();

    let result = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();
    assert_eq!(result.distances[3], Some(w(2.0)));
    assert_eq!(result.predecessors[3], Some(2));
}

#[test]
fn test_empty_path_accessors_return_none() {
    let path = dijkstra_sssp::Path { vertices: Vec::new(), distance: w(0.0) };
    assert_eq!(path.source(), None);
    assert_eq!(path.destination(), None);
    assert_eq!(path.hop_count(), None);
}

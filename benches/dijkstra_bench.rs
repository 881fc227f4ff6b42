use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dijkstra_sssp::graph::generators;
use dijkstra_sssp::{DenseDijkstra, Dijkstra, ShortestPathAlgorithm};

fn bench_variants(c: &mut Criterion) {
    let mut group = c.benchmark_group("dijkstra");

    for &size in &[100usize, 1_000, 5_000] {
        let graph = generators::generate_random(size, 4.0, 42).expect("graph generation");

        group.bench_with_input(BenchmarkId::new("heap", size), &graph, |b, graph| {
            b.iter(|| Dijkstra::new().compute_shortest_paths(black_box(graph), 0).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("dense", size), &graph, |b, graph| {
            b.iter(|| DenseDijkstra::new().compute_shortest_paths(black_box(graph), 0).unwrap())
        });
    }

    group.finish();
}

fn bench_find_path(c: &mut Criterion) {
    let graph = generators::generate_grid(60, 60).expect("grid generation");
    let target = 60 * 60 - 1;

    c.bench_function("find_path grid 60x60", |b| {
        b.iter(|| dijkstra_sssp::find_path(black_box(&graph), 0, target).unwrap())
    });
}

criterion_group!(benches, bench_variants, bench_find_path);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hodos_core::algo::{apsp, sssp, traversal};
use hodos_core::graph::MatrixGraph;

/// Ring with chord edges, every vertex present.
fn ring_graph(rows: usize) -> MatrixGraph {
    let mut graph = MatrixGraph::directed_weighted(rows);
    for v in 0..rows {
        graph.add_edge_weighted(v, (v + 1) % rows, 1).unwrap();
        graph.add_edge_weighted(v, (v + 7) % rows, 3).unwrap();
    }
    graph
}

fn bench_bfs(c: &mut Criterion) {
    let graph = ring_graph(256);
    c.bench_function("bfs_ring_256", |b| {
        b.iter(|| traversal::bfs(black_box(&graph), 0).unwrap());
    });
}

fn bench_dijkstra(c: &mut Criterion) {
    let graph = ring_graph(256);
    c.bench_function("dijkstra_ring_256", |b| {
        b.iter(|| sssp::dijkstra(black_box(&graph), 0).unwrap());
    });
}

fn bench_floyd_warshall(c: &mut Criterion) {
    let graph = ring_graph(64);
    c.bench_function("floyd_warshall_ring_64", |b| {
        b.iter(|| apsp::floyd_warshall(black_box(&graph)).unwrap());
    });
}

criterion_group!(benches, bench_bfs, bench_dijkstra, bench_floyd_warshall);
criterion_main!(benches);

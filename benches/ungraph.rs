use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ungraph::{DenseGraph, IndexGraph};

fn make_dense_path(size: usize) -> DenseGraph<usize, usize> {
    let mut graph = DenseGraph::with_capacity(size);
    let mut prev = graph.add_node(0);

    for i in 1..size {
        let node = graph.add_node(i);
        graph.add_edge(prev, node, i);
        prev = node;
    }

    graph
}

fn make_mapped_path(size: usize) -> IndexGraph<usize, usize> {
    let mut graph = IndexGraph::new();
    let mut prev = graph.add_node(0);

    for i in 1..size {
        let node = graph.add_node(i);
        graph.add_edge(prev, node, i);
        prev = node;
    }

    graph
}

fn bench_make_graph(c: &mut Criterion) {
    let mut g = c.benchmark_group("graph creation");

    for size in [1, 100, 10_000] {
        g.bench_with_input(BenchmarkId::new("make_dense_path", size), &size, |b, size| {
            b.iter(|| black_box(make_dense_path(*size)))
        });
        g.bench_with_input(
            BenchmarkId::new("make_mapped_path", size),
            &size,
            |b, size| b.iter(|| black_box(make_mapped_path(*size))),
        );
    }
}

fn bench_iterate_edges(c: &mut Criterion) {
    let mut g = c.benchmark_group("all-edges iteration");

    for size in [1, 100, 10_000] {
        g.bench_with_input(BenchmarkId::new("dense_edges", size), &size, |b, size| {
            let graph = make_dense_path(*size);
            b.iter(|| black_box(graph.edges().iter().count()))
        });
        g.bench_with_input(BenchmarkId::new("mapped_edges", size), &size, |b, size| {
            let graph = make_mapped_path(*size);
            b.iter(|| black_box(graph.edges().iter().count()))
        });
    }
}

criterion_group!(benches, bench_make_graph, bench_iterate_edges);
criterion_main!(benches);

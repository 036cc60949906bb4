//! Minimum spanning tree benchmarks.
//!
//! Measures Prim construction on dense graphs, where every vertex pushes
//! V-1 candidates and most of the queue ends up stale.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use spantree_graph::{AdjacencyMatrix, Edge, Graph, Vertex};

fn dense_graph(n: u32) -> Graph {
    let mut graph = Graph::new();
    for a in 0..n {
        for b in 0..n {
            if a != b {
                let cost = i64::from((a.min(b) * 31 + a.max(b) * 17) % 97 + 1);
                graph.insert_edge(Edge::new(Vertex(a), Vertex(b), cost));
            }
        }
    }
    graph
}

fn dense_matrix_text(n: u32) -> String {
    let mut text = String::new();
    for a in 0..n {
        let row: Vec<String> = (0..n)
            .map(|b| {
                if a == b {
                    "-".to_string()
                } else {
                    ((a.min(b) * 31 + a.max(b) * 17) % 97 + 1).to_string()
                }
            })
            .collect();
        text.push_str(&row.join(","));
        text.push('\n');
    }
    text
}

/// Benchmark MST construction
fn bench_prim(c: &mut Criterion) {
    let mut group = c.benchmark_group("prim/dense");

    for n in [40u32, 100, 250] {
        let graph = dense_graph(n);
        group.throughput(Throughput::Elements(graph.num_edges() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &graph, |b, graph| {
            b.iter(|| {
                let mut mst = Graph::new();
                graph.create_minimum_spanning_tree(&mut mst);
                black_box(mst);
            });
        });
    }

    group.finish();
}

/// Benchmark matrix parsing
fn bench_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("loader/parse");

    for n in [40u32, 100] {
        let text = dense_matrix_text(n);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &text, |b, text| {
            b.iter(|| black_box(AdjacencyMatrix::parse(text).unwrap().to_graph()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_prim, bench_load);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;

use stacktc::prelude::*;
use stacktc_benchmark::{build_digraph, build_petgraph, generate_random_edges, naive_closure};

fn bench_graph_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph_creation");

    for size in [100, 500, 1000, 5000].iter() {
        let num_nodes = *size;
        let num_edges = num_nodes * 2;

        let mut rng = StdRng::seed_from_u64(42);
        let edges = generate_random_edges(num_nodes, num_edges, &mut rng);

        group.bench_with_input(
            BenchmarkId::new("stacktc_digraph", size),
            &(num_nodes, &edges),
            |b, (num_nodes, edges)| {
                b.iter(|| black_box(build_digraph(*num_nodes, edges)));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("petgraph_digraph", size),
            &(num_nodes, &edges),
            |b, (num_nodes, edges)| {
                b.iter(|| black_box(build_petgraph(*num_nodes, edges)));
            },
        );
    }
    group.finish();
}

fn bench_closure_computation(c: &mut Criterion) {
    let mut group = c.benchmark_group("transitive_closure");

    for size in [100, 500, 1000, 2000].iter() {
        let num_nodes = *size;
        let num_edges = num_nodes * 3; // denser graphs give more interesting SCCs

        let mut rng = StdRng::seed_from_u64(42);
        let edges = generate_random_edges(num_nodes, num_edges, &mut rng);
        let digraph = build_digraph(num_nodes, &edges);
        let petgraph_graph = build_petgraph(num_nodes, &edges);

        group.bench_with_input(BenchmarkId::new("stacktc", size), &digraph, |b, g| {
            b.iter(|| black_box(stacktc(g)));
        });

        group.bench_with_input(
            BenchmarkId::new("stacktc_recursive", size),
            &digraph,
            |b, g| {
                b.iter(|| black_box(stacktc_recursive(g)));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("petgraph_tarjan_scc", size),
            &petgraph_graph,
            |b, g| {
                b.iter(|| black_box(petgraph::algo::tarjan_scc(g)));
            },
        );
    }
    group.finish();
}

fn bench_closure_vs_naive(c: &mut Criterion) {
    let mut group = c.benchmark_group("closure_vs_naive_bfs");

    for size in [50, 100, 250, 500].iter() {
        let num_nodes = *size;
        let num_edges = num_nodes * 3;

        let mut rng = StdRng::seed_from_u64(42);
        let edges = generate_random_edges(num_nodes, num_edges, &mut rng);
        let digraph = build_digraph(num_nodes, &edges);

        group.bench_with_input(BenchmarkId::new("stacktc", size), &digraph, |b, g| {
            b.iter(|| black_box(stacktc(g)));
        });

        group.bench_with_input(
            BenchmarkId::new("naive_bfs_closure", size),
            &(num_nodes, &edges),
            |b, (num_nodes, edges)| {
                b.iter(|| black_box(naive_closure(*num_nodes, edges)));
            },
        );
    }
    group.finish();
}

fn bench_query_cost(c: &mut Criterion) {
    let mut group = c.benchmark_group("reachability_query");

    for size in [1000, 5000, 10000].iter() {
        let num_nodes = *size;
        let num_edges = num_nodes * 2;

        let mut rng = StdRng::seed_from_u64(42);
        let edges = generate_random_edges(num_nodes, num_edges, &mut rng);
        let digraph = build_digraph(num_nodes, &edges);
        let tc = stacktc(&digraph);

        group.bench_with_input(BenchmarkId::new("vertices_edge_exists", size), &tc, |b, tc| {
            let mut rng = StdRng::seed_from_u64(7);
            b.iter(|| {
                let u = rng.gen_range(0..num_nodes);
                let v = rng.gen_range(0..num_nodes);
                black_box(tc.vertices_edge_exists(u, v))
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_graph_creation,
    bench_closure_computation,
    bench_closure_vs_naive,
    bench_query_cost
);
criterion_main!(benches);

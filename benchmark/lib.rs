use petgraph::graph::DiGraph;
use rand::prelude::*;
use std::collections::VecDeque;

use stacktc::prelude::*;

#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub graph_size: usize,
    pub stacktc_time_ns: u64,
    pub stacktc_recursive_time_ns: u64,
    pub petgraph_tarjan_time_ns: u64,
    pub naive_closure_time_ns: u64,
}

/// Generates `num_edges` random edges over `num_nodes` vertices, duplicates
/// and self-loops included.
pub fn generate_random_edges(
    num_nodes: usize,
    num_edges: usize,
    rng: &mut StdRng,
) -> Vec<(usize, usize)> {
    let mut edges = Vec::with_capacity(num_edges);
    for _ in 0..num_edges {
        let from = rng.gen_range(0..num_nodes);
        let to = rng.gen_range(0..num_nodes);
        edges.push((from, to));
    }
    edges
}

pub fn build_digraph(num_nodes: usize, edges: &[(usize, usize)]) -> Digraph {
    Digraph::from_edges(num_nodes, edges.iter().copied()).expect("benchmark edges are in range")
}

pub fn build_petgraph(num_nodes: usize, edges: &[(usize, usize)]) -> DiGraph<usize, ()> {
    let mut graph = DiGraph::new();
    let node_indices: Vec<_> = (0..num_nodes).map(|i| graph.add_node(i)).collect();
    for &(from, to) in edges {
        graph.add_edge(node_indices[from], node_indices[to], ());
    }
    graph
}

/// The baseline STACK_TC is measured against: BFS from every vertex
/// independently, with no SCC/interval-set sharing of work between
/// vertices. Quadratic-ish even on sparse graphs, which is the gap
/// STACK_TC's single-pass successor-set reuse is meant to close.
pub fn naive_closure(num_nodes: usize, edges: &[(usize, usize)]) -> Vec<Vec<bool>> {
    let mut children = vec![Vec::new(); num_nodes];
    for &(from, to) in edges {
        children[from].push(to);
    }
    let mut reachable = vec![vec![false; num_nodes]; num_nodes];
    let mut queue = VecDeque::new();
    for start in 0..num_nodes {
        queue.clear();
        let mut visited = vec![false; num_nodes];
        visited[start] = true;
        queue.push_back(start);
        while let Some(v) = queue.pop_front() {
            for &c in &children[v] {
                if !visited[c] {
                    visited[c] = true;
                    reachable[start][c] = true;
                    queue.push_back(c);
                }
            }
        }
    }
    reachable
}

pub fn benchmark_stacktc(g: &Digraph, iterations: usize) -> std::time::Duration {
    let start = std::time::Instant::now();
    for _ in 0..iterations {
        let tc = stacktc(g);
        std::hint::black_box(&tc);
    }
    start.elapsed()
}

pub fn benchmark_stacktc_recursive(g: &Digraph, iterations: usize) -> std::time::Duration {
    let start = std::time::Instant::now();
    for _ in 0..iterations {
        let tc = stacktc_recursive(g);
        std::hint::black_box(&tc);
    }
    start.elapsed()
}

/// petgraph's Tarjan SCC as a comparison point: it produces the same
/// component partition but no condensation closure, so this measures only
/// the SCC-discovery half of what `stacktc` does in one pass.
pub fn benchmark_petgraph_tarjan(
    graph: &DiGraph<usize, ()>,
    iterations: usize,
) -> std::time::Duration {
    let start = std::time::Instant::now();
    for _ in 0..iterations {
        let sccs = petgraph::algo::tarjan_scc(graph);
        std::hint::black_box(&sccs);
    }
    start.elapsed()
}

pub fn benchmark_naive_closure(
    num_nodes: usize,
    edges: &[(usize, usize)],
    iterations: usize,
) -> std::time::Duration {
    let start = std::time::Instant::now();
    for _ in 0..iterations {
        let reachable = naive_closure(num_nodes, edges);
        std::hint::black_box(&reachable);
    }
    start.elapsed()
}

/// Cross-checks `stacktc`'s condensation-derived reachability against plain
/// BFS, independent of timing. Meant to be run once before trusting a
/// benchmark's relative numbers on a freshly generated graph.
pub fn closures_agree(g: &Digraph, edges: &[(usize, usize)]) -> bool {
    let tc = stacktc(g);
    let n = g.vertex_count();
    let reachable = naive_closure(n, edges);
    (0..n).all(|u| (0..n).all(|v| tc.vertices_edge_exists(u, v) == reachable[u][v]))
}

/// Runs creation + closure computation for one graph size across all four
/// approaches, at a fixed edge density.
pub fn run_comprehensive_benchmark(size: usize, num_edges_factor: usize) -> BenchmarkResult {
    let num_nodes = size;
    let num_edges = num_nodes * num_edges_factor;

    let mut rng = StdRng::seed_from_u64(42);
    let edges = generate_random_edges(num_nodes, num_edges, &mut rng);
    let digraph = build_digraph(num_nodes, &edges);
    let petgraph_graph = build_petgraph(num_nodes, &edges);

    println!("Benchmarking size: {size}");

    let iterations = 10;
    let naive_iterations = iterations.min(3).max(1);
    let stacktc_time = benchmark_stacktc(&digraph, iterations);
    let stacktc_recursive_time = benchmark_stacktc_recursive(&digraph, iterations);
    let petgraph_time = benchmark_petgraph_tarjan(&petgraph_graph, iterations);
    let naive_time = benchmark_naive_closure(num_nodes, &edges, naive_iterations);

    BenchmarkResult {
        graph_size: size,
        stacktc_time_ns: stacktc_time.as_nanos() as u64 / iterations as u64,
        stacktc_recursive_time_ns: stacktc_recursive_time.as_nanos() as u64 / iterations as u64,
        petgraph_tarjan_time_ns: petgraph_time.as_nanos() as u64 / iterations as u64,
        naive_closure_time_ns: naive_time.as_nanos() as u64 / naive_iterations as u64,
    }
}

pub fn print_performance_summary(results: &[BenchmarkResult], operation: &str) {
    println!("\n{operation}:");
    for r in results {
        let recursive_vs_iterative =
            r.stacktc_recursive_time_ns as f64 / r.stacktc_time_ns as f64;
        let naive_vs_stacktc = r.naive_closure_time_ns as f64 / r.stacktc_time_ns as f64;
        println!(
            "  Size {}: stacktc {}ns, stacktc_recursive {}ns, petgraph_tarjan {}ns, naive_closure {}ns",
            r.graph_size,
            r.stacktc_time_ns,
            r.stacktc_recursive_time_ns,
            r.petgraph_tarjan_time_ns,
            r.naive_closure_time_ns,
        );
        println!(
            "    Recursive vs iterative: {recursive_vs_iterative:.2}x | Naive closure vs stacktc: {naive_vs_stacktc:.2}x"
        );
    }
}

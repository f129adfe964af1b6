use proptest::prelude::*;
use stacktc::digraph::Digraph;

/// Reference reachability via Warshall's algorithm on the adjacency matrix,
/// used only to cross-check `Tc::vertices_edge_exists` in tests.
pub fn warshall_closure(n: usize, edges: &[(usize, usize)]) -> Vec<Vec<bool>> {
    let mut reach = vec![vec![false; n]; n];
    for &(from, to) in edges {
        reach[from][to] = true;
    }
    for k in 0..n {
        for i in 0..n {
            if reach[i][k] {
                for j in 0..n {
                    if reach[k][j] {
                        reach[i][j] = true;
                    }
                }
            }
        }
    }
    reach
}

/// A small random digraph: vertex count and an edge list with ids always
/// in range, suitable for feeding both `Digraph::from_edges` and
/// `warshall_closure`.
pub fn arb_digraph(max_n: usize) -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1..=max_n).prop_flat_map(|n| {
        prop::collection::vec((0..n, 0..n), 0..(n * 3).max(1)).prop_map(move |edges| (n, edges))
    })
}

pub fn build(n: usize, edges: &[(usize, usize)]) -> Digraph {
    Digraph::from_edges(n, edges.iter().copied()).expect("arb_digraph only emits in-range edges")
}

//! Literal end-to-end scenarios.

use stacktc::digraph::Digraph;
use stacktc::algo::stacktc;

#[test]
fn scenario_a_cycle_plus_pendant() {
    // 0 -> 1 -> 2 -> 0, plus 1 -> 3
    let g = Digraph::from_edges(4, [(0, 1), (1, 2), (2, 0), (1, 3)]).unwrap();
    let tc = stacktc(&g);

    assert_eq!(tc.scc_count(), 2);

    let scc_3 = tc.vertex_to_scc(3);
    let scc_012 = tc.vertex_to_scc(0);
    assert_eq!(tc.vertex_to_scc(1), scc_012);
    assert_eq!(tc.vertex_to_scc(2), scc_012);
    assert_ne!(scc_3, scc_012);

    // The pendant vertex's SCC is acyclic and has no outgoing condensation edges.
    assert_eq!(scc_3, 0);
    assert!(tc.scc_successors(scc_3).is_none());

    // The cyclic SCC lists itself as a successor.
    assert_eq!(scc_012, 1);
    assert!(tc.sccs_edge_exists(scc_012, scc_012));
    assert!(tc.sccs_edge_exists(scc_012, scc_3));

    assert!(tc.vertices_edge_exists(0, 3));
    assert!(!tc.vertices_edge_exists(3, 0));
}

#[test]
fn scenario_b_dag_diamond() {
    // 0 -> 1, 0 -> 2, 1 -> 3, 2 -> 3
    let g = Digraph::from_edges(4, [(0, 1), (0, 2), (1, 3), (2, 3)]).unwrap();
    let tc = stacktc(&g);

    assert_eq!(tc.scc_count(), 4);
    for scc_id in 0..4 {
        assert_eq!(tc.scc(scc_id).vertex_count(), 1);
    }

    let scc_of = |v: usize| tc.vertex_to_scc(v);
    assert!(tc.sccs_edge_exists(scc_of(0), scc_of(1)));
    assert!(tc.sccs_edge_exists(scc_of(0), scc_of(2)));
    assert!(tc.sccs_edge_exists(scc_of(0), scc_of(3)));
    assert!(tc.vertices_edge_exists(0, 3));
    assert!(!tc.vertices_edge_exists(3, 0));
}

#[test]
fn scenario_c_two_disjoint_cycles() {
    let g = Digraph::from_edges(4, [(0, 1), (1, 0), (2, 3), (3, 2)]).unwrap();
    let tc = stacktc(&g);

    assert_eq!(tc.scc_count(), 2);
    assert_eq!(tc.vertex_to_scc(0), tc.vertex_to_scc(1));
    assert_eq!(tc.vertex_to_scc(2), tc.vertex_to_scc(3));
    assert_ne!(tc.vertex_to_scc(0), tc.vertex_to_scc(2));

    for scc_id in 0..2 {
        assert!(tc.scc(scc_id).is_cyclic());
        assert!(tc.sccs_edge_exists(scc_id, scc_id));
    }
    assert!(!tc.vertices_edge_exists(0, 2));
    assert!(!tc.vertices_edge_exists(2, 0));
}

#[test]
fn scenario_d_lone_self_loop() {
    let g = Digraph::from_edges(1, [(0, 0)]).unwrap();
    let tc = stacktc(&g);

    assert_eq!(tc.scc_count(), 1);
    assert!(tc.scc(0).is_cyclic());
    assert!(tc.sccs_edge_exists(0, 0));
}

#[test]
fn scenario_e_parallel_edges_collapse() {
    let g = Digraph::from_edges(3, [(0, 1), (0, 1), (1, 2)]).unwrap();
    let tc = stacktc(&g);

    assert_eq!(tc.scc_count(), 3);
    for scc_id in 0..3 {
        assert_eq!(tc.scc(scc_id).vertex_count(), 1);
        if let Some(succ) = tc.scc_successors(scc_id) {
            assert_eq!(succ.size(), succ.iter().count());
        }
    }
    assert!(tc.vertices_edge_exists(0, 2));
}

#[test]
fn scenario_f_matches_manual_tarjan_partition() {
    // A graph whose SCC partition is easy to verify by hand: a 3-cycle
    // feeding into a 2-cycle, feeding into a singleton.
    let g = Digraph::from_edges(
        6,
        [
            (0, 1),
            (1, 2),
            (2, 0), // 3-cycle: {0,1,2}
            (2, 3),
            (3, 4),
            (4, 3), // 2-cycle: {3,4}
            (4, 5), // singleton: {5}
        ],
    )
    .unwrap();
    let tc = stacktc(&g);

    assert_eq!(tc.scc_count(), 3);
    let a = tc.vertex_to_scc(0);
    assert_eq!(tc.vertex_to_scc(1), a);
    assert_eq!(tc.vertex_to_scc(2), a);

    let b = tc.vertex_to_scc(3);
    assert_eq!(tc.vertex_to_scc(4), b);

    let c = tc.vertex_to_scc(5);
    assert_ne!(a, b);
    assert_ne!(b, c);
    assert_ne!(a, c);

    // reverse-topological: the singleton finishes first, the 3-cycle last.
    assert!(c < b);
    assert!(b < a);

    assert!(tc.vertices_edge_exists(0, 5));
    assert!(!tc.vertices_edge_exists(5, 0));
}

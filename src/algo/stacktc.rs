//! The STACK_TC driver itself.
//!
//! Two public entry points share one `complete_scc` finalization step:
//!
//! - [`stacktc`]: an explicit-frame iterative DFS, safe for `n` in the
//!   millions.
//! - [`stacktc_recursive`]: the direct recursive translation of
//!   `src/c/algorithm.c`'s `visit`, kept as the clearest statement of the
//!   algorithm and as a cross-check oracle in tests.
//!
//! Both produce byte-identical [`Tc`]s for the same input and the same
//! child-adjacency order; neither keeps any state beyond the call (all of
//! the driver's globals live in [`DriverContext`], dropped at the
//! end of the call).

use crate::digraph::Digraph;
use crate::interval_set::IntervalArena;
use crate::tc::{Tc, TcBuilder};

/// Computes the transitive closure of `g`.
///
/// Safe for arbitrarily deep graphs: the DFS is driven by an explicit
/// frame stack rather than the native call stack.
///
/// # Examples
///
/// ```rust
/// use stacktc::digraph::Digraph;
/// use stacktc::algo::stacktc;
///
/// // 0 -> 1 -> 2 -> 0, plus 1 -> 3
/// let g = Digraph::from_edges(4, [(0, 1), (1, 2), (2, 0), (1, 3)]).unwrap();
/// let tc = stacktc(&g);
///
/// assert_eq!(tc.scc_count(), 2);
/// assert!(tc.vertices_edge_exists(0, 3));
/// assert!(!tc.vertices_edge_exists(3, 0));
/// ```
pub fn stacktc(g: &Digraph) -> Tc {
    let mut ctx = DriverContext::new(g);
    ctx.run_iterative();
    ctx.builder.build()
}

/// Computes the transitive closure of `g` using direct recursion.
///
/// Produces the same [`Tc`] as [`stacktc`] for the same input, but its
/// call stack depth is bounded only by `g`'s longest DFS tree path, which
/// can reach `Θ(n)` for pathological inputs (e.g. a long chain). Prefer
/// [`stacktc`] unless you specifically want the reference recursive form.
pub fn stacktc_recursive(g: &Digraph) -> Tc {
    let mut ctx = DriverContext::new(g);
    ctx.run_recursive();
    ctx.builder.build()
}

/// Per-call driver state, bundled into one value instead of the original
/// C source's file-scope globals. This also makes the algorithm trivially
/// re-entrant across independent calls, since nothing outlives one call.
struct DriverContext<'g> {
    digraph: &'g Digraph,
    /// DFS number of each vertex; `None` means not yet visited.
    dfn: Vec<Option<usize>>,
    dfn_counter: usize,
    /// The Tarjan open-vertex stack.
    vertex_stack: Vec<usize>,
    /// Already-completed SCC ids discovered as cross edges from the
    /// subtree currently being processed.
    scc_stack: Vec<usize>,
    arena: IntervalArena,
    builder: TcBuilder,
}

/// One DFS frame for the iterative driver, mirroring exactly the local
/// variables of the recursive `visit`.
struct Frame {
    vertex: usize,
    next_child: usize,
    lowest: usize,
    self_loop: bool,
    scc_stack_base: usize,
}

impl<'g> DriverContext<'g> {
    fn new(g: &'g Digraph) -> Self {
        let n = g.vertex_count();
        Self {
            digraph: g,
            dfn: vec![None; n],
            dfn_counter: 0,
            vertex_stack: Vec::with_capacity(n),
            scc_stack: Vec::new(),
            arena: IntervalArena::new(n),
            builder: TcBuilder::new(n),
        }
    }

    fn enter(&mut self, vertex: usize) -> Frame {
        let scc_stack_base = self.scc_stack.len();
        self.vertex_stack.push(vertex);
        let dfn = self.dfn_counter;
        self.dfn[vertex] = Some(dfn);
        self.dfn_counter += 1;
        Frame {
            vertex,
            next_child: 0,
            lowest: dfn,
            self_loop: false,
            scc_stack_base,
        }
    }

    fn run_recursive(&mut self) {
        for start in 0..self.digraph.vertex_count() {
            if self.dfn[start].is_none() {
                self.visit_recursive(start);
            }
        }
    }

    fn visit_recursive(&mut self, vertex: usize) -> usize {
        tracing::trace!(vertex, "visit enter");
        let mut frame = self.enter(vertex);
        let dfn_v = frame.lowest;

        let child_count = self.digraph.children(vertex).len();
        for idx in 0..child_count {
            let child = self.digraph.children(vertex)[idx];
            match self.dfn[child] {
                None => {
                    let child_lowest = self.visit_recursive(child);
                    if child_lowest < frame.lowest {
                        frame.lowest = child_lowest;
                    }
                }
                Some(dfn_c) if dfn_c > dfn_v => {
                    // forward edge to an already-finished descendant: ignore.
                }
                Some(dfn_c) => match self.builder.scc_of(child) {
                    Some(scc_id) => self.scc_stack.push(scc_id),
                    None => {
                        if dfn_c < frame.lowest {
                            frame.lowest = dfn_c;
                        } else if child == vertex {
                            frame.self_loop = true;
                        }
                    }
                },
            }
        }

        let lowest = frame.lowest;
        if lowest == dfn_v {
            self.complete_scc(vertex, frame.scc_stack_base, frame.self_loop);
        }
        tracing::trace!(vertex, lowest, "visit exit");
        lowest
    }

    fn run_iterative(&mut self) {
        for start in 0..self.digraph.vertex_count() {
            if self.dfn[start].is_some() {
                continue;
            }
            let mut frames = vec![self.enter(start)];
            while let Some(frame) = frames.last_mut() {
                let vertex = frame.vertex;
                let dfn_v = self.dfn[vertex].unwrap();
                let children = self.digraph.children(vertex);

                if frame.next_child < children.len() {
                    let child = children[frame.next_child];
                    frame.next_child += 1;
                    match self.dfn[child] {
                        None => {
                            tracing::trace!(vertex = child, "visit enter");
                            frames.push(self.enter(child));
                        }
                        Some(dfn_c) if dfn_c > dfn_v => {
                            // forward edge: ignore.
                        }
                        Some(dfn_c) => match self.builder.scc_of(child) {
                            Some(scc_id) => self.scc_stack.push(scc_id),
                            None => {
                                if dfn_c < frame.lowest {
                                    frame.lowest = dfn_c;
                                } else if child == vertex {
                                    frame.self_loop = true;
                                }
                            }
                        },
                    }
                } else {
                    let finished = frames.pop().unwrap();
                    tracing::trace!(vertex = finished.vertex, lowest = finished.lowest, "visit exit");
                    if finished.lowest == dfn_v {
                        self.complete_scc(finished.vertex, finished.scc_stack_base, finished.self_loop);
                    }
                    if let Some(parent) = frames.last_mut() {
                        if finished.lowest < parent.lowest {
                            parent.lowest = finished.lowest;
                        }
                    }
                }
            }
        }
    }

    /// Shared finalization step for both driver variants: `vertex` is an
    /// SCC root (`lowest == dfn[vertex]`). Builds the new SCC's successor
    /// set, then pops its vertices off the open vertex stack.
    fn complete_scc(&mut self, root: usize, scc_stack_base: usize, self_loop: bool) {
        let scc_id = self.builder.create_scc(root);
        let self_insert = self_loop || (*self.vertex_stack.last().unwrap() != root);
        let adjacent_count = self.scc_stack.len() - scc_stack_base;
        let needs_successors = self_insert || adjacent_count > 0;

        let mut succ = self.arena.build();

        if adjacent_count > 0 {
            // Sort ascending, then pop from the back (largest id first).
            // Every adjacent id here is a lower, already-closed component,
            // and a larger component's successor set can only name ids
            // smaller than itself, so probing largest-first maximizes how
            // often a later, smaller id is already covered and its union
            // can be skipped.
            self.scc_stack[scc_stack_base..].sort_unstable();
            let mut prev: Option<usize> = None;
            while self.scc_stack.len() > scc_stack_base {
                let id = self.scc_stack.pop().unwrap();
                if Some(id) != prev {
                    let newly_added = !succ.insert(id);
                    if newly_added {
                        if let Some(other) = self.builder.successors_of(id) {
                            succ.union_with(other);
                        }
                    }
                    prev = Some(id);
                }
            }
        }
        if self_insert {
            succ.insert(scc_id);
        }
        let successors = needs_successors.then(|| succ.complete());

        let mut vertex_count = 0usize;
        loop {
            let popped = self.vertex_stack.pop().unwrap();
            self.builder.insert_vertex_in_current_scc(popped);
            vertex_count += 1;
            if popped == root {
                break;
            }
        }

        if let Some(successors) = successors {
            self.builder.set_successors(scc_id, successors);
        }
        self.builder.scc_completed();
        self.scc_stack.push(scc_id);
        tracing::debug!(scc_id, root, vertex_count, self_insert, "scc completed");
    }
}

//! The transitive closure result: SCC store, vertex table and queries.

use crate::interval_set::IntervalSet;
use crate::scc::Scc;

/// The transitive closure of a digraph, expressed via its strongly
/// connected components and per-SCC interval successor sets.
///
/// Immutable once built.
#[derive(Debug, Clone)]
pub struct Tc {
    n: usize,
    scc_table: Vec<Scc>,
    vertex_table: Vec<usize>,
    vertex_to_scc: Vec<usize>,
}

impl Tc {
    /// Number of vertices in the input digraph.
    pub fn vertex_count(&self) -> usize {
        self.n
    }

    /// Number of strongly connected components discovered.
    pub fn scc_count(&self) -> usize {
        self.scc_table.len()
    }

    /// The SCC id owning vertex `v`.
    pub fn vertex_to_scc(&self, v: usize) -> usize {
        self.vertex_to_scc[v]
    }

    /// The SCC record for `scc_id`.
    pub fn scc(&self, scc_id: usize) -> &Scc {
        &self.scc_table[scc_id]
    }

    /// The vertex ids belonging to `scc_id`, in the order they were popped
    /// off the DFS vertex stack (later-discovered vertices first, the
    /// SCC's root vertex last).
    pub fn scc_vertex_list(&self, scc_id: usize) -> &[usize] {
        &self.vertex_table[self.scc_table[scc_id].vertex_range()]
    }

    /// The successor set of `scc_id`: every SCC id reachable from it via
    /// one or more condensation edges, including itself iff it is cyclic.
    pub fn scc_successors(&self, scc_id: usize) -> Option<&IntervalSet> {
        self.scc_table[scc_id].successors()
    }

    /// The successor set of the SCC owning vertex `v`.
    pub fn vertex_successors(&self, v: usize) -> Option<&IntervalSet> {
        self.scc_successors(self.vertex_to_scc(v))
    }

    /// `true` iff there is a path of length ≥ 1 from SCC `a` to SCC `b` in
    /// the condensation (equivalently: `b` is a member of `a`'s successor
    /// set, or `a == b` and `a` is cyclic).
    pub fn sccs_edge_exists(&self, a: usize, b: usize) -> bool {
        self.scc_successors(a).is_some_and(|s| s.find(b))
    }

    /// `true` iff there is a directed path of length ≥ 1 from `u` to `v`
    /// in the original input digraph.
    pub fn vertices_edge_exists(&self, u: usize, v: usize) -> bool {
        self.sccs_edge_exists(self.vertex_to_scc(u), self.vertex_to_scc(v))
    }
}

/// Builds a [`Tc`] incrementally while the driver runs, enforcing by
/// construction the "vertex table becomes read-only once any SCC's range
/// has been carved out of it" rule.
pub(crate) struct TcBuilder {
    n: usize,
    scc_table: Vec<Scc>,
    vertex_table: Vec<usize>,
    vertex_to_scc: Vec<Option<usize>>,
    cursor: usize,
    saved_cursor: usize,
}

impl TcBuilder {
    pub(crate) fn new(n: usize) -> Self {
        Self {
            n,
            scc_table: Vec::with_capacity(n),
            vertex_table: vec![0; n],
            vertex_to_scc: vec![None; n],
            cursor: 0,
            saved_cursor: 0,
        }
    }

    /// `Some(scc_id)` iff `v` belongs to an already-completed SCC.
    pub(crate) fn scc_of(&self, v: usize) -> Option<usize> {
        self.vertex_to_scc[v]
    }

    pub(crate) fn successors_of(&self, scc_id: usize) -> Option<&IntervalSet> {
        self.scc_table[scc_id].successors()
    }

    /// Reserves the next SCC id and records `root_vertex_id`. Returns the
    /// new `scc_id`.
    pub(crate) fn create_scc(&mut self, root_vertex_id: usize) -> usize {
        let scc_id = self.scc_table.len();
        self.scc_table.push(Scc {
            scc_id,
            root_vertex_id,
            vertex_range: self.cursor..self.cursor,
            successors: None,
        });
        scc_id
    }

    /// Appends `v` to the flat vertex table and records its owning SCC.
    pub(crate) fn insert_vertex_in_current_scc(&mut self, v: usize) {
        let scc_id = self.scc_table.len() - 1;
        debug_assert!(
            self.vertex_to_scc[v].is_none(),
            "vertex {v} already assigned to scc {}",
            self.vertex_to_scc[v].unwrap_or(usize::MAX)
        );
        self.vertex_table[self.cursor] = v;
        self.vertex_to_scc[v] = Some(scc_id);
        self.cursor += 1;
    }

    pub(crate) fn set_successors(&mut self, scc_id: usize, successors: IntervalSet) {
        self.scc_table[scc_id].successors = Some(successors);
    }

    /// Freezes the current SCC's vertex range and advances past it.
    pub(crate) fn scc_completed(&mut self) {
        let last = self.scc_table.len() - 1;
        self.scc_table[last].vertex_range = self.saved_cursor..self.cursor;
        self.saved_cursor = self.cursor;
    }

    /// Finalizes the builder into an immutable [`Tc`].
    ///
    /// # Panics
    ///
    /// Panics (via `debug_assert!` in debug builds) if any vertex was
    /// never assigned to an SCC — this would mean the driver failed to
    /// visit every vertex, an internal invariant violation rather than a
    /// caller mistake.
    pub(crate) fn build(self) -> Tc {
        let vertex_to_scc = self
            .vertex_to_scc
            .into_iter()
            .map(|slot| {
                debug_assert!(slot.is_some(), "vertex left unassigned to any SCC");
                slot.unwrap_or(usize::MAX)
            })
            .collect();
        Tc {
            n: self.n,
            scc_table: self.scc_table,
            vertex_table: self.vertex_table,
            vertex_to_scc,
        }
    }
}

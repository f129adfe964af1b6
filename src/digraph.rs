//! The read-only input graph consumed by [`crate::algo::stacktc`].

use crate::error::GraphError;

/// A directed graph over vertex ids `0..n`, represented as an adjacency
/// list of outgoing children per vertex.
///
/// Children may contain duplicates and self-loops; parallel edges are
/// tolerated; the core absorbs all three correctly.
/// The only contract this type enforces is that every child id lies in
/// `[0, n)` — constructing an edge outside that range is the one
/// recoverable error this crate exposes.
#[derive(Debug, Clone)]
pub struct Digraph {
    children: Vec<Vec<usize>>,
}

impl Digraph {
    /// Creates an edgeless digraph over `n` vertices.
    pub fn new(n: usize) -> Self {
        Self {
            children: vec![Vec::new(); n],
        }
    }

    /// Builds a digraph from `n` vertices and an edge iterator, validating
    /// every edge against `[0, n)` as it is inserted.
    pub fn from_edges(
        n: usize,
        edges: impl IntoIterator<Item = (usize, usize)>,
    ) -> Result<Self, GraphError> {
        let mut graph = Self::new(n);
        for (from, to) in edges {
            graph.try_add_edge(from, to)?;
        }
        Ok(graph)
    }

    /// Number of vertices, `n`.
    pub fn vertex_count(&self) -> usize {
        self.children.len()
    }

    /// Outgoing children of `v`, in insertion order.
    ///
    /// # Panics
    ///
    /// Panics if `v >= self.vertex_count()`; vertex ids are always
    /// in-contract by construction once a `Digraph` exists.
    pub fn children(&self, v: usize) -> &[usize] {
        &self.children[v]
    }

    /// Appends the edge `from -> to`, rejecting out-of-range endpoints.
    pub fn try_add_edge(&mut self, from: usize, to: usize) -> Result<(), GraphError> {
        let n = self.vertex_count();
        if from >= n {
            return Err(GraphError::VertexOutOfRange { got: from, n });
        }
        if to >= n {
            return Err(GraphError::VertexOutOfRange { got: to, n });
        }
        self.children[from].push(to);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_endpoints() {
        let mut g = Digraph::new(2);
        assert_eq!(
            g.try_add_edge(0, 2),
            Err(GraphError::VertexOutOfRange { got: 2, n: 2 })
        );
        assert_eq!(
            g.try_add_edge(5, 0),
            Err(GraphError::VertexOutOfRange { got: 5, n: 2 })
        );
    }

    #[test]
    fn tolerates_self_loops_and_parallel_edges() {
        let g = Digraph::from_edges(2, [(0, 1), (0, 1), (1, 1)]).unwrap();
        assert_eq!(g.children(0), &[1, 1]);
        assert_eq!(g.children(1), &[1]);
    }

    #[test]
    fn empty_graph_has_no_children() {
        let g = Digraph::new(3);
        assert_eq!(g.children(0), &[] as &[usize]);
    }
}

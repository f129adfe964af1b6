//! Errors raised at the one fallible boundary of this crate: building a
//! [`crate::digraph::Digraph`] from caller-supplied edges.
//!
//! Everything past that boundary (the STACK_TC driver itself) is
//! infallible given an already-validated [`Digraph`](crate::digraph::Digraph).

use thiserror::Error;

/// A contract violation detected while constructing a [`Digraph`](crate::digraph::Digraph).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// An edge referenced a vertex id outside `[0, n)`.
    #[error("vertex id {got} is out of range for a graph with {n} vertices")]
    VertexOutOfRange {
        /// The offending id.
        got: usize,
        /// The vertex count of the graph the edge was being added to.
        n: usize,
    },
}

#![doc = include_str!("../README.md")]

pub mod algo;
pub mod digraph;
pub mod error;
pub mod interval_set;
pub mod scc;
pub mod tc;

/// Commonly used types for easy importing.
///
/// # Example
///
/// ```rust
/// use stacktc::prelude::*;
///
/// let g = Digraph::from_edges(3, [(0, 1), (1, 2)]).unwrap();
/// let tc = stacktc(&g);
/// assert_eq!(tc.scc_count(), 3);
/// ```
pub mod prelude {
    pub use crate::algo::{stacktc, stacktc_recursive};
    pub use crate::digraph::Digraph;
    pub use crate::error::GraphError;
    pub use crate::interval_set::IntervalSet;
    pub use crate::scc::Scc;
    pub use crate::tc::Tc;
}

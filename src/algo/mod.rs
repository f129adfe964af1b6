//! STACK_TC: the single-pass driver that discovers SCCs in
//! reverse-topological order of the condensation and builds each one's
//! interval successor set as it goes.

mod stacktc;

pub use stacktc::{stacktc, stacktc_recursive};

//! In-memory graph operations — the core data structure.

pub mod builder;
pub mod sorted_graph;
pub mod traversal;

pub use builder::GraphBuilder;
pub use sorted_graph::Graph;
pub use traversal::SearchKind;

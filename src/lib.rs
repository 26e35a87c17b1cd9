//! undigraph — a sorted, undirected, unweighted graph with path search.
//!
//! Nodes are keyed by any totally ordered type and may carry a value. The
//! graph keeps nodes and adjacency lists in key order, which makes lookups
//! binary searches and breadth-first / depth-first searches deterministic.

pub mod cli;
pub mod format;
pub mod graph;
pub mod ladder;
pub mod types;

// Re-export commonly used types at the crate root
pub use format::{AdjacencyReader, AdjacencyWriter, WordGraphReader};
pub use graph::{Graph, GraphBuilder, SearchKind};
pub use ladder::WordLadder;
pub use types::{GraphError, GraphResult, Vertex};

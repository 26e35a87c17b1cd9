//! Plain-text graph formats: adjacency lists and word graphs.

pub mod reader;
pub mod writer;

pub use reader::{AdjacencyReader, WordGraphReader};
pub use writer::AdjacencyWriter;

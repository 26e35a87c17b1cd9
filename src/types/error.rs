//! Error types for the undigraph library.

use thiserror::Error;

/// All errors that can occur in the undigraph library.
///
/// Duplicate and not-found conditions on the graph itself are not errors;
/// they are reported through `bool`, `Option` and empty-path results.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Batch node insertion was given name and data sequences of different lengths.
    #[error("Name and data sequences should be of equal length: {names} names, {data} data")]
    LengthMismatch { names: usize, data: usize },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A token in a graph file could not be parsed.
    #[error("Invalid token {token:?} on line {line}")]
    Parse { line: usize, token: String },

    /// A word was not present in a word graph.
    #[error("Word {0:?} not found in the graph")]
    WordNotFound(String),
}

/// Convenience result type for undigraph operations.
pub type GraphResult<T> = Result<T, GraphError>;

//! Read-only snapshot of a graph node.

use serde::Serialize;

/// The name and data associated with a graph node.
///
/// Returned by lookups so that callers never see the internal adjacency
/// representation. `data` is `None` until a value has been set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vertex<K, V> {
    pub name: K,
    pub data: Option<V>,
}

impl<K, V> Vertex<K, V> {
    /// Create a vertex snapshot from a name and optional data.
    pub fn new(name: K, data: Option<V>) -> Self {
        Self { name, data }
    }
}

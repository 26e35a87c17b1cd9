//! Fluent API for building Graph instances.

use super::Graph;

/// Fluent builder for constructing a [`Graph`].
///
/// Operations are applied in call order with the same semantics as the
/// corresponding graph methods, so duplicates are silently absorbed.
pub struct GraphBuilder<K, V> {
    graph: Graph<K, V>,
}

impl<K: Ord + Clone, V> GraphBuilder<K, V> {
    /// Create a new, empty builder.
    pub fn new() -> Self {
        Self {
            graph: Graph::new(),
        }
    }

    /// Create a builder with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            graph: Graph::with_capacity(capacity),
        }
    }

    /// Add a node carrying `data`.
    pub fn node(&mut self, name: K, data: V) -> &mut Self {
        self.graph.add_node(name, Some(data));
        self
    }

    /// Add a node with no data.
    pub fn bare_node(&mut self, name: K) -> &mut Self {
        self.graph.add_node(name, None);
        self
    }

    /// Add an undirected edge.
    pub fn edge(&mut self, from: K, to: K) -> &mut Self {
        self.graph.add_edge(from, to);
        self
    }

    /// Add an edge from `from` to each of `to`.
    pub fn edges<I>(&mut self, from: K, to: I) -> &mut Self
    where
        I: IntoIterator<Item = K>,
    {
        self.graph.add_edges(from, to);
        self
    }

    /// Build the final Graph.
    pub fn build(self) -> Graph<K, V> {
        self.graph
    }
}

impl<K: Ord + Clone, V> Default for GraphBuilder<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

//! Core graph structure — a key-sorted arena of nodes with symmetric adjacency lists.

use std::borrow::Borrow;

use crate::types::{GraphError, GraphResult, Vertex};

/// Index of a node in the graph's arena.
///
/// Ids stay valid until the next removal. Removing a node moves the last
/// arena entry into the freed slot and rewrites every reference to it.
pub(crate) type NodeId = usize;

/// Result of a binary search over the key-sorted node order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Position {
    /// The key is present at this index of the order.
    Found(usize),
    /// The key is absent; inserting at this index keeps the order sorted.
    InsertAt(usize),
}

#[derive(Debug, Clone)]
struct GraphNode<K, V> {
    name: K,
    data: Option<V>,
    /// Neighbor ids, sorted by neighbor name.
    neighbors: Vec<NodeId>,
}

/// An undirected, unweighted graph keyed by a totally ordered `K`, carrying
/// an optional `V` per node.
///
/// Nodes are kept in ascending key order, so lookups are binary searches and
/// iteration is deterministic. Every neighbor list is sorted as well, which
/// fixes the order in which searches explore the graph.
#[derive(Debug, Clone)]
pub struct Graph<K, V> {
    /// Node storage, indexed by `NodeId`.
    nodes: Vec<GraphNode<K, V>>,
    /// Node ids sorted ascending by name. Sole source of membership.
    order: Vec<NodeId>,
    /// Number of undirected edges.
    edge_count: usize,
}

impl<K, V> Graph<K, V> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            order: Vec::new(),
            edge_count: 0,
        }
    }

    /// Create an empty graph with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            order: Vec::with_capacity(capacity),
            edge_count: 0,
        }
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.order.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// True if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Size of the arena; every live `NodeId` is below this.
    pub(crate) fn slot_count(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn name(&self, id: NodeId) -> &K {
        &self.nodes[id].name
    }

    pub(crate) fn neighbor_ids(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id].neighbors
    }
}

impl<K: Ord, V> Graph<K, V> {
    /// Binary search for `name` in the sorted node order.
    pub(crate) fn find_position<Q>(&self, name: &Q) -> Position
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match self
            .order
            .binary_search_by(|&id| self.nodes[id].name.borrow().cmp(name))
        {
            Ok(index) => Position::Found(index),
            Err(index) => Position::InsertAt(index),
        }
    }

    pub(crate) fn node_id<Q>(&self, name: &Q) -> Option<NodeId>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match self.find_position(name) {
            Position::Found(index) => Some(self.order[index]),
            Position::InsertAt(_) => None,
        }
    }

    /// Whether a node with this key exists.
    pub fn contains<Q>(&self, name: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        matches!(self.find_position(name), Position::Found(_))
    }

    /// Add a node, returning `false` if the key was already present.
    ///
    /// A duplicate never overwrites existing data, but it does fill in data
    /// that was still absent.
    pub fn add_node(&mut self, name: K, data: Option<V>) -> bool {
        self.insert_node(name, data).1
    }

    /// Add each `(name, data)` pair. Every pair is attempted; the result is
    /// `false` if any of them was a duplicate.
    pub fn add_nodes(&mut self, names: Vec<K>, data: Vec<Option<V>>) -> GraphResult<bool> {
        if names.len() != data.len() {
            return Err(GraphError::LengthMismatch {
                names: names.len(),
                data: data.len(),
            });
        }

        let mut no_duplicates = true;
        for (name, value) in names.into_iter().zip(data) {
            if !self.add_node(name, value) {
                no_duplicates = false;
            }
        }
        Ok(no_duplicates)
    }

    /// Returns the id of the node named `name` and whether it was created.
    fn insert_node(&mut self, name: K, data: Option<V>) -> (NodeId, bool) {
        match self.find_position(&name) {
            Position::Found(index) => {
                let id = self.order[index];
                let node = &mut self.nodes[id];
                if node.data.is_none() {
                    node.data = data;
                }
                (id, false)
            }
            Position::InsertAt(index) => {
                let id = self.nodes.len();
                self.nodes.push(GraphNode {
                    name,
                    data,
                    neighbors: Vec::new(),
                });
                self.order.insert(index, id);
                (id, true)
            }
        }
    }

    /// Add an undirected edge, creating either endpoint if missing.
    ///
    /// Returns `false` for a self-loop or when the edge already exists.
    pub fn add_edge(&mut self, from: K, to: K) -> bool {
        let (from_id, _) = self.insert_node(from, None);
        let (to_id, _) = self.insert_node(to, None);
        if from_id == to_id {
            log::trace!("Rejected self-loop on node {}", from_id);
            return false;
        }

        let forward = self.link(from_id, to_id);
        let reverse = self.link(to_id, from_id);
        debug_assert_eq!(
            forward, reverse,
            "asymmetric adjacency between nodes {from_id} and {to_id}"
        );

        let added = forward && reverse;
        if added {
            self.edge_count += 1;
        }
        log::trace!("Edge {} -- {}: added={}", from_id, to_id, added);
        added
    }

    /// Insert `to` into `from`'s sorted neighbor list. `false` on duplicate.
    fn link(&mut self, from: NodeId, to: NodeId) -> bool {
        let target = &self.nodes[to].name;
        let slot = self.nodes[from]
            .neighbors
            .binary_search_by(|&n| self.nodes[n].name.cmp(target));
        match slot {
            Ok(_) => false,
            Err(index) => {
                self.nodes[from].neighbors.insert(index, to);
                true
            }
        }
    }

    /// Remove a node and every edge touching it. `false` if absent.
    pub fn remove_node<Q>(&mut self, name: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let index = match self.find_position(name) {
            Position::Found(index) => index,
            Position::InsertAt(_) => return false,
        };

        let id = self.order.remove(index);
        let neighbors = std::mem::take(&mut self.nodes[id].neighbors);
        for &neighbor in &neighbors {
            let list = &mut self.nodes[neighbor].neighbors;
            if let Some(pos) = list.iter().position(|&n| n == id) {
                list.remove(pos);
            }
        }
        self.edge_count -= neighbors.len();
        self.release_slot(id);
        true
    }

    /// Remove every listed node. All are attempted; `true` only if each existed.
    pub fn remove_nodes<'a, Q, I>(&mut self, names: I) -> bool
    where
        I: IntoIterator<Item = &'a Q>,
        K: Borrow<Q>,
        Q: Ord + ?Sized + 'a,
    {
        let mut all_removed = true;
        for name in names {
            if !self.remove_node(name) {
                all_removed = false;
            }
        }
        all_removed
    }

    /// Drop arena slot `id`, which must already be unlinked, by moving the
    /// last node into it.
    fn release_slot(&mut self, id: NodeId) {
        let last = self.nodes.len() - 1;
        if id != last {
            if let Position::Found(index) = self.find_position(&self.nodes[last].name) {
                self.order[index] = id;
            }
            for i in 0..self.nodes[last].neighbors.len() {
                let neighbor = self.nodes[last].neighbors[i];
                for slot in &mut self.nodes[neighbor].neighbors {
                    if *slot == last {
                        *slot = id;
                    }
                }
            }
        }
        self.nodes.swap_remove(id);
    }

    /// Every node in key order with its sorted neighbor keys.
    pub fn adjacency(&self) -> Vec<(&K, Vec<&K>)> {
        self.order
            .iter()
            .map(|&id| {
                let node = &self.nodes[id];
                let neighbors = node
                    .neighbors
                    .iter()
                    .map(|&n| &self.nodes[n].name)
                    .collect();
                (&node.name, neighbors)
            })
            .collect()
    }
}

impl<K: Ord + Clone, V> Graph<K, V> {
    /// Add an edge from `from` to every key in `to`. Every edge is attempted;
    /// the result is `false` if any of them already existed.
    pub fn add_edges<I>(&mut self, from: K, to: I) -> bool
    where
        I: IntoIterator<Item = K>,
    {
        let mut no_duplicates = true;
        for name in to {
            if !self.add_edge(from.clone(), name) {
                no_duplicates = false;
            }
        }
        no_duplicates
    }
}

impl<K: Ord + Clone, V: Clone> Graph<K, V> {
    fn vertex(&self, id: NodeId) -> Vertex<K, V> {
        let node = &self.nodes[id];
        Vertex::new(node.name.clone(), node.data.clone())
    }

    /// Snapshot of all vertices, sorted by key.
    pub fn vertices(&self) -> Vec<Vertex<K, V>> {
        self.order.iter().map(|&id| self.vertex(id)).collect()
    }

    /// Look up a single vertex by key.
    pub fn find_vertex<Q>(&self, name: &Q) -> Option<Vertex<K, V>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.node_id(name).map(|id| self.vertex(id))
    }

    /// Neighbors of a node, sorted by key. Empty if the node does not exist.
    pub fn neighbors<Q>(&self, name: &Q) -> Vec<Vertex<K, V>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match self.node_id(name) {
            Some(id) => self.nodes[id]
                .neighbors
                .iter()
                .map(|&n| self.vertex(n))
                .collect(),
            None => Vec::new(),
        }
    }
}

impl<K, V> Default for Graph<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

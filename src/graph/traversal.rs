//! Path search algorithms (BFS, DFS).

use std::borrow::Borrow;
use std::collections::VecDeque;

use super::sorted_graph::{Graph, NodeId};

/// Which search to run when looking for a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchKind {
    /// Level by level; yields a path with the fewest edges.
    BreadthFirst,
    /// One branch at a time, neighbors in ascending key order.
    DepthFirst,
}

impl SearchKind {
    /// Short name used on the command line and in JSON output.
    pub fn name(&self) -> &'static str {
        match self {
            Self::BreadthFirst => "bfs",
            Self::DepthFirst => "dfs",
        }
    }

    /// Parse a short name ("bfs" / "dfs"), case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "bfs" | "breadth-first" => Some(Self::BreadthFirst),
            "dfs" | "depth-first" => Some(Self::DepthFirst),
            _ => None,
        }
    }
}

impl std::fmt::Display for SearchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Visited flags and parent links for one search call.
struct SearchState {
    visited: Vec<bool>,
    parent: Vec<Option<NodeId>>,
}

impl SearchState {
    fn new(slots: usize) -> Self {
        Self {
            visited: vec![false; slots],
            parent: vec![None; slots],
        }
    }

    /// Walk parent links back from `dest` and return the path start-first.
    fn path_to(&self, dest: NodeId) -> Vec<NodeId> {
        let mut path = vec![dest];
        let mut current = dest;
        while let Some(parent) = self.parent[current] {
            path.push(parent);
            current = parent;
        }
        path.reverse();
        path
    }
}

impl<K: Ord + Clone, V> Graph<K, V> {
    /// Breadth-first path from `from` to `to`, both inclusive.
    ///
    /// Empty if either node is missing or no path exists; `[from]` when the
    /// two keys are equal.
    pub fn bfs<Q>(&self, from: &Q, to: &Q) -> Vec<K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find_path(from, to, SearchKind::BreadthFirst)
    }

    /// Depth-first path from `from` to `to`, both inclusive.
    ///
    /// Same empty and single-node conventions as [`Graph::bfs`].
    pub fn dfs<Q>(&self, from: &Q, to: &Q) -> Vec<K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find_path(from, to, SearchKind::DepthFirst)
    }

    /// Run the chosen search and return the path as node keys.
    pub fn find_path<Q>(&self, from: &Q, to: &Q, kind: SearchKind) -> Vec<K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let (Some(start), Some(dest)) = (self.node_id(from), self.node_id(to)) else {
            log::debug!("{}: endpoint not in graph", kind);
            return Vec::new();
        };
        if start == dest {
            return vec![self.name(start).clone()];
        }

        let mut state = SearchState::new(self.slot_count());
        let found = match kind {
            SearchKind::BreadthFirst => breadth_first(self, start, dest, &mut state),
            SearchKind::DepthFirst => depth_first(self, start, dest, &mut state),
        };
        if !found {
            log::debug!("{}: no path between nodes {} and {}", kind, start, dest);
            return Vec::new();
        }

        let path: Vec<K> = state
            .path_to(dest)
            .into_iter()
            .map(|id| self.name(id).clone())
            .collect();
        log::debug!("{}: found path with {} edges", kind, path.len() - 1);
        path
    }
}

fn breadth_first<K, V>(
    graph: &Graph<K, V>,
    start: NodeId,
    dest: NodeId,
    state: &mut SearchState,
) -> bool {
    state.visited[start] = true;
    let mut queue: VecDeque<NodeId> = VecDeque::new();
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for &neighbor in graph.neighbor_ids(current) {
            if neighbor == dest {
                state.parent[dest] = Some(current);
                return true;
            }
            if !state.visited[neighbor] {
                state.visited[neighbor] = true;
                state.parent[neighbor] = Some(current);
                queue.push_back(neighbor);
            }
        }
    }
    false
}

/// Iterative DFS. Each frame holds a node and the index of the next neighbor
/// to try, which reproduces the recursive visiting order without recursion.
fn depth_first<K, V>(
    graph: &Graph<K, V>,
    start: NodeId,
    dest: NodeId,
    state: &mut SearchState,
) -> bool {
    state.visited[start] = true;
    let mut stack: Vec<(NodeId, usize)> = vec![(start, 0)];

    while let Some(frame) = stack.last_mut() {
        let (current, cursor) = *frame;
        frame.1 += 1;

        match graph.neighbor_ids(current).get(cursor) {
            // Exhausted: backtrack.
            None => {
                stack.pop();
            }
            Some(&neighbor) if neighbor == dest => {
                state.parent[dest] = Some(current);
                return true;
            }
            Some(&neighbor) => {
                if !state.visited[neighbor] {
                    state.visited[neighbor] = true;
                    state.parent[neighbor] = Some(current);
                    stack.push((neighbor, 0));
                }
            }
        }
    }
    false
}

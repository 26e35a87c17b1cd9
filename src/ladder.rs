//! Word ladders: paths between words in a word graph.
//!
//! A word graph stores one word per integer node and links words that differ
//! by a single step. [`WordLadder`] resolves words to node ids and maps search
//! results back to words.

use std::collections::HashMap;
use std::path::Path;

use crate::format::WordGraphReader;
use crate::graph::{Graph, SearchKind};
use crate::types::{GraphError, GraphResult};

/// A word graph plus the reverse `word -> node id` index.
pub struct WordLadder {
    graph: Graph<u32, String>,
    index: HashMap<String, u32>,
}

impl WordLadder {
    /// Build the word index over `graph`. Nodes without a word are not
    /// addressable by word.
    pub fn new(graph: Graph<u32, String>) -> Self {
        let mut index = HashMap::with_capacity(graph.node_count());
        for vertex in graph.vertices() {
            let Some(word) = vertex.data else {
                continue;
            };
            if let Some(previous) = index.insert(word.clone(), vertex.name) {
                log::warn!(
                    "Word {:?} is on nodes {} and {}; using {}",
                    word,
                    previous,
                    vertex.name,
                    vertex.name
                );
            }
        }
        Self { graph, index }
    }

    /// Load a word-graph file.
    pub fn from_file(path: &Path) -> GraphResult<Self> {
        Ok(Self::new(WordGraphReader::read_from_file(path)?))
    }

    /// The underlying word graph.
    pub fn graph(&self) -> &Graph<u32, String> {
        &self.graph
    }

    /// Number of nodes, including nodes that carry no word.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of distinct words addressable by [`resolve`](Self::resolve).
    pub fn word_count(&self) -> usize {
        self.index.len()
    }

    /// Node id for `word`.
    pub fn resolve(&self, word: &str) -> GraphResult<u32> {
        self.index
            .get(word)
            .copied()
            .ok_or_else(|| GraphError::WordNotFound(word.to_string()))
    }

    /// Path of words from `start` to `end`. Empty if the words are not
    /// connected. Nodes on the path that carry no word are shown by id.
    pub fn find(&self, start: &str, end: &str, kind: SearchKind) -> GraphResult<Vec<String>> {
        let from = self.resolve(start)?;
        let to = self.resolve(end)?;

        let words = self
            .graph
            .find_path(&from, &to, kind)
            .into_iter()
            .map(|id| {
                self.graph
                    .find_vertex(&id)
                    .and_then(|vertex| vertex.data)
                    .unwrap_or_else(|| id.to_string())
            })
            .collect();
        Ok(words)
    }
}

//! Reads plain-text graph files into an in-memory graph.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::graph::Graph;
use crate::types::error::{GraphError, GraphResult};

/// Reader for adjacency-list text files.
///
/// Each line is `NODE [NEIGHBOR ...]`, whitespace separated. Every neighbor
/// becomes an undirected edge; missing nodes are created with no data.
pub struct AdjacencyReader;

impl AdjacencyReader {
    /// Read an adjacency file into a Graph.
    pub fn read_from_file<V>(path: &Path) -> GraphResult<Graph<String, V>> {
        let file = File::open(path)?;
        Self::read_from(BufReader::new(file))
    }

    /// Read from any buffered reader into a Graph.
    pub fn read_from<V>(reader: impl BufRead) -> GraphResult<Graph<String, V>> {
        let mut graph = Graph::new();
        let mut lines = 0usize;

        for line in reader.lines() {
            let line = line?;
            let mut tokens = line.split_whitespace();
            let Some(node) = tokens.next() else {
                continue;
            };
            lines += 1;

            // A line with only a node name still declares the node.
            graph.add_node(node.to_string(), None);
            graph.add_edges(node.to_string(), tokens.map(str::to_string));
        }

        log::debug!(
            "Read {} records: {} nodes, {} edges",
            lines,
            graph.node_count(),
            graph.edge_count()
        );
        Ok(graph)
    }
}

/// Reader for word-graph files used by the word-ladder tool.
///
/// Each line is `ID [WORD [NEIGHBOR_ID ...]]`. IDs are unsigned integers and
/// the word becomes the node's data.
pub struct WordGraphReader;

impl WordGraphReader {
    /// Read a word-graph file.
    pub fn read_from_file(path: &Path) -> GraphResult<Graph<u32, String>> {
        let file = File::open(path)?;
        Self::read_from(BufReader::new(file))
    }

    /// Read from any buffered reader.
    pub fn read_from(reader: impl BufRead) -> GraphResult<Graph<u32, String>> {
        let mut graph = Graph::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line_no = index + 1;
            let mut tokens = line.split_whitespace();
            let Some(first) = tokens.next() else {
                continue;
            };

            let id = parse_id(first, line_no)?;
            let word = tokens.next().map(str::to_string);
            let neighbors = tokens
                .map(|token| parse_id(token, line_no))
                .collect::<GraphResult<Vec<u32>>>()?;

            graph.add_node(id, word);
            graph.add_edges(id, neighbors);
        }

        log::debug!(
            "Read word graph: {} nodes, {} edges",
            graph.node_count(),
            graph.edge_count()
        );
        Ok(graph)
    }
}

fn parse_id(token: &str, line: usize) -> GraphResult<u32> {
    token.parse().map_err(|_| GraphError::Parse {
        line,
        token: token.to_string(),
    })
}

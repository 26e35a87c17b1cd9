//! Writes a graph as an adjacency-list text file.

use std::fmt::Display;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::graph::Graph;
use crate::types::GraphResult;

/// Writer for adjacency-list text files.
///
/// Emits one line per node in key order: the key, then its sorted neighbor
/// keys, separated by single spaces. The output reads back through
/// [`AdjacencyReader`](super::AdjacencyReader) into the same structure.
pub struct AdjacencyWriter;

impl AdjacencyWriter {
    /// Write a graph to a file, replacing it.
    pub fn write_to_file<K, V>(graph: &Graph<K, V>, path: &Path) -> GraphResult<()>
    where
        K: Ord + Display,
    {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(graph, &mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Write to any writer.
    pub fn write_to<K, V>(graph: &Graph<K, V>, writer: &mut impl Write) -> GraphResult<()>
    where
        K: Ord + Display,
    {
        for (name, neighbors) in graph.adjacency() {
            write!(writer, "{}", name)?;
            for neighbor in neighbors {
                write!(writer, " {}", neighbor)?;
            }
            writeln!(writer)?;
        }
        Ok(())
    }

    /// Render the adjacency list into a string.
    pub fn to_text<K, V>(graph: &Graph<K, V>) -> String
    where
        K: Ord + Display,
    {
        let mut buf = Vec::new();
        // Writing into a Vec<u8> cannot fail.
        let _ = Self::write_to(graph, &mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

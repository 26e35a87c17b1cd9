//! CLI command implementations.

use std::path::Path;

use crate::format::{AdjacencyReader, AdjacencyWriter};
use crate::graph::{Graph, SearchKind};
use crate::ladder::WordLadder;
use crate::types::GraphResult;

/// Adjacency files carry no node data.
type TextGraph = Graph<String, ()>;

fn load(path: &Path) -> GraphResult<TextGraph> {
    AdjacencyReader::read_from_file(path)
}

/// Print the graph in adjacency-list form.
pub fn cmd_print(path: &Path, json: bool) -> GraphResult<()> {
    let graph = load(path)?;

    if json {
        let nodes: Vec<serde_json::Value> = graph
            .adjacency()
            .into_iter()
            .map(|(name, neighbors)| serde_json::json!({"name": name, "neighbors": neighbors}))
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&nodes).unwrap_or_default()
        );
    } else {
        print!("{}", AdjacencyWriter::to_text(&graph));
    }
    Ok(())
}

/// Find a path between two nodes with each requested search.
pub fn cmd_path(
    path: &Path,
    from: &str,
    to: &str,
    kinds: &[SearchKind],
    json: bool,
) -> GraphResult<()> {
    let graph = load(path)?;

    if json {
        let results: Vec<serde_json::Value> = kinds
            .iter()
            .map(|&kind| {
                let found = graph.find_path(from, to, kind);
                serde_json::json!({
                    "algorithm": kind.name(),
                    "from": from,
                    "to": to,
                    "found": !found.is_empty(),
                    "path": found,
                })
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&results).unwrap_or_default()
        );
    } else {
        for &kind in kinds {
            let found = graph.find_path(from, to, kind);
            println!("{} path from {} to {}", kind.name().to_uppercase(), from, to);
            print_path(&found);
        }
    }
    Ok(())
}

/// Find a word ladder between two words of a word graph.
///
/// DFS is skipped when the graph holds `dfs_limit` or more distinct words.
pub fn cmd_ladder(
    path: &Path,
    start: &str,
    end: &str,
    dfs_limit: usize,
    json: bool,
) -> GraphResult<()> {
    let ladder = WordLadder::from_file(path)?;

    let bfs = ladder.find(start, end, SearchKind::BreadthFirst)?;
    let dfs = if ladder.word_count() < dfs_limit {
        Some(ladder.find(start, end, SearchKind::DepthFirst)?)
    } else {
        log::debug!(
            "Skipping DFS: {} words >= limit {}",
            ladder.word_count(),
            dfs_limit
        );
        None
    };

    if json {
        println!(
            "{}",
            serde_json::json!({
                "start": start,
                "end": end,
                "bfs": bfs,
                "dfs": dfs,
            })
        );
    } else {
        println!("BFS path:");
        print_path(&bfs);
        if let Some(dfs) = dfs {
            println!("DFS path:");
            print_path(&dfs);
        }
    }
    Ok(())
}

/// Summary statistics about an adjacency file.
pub fn cmd_stats(path: &Path, json: bool) -> GraphResult<()> {
    let graph = load(path)?;
    let file_size = std::fs::metadata(path)?.len();

    let node_count = graph.node_count();
    let edge_count = graph.edge_count();
    let adjacency = graph.adjacency();
    let max_degree = adjacency.iter().map(|(_, n)| n.len()).max().unwrap_or(0);
    let isolated = adjacency.iter().filter(|(_, n)| n.is_empty()).count();
    let avg_degree = if node_count > 0 {
        2.0 * edge_count as f64 / node_count as f64
    } else {
        0.0
    };

    if json {
        let info = serde_json::json!({
            "nodes": node_count,
            "edges": edge_count,
            "avg_degree": avg_degree,
            "max_degree": max_degree,
            "isolated_nodes": isolated,
            "file_size": file_size,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("Graph Statistics:");
        println!("  Nodes: {}", node_count);
        println!("  Edges: {}", edge_count);
        println!("  Avg degree: {:.2}", avg_degree);
        println!("  Max degree: {}", max_degree);
        println!("  Isolated nodes: {}", isolated);
        println!("  File size: {}", format_size(file_size));
    }
    Ok(())
}

fn print_path(path: &[String]) {
    if path.is_empty() {
        println!("  (no path)");
    } else {
        println!("  {}", path.join(" "));
    }
}

fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

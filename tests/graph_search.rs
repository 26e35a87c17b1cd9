//! BFS and DFS path search.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use undigraph::graph::{Graph, SearchKind};

// ==================== Helpers ====================

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn s(name: &str) -> String {
    name.to_string()
}

/// The simple test graph plus B–F and C–F.
fn graph_with_f() -> Graph<String, i32> {
    let mut graph = Graph::new();
    graph.add_edges(s("A"), ["C", "D", "E"].map(String::from));
    graph.add_edges(s("B"), ["D", "A"].map(String::from));
    graph.add_edges(s("C"), ["E", "D", "B"].map(String::from));
    graph.add_edge(s("B"), s("F"));
    graph.add_edge(s("C"), s("F"));
    graph
}

/// Two components: A..H and I..L.
fn demo_graph() -> Graph<String, i32> {
    let mut graph = Graph::new();
    graph.add_node(s("A"), Some(1));
    graph.add_node(s("B"), Some(2));
    for (from, to) in [
        ("D", "A"),
        ("A", "B"),
        ("B", "C"),
        ("D", "C"),
        ("C", "E"),
        ("D", "E"),
        ("E", "F"),
        ("F", "G"),
        ("I", "J"),
        ("J", "L"),
        ("K", "L"),
        ("J", "K"),
    ] {
        graph.add_edge(s(from), s(to));
    }
    graph.add_edges(s("H"), ["F", "G"].map(String::from));
    graph
}

/// Every consecutive pair on the path must be an edge.
fn assert_walkable(graph: &Graph<u32, ()>, path: &[u32]) {
    for pair in path.windows(2) {
        let neighbors: Vec<u32> = graph.neighbors(&pair[0]).iter().map(|v| v.name).collect();
        assert!(
            neighbors.contains(&pair[1]),
            "{} -> {} is not an edge",
            pair[0],
            pair[1]
        );
    }
}

// ==================== DFS Tests ====================

#[test]
fn test_dfs_explores_in_key_order() {
    init_logger();
    let graph = graph_with_f();
    assert_eq!(graph.dfs("A", "F"), vec!["A", "B", "C", "F"]);
}

#[test]
fn test_dfs_missing_node() {
    let graph = graph_with_f();
    assert!(graph.dfs("B", "N").is_empty());
    assert!(graph.dfs("N", "B").is_empty());
}

#[test]
fn test_dfs_demo_graph() {
    let graph = demo_graph();
    assert_eq!(
        graph.dfs("B", "H"),
        vec!["B", "A", "D", "C", "E", "F", "G", "H"]
    );
}

// ==================== BFS Tests ====================

#[test]
fn test_bfs_finds_shortest_path() {
    init_logger();
    let graph = graph_with_f();
    assert_eq!(graph.bfs("A", "F"), vec!["A", "B", "F"]);
}

#[test]
fn test_bfs_missing_node() {
    let graph = graph_with_f();
    assert!(graph.bfs("B", "N").is_empty());
}

#[test]
fn test_bfs_demo_graph() {
    let graph = demo_graph();
    assert_eq!(graph.bfs("B", "H"), vec!["B", "C", "E", "F", "H"]);
}

// ==================== Shared Behaviour ====================

#[test]
fn test_same_start_and_end() {
    let graph = graph_with_f();
    assert_eq!(graph.bfs("C", "C"), vec!["C"]);
    assert_eq!(graph.dfs("C", "C"), vec!["C"]);
}

#[test]
fn test_same_start_and_end_isolated_node() {
    let mut graph: Graph<String, i32> = Graph::new();
    graph.add_node(s("lonely"), None);
    assert_eq!(graph.bfs("lonely", "lonely"), vec!["lonely"]);
    assert_eq!(graph.dfs("lonely", "lonely"), vec!["lonely"]);
}

#[test]
fn test_disconnected_components() {
    let graph = demo_graph();
    assert!(graph.bfs("K", "D").is_empty());
    assert!(graph.dfs("K", "D").is_empty());
    assert_eq!(graph.bfs("I", "L"), vec!["I", "J", "L"]);
}

#[test]
fn test_find_path_dispatches_on_kind() {
    let graph = graph_with_f();
    assert_eq!(
        graph.find_path("A", "F", SearchKind::BreadthFirst),
        graph.bfs("A", "F")
    );
    assert_eq!(
        graph.find_path("A", "F", SearchKind::DepthFirst),
        graph.dfs("A", "F")
    );
}

#[test]
fn test_repeated_searches_are_independent() {
    let graph = graph_with_f();
    let first = graph.dfs("A", "F");
    let _ = graph.bfs("E", "B");
    let _ = graph.dfs("D", "E");
    assert_eq!(graph.dfs("A", "F"), first);
    assert_eq!(graph.bfs("A", "F"), vec!["A", "B", "F"]);
}

#[test]
fn test_search_after_removal() {
    let mut graph = graph_with_f();
    graph.remove_node("B");
    assert_eq!(graph.bfs("A", "F"), vec!["A", "C", "F"]);
    assert_eq!(graph.dfs("A", "F"), vec!["A", "C", "F"]);
    graph.remove_node("C");
    assert!(graph.bfs("A", "F").is_empty());
}

#[test]
fn test_search_kind_names() {
    assert_eq!(SearchKind::from_name("bfs"), Some(SearchKind::BreadthFirst));
    assert_eq!(SearchKind::from_name("DFS"), Some(SearchKind::DepthFirst));
    assert_eq!(SearchKind::from_name("dijkstra"), None);
    assert_eq!(SearchKind::BreadthFirst.name(), "bfs");
    assert_eq!(SearchKind::DepthFirst.to_string(), "dfs");
}

// ==================== Scale Tests ====================

#[test]
fn test_dfs_long_chain_does_not_overflow() {
    let n: u32 = 100_000;
    let mut graph: Graph<u32, ()> = Graph::with_capacity(n as usize);
    for i in 0..n - 1 {
        graph.add_edge(i, i + 1);
    }

    let dfs = graph.dfs(&0, &(n - 1));
    assert_eq!(dfs.len(), n as usize);
    assert_eq!(dfs.first(), Some(&0));
    assert_eq!(dfs.last(), Some(&(n - 1)));

    let bfs = graph.bfs(&(n - 1), &0);
    assert_eq!(bfs.len(), n as usize);
}

#[test]
fn test_bfs_never_longer_than_dfs() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..20 {
        let node_count = 60u32;
        let mut graph: Graph<u32, ()> = Graph::new();
        for id in 0..node_count {
            graph.add_node(id, None);
        }
        for _ in 0..90 {
            let a = rng.gen_range(0..node_count);
            let b = rng.gen_range(0..node_count);
            graph.add_edge(a, b);
        }

        for _ in 0..20 {
            let from = rng.gen_range(0..node_count);
            let to = rng.gen_range(0..node_count);
            let bfs = graph.bfs(&from, &to);
            let dfs = graph.dfs(&from, &to);

            assert_eq!(bfs.is_empty(), dfs.is_empty());
            if bfs.is_empty() {
                continue;
            }
            assert!(bfs.len() <= dfs.len());
            assert_eq!(bfs.first(), Some(&from));
            assert_eq!(bfs.last(), Some(&to));
            assert_eq!(dfs.first(), Some(&from));
            assert_eq!(dfs.last(), Some(&to));
            assert_walkable(&graph, &bfs);
            assert_walkable(&graph, &dfs);
        }
    }
}

//! Builds a graph by hand and from a text file, then compares BFS and DFS paths.

use std::io::Cursor;

use undigraph::*;

fn print_path(label: &str, path: &[String]) {
    println!("{}: {}", label, path.join(" "));
}

fn main() -> GraphResult<()> {
    // Two disjoint components: A..H and I..L
    let mut graph: Graph<String, i32> = Graph::new();
    graph.add_node("A".to_string(), Some(1));
    graph.add_node("B".to_string(), Some(2));
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
        graph.add_edge(from.to_string(), to.to_string());
    }
    graph.add_edges("H".to_string(), ["F", "G"].map(String::from));

    println!("Graph built by hand:");
    print!("{}", AdjacencyWriter::to_text(&graph));

    print_path("BFS B -> H", &graph.bfs("B", "H"));
    print_path("DFS B -> H", &graph.dfs("B", "H"));
    // Different components: both searches come back empty.
    print_path("BFS K -> D", &graph.bfs("K", "D"));
    print_path("DFS K -> D", &graph.dfs("K", "D"));

    let text = "P S R Q\nQ Z\nZ X Y\nR N\nN Y O\nO M N K\n";
    let file_graph: Graph<String, ()> = AdjacencyReader::read_from(Cursor::new(text))?;

    println!();
    println!("Graph read from text:");
    print!("{}", AdjacencyWriter::to_text(&file_graph));

    print_path("BFS Q -> K", &file_graph.bfs("Q", "K"));
    print_path("DFS Q -> K", &file_graph.dfs("Q", "K"));
    print_path("BFS X -> N", &file_graph.bfs("X", "N"));
    print_path("DFS X -> N", &file_graph.dfs("X", "N"));

    Ok(())
}

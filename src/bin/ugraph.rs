//! CLI entry point for the `ugraph` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use undigraph::cli::commands;
use undigraph::{GraphError, SearchKind};

#[derive(Parser)]
#[command(
    name = "ugraph",
    about = "ugraph CLI — load undirected graphs from text and find paths"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the graph in adjacency-list form
    Print {
        /// Path to the adjacency file
        file: PathBuf,
    },
    /// Find a path between two nodes
    Path {
        /// Path to the adjacency file
        file: PathBuf,
        /// Start node
        from: String,
        /// Destination node
        to: String,
        /// Algorithm: bfs, dfs, or both
        #[arg(long, default_value = "both")]
        algorithm: String,
    },
    /// Find a word ladder between two words of a word graph
    Ladder {
        /// Path to the word-graph file
        file: PathBuf,
        /// Start word
        start: String,
        /// End word
        end: String,
        /// Only run DFS on graphs with fewer distinct words than this
        #[arg(long, default_value = "1000")]
        dfs_limit: usize,
    },
    /// Summary statistics about the graph
    Stats {
        /// Path to the adjacency file
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = match cli.format.as_str() {
        "text" => false,
        "json" => true,
        other => {
            eprintln!("Invalid format: {}. Valid: text, json", other);
            process::exit(3);
        }
    };

    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let result = match cli.command {
        Commands::Print { file } => commands::cmd_print(&file, json),
        Commands::Path {
            file,
            from,
            to,
            algorithm,
        } => {
            let kinds = match algorithm.as_str() {
                "both" => vec![SearchKind::BreadthFirst, SearchKind::DepthFirst],
                name => match SearchKind::from_name(name) {
                    Some(kind) => vec![kind],
                    None => {
                        eprintln!("Invalid algorithm: {}", algorithm);
                        process::exit(3);
                    }
                },
            };
            commands::cmd_path(&file, &from, &to, &kinds, json)
        }
        Commands::Ladder {
            file,
            start,
            end,
            dfs_limit,
        } => commands::cmd_ladder(&file, &start, &end, dfs_limit, json),
        Commands::Stats { file } => commands::cmd_stats(&file, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::Parse { .. } => 2,
            GraphError::LengthMismatch { .. } => 3,
            GraphError::WordNotFound(_) => 4,
        };
        process::exit(code);
    }
}

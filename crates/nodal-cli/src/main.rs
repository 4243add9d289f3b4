//! Nodal CLI - run graph algorithms over text input.
//!
//! Two judge-style front ends (`separation`, `babel`) read contest input and
//! print contest output. `run` executes any single algorithm over an
//! edge-list file.

mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Graph algorithms over adjacency-list and adjacency-matrix storage.
#[derive(Parser)]
#[command(name = "nodal")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, global = true, default_value = "table")]
    format: OutputFormat,

    /// Suppress info messages
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Enable verbose debug logging
    #[arg(long, short, global = true)]
    verbose: bool,
}

/// Output format options.
#[derive(Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// Machine-readable JSON format
    Json,
}

/// Graph storage options.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Default)]
enum Representation {
    /// Adjacency list
    #[default]
    List,
    /// Adjacency matrix
    Matrix,
}

/// Algorithms available to `run`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Algorithm {
    /// Breadth-first traversal
    Bfs,
    /// Depth-first traversal
    Dfs,
    /// Single-source shortest paths
    Dijkstra,
    /// All-pairs shortest paths
    FloydWarshall,
    /// Minimum spanning tree grown from a source
    Prim,
    /// Minimum spanning forest
    Kruskal,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// Degrees of separation in social networks (UVa 1056)
    Separation {
        /// Input file (standard input if omitted)
        input: Option<PathBuf>,
    },

    /// Cheapest word chain between two languages (simplified UVa 11492)
    Babel {
        /// Input file (standard input if omitted)
        input: Option<PathBuf>,
    },

    /// Run one algorithm over an edge-list file
    Run {
        /// Algorithm to run
        algorithm: Algorithm,

        /// Input file (standard input if omitted)
        input: Option<PathBuf>,

        /// Start vertex (defaults to the first vertex in the file)
        #[arg(long)]
        source: Option<String>,

        /// Graph storage
        #[arg(long, default_value = "list")]
        repr: Representation,
    },
}

fn main() {
    let cli = Cli::parse();

    // Set up logging based on verbosity; stdout is reserved for results
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    } else if !cli.quiet {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_writer(std::io::stderr)
            .init();
    }

    let result = match cli.command {
        Commands::Separation { input } => commands::separation::run(input.as_deref(), cli.format),
        Commands::Babel { input } => commands::babel::run(input.as_deref(), cli.format),
        Commands::Run {
            algorithm,
            input,
            source,
            repr,
        } => commands::run::run(
            algorithm,
            input.as_deref(),
            source.as_deref(),
            repr,
            cli.format,
            cli.quiet,
        ),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

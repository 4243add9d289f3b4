//! Degrees of separation between people in a network.
//!
//! Input is a sequence of blocks `P R` followed by `R` pairs of names,
//! ended by `0 0` or end of input. The answer for a network is the largest
//! number of hops between any two of its `P` people, or `DISCONNECTED` if
//! some pair cannot reach each other. People never named in a
//! relationship are isolated.

use std::path::Path;

use anyhow::Result;
use nodal_algorithms::floyd_warshall;
use nodal_core::{Graph, MatrixGraph};
use serde::Serialize;
use tracing::debug;

use super::ensure_vertex;
use crate::OutputFormat;
use crate::input::{Tokens, read_source};
use crate::output::{self, Format};

/// The answer for one network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Network {
    pub network: usize,
    /// Largest separation, or `None` when disconnected.
    pub degrees: Option<u64>,
}

/// Solves every network in `text`.
pub fn solve(text: &str) -> Result<Vec<Network>> {
    let mut tokens = Tokens::new(text);
    let mut networks = Vec::new();

    while !tokens.is_exhausted() {
        let people: usize = tokens.parse("number of people")?;
        let relationships: usize = tokens.parse("number of relationships")?;
        if people == 0 && relationships == 0 {
            break;
        }

        let mut graph = MatrixGraph::new(false, true);
        for _ in 0..relationships {
            let a = tokens.word("name")?;
            let b = tokens.word("name")?;
            ensure_vertex(&mut graph, a)?;
            ensure_vertex(&mut graph, b)?;
            graph.add_weighted_edge(&a.to_string(), &b.to_string(), 1.0)?;
        }

        let degrees = if graph.vertex_count() < people {
            None
        } else {
            floyd_warshall(&graph)?.diameter(&graph.vertex_indices())
        };
        debug!(
            network = networks.len() + 1,
            people,
            named = graph.vertex_count(),
            "network solved"
        );
        networks.push(Network {
            network: networks.len() + 1,
            degrees: degrees.map(|d| d as u64),
        });
    }

    Ok(networks)
}

/// Run the separation command.
pub fn run(path: Option<&Path>, format: OutputFormat) -> Result<()> {
    let networks = solve(&read_source(path)?)?;

    match Format::from(format) {
        Format::Json => output::print_json(&networks)?,
        Format::Table => {
            for network in &networks {
                match network.degrees {
                    Some(d) => println!("Network {}: {d}", network.network),
                    None => println!("Network {}: DISCONNECTED", network.network),
                }
                println!();
            }
        }
    }
    Ok(())
}

//! Cheapest translation chain between two languages.
//!
//! Input is a sequence of blocks: `M`, then `start end`, then `M` lines
//! `lang1 lang2 word`, ended by `0` or end of input. Each word links two
//! languages both ways at a cost equal to its length; when several words
//! link the same pair the shortest one wins. The answer is the cheapest
//! total cost from `start` to `end`, or `impossivel` if there is none.

use std::path::Path;

use anyhow::Result;
use nodal_algorithms::dijkstra;
use nodal_core::{Graph, MatrixGraph};
use serde::Serialize;
use tracing::debug;

use super::ensure_vertex;
use crate::OutputFormat;
use crate::input::{Tokens, read_source};
use crate::output::{self, Format};

/// The answer for one block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Translation {
    pub start: String,
    pub end: String,
    /// Cheapest cost, or `None` when `end` cannot be reached.
    pub cost: Option<u64>,
}

/// Solves every block in `text`.
pub fn solve(text: &str) -> Result<Vec<Translation>> {
    let mut tokens = Tokens::new(text);
    let mut answers = Vec::new();

    while !tokens.is_exhausted() {
        let words: usize = tokens.parse("number of words")?;
        if words == 0 {
            break;
        }

        let start = tokens.word("start language")?.to_string();
        let end = tokens.word("end language")?.to_string();
        let mut graph = MatrixGraph::new(false, true);
        ensure_vertex(&mut graph, &start)?;
        let target = ensure_vertex(&mut graph, &end)?;

        for _ in 0..words {
            let a = tokens.word("language")?;
            let b = tokens.word("language")?;
            let cost = tokens.word("word")?.chars().count() as f64;
            ensure_vertex(&mut graph, a)?;
            ensure_vertex(&mut graph, b)?;

            let (a, b) = (a.to_string(), b.to_string());
            if graph.edge_weight(&a, &b)?.is_none_or(|current| cost < current) {
                graph.add_weighted_edge(&a, &b, cost)?;
            }
        }

        let cost = dijkstra(&graph, &start)?.distance(target);
        debug!(languages = graph.vertex_count(), ?cost, "translation solved");
        answers.push(Translation {
            start,
            end,
            cost: cost.map(|c| c as u64),
        });
    }

    Ok(answers)
}

/// Run the babel command.
pub fn run(path: Option<&Path>, format: OutputFormat) -> Result<()> {
    let answers = solve(&read_source(path)?)?;

    match Format::from(format) {
        Format::Json => output::print_json(&answers)?,
        Format::Table => {
            for answer in &answers {
                match answer.cost {
                    Some(cost) => println!("{cost}"),
                    None => println!("impossivel"),
                }
            }
        }
    }
    Ok(())
}

//! Run one algorithm over an edge-list file.

use std::path::Path;

use anyhow::{Context, Result};
use nodal_algorithms::{bfs, dfs, dijkstra, floyd_warshall, kruskal, prim};
use nodal_core::{Graph, GraphConfig, ListGraph, MatrixGraph};
use serde::Serialize;
use tracing::info;

use crate::input::{EdgeList, InputError, read_source};
use crate::output::{self, Format, format_weight};
use crate::{Algorithm, OutputFormat, Representation};

type DynGraph = Box<dyn Graph<String>>;

/// Builds the graph described by `list` in the chosen storage.
pub fn build(list: &EdgeList, repr: Representation) -> Result<DynGraph> {
    let config = GraphConfig::new(list.directed, list.weighted);
    let mut graph: DynGraph = match repr {
        Representation::List => Box::new(ListGraph::with_config(config)),
        Representation::Matrix => Box::new(MatrixGraph::with_config(config)),
    };

    for name in &list.vertices {
        graph.add_vertex(name.clone())?;
    }
    for edge in &list.lines {
        let Some(target) = &edge.target else { continue };
        let added = match edge.weight {
            Some(w) => graph.add_weighted_edge(&edge.source, target, w),
            None => graph.add_edge(&edge.source, target),
        };
        added.with_context(|| format!("line {}", edge.line))?;
    }

    info!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "graph loaded"
    );
    Ok(graph)
}

fn name(graph: &DynGraph, index: usize) -> String {
    graph.vertex(index).cloned().unwrap_or_default()
}

#[derive(Serialize)]
struct TraversalOutput {
    algorithm: &'static str,
    source: String,
    order: Vec<String>,
}

#[derive(Serialize)]
struct DistanceRow {
    vertex: String,
    distance: Option<f64>,
    predecessor: Option<String>,
    path: Option<Vec<String>>,
}

#[derive(Serialize)]
struct ShortestPathOutput {
    algorithm: &'static str,
    source: String,
    distances: Vec<DistanceRow>,
}

#[derive(Serialize)]
struct AllPairsOutput {
    algorithm: &'static str,
    vertices: Vec<String>,
    distances: Vec<Vec<Option<f64>>>,
}

#[derive(Serialize)]
struct TreeEdgeRow {
    source: String,
    target: String,
    weight: Option<f64>,
}

#[derive(Serialize)]
struct SpanningOutput {
    algorithm: &'static str,
    edges: Vec<TreeEdgeRow>,
    total_weight: f64,
    spanning: bool,
}

/// Run the selected algorithm.
pub fn run(
    algorithm: Algorithm,
    path: Option<&Path>,
    source: Option<&str>,
    repr: Representation,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let list = EdgeList::parse(&read_source(path)?)?;
    let graph = build(&list, repr)?;
    let fmt = Format::from(format);

    let pick_source = || -> Result<String, InputError> {
        source
            .map(str::to_string)
            .or_else(|| list.vertices.first().cloned())
            .ok_or(InputError::EmptyGraph)
    };

    match algorithm {
        Algorithm::Bfs | Algorithm::Dfs => {
            let start = pick_source()?;
            let (label, order) = if algorithm == Algorithm::Bfs {
                ("bfs", bfs(&*graph, &start)?)
            } else {
                ("dfs", dfs(&*graph, &start)?)
            };
            let out = TraversalOutput {
                algorithm: label,
                source: start,
                order,
            };
            match fmt {
                Format::Json => output::print_json(&out)?,
                Format::Table => {
                    let rows = out
                        .order
                        .iter()
                        .enumerate()
                        .map(|(step, v)| vec![v.clone(), step.to_string()])
                        .collect();
                    output::print_vertex_table(&["Vertex", "Step"], rows);
                    let visited = out.order.len();
                    let total = graph.vertex_count();
                    output::status(&format!("Visited {visited} of {total} vertices"), quiet);
                }
            }
        }
        Algorithm::Dijkstra => {
            let start = pick_source()?;
            let result = dijkstra(&*graph, &start)?;
            let distances = graph
                .vertex_indices()
                .into_iter()
                .map(|i| DistanceRow {
                    vertex: name(&graph, i),
                    distance: result.distance(i),
                    predecessor: result.predecessors[i].map(|p| name(&graph, p)),
                    path: result
                        .path_to(i)
                        .map(|path| path.into_iter().map(|p| name(&graph, p)).collect()),
                })
                .collect();
            let out = ShortestPathOutput {
                algorithm: "dijkstra",
                source: start,
                distances,
            };
            match fmt {
                Format::Json => output::print_json(&out)?,
                Format::Table => {
                    let rows = out
                        .distances
                        .iter()
                        .map(|row| {
                            vec![
                                row.vertex.clone(),
                                format_weight(row.distance),
                                row.predecessor.clone().unwrap_or_else(|| "-".to_string()),
                                row.path
                                    .as_ref()
                                    .map_or_else(|| "-".to_string(), |p| p.join(" -> ")),
                            ]
                        })
                        .collect();
                    let headers = ["Vertex", "Distance", "Predecessor", "Path"];
                    output::print_vertex_table(&headers, rows);
                }
            }
        }
        Algorithm::FloydWarshall => {
            let result = floyd_warshall(&*graph)?;
            let live = graph.vertex_indices();
            let out = AllPairsOutput {
                algorithm: "floyd-warshall",
                vertices: live.iter().map(|&i| name(&graph, i)).collect(),
                distances: live
                    .iter()
                    .map(|&i| live.iter().map(|&j| result.distance(i, j)).collect())
                    .collect(),
            };
            match fmt {
                Format::Json => output::print_json(&out)?,
                Format::Table => {
                    let mut headers = vec![""];
                    headers.extend(out.vertices.iter().map(String::as_str));
                    let rows = out
                        .vertices
                        .iter()
                        .zip(&out.distances)
                        .map(|(v, row)| {
                            std::iter::once(v.clone())
                                .chain(row.iter().map(|&d| format_weight(d)))
                                .collect()
                        })
                        .collect();
                    output::print_vertex_table(&headers, rows);
                }
            }
        }
        Algorithm::Prim | Algorithm::Kruskal => {
            let out = if algorithm == Algorithm::Prim {
                let start = pick_source()?;
                let result = prim(&*graph, &start)?;
                SpanningOutput {
                    algorithm: "prim",
                    edges: tree_rows(&graph, &result.tree_edges()),
                    total_weight: result.total_weight(),
                    spanning: result.is_spanning(),
                }
            } else {
                let result = kruskal(&*graph)?;
                SpanningOutput {
                    algorithm: "kruskal",
                    edges: tree_rows(&graph, &result.edges),
                    total_weight: result.total_weight,
                    spanning: result.is_spanning(),
                }
            };
            match fmt {
                Format::Json => output::print_json(&out)?,
                Format::Table => {
                    let rows = out
                        .edges
                        .iter()
                        .map(|e| vec![e.source.clone(), e.target.clone(), format_weight(e.weight)])
                        .collect();
                    output::print_vertex_table(&["Source", "Target", "Weight"], rows);
                    output::status(&format!("Total weight: {}", out.total_weight), quiet);
                    if !out.spanning {
                        output::status("Graph is disconnected: result is a spanning forest", quiet);
                    }
                }
            }
        }
    }

    Ok(())
}

fn tree_rows(graph: &DynGraph, edges: &[nodal_algorithms::MstEdge]) -> Vec<TreeEdgeRow> {
    edges
        .iter()
        .map(|e| TreeEdgeRow {
            source: name(graph, e.source),
            target: name(graph, e.target),
            weight: e.weight,
        })
        .collect()
}

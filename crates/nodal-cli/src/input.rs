//! Reading and tokenizing command input.

use std::collections::HashSet;
use std::fs;
use std::io::{self, Read};
use std::iter::Peekable;
use std::path::Path;
use std::str::{FromStr, SplitWhitespace};

use anyhow::{Context, Result};
use thiserror::Error;

/// Malformed command input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    /// Input ended in the middle of a block.
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof {
        /// What the parser was looking for.
        expected: &'static str,
    },

    /// A token could not be parsed.
    #[error("expected {expected}, got {token:?}")]
    InvalidToken {
        /// What the parser was looking for.
        expected: &'static str,
        /// The offending token.
        token: String,
    },

    /// The edge list has no header line.
    #[error("missing header line `directed|undirected weighted|unweighted`")]
    MissingHeader,

    /// The edge list header is not `directed|undirected weighted|unweighted`.
    #[error("line {line}: invalid header {text:?}")]
    InvalidHeader {
        /// 1-based line number.
        line: usize,
        /// The header text.
        text: String,
    },

    /// An edge line does not have the shape `u [v [w]]`.
    #[error("line {line}: expected `u v [weight]`, got {text:?}")]
    InvalidEdge {
        /// 1-based line number.
        line: usize,
        /// The line text.
        text: String,
    },

    /// The graph has no vertex to start from.
    #[error("graph has no vertices")]
    EmptyGraph,
}

/// Reads the whole of `path`, or standard input when no path is given.
pub fn read_source(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read standard input")?;
            Ok(text)
        }
    }
}

/// Whitespace-separated tokens. Line breaks carry no meaning.
pub struct Tokens<'a> {
    inner: Peekable<SplitWhitespace<'a>>,
}

impl<'a> Tokens<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            inner: text.split_whitespace().peekable(),
        }
    }

    /// Returns true once every token has been consumed.
    pub fn is_exhausted(&mut self) -> bool {
        self.inner.peek().is_none()
    }

    /// Takes the next token.
    pub fn word(&mut self, expected: &'static str) -> Result<&'a str, InputError> {
        self.inner
            .next()
            .ok_or(InputError::UnexpectedEof { expected })
    }

    /// Takes the next token and parses it.
    pub fn parse<T: FromStr>(&mut self, expected: &'static str) -> Result<T, InputError> {
        let token = self.word(expected)?;
        token.parse().map_err(|_| InputError::InvalidToken {
            expected,
            token: token.to_string(),
        })
    }
}

/// One edge (or lone vertex) line of an edge list.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeLine {
    pub line: usize,
    pub source: String,
    pub target: Option<String>,
    pub weight: Option<f64>,
}

/// A parsed edge-list file.
///
/// ```text
/// # comment
/// undirected weighted
/// a b 4
/// b c 1.5
/// d
/// ```
///
/// A line with a single name declares an isolated vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeList {
    pub directed: bool,
    pub weighted: bool,
    /// Vertex names in order of first appearance.
    pub vertices: Vec<String>,
    pub lines: Vec<EdgeLine>,
}

impl EdgeList {
    pub fn parse(text: &str) -> Result<Self, InputError> {
        let mut content = text
            .lines()
            .enumerate()
            .map(|(i, raw)| (i + 1, raw.split('#').next().unwrap_or_default().trim()))
            .filter(|(_, line)| !line.is_empty());

        let (header_line, header) = content.next().ok_or(InputError::MissingHeader)?;
        let (directed, weighted) = parse_header(header).ok_or_else(|| InputError::InvalidHeader {
            line: header_line,
            text: header.to_string(),
        })?;

        let mut seen = HashSet::new();
        let mut vertices = Vec::new();
        let mut lines = Vec::new();
        for (line, text) in content {
            let invalid = || InputError::InvalidEdge {
                line,
                text: text.to_string(),
            };
            let parts: Vec<&str> = text.split_whitespace().collect();
            let (source, target, weight) = match parts.as_slice() {
                [u] => (*u, None, None),
                [u, v] => (*u, Some(*v), None),
                [u, v, w] => (*u, Some(*v), Some(w.parse::<f64>().map_err(|_| invalid())?)),
                _ => return Err(invalid()),
            };

            for name in std::iter::once(source).chain(target) {
                if seen.insert(name) {
                    vertices.push(name.to_string());
                }
            }
            lines.push(EdgeLine {
                line,
                source: source.to_string(),
                target: target.map(str::to_string),
                weight,
            });
        }

        Ok(Self {
            directed,
            weighted,
            vertices,
            lines,
        })
    }
}

fn parse_header(header: &str) -> Option<(bool, bool)> {
    let mut words = header.split_whitespace();
    let directed = match words.next()? {
        "directed" => true,
        "undirected" => false,
        _ => return None,
    };
    let weighted = match words.next()? {
        "weighted" => true,
        "unweighted" => false,
        _ => return None,
    };
    words.next().is_none().then_some((directed, weighted))
}

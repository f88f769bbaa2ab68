//! Parsing of the textual input forms
//!
//! The presentation layer hands over raw text: comma-separated numbers for the
//! sorts, plain integers for counts, and one `a b` pair per line for edge
//! lists. Each parser rejects malformed tokens with an [`InvalidInputError`]
//! that names the token and its position, so the message can be shown as is.

use super::errors::InvalidInputError;
use super::graph::{Edge, NodeId};

/// Parse a comma-separated list of finite numbers.
///
/// Whitespace around tokens is ignored. Text that is empty or only whitespace
/// yields an empty list; an empty token between commas is an error.
pub fn parse_number_list(text: &str) -> Result<Vec<f64>, InvalidInputError> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    text.split(',')
        .enumerate()
        .map(|(i, raw)| {
            let token = raw.trim();
            let position = i + 1;
            let value: f64 = token.parse().map_err(|_| InvalidInputError::InvalidNumber {
                token: token.to_string(),
                position,
            })?;
            if !value.is_finite() {
                return Err(InvalidInputError::NonFiniteNumber {
                    token: token.to_string(),
                    position,
                });
            }
            Ok(value)
        })
        .collect()
}

/// Parse a non-negative integer count (nodes, disks, sieve limit)
pub fn parse_count(text: &str) -> Result<usize, InvalidInputError> {
    let trimmed = text.trim();
    trimmed
        .parse::<usize>()
        .map_err(|_| InvalidInputError::InvalidCount {
            text: trimmed.to_string(),
        })
}

/// Parse a newline-separated edge list over nodes `1..=nodes`.
///
/// Each non-blank line must hold exactly two whitespace-separated integers.
/// Line numbers in errors are 1-based and count blank lines too.
pub fn parse_edges(text: &str, nodes: usize) -> Result<Vec<Edge>, InvalidInputError> {
    let mut edges = Vec::new();

    for (i, raw) in text.lines().enumerate() {
        let line = i + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            continue;
        }

        let malformed = || InvalidInputError::MalformedEdge {
            line,
            text: trimmed.to_string(),
        };

        let mut tokens = trimmed.split_whitespace();
        let (a, b) = match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(a), Some(b), None) => (a, b),
            _ => return Err(malformed()),
        };
        let a: NodeId = a.parse().map_err(|_| malformed())?;
        let b: NodeId = b.parse().map_err(|_| malformed())?;

        for node in [a, b] {
            if node == 0 || node > nodes {
                return Err(InvalidInputError::NodeOutOfRange { line, node, nodes });
            }
        }

        edges.push(Edge::new(a, b));
    }

    Ok(edges)
}

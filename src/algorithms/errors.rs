//! Error types for step generation
//!
//! This module defines [`InvalidInputError`], raised when user-supplied text or
//! counts are structurally wrong, and [`MoveError`], raised when a Hanoi move
//! would break the descending-stack rule. Generators return [`StepError`],
//! which wraps both.
//!
//! Every error aborts the requested run: no partial sequence is returned.

use thiserror::Error;

/// Structural problems with generator input
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInputError {
    /// A comma-separated token is not a number
    #[error("'{token}' at position {position} is not a number")]
    InvalidNumber { token: String, position: usize },

    /// A token parsed, but to NaN or infinity
    #[error("'{token}' at position {position} is not a finite number")]
    NonFiniteNumber { token: String, position: usize },

    /// A count (nodes, disks, limit) is not a non-negative integer
    #[error("'{text}' is not a non-negative integer")]
    InvalidCount { text: String },

    /// An edge line is not two whitespace-separated integers
    #[error("line {line}: expected 'a b', got '{text}'")]
    MalformedEdge { line: usize, text: String },

    /// An edge references a node outside `1..=nodes`
    #[error("line {line}: node {node} is outside 1..={nodes}")]
    NodeOutOfRange {
        line: usize,
        node: usize,
        nodes: usize,
    },

    /// A tree over `nodes` nodes needs exactly `nodes - 1` edges
    #[error("tree must have exactly {expected} edges for {nodes} nodes, got {got}")]
    WrongEdgeCount {
        nodes: usize,
        expected: usize,
        got: usize,
    },

    /// The edge set does not connect every node to the root
    #[error("node {node} is not reachable from node 1; edges do not form a tree")]
    NotATree { node: usize },

    /// Disk count outside `1..=max`
    #[error("disk count {disks} is outside 1..={max}")]
    DiskCountOutOfRange { disks: usize, max: usize },

    /// Sieve limit above `max`
    #[error("sieve limit {limit} exceeds {max}")]
    LimitOutOfRange { limit: usize, max: usize },
}

/// Illegal Tower of Hanoi moves
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("peg {peg} does not exist")]
    NoSuchPeg { peg: usize },

    #[error("peg {peg} is empty")]
    EmptyPeg { peg: usize },

    #[error("cannot place disk {disk} on smaller disk {top} (peg {to})")]
    LargerOnSmaller { disk: u32, top: u32, to: usize },
}

/// Errors surfaced by step generators
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StepError {
    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),

    #[error(transparent)]
    IllegalMove(#[from] MoveError),
}

impl StepError {
    /// The input error, if this is one
    pub fn as_invalid_input(&self) -> Option<&InvalidInputError> {
        match self {
            StepError::InvalidInput(e) => Some(e),
            StepError::IllegalMove(_) => None,
        }
    }

    /// Line of the edge list this error refers to, when there is one
    pub fn line(&self) -> Option<usize> {
        match self {
            StepError::InvalidInput(InvalidInputError::MalformedEdge { line, .. })
            | StepError::InvalidInput(InvalidInputError::NodeOutOfRange { line, .. }) => {
                Some(*line)
            }
            _ => None,
        }
    }
}

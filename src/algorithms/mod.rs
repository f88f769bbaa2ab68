//! Step generators
//!
//! Each generator takes validated input and returns the complete, ordered
//! [`StepSequence`](crate::snapshot::StepSequence) of states the algorithm
//! passes through:
//! - [`sort`]: bubble, selection and insertion sort
//! - [`sieve`]: Sieve of Eratosthenes, resumable between steps
//! - [`hanoi`]: Tower of Hanoi moves and tower states
//! - [`graph`]: adjacency maps and BFS/DFS visited sets
//! - [`tree`]: validated trees and pre/in/post-order visit orders
//! - [`input`]: parsing of the textual input forms
//! - [`errors`]: error taxonomy
//!
//! # Determinism
//!
//! Generators hold no state between calls and use no randomness: the same
//! input always yields an identical sequence.

pub mod constants;
pub mod errors;
pub mod graph;
pub mod hanoi;
pub mod input;
pub mod sieve;
pub mod sort;
pub mod tree;

pub use errors::{InvalidInputError, MoveError, StepError};
pub use graph::{
    generate_graph, generate_graph_from_text, AdjacencyMap, Edge, GraphTraversal, NodeId,
};
pub use hanoi::{generate_hanoi, hanoi_moves, HanoiFrame, Move, Towers};
pub use sieve::{check_limit, sieve_steps, SieveEvent, SieveFrame, SieveRun};
pub use sort::{generate_sort_from_text, SortAlgorithm, SortFrame};
pub use tree::{generate_tree, generate_tree_from_text, Tree, TreeTraversal, VisitOrder};
